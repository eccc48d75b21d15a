// Shared request path for every query: count, fetch, optionally save, decode

use pubg_domain::{ApiRequest, FatalDecodeFailure, ResourceList};
use tracing::{debug, error, info, warn};

use crate::{AppError, AppState};

pub async fn fetch_body(state: &AppState, request: &ApiRequest) -> Result<String, AppError> {
    state.metrics.record_request();
    debug!("{}", request);
    let body = state.api.fetch(request).await.map_err(|err| {
        error!("request failed ({}): {:#}", request, err);
        AppError::Internal(err)
    })?;

    if state.save_responses {
        match state.responses.save_response(&request.file_stem(), &body).await {
            Ok(path) => info!("saved response to {}", path.display()),
            Err(err) => warn!("failed to save response for {}: {:#}", request, err),
        }
    }
    Ok(body)
}

pub fn track_decode<T>(
    state: &AppState,
    context: &str,
    result: Result<T, FatalDecodeFailure>,
) -> Result<T, AppError> {
    match result {
        Ok(value) => {
            state.metrics.record_document();
            Ok(value)
        }
        Err(err) => {
            state.metrics.record_fatal();
            warn!("could not decode {}: {}", context, err);
            Err(AppError::Decode(err))
        }
    }
}

pub fn track_list<T>(
    state: &AppState,
    context: &str,
    result: Result<ResourceList<T>, FatalDecodeFailure>,
) -> Result<Vec<T>, AppError> {
    let list = track_decode(state, context, result)?;
    for skipped in &list.skipped {
        state.metrics.record_skipped();
        warn!(
            "skipped {} element {}: {}",
            context, skipped.position, skipped.reason
        );
    }
    Ok(list.items)
}
