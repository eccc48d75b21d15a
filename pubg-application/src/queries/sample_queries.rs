use pubg_domain::{decode_many, ApiRequest, Sample};

use crate::fetch::{fetch_body, track_list};
use crate::{AppError, AppState};

pub async fn get_samples(state: &AppState) -> Result<Vec<Sample>, AppError> {
    let request = ApiRequest::Samples { shard: state.shard };
    let body = fetch_body(state, &request).await?;
    track_list(state, "samples", decode_many::<Sample>(&body))
}
