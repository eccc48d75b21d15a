use pubg_domain::{decode_one, ApiRequest, Status};

use crate::fetch::{fetch_body, track_decode};
use crate::{AppError, AppState};

pub async fn get_status(state: &AppState) -> Result<Status, AppError> {
    let body = fetch_body(state, &ApiRequest::Status).await?;
    track_decode(state, "status", decode_one::<Status>(&body))
}
