use pubg_domain::{decode_one, ApiRequest, Match};
use tracing::warn;

use crate::fetch::{fetch_body, track_decode};
use crate::{AppError, AppState};

pub async fn get_match(state: &AppState, id: &str) -> Result<Match, AppError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::BadRequest("match id is empty".to_string()));
    }
    let request = ApiRequest::Match {
        shard: state.shard,
        id: id.to_string(),
    };
    let body = fetch_body(state, &request).await?;
    let game = track_decode(state, "match", decode_one::<Match>(&body))?;
    let unresolved = game.unresolved_count();
    if unresolved > 0 {
        warn!("match {} has {} unresolved relationship(s)", game.id, unresolved);
    }
    Ok(game)
}
