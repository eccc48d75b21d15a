use pubg_domain::{decode_many, decode_one, ApiRequest, Player};
use tracing::info;

use crate::fetch::{fetch_body, track_decode, track_list};
use crate::{AppError, AppState};

pub const MAX_FILTER_VALUES: usize = 10;

pub async fn get_player(state: &AppState, id: &str) -> Result<Player, AppError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::BadRequest("player id is empty".to_string()));
    }
    let request = ApiRequest::Player {
        shard: state.shard,
        id: id.to_string(),
    };
    let body = fetch_body(state, &request).await?;
    track_decode(state, "player", decode_one::<Player>(&body))
}

pub async fn find_players_by_name(
    state: &AppState,
    names: &[String],
) -> Result<Vec<Player>, AppError> {
    let names = filter_values("player name", names)?;
    let request = ApiRequest::PlayersByName {
        shard: state.shard,
        names,
    };
    let body = fetch_body(state, &request).await?;
    let players = track_list(state, "player list", decode_many::<Player>(&body))?;
    info!("found {} player(s) on {}", players.len(), state.shard);
    Ok(players)
}

pub async fn find_players_by_id(
    state: &AppState,
    ids: &[String],
) -> Result<Vec<Player>, AppError> {
    let ids = filter_values("player id", ids)?;
    let request = ApiRequest::PlayersById {
        shard: state.shard,
        ids,
    };
    let body = fetch_body(state, &request).await?;
    track_list(state, "player list", decode_many::<Player>(&body))
}

pub async fn find_player_by_name(state: &AppState, name: &str) -> Result<Player, AppError> {
    find_players_by_name(state, &[name.to_string()])
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound(format!("player '{}'", name.trim())))
}

fn filter_values(label: &str, values: &[String]) -> Result<Vec<String>, AppError> {
    let values: Vec<String> = values
        .iter()
        .flat_map(|value| value.split(','))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect();
    if values.is_empty() {
        return Err(AppError::BadRequest(format!("no {} given", label)));
    }
    if values.len() > MAX_FILTER_VALUES {
        return Err(AppError::BadRequest(format!(
            "at most {} values per {} filter, got {}",
            MAX_FILTER_VALUES,
            label,
            values.len()
        )));
    }
    Ok(values)
}
