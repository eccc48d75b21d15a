use pubg_domain::{
    decode_telemetry, summarize, ApiRequest, DecodeSummary, DecodedEvent, EventBody, Location,
    Match, PlayerKill,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::fetch::{fetch_body, track_decode};
use crate::queries::match_queries::get_match;
use crate::{AppError, AppState};

#[derive(Debug, Clone)]
pub struct MatchTelemetry {
    pub game: Match,
    pub events: Vec<DecodedEvent>,
    pub summary: DecodeSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackPoint {
    pub elapsed_time: f64,
    pub location: Location,
    pub health: f64,
}

pub async fn fetch_match_telemetry(
    state: &AppState,
    match_id: &str,
) -> Result<MatchTelemetry, AppError> {
    let game = get_match(state, match_id).await?;
    let url = game
        .telemetry()
        .map(|asset| asset.url.clone())
        .filter(|url| !url.is_empty())
        .ok_or_else(|| AppError::NotFound(format!("telemetry asset for match {}", game.id)))?;

    let body = fetch_body(state, &ApiRequest::Telemetry { url }).await?;
    let events = track_decode(state, "telemetry", decode_telemetry(&body))?;
    let summary = report_events(state, &events);
    info!(
        "match {}: {} telemetry record(s), {} decoded, {} unknown, {} invalid",
        game.id,
        summary.total(),
        summary.events,
        summary.unknown,
        summary.invalid
    );
    Ok(MatchTelemetry {
        game,
        events,
        summary,
    })
}

pub fn report_events(state: &AppState, events: &[DecodedEvent]) -> DecodeSummary {
    for (position, entry) in events.iter().enumerate() {
        match entry {
            DecodedEvent::Invalid(invalid) => {
                warn!("telemetry record {} skipped: {}", position, invalid.reason)
            }
            DecodedEvent::Unknown(unknown) => {
                debug!(
                    "telemetry record {} has unknown type {}",
                    position, unknown.discriminator
                )
            }
            DecodedEvent::Event(_) => {}
        }
    }
    let summary = summarize(events);
    state.metrics.record_events(&summary);
    summary
}

pub fn player_track(events: &[DecodedEvent], account_id: &str) -> Vec<TrackPoint> {
    let mut track: Vec<TrackPoint> = events
        .iter()
        .filter_map(DecodedEvent::as_event)
        .filter_map(|event| match &event.body {
            EventBody::PlayerPosition(position) => {
                let character = position.character.as_ref()?;
                (character.account_id == account_id).then(|| TrackPoint {
                    elapsed_time: position.elapsed_time,
                    location: character.location.clone(),
                    health: character.health,
                })
            }
            _ => None,
        })
        .collect();
    track.sort_by(|a, b| a.elapsed_time.total_cmp(&b.elapsed_time));
    track
}

pub fn player_kills<'a>(events: &'a [DecodedEvent], account_id: &str) -> Vec<&'a PlayerKill> {
    events
        .iter()
        .filter_map(DecodedEvent::as_event)
        .filter_map(|event| match &event.body {
            EventBody::PlayerKill(kill) => Some(kill),
            _ => None,
        })
        .filter(|kill| {
            kill.killer
                .as_ref()
                .map(|killer| killer.account_id == account_id)
                .unwrap_or(false)
        })
        .collect()
}
