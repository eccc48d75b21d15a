// Offline decoding of saved response bodies

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use pubg_domain::{
    decode_many, decode_one, decode_telemetry, DecodeSummary, DecodedEvent, Match, Player, Sample,
    Season, Status,
};
use tracing::{error, info};

use crate::fetch::{track_decode, track_list};
use crate::queries::telemetry_queries::report_events;
use crate::{AppError, AppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Player,
    Players,
    Match,
    Seasons,
    Status,
    Sample,
    Telemetry,
}

impl ResponseKind {
    pub const ALL: [ResponseKind; 7] = [
        ResponseKind::Player,
        ResponseKind::Players,
        ResponseKind::Match,
        ResponseKind::Seasons,
        ResponseKind::Status,
        ResponseKind::Sample,
        ResponseKind::Telemetry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseKind::Player => "player",
            ResponseKind::Players => "players",
            ResponseKind::Match => "match",
            ResponseKind::Seasons => "seasons",
            ResponseKind::Status => "status",
            ResponseKind::Sample => "sample",
            ResponseKind::Telemetry => "telemetry",
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim().to_ascii_lowercase();
        ResponseKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| format!("unknown response kind '{}'", value))
    }
}

#[derive(Debug, Clone)]
pub enum DecodedResponse {
    Player(Player),
    Players(Vec<Player>),
    Match(Match),
    Seasons(Vec<Season>),
    Status(Status),
    Samples(Vec<Sample>),
    Telemetry {
        events: Vec<DecodedEvent>,
        summary: DecodeSummary,
    },
}

pub fn decode_body(
    state: &AppState,
    kind: ResponseKind,
    body: &str,
) -> Result<DecodedResponse, AppError> {
    let context = kind.as_str();
    let decoded = match kind {
        ResponseKind::Player => {
            DecodedResponse::Player(track_decode(state, context, decode_one(body))?)
        }
        ResponseKind::Players => {
            DecodedResponse::Players(track_list(state, context, decode_many(body))?)
        }
        ResponseKind::Match => DecodedResponse::Match(track_decode(state, context, decode_one(body))?),
        ResponseKind::Seasons => {
            DecodedResponse::Seasons(track_list(state, context, decode_many(body))?)
        }
        ResponseKind::Status => {
            DecodedResponse::Status(track_decode(state, context, decode_one(body))?)
        }
        ResponseKind::Sample => {
            DecodedResponse::Samples(track_list(state, context, decode_many(body))?)
        }
        ResponseKind::Telemetry => {
            let events = track_decode(state, context, decode_telemetry(body))?;
            let summary = report_events(state, &events);
            DecodedResponse::Telemetry { events, summary }
        }
    };
    Ok(decoded)
}

pub async fn decode_file(
    state: &AppState,
    kind: ResponseKind,
    path: &Path,
) -> Result<DecodedResponse, AppError> {
    let body = state.responses.load_response(path).await.map_err(|err| {
        error!("failed to read {}: {:#}", path.display(), err);
        AppError::Internal(err)
    })?;
    info!("decoding {} response from {}", kind, path.display());
    decode_body(state, kind, &body)
}
