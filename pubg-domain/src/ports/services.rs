use std::fmt;

use async_trait::async_trait;

use crate::value_objects::Shard;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    Status,
    Player { shard: Shard, id: String },
    PlayersByName { shard: Shard, names: Vec<String> },
    PlayersById { shard: Shard, ids: Vec<String> },
    Match { shard: Shard, id: String },
    Seasons { shard: Shard },
    Samples { shard: Shard },
    Telemetry { url: String },
}

impl ApiRequest {
    pub fn path(&self) -> Option<String> {
        let path = match self {
            ApiRequest::Status => "/status".to_string(),
            ApiRequest::Player { shard, id } => format!("/shards/{}/players/{}", shard, id),
            ApiRequest::PlayersByName { shard, names } => format!(
                "/shards/{}/players?filter[playerNames]={}",
                shard,
                names.join(",")
            ),
            ApiRequest::PlayersById { shard, ids } => format!(
                "/shards/{}/players?filter[playerIds]={}",
                shard,
                ids.join(",")
            ),
            ApiRequest::Match { shard, id } => format!("/shards/{}/matches/{}", shard, id),
            ApiRequest::Seasons { shard } => format!("/shards/{}/seasons", shard),
            ApiRequest::Samples { shard } => format!("/shards/{}/samples", shard),
            ApiRequest::Telemetry { .. } => return None,
        };
        Some(path)
    }

    pub fn is_telemetry(&self) -> bool {
        matches!(self, ApiRequest::Telemetry { .. })
    }

    pub fn file_stem(&self) -> String {
        let stem = match self {
            ApiRequest::Status => "status".to_string(),
            ApiRequest::Player { shard, id } => format!("player-{}-{}", shard, id),
            ApiRequest::PlayersByName { shard, names } => {
                format!("players-{}-{}", shard, names.join("_"))
            }
            ApiRequest::PlayersById { shard, ids } => format!("players-{}-{}", shard, ids.join("_")),
            ApiRequest::Match { shard, id } => format!("match-{}-{}", shard, id),
            ApiRequest::Seasons { shard } => format!("seasons-{}", shard),
            ApiRequest::Samples { shard } => format!("samples-{}", shard),
            ApiRequest::Telemetry { url } => {
                let last = url
                    .split(['?', '#'])
                    .next()
                    .and_then(|base| base.rsplit('/').next())
                    .unwrap_or("telemetry");
                format!("telemetry-{}", last.trim_end_matches(".json"))
            }
        };
        stem.chars()
            .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') { c } else { '_' })
            .collect()
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiRequest::Telemetry { url } => write!(f, "GET {}", url),
            other => write!(f, "GET {}", other.path().unwrap_or_default()),
        }
    }
}

// Transport to the stats API. Returns the body of a 2xx response; anything else
// is an error and never reaches the decoder.
#[async_trait]
pub trait StatsApi: Send + Sync {
    async fn fetch(&self, request: &ApiRequest) -> anyhow::Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_relative_paths() {
        assert_eq!(ApiRequest::Status.path().as_deref(), Some("/status"));
        assert_eq!(
            ApiRequest::Player { shard: Shard::Steam, id: "account.1".into() }.path().as_deref(),
            Some("/shards/steam/players/account.1")
        );
        assert_eq!(
            ApiRequest::PlayersByName {
                shard: Shard::PcEu,
                names: vec!["a".into(), "b".into()],
            }
            .path()
            .as_deref(),
            Some("/shards/pc-eu/players?filter[playerNames]=a,b")
        );
        assert_eq!(
            ApiRequest::PlayersById { shard: Shard::Kakao, ids: vec!["account.1".into()] }
                .path()
                .as_deref(),
            Some("/shards/kakao/players?filter[playerIds]=account.1")
        );
        assert_eq!(
            ApiRequest::Seasons { shard: Shard::Steam }.path().as_deref(),
            Some("/shards/steam/seasons")
        );
        assert!(ApiRequest::Telemetry { url: "https://cdn/x.json".into() }.path().is_none());
    }

    #[test]
    fn file_stems_are_filesystem_safe() {
        assert_eq!(
            ApiRequest::Match { shard: Shard::Steam, id: "ab/cd".into() }.file_stem(),
            "match-steam-ab_cd"
        );
        assert_eq!(
            ApiRequest::Telemetry {
                url: "https://telemetry-cdn.pubg.com/bluehole-pubg/steam/2018/04/09/0/1a-telemetry.json?x=1".into()
            }
            .file_stem(),
            "telemetry-1a-telemetry"
        );
    }
}
