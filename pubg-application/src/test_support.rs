use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;
use pubg_domain::ports::{ResponseRepository, StatsApi};
use pubg_domain::{ApiRequest, Shard};

use crate::{AppState, DecodeMetrics};

#[derive(Default)]
pub struct FakeApi {
    bodies: HashMap<String, String>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with(mut self, request: ApiRequest, body: impl Into<String>) -> Self {
        self.bodies.insert(request.to_string(), body.into());
        self
    }
}

#[async_trait]
impl StatsApi for FakeApi {
    async fn fetch(&self, request: &ApiRequest) -> anyhow::Result<String> {
        let key = request.to_string();
        self.calls.lock().expect("calls lock").push(key.clone());
        self.bodies
            .get(&key)
            .cloned()
            .ok_or_else(|| anyhow!("404 Not Found for {}", key))
    }
}

#[derive(Default)]
pub struct MemoryResponses {
    pub saved: Mutex<Vec<(String, String)>>,
    pub files: HashMap<PathBuf, String>,
}

#[async_trait]
impl ResponseRepository for MemoryResponses {
    async fn save_response(&self, name: &str, body: &str) -> anyhow::Result<PathBuf> {
        self.saved
            .lock()
            .expect("saved lock")
            .push((name.to_string(), body.to_string()));
        Ok(PathBuf::from(format!("{}.json", name)))
    }

    async fn load_response(&self, path: &Path) -> anyhow::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("no such file {}", path.display()))
    }
}

pub fn state(api: FakeApi) -> AppState {
    state_with(api, MemoryResponses::default())
}

pub fn state_with(api: FakeApi, responses: MemoryResponses) -> AppState {
    AppState {
        api: Arc::new(api),
        responses: Arc::new(responses),
        metrics: Arc::new(DecodeMetrics::default()),
        shard: Shard::Steam,
        save_responses: false,
    }
}

pub const PLAYER_BODY: &str = r#"{
    "data": {
        "type": "player",
        "id": "account.123-abc",
        "attributes": {"name": "PlayerName", "shardId": "steam", "titleId": "bluehole-pubg", "patchVersion": ""},
        "relationships": {"matches": {"data": [{"type": "match", "id": "456-def"}, {"type": "match", "id": "789-ghi"}]}}
    },
    "included": []
}"#;

pub const TELEMETRY_URL: &str = "https://telemetry-cdn.pubg.com/bluehole-pubg/steam/456-def-telemetry.json";

pub fn match_body() -> String {
    serde_json::json!({
        "data": {
            "type": "match",
            "id": "456-def",
            "attributes": {"createdAt": "2018-04-09T20:34:05Z", "duration": 1799, "gameMode": "solo", "mapName": "Desert_Main", "shardId": "steam"},
            "relationships": {"assets": {"data": [{"type": "asset", "id": "a-1"}]}, "rosters": {"data": []}}
        },
        "included": [
            {"type": "asset", "id": "a-1", "attributes": {"URL": TELEMETRY_URL, "name": "telemetry"}}
        ]
    })
    .to_string()
}

pub fn telemetry_body() -> String {
    serde_json::json!([
        {"_V": 1, "_D": "2018-04-09T20:00:00Z", "_T": "LogMatchStart", "characters": []},
        {"_V": 1, "_D": "2018-04-09T20:00:10Z", "_T": "LogPlayerPosition", "elapsedTime": 30.0,
         "character": {"name": "PlayerName", "accountId": "account.123-abc", "location": {"x": 3.0, "y": 4.0, "z": 0.0}}},
        {"_V": 1, "_D": "2018-04-09T20:00:05Z", "_T": "LogPlayerPosition", "elapsedTime": 10.0,
         "character": {"name": "PlayerName", "accountId": "account.123-abc", "location": {"x": 1.0, "y": 2.0, "z": 0.0}}},
        {"_V": 1, "_D": "2018-04-09T20:00:06Z", "_T": "LogPlayerPosition", "elapsedTime": 11.0,
         "character": {"name": "Other", "accountId": "account.999"}},
        {"_V": 1, "_D": "2018-04-09T20:00:07Z", "_T": "LogPlayerKill", "attackId": 5,
         "killer": {"name": "PlayerName", "accountId": "account.123-abc"},
         "victim": {"name": "Other", "accountId": "account.999"}, "damageCauserName": "WeapHK416_C"},
        {"_V": 1, "_D": "2018-04-09T20:00:08Z", "_T": "LogSomethingUnknownFuture"},
        {"_V": 1, "_T": "LogSwimStart"}
    ])
    .to_string()
}
