use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub shard: String,
    pub title: String,
    pub match_ids: Vec<String>,
}
