use std::sync::Arc;

use pubg_domain::ports::{ResponseRepository, StatsApi};
use pubg_domain::Shard;

use crate::DecodeMetrics;

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn StatsApi>,
    pub responses: Arc<dyn ResponseRepository>,
    pub metrics: Arc<DecodeMetrics>,
    pub shard: Shard,
    pub save_responses: bool,
}
