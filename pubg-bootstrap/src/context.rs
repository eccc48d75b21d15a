use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use pubg_application::{AppState, DecodeMetrics};
use pubg_infrastructure::{AppConfig, HttpStatsApi, ResponseFileRepository};

use crate::cli::GlobalOptions;

pub struct AppContext {
    pub config: AppConfig,
    pub state: AppState,
}

impl AppContext {
    pub async fn new(options: &GlobalOptions) -> Result<Self> {
        let config = AppConfig::load().await?;
        Self::from_config(config, options)
    }

    pub fn from_config(config: AppConfig, options: &GlobalOptions) -> Result<Self> {
        let shard = match options.shard {
            Some(shard) => shard,
            None => config.shard()?,
        };
        let api = Arc::new(HttpStatsApi::from_config(&config)?);
        let responses = Arc::new(ResponseFileRepository::new(config.data_path()));
        info!("using {} on shard {}", config.base_url, shard);

        let state = AppState {
            api,
            responses,
            metrics: Arc::new(DecodeMetrics::default()),
            shard,
            save_responses: options.save,
        };
        Ok(Self { config, state })
    }
}
