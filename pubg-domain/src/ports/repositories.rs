use std::path::{Path, PathBuf};

use async_trait::async_trait;

#[async_trait]
pub trait ResponseRepository: Send + Sync {
    async fn save_response(&self, name: &str, body: &str) -> anyhow::Result<PathBuf>;
    async fn load_response(&self, path: &Path) -> anyhow::Result<String>;
}
