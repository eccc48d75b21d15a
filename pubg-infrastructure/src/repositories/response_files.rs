use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use tokio::fs;

use pubg_domain::ResponseRepository;

/// Raw response bodies as `<data_dir>/<name>.json`.
pub struct ResponseFileRepository {
    dir: PathBuf,
}

impl ResponseFileRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() || path.exists() {
            path.to_path_buf()
        } else {
            self.dir.join(path)
        }
    }
}

#[async_trait]
impl ResponseRepository for ResponseFileRepository {
    async fn save_response(&self, name: &str, body: &str) -> anyhow::Result<PathBuf> {
        let name = name.trim();
        if name.is_empty() || name.contains('/') || name.contains('\\') {
            return Err(anyhow!("invalid response name '{}'", name));
        }
        fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("create {}", self.dir.display()))?;
        let path = self.dir.join(format!("{}.json", name));
        fs::write(&path, body)
            .await
            .with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    async fn load_response(&self, path: &Path) -> anyhow::Result<String> {
        let path = self.resolve(path);
        fs::read_to_string(&path)
            .await
            .with_context(|| format!("read {}", path.display()))
    }
}
