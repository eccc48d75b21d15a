use anyhow::{anyhow, Result};

use pubg_domain::Shard;

pub fn validate_base_url(value: &str) -> Result<()> {
    let value = value.trim();
    if value.is_empty() {
        return Err(anyhow!("base_url must not be empty"));
    }
    if !(value.starts_with("https://") || value.starts_with("http://")) {
        return Err(anyhow!("base_url must be an http(s) URL: {}", value));
    }
    Ok(())
}

pub fn validate_shard(value: &str) -> Result<Shard> {
    value
        .parse::<Shard>()
        .map_err(|err| anyhow!("invalid shard: {}", err))
}
