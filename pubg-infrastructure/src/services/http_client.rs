use std::io::Read;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use flate2::read::GzDecoder;
use reqwest::header::{ACCEPT, ACCEPT_ENCODING, AUTHORIZATION, CONTENT_ENCODING};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use pubg_domain::ports::StatsApi;
use pubg_domain::ApiRequest;

use crate::utils::truncate_for_log;
use crate::AppConfig;

const JSON_API: &str = "application/vnd.api+json";
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

pub struct HttpStatsApi {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpStatsApi {
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            &config.base_url,
            config.api_key.clone(),
            Duration::from_secs(config.request_timeout_seconds.max(3)),
        )
    }

    pub fn request_url(&self, request: &ApiRequest) -> String {
        match (request, request.path()) {
            (ApiRequest::Telemetry { url }, _) => url.clone(),
            (_, Some(path)) => format!("{}{}", self.base_url, path),
            (_, None) => self.base_url.clone(),
        }
    }
}

#[async_trait]
impl StatsApi for HttpStatsApi {
    async fn fetch(&self, request: &ApiRequest) -> Result<String> {
        let url = self.request_url(request);
        let builder = if request.is_telemetry() {
            // Telemetry assets are public and served compressed.
            self.client.get(&url).header(ACCEPT_ENCODING, "gzip")
        } else {
            let api_key = self
                .api_key
                .as_deref()
                .ok_or_else(|| anyhow!("api_key is not configured (set PUBG_API_KEY)"))?;
            self.client
                .get(&url)
                .header(AUTHORIZATION, format!("Bearer {}", api_key))
                .header(ACCEPT, JSON_API)
        };

        let response = builder.send().await.with_context(|| format!("GET {}", url))?;
        let status = response.status();
        let gzip_declared = response
            .headers()
            .get(CONTENT_ENCODING)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.eq_ignore_ascii_case("gzip"))
            .unwrap_or(false);
        let bytes = response.bytes().await?;
        debug!("GET {} -> {} ({} bytes)", url, status, bytes.len());

        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes);
            bail!("GET {} responded {}: {}", url, status, error_detail(&text));
        }

        let body = maybe_gunzip(&bytes, gzip_declared)?;
        String::from_utf8(body).map_err(|err| anyhow!("response from {} is not UTF-8: {}", url, err))
    }
}

/// Gunzips when the response declared gzip or the body carries the gzip magic.
pub fn maybe_gunzip(bytes: &[u8], declared: bool) -> Result<Vec<u8>> {
    if !(declared || bytes.starts_with(&GZIP_MAGIC)) {
        return Ok(bytes.to_vec());
    }
    let mut decoder = GzDecoder::new(bytes);
    let mut out = Vec::with_capacity(bytes.len() * 4);
    decoder
        .read_to_end(&mut out)
        .context("failed to gunzip response body")?;
    Ok(out)
}

/// First JSON:API error title/detail of an error body, else the body itself.
pub fn error_detail(body: &str) -> String {
    let detail = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        let error = value.get("errors")?.as_array()?.first()?.clone();
        let title = error.get("title").and_then(Value::as_str).unwrap_or_default();
        let detail = error.get("detail").and_then(Value::as_str).unwrap_or_default();
        match (title.is_empty(), detail.is_empty()) {
            (true, true) => None,
            (false, true) => Some(title.to_string()),
            (true, false) => Some(detail.to_string()),
            (false, false) => Some(format!("{}: {}", title, detail)),
        }
    });
    detail.unwrap_or_else(|| truncate_for_log(body, 200))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use pubg_domain::Shard;
    use std::io::Write;

    fn api() -> HttpStatsApi {
        HttpStatsApi::new("https://api.pubg.com/", Some("key".into()), Duration::from_secs(5))
            .expect("client")
    }

    #[test]
    fn urls_join_base_and_path() {
        let api = api();
        assert_eq!(api.request_url(&ApiRequest::Status), "https://api.pubg.com/status");
        assert_eq!(
            api.request_url(&ApiRequest::PlayersByName {
                shard: Shard::Steam,
                names: vec!["a".into(), "b".into()],
            }),
            "https://api.pubg.com/shards/steam/players?filter[playerNames]=a,b"
        );
        assert_eq!(
            api.request_url(&ApiRequest::Telemetry {
                url: "https://telemetry-cdn.pubg.com/x-telemetry.json".into()
            }),
            "https://telemetry-cdn.pubg.com/x-telemetry.json"
        );
    }

    #[test]
    fn gunzips_by_magic_or_declaration() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"[{\"_T\":\"LogMatchStart\"}]").expect("write");
        let compressed = encoder.finish().expect("finish");

        assert_eq!(
            maybe_gunzip(&compressed, false).expect("gunzip"),
            b"[{\"_T\":\"LogMatchStart\"}]".to_vec()
        );
        assert_eq!(
            maybe_gunzip(&compressed, true).expect("gunzip"),
            b"[{\"_T\":\"LogMatchStart\"}]".to_vec()
        );
        assert_eq!(maybe_gunzip(b"[]", false).expect("plain"), b"[]".to_vec());
        assert!(maybe_gunzip(b"[]", true).is_err());
    }

    #[test]
    fn error_detail_prefers_json_api_errors() {
        assert_eq!(
            error_detail(r#"{"errors":[{"title":"Not Found","detail":"No Players Found Matching Criteria"}]}"#),
            "Not Found: No Players Found Matching Criteria"
        );
        assert_eq!(error_detail(r#"{"errors":[{"title":"Unauthorized"}]}"#), "Unauthorized");
        assert_eq!(error_detail("rate limited"), "rate limited");
    }

    #[tokio::test]
    async fn json_api_requests_need_a_key() {
        let api = HttpStatsApi::new("https://api.pubg.com", None, Duration::from_secs(5))
            .expect("client");
        let err = api.fetch(&ApiRequest::Status).await.expect_err("no key");
        assert!(err.to_string().contains("api_key"));
    }
}
