//! Google translate web endpoint.
//!
//! Uses the keyless `translate_a/single` endpoint with `dt=t`, which answers
//! with a nested JSON array whose first element lists the translated
//! segments.

use async_trait::async_trait;
use localesync_core::{
    config::TranslateConfig,
    error::LocaleSyncError,
    retry::{retry_async, RetryPolicy},
    traits::Translator,
};
use serde_json::Value;
use tracing::{debug, warn};

/// Translator backed by the Google translate web endpoint.
pub struct GoogleTranslator {
    client: reqwest::Client,
    endpoint: String,
    client_id: String,
    source_lang: String,
    target_lang: String,
    retry: RetryPolicy,
}

impl GoogleTranslator {
    /// Create from config values.
    pub fn from_config(cfg: &TranslateConfig) -> Result<Self, LocaleSyncError> {
        let client = reqwest::Client::builder()
            .timeout(cfg.timeout())
            .build()
            .map_err(|e| LocaleSyncError::Config(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            endpoint: cfg.endpoint.clone(),
            client_id: cfg.client.clone(),
            source_lang: cfg.source_lang.clone(),
            target_lang: cfg.target_lang.clone(),
            retry: cfg.retry_policy(),
        })
    }

    fn query<'a>(&'a self, text: &'a str) -> [(&'static str, &'a str); 5] {
        [
            ("client", self.client_id.as_str()),
            ("sl", self.source_lang.as_str()),
            ("tl", self.target_lang.as_str()),
            ("dt", "t"),
            ("q", text),
        ]
    }

    /// One request, no retries.
    async fn fetch(&self, text: &str) -> Result<String, LocaleSyncError> {
        debug!("google: GET {} ({} chars)", self.endpoint, text.len());

        let resp = self
            .client
            .get(&self.endpoint)
            .query(&self.query(text))
            .send()
            .await
            .map_err(|e| LocaleSyncError::Translation(format!("request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            return Err(LocaleSyncError::Translation(format!(
                "endpoint returned {status}"
            )));
        }

        let payload: Value = resp
            .json()
            .await
            .map_err(|e| LocaleSyncError::Translation(format!("failed to parse response: {e}")))?;

        parse_response(&payload)
    }
}

/// Extract the translated text from a `dt=t` response.
///
/// Joins the leading string of every segment in `payload[0]`, in order, and
/// trims the result. Segments that are not lists, or whose first element is
/// not a string, are skipped.
fn parse_response(payload: &Value) -> Result<String, LocaleSyncError> {
    let segments = payload
        .as_array()
        .and_then(|top| top.first())
        .and_then(Value::as_array)
        .ok_or_else(|| LocaleSyncError::Translation("unexpected response shape".to_string()))?;

    let joined: String = segments
        .iter()
        .filter_map(|segment| segment.as_array()?.first()?.as_str())
        .collect();

    let translated = joined.trim();
    if translated.is_empty() {
        return Err(LocaleSyncError::Translation(
            "empty translation".to_string(),
        ));
    }
    Ok(translated.to_string())
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn name(&self) -> &str {
        "google"
    }

    async fn translate(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        match retry_async(self.retry, |_| self.fetch(text)).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!("translation failed for {text:?}: {e}");
                text.to_string()
            }
        }
    }
}
