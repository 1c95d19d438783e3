//! Google Translate (public `gtx` endpoint) translator.

use async_trait::async_trait;
use holocron_core::{error::HolocronError, traits::Translator};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Translator backed by the keyless `translate_a/single` endpoint.
pub struct GoogleTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleTranslator {
    /// Create a translator whose HTTP requests give up after `timeout`.
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, HolocronError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HolocronError::Translation(format!("http client init failed: {e}")))?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn name(&self) -> &str {
        "google"
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, HolocronError> {
        debug!("google: translate {source} → {target} ({} chars)", text.len());
        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| HolocronError::Translation(format!("google request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(HolocronError::Translation(format!(
                "google API error {status}: {body}"
            )));
        }

        let body: Value = resp.json().await.map_err(|e| {
            HolocronError::Translation(format!("google response parse failed: {e}"))
        })?;

        parse_response(&body)
            .ok_or_else(|| HolocronError::Translation("google response had no text".into()))
    }
}

/// Join the translated segments of a `[[["out","in",...],...],...]` response.
fn parse_response(body: &Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;
    let joined: String = segments
        .iter()
        .filter_map(|seg| seg.get(0).and_then(Value::as_str))
        .collect();
    (!joined.trim().is_empty()).then_some(joined)
}
