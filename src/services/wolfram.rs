//! Wolfram Alpha full-results API (JSON output).

use serde::Deserialize;
use tracing::debug;

use crate::config::{ChatConfig, ServiceKind};
use crate::error::{ParleyError, Result};
use crate::provider::http::get_json;

use super::Endpoint;

#[derive(Debug, Clone)]
pub struct WolframClient {
    endpoint: Endpoint,
}

impl WolframClient {
    pub fn from_config(config: &ChatConfig) -> Self {
        Self {
            endpoint: Endpoint::from_config(config, ServiceKind::Wolfram),
        }
    }

    /// Plaintext of the first result pod for `query`.
    pub async fn query(&self, query: &str) -> Result<String> {
        let api_key = self.endpoint.api_key()?;
        let url = self.endpoint.url("/v2/query");

        let data = get_json(
            &url,
            &[
                ("input", query),
                ("appid", api_key),
                ("output", "json"),
                ("format", "plaintext"),
            ],
        )
        .await?;

        let envelope: Envelope = serde_json::from_value(data)
            .map_err(|e| ParleyError::malformed(self.endpoint.name(), e.to_string()))?;
        let result = envelope.queryresult;
        debug!(query, pods = result.pods.len(), "wolfram response");

        if let Some(msg) = result.error.get("msg").and_then(|m| m.as_str()) {
            return Err(ParleyError::api(200, msg));
        }

        result
            .pods
            .iter()
            .find(|pod| pod.is_result())
            .and_then(|pod| pod.subpods.first())
            .map(|sub| sub.plaintext.clone())
            .ok_or_else(|| ParleyError::EmptyResult(self.endpoint.name().to_string()))
    }
}

#[derive(Deserialize)]
struct Envelope {
    queryresult: QueryResult,
}

#[derive(Deserialize)]
struct QueryResult {
    #[serde(default)]
    pods: Vec<Pod>,
    // `false` on success, an object with `msg` on failure.
    #[serde(default)]
    error: serde_json::Value,
}

#[derive(Deserialize)]
struct Pod {
    #[serde(default)]
    title: String,
    #[serde(default)]
    primary: bool,
    #[serde(default)]
    subpods: Vec<SubPod>,
}

impl Pod {
    fn is_result(&self) -> bool {
        self.primary || self.title == "Result"
    }
}

#[derive(Deserialize)]
struct SubPod {
    #[serde(default)]
    plaintext: String,
}
