//! NewsAPI top headlines.

use serde::Deserialize;
use tracing::debug;

use crate::config::{ChatConfig, ServiceKind};
use crate::error::{ParleyError, Result};
use crate::provider::http::get_json;

use super::Endpoint;

/// Number of headlines returned per request.
pub const MAX_HEADLINES: usize = 5;

#[derive(Debug, Clone)]
pub struct NewsClient {
    endpoint: Endpoint,
}

impl NewsClient {
    pub fn from_config(config: &ChatConfig) -> Self {
        Self {
            endpoint: Endpoint::from_config(config, ServiceKind::News),
        }
    }

    /// English top headlines, optionally filtered by `topic`, as a bulleted list.
    pub async fn headlines(&self, topic: Option<&str>) -> Result<String> {
        let api_key = self.endpoint.api_key()?;
        let url = self.endpoint.url("/v2/top-headlines");

        let mut query = vec![("apiKey", api_key), ("language", "en")];
        if let Some(topic) = topic {
            query.push(("q", topic));
        }

        let data = get_json(&url, &query).await?;
        let listing: Headlines = serde_json::from_value(data)
            .map_err(|e| ParleyError::malformed(self.endpoint.name(), e.to_string()))?;
        debug!(topic, articles = listing.articles.len(), "news response");

        Ok(listing
            .articles
            .iter()
            .take(MAX_HEADLINES)
            .map(|a| format!("- {}", a.title.as_deref().unwrap_or("(untitled)")))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

#[derive(Deserialize)]
struct Headlines {
    articles: Vec<Article>,
}

#[derive(Deserialize)]
struct Article {
    title: Option<String>,
}
