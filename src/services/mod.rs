//! Clients for the data sources behind the built-in tools.
//!
//! Every client here is fallible and returns [`crate::error::Result`]. The
//! conversion to user-facing strings happens one layer up, in
//! [`crate::tools::ToolKit`].

pub mod clock;
pub mod metrics;
pub mod news;
pub mod weather;
pub mod wolfram;

pub use metrics::SystemMetrics;
pub use news::NewsClient;
pub use weather::WeatherClient;
pub use wolfram::WolframClient;

use crate::config::{ChatConfig, ServiceKind};
use crate::error::{ParleyError, Result};

/// Credential and endpoint root for one HTTP service.
#[derive(Clone)]
pub(crate) struct Endpoint {
    kind: ServiceKind,
    api_key: Option<String>,
    base_url: String,
}

impl Endpoint {
    pub(crate) fn from_config(config: &ChatConfig, kind: ServiceKind) -> Self {
        Self {
            kind,
            api_key: config.api_key(kind).map(str::to_string),
            base_url: config.base_url(kind).to_string(),
        }
    }

    /// The API key, or a configuration error when none was provided.
    pub(crate) fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            ParleyError::Configuration(format!(
                "{} API key not found in environment variables ({})",
                self.kind.display_name(),
                self.kind.api_key_var()
            ))
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn name(&self) -> &'static str {
        self.kind.display_name()
    }
}

impl std::fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint")
            .field("kind", &self.kind)
            .field("has_key", &self.api_key.is_some())
            .field("base_url", &self.base_url)
            .finish()
    }
}
