//! Configuration system (layered: code > env > env file).

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::{debug, warn};

use crate::error::{ParleyError, Result};

/// Credentials file loaded from the working directory at startup.
pub const DEFAULT_ENV_FILE: &str = "api.env";

/// Environment variable that replaces [`DEFAULT_ENV_FILE`].
pub const ENV_FILE_VAR: &str = "PARLEY_ENV_FILE";

/// Chat model used when `OPENAI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gpt-4o";

const MODEL_VAR: &str = "OPENAI_MODEL";

/// External services the agent talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ServiceKind {
    /// The chat completion endpoint.
    #[strum(serialize = "openai")]
    OpenAi,
    Weather,
    News,
    Wolfram,
}

impl ServiceKind {
    /// Environment variable holding the API key.
    pub fn api_key_var(self) -> &'static str {
        match self {
            Self::OpenAi => "OPENAI_API_KEY",
            Self::Weather => "WEATHER_API",
            Self::News => "NEWS_API",
            Self::Wolfram => "WOLFRAMALPHA_API",
        }
    }

    /// Environment variable overriding the endpoint root.
    pub fn base_url_var(self) -> &'static str {
        match self {
            Self::OpenAi => "OPENAI_BASE_URL",
            Self::Weather => "WEATHER_BASE_URL",
            Self::News => "NEWS_BASE_URL",
            Self::Wolfram => "WOLFRAM_BASE_URL",
        }
    }

    pub fn default_base_url(self) -> &'static str {
        match self {
            Self::OpenAi => "https://api.openai.com/v1",
            Self::Weather => "https://api.openweathermap.org",
            Self::News => "https://newsapi.org",
            Self::Wolfram => "https://api.wolframalpha.com",
        }
    }

    /// Human-readable provider name used in error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Weather => "OpenWeatherMap",
            Self::News => "NewsAPI",
            Self::Wolfram => "Wolfram Alpha",
        }
    }
}

/// Immutable credential set and endpoint overrides.
///
/// Built once at startup (usually through [`ChatConfig::from_env`]) and
/// passed by reference to whatever needs it. There is no global instance.
#[derive(Clone, Default)]
pub struct ChatConfig {
    api_keys: HashMap<ServiceKind, String>,
    base_urls: HashMap<ServiceKind, String>,
    model: Option<String>,
}

impl fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<String> = self.api_keys.keys().map(|k| k.to_string()).collect();
        keys.sort();
        f.debug_struct("ChatConfig")
            .field("api_keys", &keys)
            .field("base_urls", &self.base_urls)
            .field("model", &self.model)
            .finish()
    }
}

impl ChatConfig {
    /// Create an empty config: no credentials, default endpoints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the credentials file, then `.env`, then read the process environment.
    ///
    /// The credentials file is `api.env` unless `PARLEY_ENV_FILE` names
    /// another one. Variables already set in the environment are never
    /// overwritten by file contents.
    pub fn from_env() -> Self {
        let env_file =
            std::env::var(ENV_FILE_VAR).unwrap_or_else(|_| DEFAULT_ENV_FILE.to_string());
        Self::load_env_file(Path::new(&env_file));
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_process_env()
    }

    /// Load a dotenv-style file into the process environment.
    ///
    /// Returns `true` when the file was found and loaded.
    pub fn load_env_file(path: &Path) -> bool {
        match dotenvy::from_path(path) {
            Ok(()) => {
                debug!(path = %path.display(), "loaded credentials file");
                true
            }
            Err(e) if e.not_found() => false,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to parse credentials file");
                false
            }
        }
    }

    /// Read keys, endpoint overrides and the model from the current environment.
    pub fn from_process_env() -> Self {
        let mut config = Self::new();

        for kind in ServiceKind::iter() {
            if let Some(key) = non_empty_var(kind.api_key_var()) {
                config = config.with_api_key(kind, key);
            }
            if let Some(url) = non_empty_var(kind.base_url_var()) {
                config = config.with_base_url(kind, url);
            }
        }

        if let Some(model) = non_empty_var(MODEL_VAR) {
            config = config.with_model(model);
        }

        config
    }

    pub fn with_api_key(mut self, kind: ServiceKind, key: impl Into<String>) -> Self {
        self.api_keys.insert(kind, key.into());
        self
    }

    pub fn with_base_url(mut self, kind: ServiceKind, url: impl Into<String>) -> Self {
        self.base_urls.insert(kind, url.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn api_key(&self, kind: ServiceKind) -> Option<&str> {
        self.api_keys.get(&kind).map(String::as_str)
    }

    /// Resolve an API key or fail with a configuration error naming the variable.
    pub fn require_api_key(&self, kind: ServiceKind) -> Result<&str> {
        self.api_key(kind).ok_or_else(|| {
            ParleyError::Configuration(format!(
                "{} API key not found in environment variables ({})",
                kind.display_name(),
                kind.api_key_var()
            ))
        })
    }

    /// Endpoint root for a service, without a trailing slash.
    pub fn base_url(&self, kind: ServiceKind) -> &str {
        self.base_urls
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_base_url())
            .trim_end_matches('/')
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
