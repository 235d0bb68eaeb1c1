//! Generation settings.

use bon::Builder;
use serde::{Deserialize, Serialize};

/// Sampling temperature used for every chat turn.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Settings controlling a completion request.
#[derive(Debug, Clone, Builder, Serialize, Deserialize, PartialEq)]
pub struct GenerationSettings {
    #[builder(default = DEFAULT_TEMPERATURE)]
    pub temperature: f64,
    pub max_tokens: Option<u32>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_chat_turn_settings() {
        let settings = GenerationSettings::default();
        assert!((settings.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(settings.max_tokens, None);
    }

    #[test]
    fn builder_overrides_fields() {
        let settings = GenerationSettings::builder()
            .temperature(0.2)
            .max_tokens(256)
            .build();
        assert!((settings.temperature - 0.2).abs() < f64::EPSILON);
        assert_eq!(settings.max_tokens, Some(256));
    }
}
