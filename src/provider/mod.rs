//! Completion service trait and the OpenAI implementation.

pub mod http;
pub mod openai;

use async_trait::async_trait;

use crate::config::{ChatConfig, ServiceKind};
use crate::error::ParleyError;
use crate::types::{ChatMessage, GenerationSettings, ToolCallRequest, Usage};

/// A request sent to a completion service.
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    pub messages: Vec<ChatMessage>,
    pub settings: GenerationSettings,
    pub tools: Vec<ToolDefinition>,
}

/// Tool definition advertised to the completion service.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// Response from a completion service.
#[derive(Debug, Clone, Default)]
pub struct ProviderResponse {
    /// Direct text content, if the model produced any.
    pub text: Option<String>,
    pub tool_calls: Vec<ToolCallRequest>,
    pub usage: Usage,
}

impl ProviderResponse {
    /// A plain text reply with no tool calls.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// A reply requesting the given tool calls.
    pub fn tool_calls(calls: Vec<ToolCallRequest>) -> Self {
        Self {
            tool_calls: calls,
            ..Default::default()
        }
    }
}

/// Core trait implemented by completion services.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &str;

    /// The model ID this provider instance serves.
    fn model_id(&self) -> &str;

    /// Run one non-streaming completion.
    async fn complete(&self, request: &ProviderRequest) -> Result<ProviderResponse, ParleyError>;
}

/// Create the completion provider from config.
///
/// Fails when `OPENAI_API_KEY` is missing; this is the one fatal startup
/// condition.
pub fn create_provider(config: &ChatConfig) -> Result<Box<dyn ModelProvider>, ParleyError> {
    let api_key = config.require_api_key(ServiceKind::OpenAi)?;
    Ok(Box::new(openai::OpenAiProvider::new(
        config.model().to_string(),
        api_key.to_string(),
        Some(config.base_url(ServiceKind::OpenAi).to_string()),
    )))
}
