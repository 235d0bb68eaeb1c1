//! The conversation agent: one request/response cycle per user turn.

use tracing::{debug, info, warn};

use crate::config::ChatConfig;
use crate::error::ParleyError;
use crate::provider::{self, ModelProvider, ProviderRequest};
use crate::tools::ToolRegistry;
use crate::types::*;

use super::conversation::Conversation;

/// System prompt sent at the head of every request.
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are a helpful assistant with access to various tools. You can:
1. Check weather for any city
2. Get latest news updates, optionally filtered by topic
3. Check system performance metrics
4. Get current date and time
5. Query Wolfram Alpha for calculations and facts

Use these tools when appropriate to provide accurate information.";

/// Reply used when the model returns neither text nor tool calls.
pub const NO_RESPONSE: &str = "No response generated.";

/// Single-session chat agent with tool dispatch.
///
/// Tool results are returned to the user directly as the turn's reply; they
/// are not sent back to the model for a follow-up completion.
pub struct ConversationAgent {
    provider: Box<dyn ModelProvider>,
    registry: ToolRegistry,
    system_prompt: String,
    settings: GenerationSettings,
    conversation: Conversation,
    usage: Usage,
}

impl ConversationAgent {
    /// Create an agent over an explicit provider and registry.
    pub fn new(provider: Box<dyn ModelProvider>, registry: ToolRegistry) -> Self {
        Self {
            provider,
            registry,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            settings: GenerationSettings::default(),
            conversation: Conversation::new(),
            usage: Usage::default(),
        }
    }

    /// Create an agent from config.
    ///
    /// Fails only when the completion-service key is missing.
    pub fn from_config(config: &ChatConfig) -> Result<Self, ParleyError> {
        let provider = provider::create_provider(config)?;
        info!(
            provider = provider.provider_name(),
            model = provider.model_id(),
            "agent initialized"
        );
        Ok(Self::new(provider, ToolRegistry::new(config)))
    }

    /// Set system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Set generation settings.
    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Run one turn and return the text to show the user.
    ///
    /// Never fails: completion-service errors become an
    /// `"Error processing message: ..."` reply and leave history untouched.
    pub async fn process_message(&mut self, user_input: &str) -> String {
        let request = ProviderRequest {
            messages: self.compose_messages(user_input),
            settings: self.settings.clone(),
            tools: self.registry.describe_tools(),
        };

        let response = match self.provider.complete(&request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "completion request failed");
                return format!("Error processing message: {e}");
            }
        };
        self.usage.merge(&response.usage);

        self.conversation.add_user_message(user_input);

        let reply = if response.tool_calls.is_empty() {
            response
                .text
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| NO_RESPONSE.to_string())
        } else {
            let mut results = Vec::with_capacity(response.tool_calls.len());
            for call in &response.tool_calls {
                results.push(self.registry.dispatch(call).await);
            }
            results.join("\n")
        };

        self.conversation.add_assistant_message(reply.clone());
        debug!(
            history = self.conversation.len(),
            tool_calls = response.tool_calls.len(),
            "turn complete"
        );

        reply
    }

    fn compose_messages(&self, user_input: &str) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(self.conversation.len() + 2);
        messages.push(ChatMessage::system(self.system_prompt.clone()));
        messages.extend(self.conversation.messages().iter().cloned());
        messages.push(ChatMessage::user(user_input));
        messages
    }

    /// Get the conversation history.
    pub fn history(&self) -> &[ChatMessage] {
        self.conversation.messages()
    }

    /// Clear conversation history.
    pub fn clear_history(&mut self) {
        self.conversation.clear();
    }

    /// The system prompt sent at the head of each request.
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// The tool registry used for dispatch.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Token usage accumulated over all successful turns.
    pub fn usage(&self) -> Usage {
        self.usage
    }
}
