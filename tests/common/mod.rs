//! Shared test helpers and mock provider.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use parley::agent::ConversationAgent;
use parley::config::{ChatConfig, ServiceKind};
use parley::error::ParleyError;
use parley::provider::{ModelProvider, ProviderRequest, ProviderResponse};
use parley::tools::ToolRegistry;
use parley::types::*;

enum Canned {
    Response(ProviderResponse),
    Error(ParleyError),
}

/// A mock provider that returns canned responses and records requests.
pub struct MockProvider {
    responses: Mutex<VecDeque<Canned>>,
    requests: Arc<Mutex<Vec<ProviderRequest>>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the requests this provider receives, usable after it is boxed.
    pub fn requests(&self) -> Arc<Mutex<Vec<ProviderRequest>>> {
        self.requests.clone()
    }

    /// Queue a text response.
    pub fn queue_response(&self, text: &str) {
        let mut response = ProviderResponse::text(text);
        response.usage = Usage {
            input_tokens: 10,
            output_tokens: 20,
            total_tokens: 30,
        };
        self.push(Canned::Response(response));
    }

    /// Queue a response with no text and no tool calls.
    pub fn queue_empty(&self) {
        self.push(Canned::Response(ProviderResponse::default()));
    }

    /// Queue a single tool call response.
    pub fn queue_tool_call(&self, name: &str, arguments: &str) {
        self.queue_tool_calls(&[(name, arguments)]);
    }

    /// Queue one response requesting several tool calls.
    pub fn queue_tool_calls(&self, calls: &[(&str, &str)]) {
        let calls = calls
            .iter()
            .enumerate()
            .map(|(i, (name, args))| ToolCallRequest::new(format!("call_{i}"), *name, *args))
            .collect();
        self.push(Canned::Response(ProviderResponse::tool_calls(calls)));
    }

    /// Queue a failure.
    pub fn queue_error(&self, error: ParleyError) {
        self.push(Canned::Error(error));
    }

    fn push(&self, canned: Canned) {
        self.responses.lock().unwrap().push_back(canned);
    }
}

#[async_trait]
impl ModelProvider for MockProvider {
    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_id(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: &ProviderRequest) -> Result<ProviderResponse, ParleyError> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(Canned::Response(response)) => Ok(response),
            Some(Canned::Error(error)) => Err(error),
            None => Ok(ProviderResponse::text("Mock response")),
        }
    }
}

/// Config with every data-provider key set and endpoints pointed at `base_url`.
pub fn config_for(base_url: &str) -> ChatConfig {
    let mut config = ChatConfig::new();
    for kind in [ServiceKind::Weather, ServiceKind::News, ServiceKind::Wolfram] {
        config = config
            .with_api_key(kind, format!("{kind}-key"))
            .with_base_url(kind, base_url);
    }
    config
}

/// Agent over `provider` with a registry built from `config`.
pub fn agent_with(provider: MockProvider, config: &ChatConfig) -> ConversationAgent {
    ConversationAgent::new(Box::new(provider), ToolRegistry::new(config))
}
