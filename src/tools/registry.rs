//! Name-indexed tool registry and the dispatch boundary.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::ChatConfig;
use crate::error::Result;
use crate::provider::ToolDefinition;
use crate::types::ToolCallRequest;

use super::arguments::ToolArguments;
use super::builtin::{builtin_tools, ToolKit};
use super::tool::Tool;
use super::validation::validate_arguments;

/// Owns the built-in tools and routes tool calls to them by name.
///
/// The name index is built once at construction; no lookup happens by
/// reflection or string matching on method names.
pub struct ToolRegistry {
    toolkit: Arc<ToolKit>,
    tools: Vec<Arc<dyn Tool>>,
    by_name: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Build the registry with the five built-in tools.
    pub fn new(config: &ChatConfig) -> Self {
        let toolkit = Arc::new(ToolKit::new(config));
        let mut registry = Self {
            toolkit: toolkit.clone(),
            tools: Vec::new(),
            by_name: HashMap::new(),
        };
        for tool in builtin_tools(toolkit) {
            registry.register(tool);
        }
        registry
    }

    /// Add a tool, replacing any existing tool with the same name in place.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        match self.tools.iter().position(|t| t.name() == name) {
            Some(idx) => self.tools[idx] = tool.clone(),
            None => self.tools.push(tool.clone()),
        }
        self.by_name.insert(name, tool);
    }

    /// Definitions for every registered tool, in registration order.
    pub fn describe_tools(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.by_name.get(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Execute one tool call and render the outcome as text.
    ///
    /// Never fails: an unknown name, undecodable or invalid arguments, and
    /// tool errors all come back as descriptive strings.
    pub async fn dispatch(&self, call: &ToolCallRequest) -> String {
        let Some(tool) = self.by_name.get(&call.name) else {
            warn!(tool = %call.name, "model requested an unknown tool");
            return format!("Function {} not found. Please try again.", call.name);
        };

        debug!(tool = %call.name, id = %call.id, arguments = %call.arguments, "dispatching tool call");
        match run_tool(tool.as_ref(), &call.arguments).await {
            Ok(output) => output,
            Err(e) => {
                warn!(tool = %call.name, error = %e, "tool call failed");
                format!("Error executing {}: {e}", call.name)
            }
        }
    }

    pub async fn get_weather(&self, city: &str) -> String {
        self.toolkit.get_weather(city).await
    }

    pub async fn get_news(&self, topic: Option<&str>) -> String {
        self.toolkit.get_news(topic).await
    }

    pub async fn get_system_metrics(&self) -> String {
        self.toolkit.get_system_metrics().await
    }

    pub fn get_current_time_and_date(&self) -> String {
        self.toolkit.get_current_time_and_date()
    }

    pub async fn ask_wolfram(&self, query: &str) -> String {
        self.toolkit.ask_wolfram(query).await
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.tools.iter().map(|t| t.name()).collect();
        f.debug_struct("ToolRegistry").field("tools", &names).finish()
    }
}

async fn run_tool(tool: &dyn Tool, raw_arguments: &str) -> Result<String> {
    let args = ToolArguments::parse(raw_arguments)?;
    validate_arguments(&args, tool.parameters())?;
    tool.execute(&args).await
}
