//! Tool trait and closure-based tool wrapper.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;

use super::arguments::ToolArguments;
use super::types::ToolParameters;
use crate::error::ParleyError;
use crate::provider::ToolDefinition;

/// Core tool trait.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (must match what the model calls).
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// JSON Schema parameters.
    fn parameters(&self) -> &ToolParameters;

    /// Execute the tool with decoded arguments.
    async fn execute(&self, args: &ToolArguments) -> Result<String, ParleyError>;

    /// Definition advertised to the completion service.
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters().schema.clone(),
        }
    }
}

type ToolFuture = Pin<Box<dyn Future<Output = Result<String, ParleyError>> + Send>>;

type ToolHandler = dyn Fn(ToolArguments) -> ToolFuture + Send + Sync;

/// Closure-based tool.
pub struct FnTool {
    name: String,
    description: String,
    parameters: ToolParameters,
    handler: Arc<ToolHandler>,
}

impl FnTool {
    /// Create a tool from a closure.
    pub fn new<F, Fut>(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: ToolParameters,
        handler: F,
    ) -> Self
    where
        F: Fn(ToolArguments) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, ParleyError>> + Send + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
            handler: Arc::new(move |args| -> ToolFuture { Box::pin(handler(args)) }),
        }
    }
}

#[async_trait]
impl Tool for FnTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(&self, args: &ToolArguments) -> Result<String, ParleyError> {
        (self.handler)(args.clone()).await
    }
}

impl std::fmt::Debug for FnTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fn_tool_executes_handler() {
        let tool = FnTool::new(
            "greet",
            "Greet a person",
            ToolParameters::object().string("name", "Name", true).build(),
            |args| async move {
                let name = args.get_str("name")?;
                Ok(format!("Hello, {name}!"))
            },
        );

        let args = ToolArguments::new(serde_json::json!({"name": "World"}));
        assert_eq!(tool.execute(&args).await.unwrap(), "Hello, World!");
    }

    #[test]
    fn definition_mirrors_tool_metadata() {
        let tool = FnTool::new("noop", "Does nothing", ToolParameters::empty(), |_| async {
            Ok(String::new())
        });

        let def = tool.definition();
        assert_eq!(def.name, "noop");
        assert_eq!(def.description, "Does nothing");
        assert_eq!(def.parameters["type"], "object");
    }
}
