//! In-process tool execution
//!
//! [`EmbeddableMcp`] lets a host call a server's tools directly, without a
//! child process or stdio framing. Servers built on `#[tool_router]` list
//! their tools from the router and dispatch `call_tool` by name.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, ErrorCode, Tool};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// The tool rejected its arguments
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// Arguments did not deserialize into the tool's parameter type
    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// Any other error reply from the tool
    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        if err.code == ErrorCode::INVALID_PARAMS {
            EmbeddableError::InvalidParams(err.message.to_string())
        } else {
            EmbeddableError::McpError(err.message.to_string())
        }
    }
}

pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// A server whose tools can be called in-process
///
/// Implementations must be `Send + Sync`; hosts may call tools concurrently.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Name used for this server in MCP configuration
    fn server_name(&self) -> &str;

    /// Every tool with its name, description and input schema
    fn list_tools(&self) -> Vec<Tool>;

    /// Run tool `name` with a JSON object of arguments
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    fn server_description(&self) -> Option<&str> {
        None
    }

    fn server_version(&self) -> Option<&str> {
        None
    }
}
