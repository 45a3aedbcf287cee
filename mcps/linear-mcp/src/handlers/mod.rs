//! Handler implementations for Linear MCP tools
//!
//! Organized by domain: issue, comment, team. Handlers return
//! [`ToolResult`]; the `respond_*` helpers turn that into the MCP reply,
//! tagging failures with the operation that raised them.

mod comment;
pub mod filter;
pub mod format;
mod issue;
pub mod resolve;
mod team;
pub mod validation;

pub use comment::*;
pub use issue::*;
pub use team::*;

use mcp_common::{json_success, text_success, CallToolResult, McpError};
use serde::Serialize;
use tracing::warn;

use crate::error::ToolResult;

/// Reply with the handler's text, or the tagged error
pub fn respond_text(
    operation: &str,
    result: ToolResult<String>,
) -> Result<CallToolResult, McpError> {
    match result {
        Ok(text) => Ok(text_success(text)),
        Err(e) => {
            warn!(operation, error = %e, "tool failed");
            Err(e.into_mcp_error(operation))
        }
    }
}

/// Reply with the handler's value as pretty JSON, or the tagged error
pub fn respond_json<T: Serialize>(
    operation: &str,
    result: ToolResult<T>,
) -> Result<CallToolResult, McpError> {
    match result {
        Ok(value) => json_success(&value),
        Err(e) => {
            warn!(operation, error = %e, "tool failed");
            Err(e.into_mcp_error(operation))
        }
    }
}
