//! Constructors for MCP error replies
//!
//! Servers keep their own error enums and convert at the tool boundary; these
//! helpers only pick the JSON-RPC code.

use rmcp::ErrorData as McpError;

/// Server-side failure: transport problems, upstream errors, bad responses
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

/// The caller's arguments were missing or malformed
pub fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}
