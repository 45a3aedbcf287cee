//! Errors surfaced by the tool handlers

use mcp_common::{internal_error, invalid_params, McpError};
use thiserror::Error;

use crate::linear::LinearError;

#[derive(Error, Debug)]
pub enum ToolError {
    /// A required field was absent or empty; raised before any network call
    #[error("missing required field: {field}")]
    Validation { field: String },

    /// A human-readable reference did not match anything in Linear
    #[error("{kind} not found: {value}")]
    NotFound { kind: &'static str, value: String },

    /// Linear reported `success: false`, or omitted the expected payload
    #[error("{0}")]
    OperationFailed(String),

    /// Anything raised by the GraphQL adapter, unchanged
    #[error(transparent)]
    Transport(#[from] LinearError),
}

pub type ToolResult<T> = Result<T, ToolError>;

impl ToolError {
    pub fn validation(field: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
        }
    }

    pub fn operation_failed(message: impl Into<String>) -> Self {
        Self::OperationFailed(message.into())
    }

    /// Convert to the MCP error convention, tagged with the operation name
    pub fn into_mcp_error(self, operation: &str) -> McpError {
        let message = format!("Error in {operation}: {self}");
        match self {
            Self::Validation { .. } => invalid_params(message),
            _ => internal_error(message),
        }
    }
}
