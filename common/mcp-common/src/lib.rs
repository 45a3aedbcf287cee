//! MCP Common - shared plumbing for MCP servers
//!
//! - **Initialization**: [`init_tracing`] sends logs to stderr, leaving stdout
//!   to the protocol
//! - **Results**: [`json_success`] and [`text_success`] build `CallToolResult`s
//! - **Errors**: [`internal_error`] and [`invalid_params`] build `McpError`s
//! - **Embeddable**: [`EmbeddableMcp`] runs a server's tools in-process
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{invalid_params, text_success};
//!
//! async fn delete(&self, id: String) -> Result<CallToolResult, McpError> {
//!     if id.is_empty() {
//!         return Err(invalid_params("missing required field: id"));
//!     }
//!     Ok(text_success(format!("Successfully deleted issue {id}")))
//! }
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{internal_error, invalid_params};
pub use init::init_tracing;
pub use result::{json_success, text_success};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
