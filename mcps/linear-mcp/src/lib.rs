//! Linear MCP Library
//!
//! MCP-compatible tools for Linear issue tracking over the Linear GraphQL API.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use linear_mcp::{config::Config, linear::Session, LinearMcpServer};
//!
//! let config = Config::load(None)?;
//! let server = LinearMcpServer::new(Session::from_config(&config.linear)?);
//! // Use with in-memory transport or serve via stdio
//! ```
//!
//! # Features
//! - Issues: create (single and batch), update (single and bulk), search, delete
//! - Comments: add, list with cursor pagination
//! - Teams: list with workflow states
//!
//! # Configuration
//! Set `LINEAR_API_KEY` or configure in `~/.binks/linear.toml`

pub mod config;
pub mod error;
pub mod handlers;
pub mod linear;
pub mod params;
pub mod server;

#[cfg(test)]
mod testing;

// Re-export main server type
pub use server::LinearMcpServer;

// Re-export parameter types for direct API usage
pub use params::*;
