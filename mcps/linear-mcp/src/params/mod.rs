//! Parameter types for Linear MCP tools

mod comment;
mod issue;

pub use comment::*;
pub use issue::*;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Empty parameters for tools that take no arguments
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EmptyParams {}
