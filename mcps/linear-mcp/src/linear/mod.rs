//! Linear GraphQL adapter
//!
//! The [`LinearApi`] trait the handlers consume, its HTTPS implementation,
//! the session that owns it, and the wire types.

pub mod api;
pub mod client;
pub mod error;
pub mod queries;
pub mod session;
pub mod types;

pub use api::LinearApi;
pub use client::LinearClient;
pub use error::{LinearError, LinearResult};
pub use session::Session;
