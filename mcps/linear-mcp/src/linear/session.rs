//! Authenticated session handle
//!
//! The server owns one [`Session`] and hands it to every handler. There is no
//! global client; a session without credentials is still constructible so the
//! server can start and report the problem per tool call.

use std::sync::Arc;

use tracing::warn;

use super::api::LinearApi;
use super::client::LinearClient;
use super::error::{LinearError, LinearResult};
use crate::config::LinearConfig;

#[derive(Clone, Default)]
pub struct Session {
    client: Option<Arc<dyn LinearApi>>,
}

impl Session {
    /// Session backed by an already-built client
    pub fn new(client: Arc<dyn LinearApi>) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Session with no credentials; every call fails authentication
    pub fn unauthenticated() -> Self {
        Self::default()
    }

    /// Build the HTTPS client from configuration, if an API key is available
    pub fn from_config(config: &LinearConfig) -> LinearResult<Self> {
        match config.api_key.clone() {
            Some(key) if !key.trim().is_empty() => {
                let client = LinearClient::new(config, key)?;
                Ok(Self::new(Arc::new(client)))
            }
            _ => {
                warn!("no Linear API key configured, tools will fail until one is set");
                Ok(Self::unauthenticated())
            }
        }
    }

    /// Return the ready client, or fail when no session is established
    pub fn verify_auth(&self) -> LinearResult<&dyn LinearApi> {
        self.client.as_deref().ok_or(LinearError::NotAuthenticated)
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_session_fails_verify() {
        let session = Session::unauthenticated();
        assert!(!session.is_authenticated());
        assert!(matches!(
            session.verify_auth(),
            Err(LinearError::NotAuthenticated)
        ));
    }

    #[test]
    fn test_blank_api_key_is_unauthenticated() {
        let config = LinearConfig {
            api_key: Some("   ".to_string()),
            ..LinearConfig::default()
        };
        let session = Session::from_config(&config).unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_api_key_builds_client() {
        let config = LinearConfig {
            api_key: Some("lin_api_test".to_string()),
            ..LinearConfig::default()
        };
        let session = Session::from_config(&config).unwrap();
        assert!(session.verify_auth().is_ok());
    }
}
