//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for credential loading, token exchange, and client initialization.

use crate::client::{IntraApi, IntraClient};
use crate::config::Credentials;
use crate::error::Result;

/// Context for command execution containing the authenticated client.
///
/// Construction performs the whole preamble shared by networked commands:
/// load the credentials file, build the HTTP client (honoring a host
/// override), and exchange the credentials for a bearer token. The token is
/// obtained once per run; there is no refresh.
pub struct CommandContext {
    /// API client with the bearer token set
    pub client: IntraClient,
}

impl CommandContext {
    /// Create a new command context with full initialization.
    ///
    /// # Errors
    /// Returns an error if the credentials file cannot be loaded or the
    /// token exchange fails.
    pub async fn new(env_file: Option<&str>, api_host: Option<String>) -> Result<Self> {
        let path = Credentials::resolve_path(env_file);
        let credentials = Credentials::load(&path)?;

        let client = IntraClient::with_host(api_host)?;

        let token = client.authenticate(&credentials).await?;
        client.set_token(token).await;

        Ok(Self { client })
    }
}
