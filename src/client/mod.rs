//! 42 Intra API client

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::Credentials;
use crate::error::Result;

pub mod intra;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;

pub use intra::IntraClient;
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockIntraClient;
pub use pagination::{CursusUsersQuery, fetch_all_pages};

/// Intra API client trait
#[async_trait]
pub trait IntraApi: Send + Sync {
    /// Exchange client credentials for a bearer token
    async fn authenticate(&self, credentials: &Credentials) -> Result<AccessToken>;

    /// Fetch one page of the `cursus_users` collection.
    ///
    /// Returns the raw records of the requested page; page numbers start at 1.
    async fn cursus_users_page(
        &self,
        query: &CursusUsersQuery,
        page: usize,
    ) -> Result<Vec<Value>>;

    /// Fetch the raw `cursus` collection filtered by name
    async fn find_cursus(&self, name: &str) -> Result<Value>;

    /// Fetch the raw `campus` collection filtered by name
    async fn find_campus(&self, name: &str) -> Result<Value>;
}

/// Bearer token obtained from the OAuth token endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    /// The opaque token string
    pub token: String,

    /// Token expiration time, when the endpoint reported `expires_in`
    pub expires_at: Option<DateTime<Utc>>,
}
