//! Mock Intra API client for testing
//!
//! Provides a mock implementation of [`IntraApi`] for unit testing without
//! making real API calls.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use super::{AccessToken, CursusUsersQuery, IntraApi};
use crate::config::Credentials;
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure scripted responses via builder methods, then use in tests.
pub struct MockIntraClient {
    /// Scripted `cursus_users` pages, served in order (1-indexed)
    pages: Arc<Mutex<Vec<Vec<Value>>>>,
    /// Raw document to return from find_cursus
    cursus: Arc<Mutex<Value>>,
    /// Raw document to return from find_campus
    campus: Arc<Mutex<Value>>,
    /// Page numbers requested, in order
    requested_pages: Arc<Mutex<Vec<usize>>>,
    /// Error to return from the next call, consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
}

impl Default for MockIntraClient {
    fn default() -> Self {
        Self {
            pages: Arc::new(Mutex::new(Vec::new())),
            cursus: Arc::new(Mutex::new(Value::Null)),
            campus: Arc::new(Mutex::new(Value::Null)),
            requested_pages: Arc::new(Mutex::new(Vec::new())),
            error: Arc::new(Mutex::new(None)),
        }
    }
}

impl MockIntraClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the sequence of pages to serve
    pub fn with_pages(self, pages: Vec<Vec<Value>>) -> Self {
        *self.pages.try_lock().unwrap() = pages;
        self
    }

    /// Script the raw cursus document
    pub fn with_cursus(self, cursus: Value) -> Self {
        *self.cursus.try_lock().unwrap() = cursus;
        self
    }

    /// Script the raw campus document
    pub fn with_campus(self, campus: Value) -> Self {
        *self.campus.try_lock().unwrap() = campus;
        self
    }

    /// Fail the next call with the given error
    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.try_lock().unwrap() = Some(error);
        self
    }

    /// Number of pages served so far
    pub async fn pages_served(&self) -> usize {
        self.requested_pages.lock().await.len()
    }

    /// Page numbers requested, in order
    pub async fn requested_pages(&self) -> Vec<usize> {
        self.requested_pages.lock().await.clone()
    }

    async fn take_error(&self) -> Result<()> {
        if let Some(err) = self.error.lock().await.take() {
            return Err(err.into());
        }
        Ok(())
    }
}

#[async_trait]
impl IntraApi for MockIntraClient {
    async fn authenticate(&self, _credentials: &Credentials) -> Result<AccessToken> {
        self.take_error().await?;
        Ok(AccessToken {
            token: "mock-token".to_string(),
            expires_at: None,
        })
    }

    async fn cursus_users_page(
        &self,
        _query: &CursusUsersQuery,
        page: usize,
    ) -> Result<Vec<Value>> {
        self.take_error().await?;
        self.requested_pages.lock().await.push(page);

        let pages = self.pages.lock().await;
        Ok(pages.get(page - 1).cloned().unwrap_or_default())
    }

    async fn find_cursus(&self, _name: &str) -> Result<Value> {
        self.take_error().await?;
        Ok(self.cursus.lock().await.clone())
    }

    async fn find_campus(&self, _name: &str) -> Result<Value> {
        self.take_error().await?;
        Ok(self.campus.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_serves_scripted_pages() {
        let mock = MockIntraClient::new().with_pages(vec![vec![json!({"id": 1})], vec![]]);

        let query = CursusUsersQuery::default();
        let page = mock.cursus_users_page(&query, 1).await.unwrap();
        assert_eq!(page.len(), 1);

        let page = mock.cursus_users_page(&query, 2).await.unwrap();
        assert!(page.is_empty());

        assert_eq!(mock.requested_pages().await, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_mock_serves_reference_documents() {
        let mock = MockIntraClient::new()
            .with_cursus(json!([{ "slug": "42cursus" }]))
            .with_campus(json!([{ "id": 64 }]));

        let cursus = mock.find_cursus("42").await.unwrap();
        assert_eq!(cursus[0]["slug"], "42cursus");

        let campus = mock.find_campus("42").await.unwrap();
        assert_eq!(campus[0]["id"], 64);
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed_once() {
        let mock = MockIntraClient::new().with_error(ApiError::NotAnArray);

        let query = CursusUsersQuery::default();
        assert!(mock.cursus_users_page(&query, 1).await.is_err());
        assert!(mock.cursus_users_page(&query, 1).await.is_ok());
    }
}
