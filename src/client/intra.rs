//! Intra API client implementation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{AccessToken, CursusUsersQuery, IntraApi};
use crate::config::Credentials;
use crate::error::{ApiError, Result};

/// Intra API base URL
const API_BASE_URL: &str = "https://api.intra.42.fr";

/// Rate limit: the Intra API allows 2 requests per second
const RATE_LIMIT_PER_SECOND: u32 = 2;

/// Intra API client
pub struct IntraClient {
    http: HttpClient,
    base_url: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    token: Arc<RwLock<Option<String>>>,
}

impl IntraClient {
    /// Create a client with an optional base-URL override.
    ///
    /// `None` targets the production Intra host; tests point this at a local
    /// mock server.
    pub fn with_host(host: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota = Quota::per_second(std::num::NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap());
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Ok(Self {
            http,
            base_url: host.unwrap_or_else(|| API_BASE_URL.to_string()),
            rate_limiter,
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Set the bearer token used on subsequent requests
    pub async fn set_token(&self, token: AccessToken) {
        let mut slot = self.token.write().await;
        *slot = Some(token.token);
    }

    async fn bearer_token(&self) -> Result<String> {
        let slot = self.token.read().await;
        slot.clone().ok_or_else(|| ApiError::Unauthorized.into())
    }

    /// Make an authenticated GET request and parse the body as JSON.
    ///
    /// Every non-success status is terminal; nothing is retried.
    async fn get_json(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        self.rate_limiter.until_ready().await;

        let token = self.bearer_token().await?;
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .query(params)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let body = response.text().await.map_err(ApiError::from)?;
                serde_json::from_str(&body)
                    .map_err(|e| ApiError::InvalidResponse(format!("JSON parse error: {e}")).into())
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::TOO_MANY_REQUESTS => {
                let body = response.text().await.unwrap_or_default();
                Err(ApiError::RateLimited(body).into())
            }
            _ => {
                let body = response.text().await.unwrap_or_default();
                Err(ApiError::HttpStatus {
                    status: status.as_u16(),
                    endpoint: path.to_string(),
                    body,
                }
                .into())
            }
        }
    }
}

/// Shape of the token endpoint response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,

    /// Lifetime in seconds, when the endpoint reports one
    #[serde(default)]
    expires_in: Option<i64>,
}

#[async_trait]
impl IntraApi for IntraClient {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AccessToken> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}/oauth/token", self.base_url);
        log::debug!("POST {url}");

        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", credentials.uid.as_str()),
            ("client_secret", credentials.secret.as_str()),
        ];

        let response = self
            .http
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                endpoint: "/oauth/token".to_string(),
                body,
            }
            .into());
        }

        let body = response.text().await.map_err(ApiError::from)?;
        let token_response: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse token response: {e}"))
        })?;

        let token = match token_response.access_token {
            Some(token) if !token.is_empty() => token,
            _ => return Err(ApiError::MissingToken.into()),
        };

        let expires_at = token_response
            .expires_in
            .map(|secs| Utc::now() + chrono::Duration::seconds(secs));

        Ok(AccessToken { token, expires_at })
    }

    async fn cursus_users_page(
        &self,
        query: &CursusUsersQuery,
        page: usize,
    ) -> Result<Vec<Value>> {
        let params = query.to_query_params(page);
        let body = self.get_json("/v2/cursus_users", &params).await?;

        match body {
            Value::Array(records) => Ok(records),
            _ => Err(ApiError::NotAnArray.into()),
        }
    }

    async fn find_cursus(&self, name: &str) -> Result<Value> {
        let params = [("filter[name]", name.to_string())];
        self.get_json("/v2/cursus", &params).await
    }

    async fn find_campus(&self, name: &str) -> Result<Value> {
        let params = [("filter[name]", name.to_string())];
        self.get_json("/v2/campus", &params).await
    }
}
