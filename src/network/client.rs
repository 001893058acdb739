//! HTTP client wrapper - retrieves the user list and classifies failures

use std::time::Instant;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::messages::NetworkResponse;
use crate::models::User;

/// Something that can produce the full user list
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError>;
}

/// Users retrieved with a plain GET against a fixed endpoint
pub struct HttpUserSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpUserSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(create_client(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        HttpUserSource {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        let resp = self.client.get(&self.endpoint).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let users = resp.json::<Vec<User>>().await?;
        Ok(users)
    }
}

/// Run one fetch and turn its outcome into a response for the App layer
pub async fn execute_fetch(source: &dyn UserSource, request_id: u64) -> NetworkResponse {
    let start = Instant::now();
    let result = source.fetch_users().await;
    let elapsed = start.elapsed().as_millis() as u64;

    match result {
        Ok(users) => NetworkResponse::Users {
            id: request_id,
            users,
            time_ms: elapsed,
        },
        Err(e) => {
            tracing::warn!(id = request_id, error = %e, "User fetch failed");
            NetworkResponse::Error {
                id: request_id,
                message: e.to_string(),
                time_ms: elapsed,
            }
        }
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
