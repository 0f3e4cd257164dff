//! reqwest-backed implementation of the users API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::api::UsersApi;
use crate::error::{Result, UsersClientError};
use crate::types::{ClientConfig, UserDetail, UserListItem, UserWriteRequest, UserWriteResponse};

/// HTTP client for the users API.
///
/// Holds a configured [`reqwest::Client`] and the normalized base URL and
/// carries no other state; cloning is cheap and clones share the
/// underlying connection pool.
///
/// # Example
///
/// ```ignore
/// use teller_users_client::{ClientConfig, UsersApi, UsersClient};
///
/// let client = UsersClient::new(ClientConfig::new("https://api.example.com"))?;
/// let users = client.get_all().await?;
/// println!("Found {} users", users.len());
/// ```
#[derive(Debug, Clone)]
pub struct UsersClient {
    http: Client,
    base_url: String,
}

impl UsersClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(UsersClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(UsersClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        // HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Teller/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(UsersClientError::Request)?;

        Ok(Self { http, base_url })
    }

    /// The normalized base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl UsersApi for UsersClient {
    async fn get_all(&self) -> Result<Vec<UserListItem>> {
        let url = format!("{}/users", self.base_url);
        debug!(url = %url, "Fetching all users");

        let response = self.http.get(&url).send().await.map_err(map_send_error)?;
        let status = response.status();

        if status.is_success() {
            let users: Vec<UserListItem> = response.json().await.map_err(|e| {
                UsersClientError::ParseError(format!("Failed to parse users list: {}", e))
            })?;

            debug!(count = users.len(), "Fetched users");
            Ok(users)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, "Users list request failed");
            Err(UsersClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    async fn get_by_id(&self, id: i64) -> Result<UserDetail> {
        let url = format!("{}/users/{}", self.base_url, id);
        debug!(url = %url, id = id, "Fetching user");

        let response = self.http.get(&url).send().await.map_err(map_send_error)?;
        let status = response.status();

        if status.is_success() {
            let user: UserDetail = response.json().await.map_err(|e| {
                UsersClientError::ParseError(format!("Failed to parse user response: {}", e))
            })?;

            Ok(user)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(UsersClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    async fn create_user(&self, request: &UserWriteRequest) -> Result<UserWriteResponse> {
        let url = format!("{}/users", self.base_url);
        debug!(url = %url, username = %request.username, "Creating user");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(map_send_error)?;
        let status = response.status();

        if status.is_success() {
            let created: UserWriteResponse = response.json().await.map_err(|e| {
                UsersClientError::ParseError(format!("Failed to parse create response: {}", e))
            })?;

            debug!(id = created.id, "User created");
            Ok(created)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, "Create user request failed");
            Err(UsersClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    async fn update_user(&self, id: i64, request: &UserWriteRequest) -> Result<UserWriteResponse> {
        let url = format!("{}/users/{}", self.base_url, id);
        debug!(url = %url, id = id, "Updating user");

        let response = self
            .http
            .put(&url)
            .json(request)
            .send()
            .await
            .map_err(map_send_error)?;
        let status = response.status();

        if status.is_success() {
            let updated: UserWriteResponse = response.json().await.map_err(|e| {
                UsersClientError::ParseError(format!("Failed to parse update response: {}", e))
            })?;

            Ok(updated)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, "Update user request failed");
            Err(UsersClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    async fn delete_user(&self, id: i64) -> Result<UserWriteResponse> {
        let url = format!("{}/users/{}", self.base_url, id);
        debug!(url = %url, id = id, "Deleting user");

        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(map_send_error)?;
        let status = response.status();

        if status.is_success() {
            let deleted: UserWriteResponse = response.json().await.map_err(|e| {
                UsersClientError::ParseError(format!("Failed to parse delete response: {}", e))
            })?;

            debug!(id = id, "User deleted");
            Ok(deleted)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, "Delete user request failed");
            Err(UsersClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

/// Classify transport-level send failures.
fn map_send_error(e: reqwest::Error) -> UsersClientError {
    if e.is_connect() || e.is_timeout() {
        UsersClientError::ServerUnreachable(e.to_string())
    } else {
        UsersClientError::Request(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_validation() {
        // Valid URLs
        assert!(UsersClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(UsersClient::new(ClientConfig::new("http://localhost:8080")).is_ok());

        // Invalid URLs
        assert!(UsersClient::new(ClientConfig::new("")).is_err());
        assert!(UsersClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(UsersClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn url_normalization() {
        let client =
            UsersClient::new(ClientConfig::new("https://example.com/")).expect("valid url");
        assert_eq!(client.base_url(), "https://example.com");
    }
}
