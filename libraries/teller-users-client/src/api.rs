//! The users API capability trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{UserDetail, UserListItem, UserWriteRequest, UserWriteResponse};

/// The five remote operations of the users resource.
///
/// [`crate::UsersClient`] implements this over HTTP; tests substitute a
/// mock so the repository can be exercised without a network dependency.
/// Every method performs exactly one request per invocation and surfaces
/// the full error taxonomy; collapsing errors into absent results is the
/// repository's job, not the API's.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// Fetch all users.
    async fn get_all(&self) -> Result<Vec<UserListItem>>;

    /// Fetch a single user by id.
    async fn get_by_id(&self, id: i64) -> Result<UserDetail>;

    /// Create a user. The server assigns the id.
    async fn create_user(&self, request: &UserWriteRequest) -> Result<UserWriteResponse>;

    /// Replace the user with the given id.
    async fn update_user(&self, id: i64, request: &UserWriteRequest) -> Result<UserWriteResponse>;

    /// Delete the user with the given id.
    async fn delete_user(&self, id: i64) -> Result<UserWriteResponse>;
}
