//! Remote repository over the users API.
//!
//! The repository is the only layer upstream code talks to. It adapts wire
//! DTOs into [`teller_core::User`] and collapses every failure mode into an
//! absent result, so no error type (and no panic) crosses its boundary.

use teller_core::User;
use tracing::warn;

use crate::api::UsersApi;
use crate::types::{UserDetail, UserListItem, UserWriteRequest, UserWriteResponse};

/// Optional-result façade over a [`UsersApi`].
///
/// Each operation awaits exactly one underlying call and completes before
/// returning; the repository holds no state between calls. `None` means
/// "not found or unreachable" with no way to tell which; callers that need
/// to distinguish must sit below this layer.
pub struct UserRemoteRepository<A: UsersApi> {
    api: A,
}

impl<A: UsersApi> UserRemoteRepository<A> {
    /// Wrap an API implementation.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetch all users.
    ///
    /// A successful response with zero records is `Some(vec![])`, not
    /// `None`; order of the response payload is preserved. Any error
    /// yields `None`.
    pub async fn get_all(&self) -> Option<Vec<User>> {
        match self.api.get_all().await {
            Ok(items) => Some(items.into_iter().map(map_list_item).collect()),
            Err(e) => {
                warn!(error = %e, "get_all failed, returning no result");
                None
            }
        }
    }

    /// Fetch a single user by id.
    ///
    /// `None` covers both "no such user" and transport failure.
    pub async fn get_by_id(&self, id: i64) -> Option<User> {
        match self.api.get_by_id(id).await {
            Ok(user) => Some(map_detail(user)),
            Err(e) => {
                warn!(id = id, error = %e, "get_by_id failed, returning no result");
                None
            }
        }
    }

    /// Create a user from the given entity's fields.
    ///
    /// The entity's id is not sent; on success the returned user carries
    /// the server-assigned id and the server's (authoritative) field
    /// values.
    pub async fn create_user(&self, user: &User) -> Option<User> {
        let request = write_request(user);
        match self.api.create_user(&request).await {
            Ok(created) => Some(map_write_response(created)),
            Err(e) => {
                warn!(username = %user.username, error = %e, "create_user failed, returning no result");
                None
            }
        }
    }

    /// Replace the user with the given id.
    pub async fn update_user(&self, id: i64, user: &User) -> Option<User> {
        let request = write_request(user);
        match self.api.update_user(id, &request).await {
            Ok(updated) => Some(map_write_response(updated)),
            Err(e) => {
                warn!(id = id, error = %e, "update_user failed, returning no result");
                None
            }
        }
    }

    /// Delete the user with the given id.
    ///
    /// On success returns the server's echo of the deleted record.
    pub async fn delete_user(&self, id: i64) -> Option<User> {
        match self.api.delete_user(id).await {
            Ok(deleted) => Some(map_write_response(deleted)),
            Err(e) => {
                warn!(id = id, error = %e, "delete_user failed, returning no result");
                None
            }
        }
    }
}

// Field-by-field adaptation; ids widen from the wire's i32.

fn map_list_item(dto: UserListItem) -> User {
    User {
        id: i64::from(dto.id),
        name: dto.name,
        username: dto.username,
        email: dto.email,
    }
}

fn map_detail(dto: UserDetail) -> User {
    User {
        id: i64::from(dto.id),
        name: dto.name,
        username: dto.username,
        email: dto.email,
    }
}

fn map_write_response(dto: UserWriteResponse) -> User {
    User {
        id: i64::from(dto.id),
        name: dto.name,
        username: dto.username,
        email: dto.email,
    }
}

fn write_request(user: &User) -> UserWriteRequest {
    UserWriteRequest {
        name: user.name.clone(),
        username: user.username.clone(),
        email: user.email.clone(),
    }
}
