/// User domain type
use serde::{Deserialize, Serialize};

/// A user record as the rest of the application sees it.
///
/// Decoupled from the remote API's wire shapes; the users client adapts
/// those into this type. Remote ids are narrower (`i32` on the wire) and
/// are widened to `i64` here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier, assigned by the server.
    ///
    /// `0` means the user has not been persisted yet.
    pub id: i64,

    /// Display name
    pub name: String,

    /// Login name
    pub username: String,

    /// Email address
    pub email: String,
}

impl User {
    /// Create a user that has not been persisted yet.
    ///
    /// The id is left at `0`; the server assigns the real one on create.
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            username: username.into(),
            email: email.into(),
        }
    }

    /// Create a user with a known server-assigned id.
    pub fn with_id(
        id: i64,
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            username: username.into(),
            email: email.into(),
        }
    }

    /// Whether the user carries a server-assigned id.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_has_no_id() {
        let user = User::new("Alice Example", "alice", "alice@example.com");
        assert_eq!(user.id, 0);
        assert!(!user.is_persisted());
        assert_eq!(user.name, "Alice Example");
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
    }

    #[test]
    fn with_id_is_persisted() {
        let user = User::with_id(7, "Alice Example", "alice", "alice@example.com");
        assert_eq!(user.id, 7);
        assert!(user.is_persisted());
    }

    #[test]
    fn serde_round_trip() {
        let user = User::with_id(1, "Alice Example", "alice", "alice@example.com");
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
