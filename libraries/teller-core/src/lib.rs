//! Teller Core
//!
//! Platform-agnostic domain types shared across Teller components.
//!
//! The remote user service speaks its own wire shapes; this crate owns the
//! internal representation those shapes are adapted into.
//!
//! # Example
//!
//! ```rust
//! use teller_core::types::User;
//!
//! // A user that has not been persisted yet (no server-assigned id)
//! let user = User::new("Alice Example", "alice", "alice@example.com");
//! assert_eq!(user.id, 0);
//! ```

#![forbid(unsafe_code)]

pub mod types;

// Re-export commonly used types
pub use types::User;
