//! Teller Users Client
//!
//! HTTP client and remote repository for the Teller users API.
//!
//! # Features
//!
//! - **Typed endpoints**: list, get-by-id, create, update, delete over
//!   `/users`, one DTO per wire shape
//! - **Capability seam**: the [`UsersApi`] trait so consumers and tests can
//!   substitute the transport
//! - **Optional-result repository**: [`UserRemoteRepository`] adapts DTOs
//!   into [`teller_core::User`] and collapses every failure into `None`
//!
//! # Example
//!
//! ```ignore
//! use teller_users_client::{ClientConfig, UserRemoteRepository, UsersClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = UsersClient::new(ClientConfig::new("https://api.example.com"))?;
//!     let repository = UserRemoteRepository::new(client);
//!
//!     // None means "not found or unreachable" - the repository does not say which
//!     match repository.get_by_id(1).await {
//!         Some(user) => println!("Found {}", user.name),
//!         None => println!("No user"),
//!     }
//!
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod error;
mod repository;
mod types;

// Re-export main types
pub use api::UsersApi;
pub use client::UsersClient;
pub use error::{Result, UsersClientError};
pub use repository::UserRemoteRepository;
pub use types::{ClientConfig, UserDetail, UserListItem, UserWriteRequest, UserWriteResponse};
