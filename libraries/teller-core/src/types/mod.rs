//! Domain types for Teller.

mod user;

pub use user::User;
