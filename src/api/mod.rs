//! External collaborators: track catalog data and the identity provider.

pub mod auth;
pub mod catalog;
pub mod models;

pub use auth::*;
pub use catalog::*;
pub use models::*;
