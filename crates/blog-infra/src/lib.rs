//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`:
//! the MongoDB post store, an in-memory post store, and the GitHub repository catalog.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No document store driver, in-memory only
//! - `mongodb` - MongoDB persistence via the official driver

pub mod database;
pub mod github;

// Re-exports
pub use database::{InMemoryPostRepository, MongoConfig, UnavailablePostRepository};
pub use github::{GithubCatalog, GithubConfig};

#[cfg(feature = "mongodb")]
pub use database::{MongoConnection, MongoPostRepository};
