//! Post storage backends and connection management.

mod connections;
mod memory;
mod unavailable;

#[cfg(feature = "mongodb")]
mod document;
#[cfg(feature = "mongodb")]
pub mod mongo_repo;

pub use connections::{DEFAULT_DATABASE, MongoConfig};
pub use memory::InMemoryPostRepository;
pub use unavailable::UnavailablePostRepository;

#[cfg(feature = "mongodb")]
pub use connections::MongoConnection;
#[cfg(feature = "mongodb")]
pub use mongo_repo::MongoPostRepository;

#[cfg(feature = "mongodb")]
#[cfg(test)]
mod tests;
