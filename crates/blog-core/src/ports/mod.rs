//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod catalog;
mod repository;

pub use catalog::{RepoCatalog, UpstreamError};
pub use repository::{BaseRepository, Page, PostRepository};
