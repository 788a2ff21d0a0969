use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId};
use crate::error::RepoError;

/// Generic repository trait for keyed lookup and removal.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    ///
    /// An ID the backend cannot parse is treated as absent.
    async fn find_by_id(&self, id: &ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID, returning the removed entity if there was one.
    async fn delete(&self, id: &ID) -> Result<Option<T>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    /// Persist a validated post and return it with its assigned id.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// List posts, most recent `date` first.
    async fn list(&self, page: Page) -> Result<Vec<Post>, RepoError>;

    /// Release backend resources. Called once when the server stops.
    async fn shutdown(&self) {}
}

/// Window over the date-ordered post list. The default covers every post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub offset: u64,
    pub limit: Option<u64>,
}

impl Page {
    pub fn new(offset: u64, limit: Option<u64>) -> Self {
        Self { offset, limit }
    }
}
