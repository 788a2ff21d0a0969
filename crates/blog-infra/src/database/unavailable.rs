//! Store used when the configured database cannot be set up at all.

use async_trait::async_trait;

use blog_core::domain::{NewPost, Post, PostId};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, Page, PostRepository};

/// Fails every operation with the reason the real store could not be built.
///
/// Keeps the server up so that the liveness route, the frontend and the GitHub
/// proxy still work while post routes report a server error.
pub struct UnavailablePostRepository {
    reason: String,
}

impl UnavailablePostRepository {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> RepoError {
        RepoError::Connection(self.reason.clone())
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for UnavailablePostRepository {
    async fn find_by_id(&self, _id: &PostId) -> Result<Option<Post>, RepoError> {
        Err(self.error())
    }

    async fn delete(&self, _id: &PostId) -> Result<Option<Post>, RepoError> {
        Err(self.error())
    }
}

#[async_trait]
impl PostRepository for UnavailablePostRepository {
    async fn create(&self, _post: NewPost) -> Result<Post, RepoError> {
        Err(self.error())
    }

    async fn list(&self, _page: Page) -> Result<Vec<Post>, RepoError> {
        Err(self.error())
    }
}
