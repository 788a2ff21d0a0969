//! MongoDB repository implementation.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::error::{Error as MongoError, ErrorKind};

use blog_core::domain::{NewPost, Post, PostId};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, Page, PostRepository};

use super::connections::MongoConnection;
use super::document::PostDocument;

/// Collection holding blog posts.
pub const POSTS_COLLECTION: &str = "blogposts";

/// MongoDB post repository.
pub struct MongoPostRepository {
    conn: MongoConnection,
    posts: Collection<PostDocument>,
}

impl MongoPostRepository {
    pub fn new(conn: MongoConnection) -> Self {
        let posts = conn.database().collection(POSTS_COLLECTION);
        Self { conn, posts }
    }
}

/// Ids that are not ObjectIds can never match a stored post.
fn parse_id(id: &PostId) -> Option<ObjectId> {
    match ObjectId::parse_str(id.as_str()) {
        Ok(oid) => Some(oid),
        Err(_) => {
            tracing::debug!(post_id = %id, "Malformed post id");
            None
        }
    }
}

fn store_error(err: MongoError) -> RepoError {
    match *err.kind {
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
            RepoError::Connection(err.to_string())
        }
        _ => RepoError::Query(err.to_string()),
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for MongoPostRepository {
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, RepoError> {
        let Some(oid) = parse_id(id) else {
            return Ok(None);
        };

        let result = self
            .posts
            .find_one(doc! { "_id": oid })
            .await
            .map_err(store_error)?;

        result.map(Post::try_from).transpose()
    }

    async fn delete(&self, id: &PostId) -> Result<Option<Post>, RepoError> {
        let Some(oid) = parse_id(id) else {
            return Ok(None);
        };

        let removed = self
            .posts
            .find_one_and_delete(doc! { "_id": oid })
            .await
            .map_err(store_error)?;

        if removed.is_some() {
            tracing::debug!(post_id = %oid, "Post deleted");
        }

        removed.map(Post::try_from).transpose()
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let oid = ObjectId::new();
        let document = PostDocument::from_post(oid, &post.into_post(PostId::new(oid.to_hex())));

        self.posts
            .insert_one(&document)
            .await
            .map_err(store_error)?;
        tracing::debug!(post_id = %oid, title = %document.title, "Post inserted");

        // Return what was stored: BSON dates carry millisecond precision.
        Post::try_from(document)
    }

    async fn list(&self, page: Page) -> Result<Vec<Post>, RepoError> {
        let mut find = self.posts.find(doc! {}).sort(doc! { "date": -1 });
        if page.offset > 0 {
            find = find.skip(page.offset);
        }
        if let Some(limit) = page.limit {
            find = find.limit(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        let documents: Vec<PostDocument> = find
            .await
            .map_err(store_error)?
            .try_collect()
            .await
            .map_err(store_error)?;

        documents.into_iter().map(Post::try_from).collect()
    }

    async fn shutdown(&self) {
        self.conn.shutdown().await;
    }
}
