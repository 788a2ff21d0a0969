//! In-memory post store - used when no document store is configured, and in tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{NewPost, Post, PostId};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, Page, PostRepository};

/// In-memory post store backed by a `Vec` behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for InMemoryPostRepository {
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| &p.id == id).cloned())
    }

    async fn delete(&self, id: &PostId) -> Result<Option<Post>, RepoError> {
        let mut posts = self.posts.write().await;
        Ok(posts
            .iter()
            .position(|p| &p.id == id)
            .map(|idx| posts.remove(idx)))
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let id = PostId::new(Uuid::new_v4().simple().to_string());
        tracing::debug!(post_id = %id, title = %post.title(), "Storing post in memory");

        let post = post.into_post(id);
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn list(&self, page: Page) -> Result<Vec<Post>, RepoError> {
        let mut posts = self.posts.read().await.clone();
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        let offset = usize::try_from(page.offset).unwrap_or(usize::MAX);
        let limit = page
            .limit
            .map_or(usize::MAX, |l| usize::try_from(l).unwrap_or(usize::MAX));

        Ok(posts.into_iter().skip(offset).take(limit).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::domain::PostDraft;
    use chrono::{Duration, Utc};

    fn new_post(title: &str, days_ago: i64) -> NewPost {
        PostDraft {
            title: Some(title.to_string()),
            summary: Some("summary".to_string()),
            content: Some("content".to_string()),
            date: Some(Utc::now() - Duration::days(days_ago)),
            ..Default::default()
        }
        .validate()
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(new_post("first", 0)).await.unwrap();

        let found = repo.find_by_id(&created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let repo = InMemoryPostRepository::new();
        repo.create(new_post("old", 3)).await.unwrap();
        repo.create(new_post("new", 0)).await.unwrap();
        repo.create(new_post("mid", 1)).await.unwrap();

        let titles: Vec<String> = repo
            .list(Page::default())
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["new", "mid", "old"]);
    }

    #[tokio::test]
    async fn test_list_window() {
        let repo = InMemoryPostRepository::new();
        for (title, days) in [("a", 0), ("b", 1), ("c", 2), ("d", 3)] {
            repo.create(new_post(title, days)).await.unwrap();
        }

        let page = repo.list(Page::new(1, Some(2))).await.unwrap();
        let titles: Vec<&str> = page.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["b", "c"]);

        assert!(repo.list(Page::new(10, None)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(new_post("gone", 0)).await.unwrap();

        assert_eq!(repo.delete(&created.id).await.unwrap(), Some(created.clone()));
        assert_eq!(repo.delete(&created.id).await.unwrap(), None);
        assert_eq!(repo.find_by_id(&created.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unknown_id_is_absent() {
        let repo = InMemoryPostRepository::new();
        assert_eq!(
            repo.find_by_id(&PostId::new("not-an-id")).await.unwrap(),
            None
        );
    }
}
