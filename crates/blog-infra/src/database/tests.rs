#[cfg(test)]
mod tests {
    use std::panic::AssertUnwindSafe;
    use std::time::Duration;

    use futures::FutureExt;

    use blog_core::domain::{PostDraft, PostId};
    use blog_core::ports::{BaseRepository, Page, PostRepository};

    use crate::database::connections::{MongoConfig, MongoConnection};
    use crate::database::mongo_repo::MongoPostRepository;

    /// Connect to a throwaway database, or `None` when no server is reachable.
    async fn get_test_repo() -> Option<(MongoPostRepository, MongoConnection)> {
        let config = MongoConfig {
            uri: std::env::var("MONGODB_TEST_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database: Some(format!("blog_test_{}", uuid::Uuid::new_v4().simple())),
            timeout: Duration::from_secs(1),
        };

        let conn = MongoConnection::init(&config).await.ok()?;
        conn.ping().await.ok()?;
        Some((MongoPostRepository::new(conn.clone()), conn))
    }

    /// Drop the throwaway database, then re-raise any assertion failure.
    async fn finish(conn: MongoConnection, outcome: std::thread::Result<()>) {
        conn.database().drop().await.unwrap();
        if let Err(panic) = outcome {
            std::panic::resume_unwind(panic);
        }
    }

    #[tokio::test]
    async fn test_mongo_post_lifecycle() {
        let (repo, conn) = match get_test_repo().await {
            Some(r) => r,
            None => {
                tracing::warn!("MongoDB not available, skipping test");
                return;
            }
        };

        let outcome = AssertUnwindSafe(async {
            let draft = PostDraft {
                title: Some("Test Post".to_string()),
                summary: Some("Summary".to_string()),
                content: Some("Content".to_string()),
                ..Default::default()
            };
            let created = repo.create(draft.validate().unwrap()).await.unwrap();
            assert_eq!(created.id.as_str().len(), 24);

            let found = repo.find_by_id(&created.id).await.unwrap();
            assert_eq!(found.as_ref(), Some(&created));

            let listed = repo.list(Page::default()).await.unwrap();
            assert_eq!(listed, vec![created.clone()]);

            assert_eq!(repo.delete(&created.id).await.unwrap(), Some(created.clone()));
            assert_eq!(repo.delete(&created.id).await.unwrap(), None);
        })
        .catch_unwind()
        .await;

        finish(conn, outcome).await;
    }

    #[tokio::test]
    async fn test_mongo_malformed_id_is_absent() {
        let (repo, conn) = match get_test_repo().await {
            Some(r) => r,
            None => return,
        };

        let outcome = AssertUnwindSafe(async {
            let id = PostId::new("definitely-not-an-object-id");
            assert_eq!(repo.find_by_id(&id).await.unwrap(), None);
            assert_eq!(repo.delete(&id).await.unwrap(), None);
        })
        .catch_unwind()
        .await;

        finish(conn, outcome).await;
    }
}
