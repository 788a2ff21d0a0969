//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::{PostRepository, RepoCatalog};
use blog_infra::database::{InMemoryPostRepository, MongoConfig};
use blog_infra::github::GithubCatalog;

#[cfg(feature = "mongodb")]
use blog_infra::database::{MongoConnection, MongoPostRepository, UnavailablePostRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    /// Absent when the GitHub proxy is not configured.
    pub repos: Option<Arc<dyn RepoCatalog>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let posts = init_posts(config.database.as_ref()).await;

        let repos: Option<Arc<dyn RepoCatalog>> = match &config.github {
            Some(github) => match GithubCatalog::new(github) {
                Ok(catalog) => Some(Arc::new(catalog)),
                Err(e) => {
                    tracing::error!("Failed to build GitHub client: {}. Proxy disabled.", e);
                    None
                }
            },
            None => {
                tracing::info!("GITHUB_USERNAME not set. GitHub proxy disabled.");
                None
            }
        };

        tracing::info!("Application state initialized");

        Self::with_parts(posts, repos)
    }

    /// Assemble state from already-built collaborators.
    pub fn with_parts(
        posts: Arc<dyn PostRepository>,
        repos: Option<Arc<dyn RepoCatalog>>,
    ) -> Self {
        Self { posts, repos }
    }

    /// Release the store connection.
    pub async fn shutdown(&self) {
        self.posts.shutdown().await;
    }
}

#[cfg(feature = "mongodb")]
async fn init_posts(db_config: Option<&MongoConfig>) -> Arc<dyn PostRepository> {
    let Some(config) = db_config else {
        tracing::warn!("MONGODB_URI not set. Running without database (in-memory mode).");
        return Arc::new(InMemoryPostRepository::new());
    };

    match MongoConnection::init(config).await {
        Ok(conn) => Arc::new(MongoPostRepository::new(conn)),
        Err(e) => {
            tracing::error!(
                "Failed to set up MongoDB client: {}. Post routes will report errors.",
                e
            );
            Arc::new(UnavailablePostRepository::new(e.to_string()))
        }
    }
}

#[cfg(not(feature = "mongodb"))]
async fn init_posts(db_config: Option<&MongoConfig>) -> Arc<dyn PostRepository> {
    if db_config.is_some() {
        tracing::warn!("Built without mongodb feature - MONGODB_URI ignored");
    }
    tracing::info!("Using in-memory post repository");
    Arc::new(InMemoryPostRepository::new())
}
