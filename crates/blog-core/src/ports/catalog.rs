//! Repository catalog port - listing of a code host account's public repositories.

use async_trait::async_trait;

/// Read-only view of a code host's repository listing.
#[async_trait]
pub trait RepoCatalog: Send + Sync {
    /// Fetch the repository list as the upstream returned it.
    async fn list_repos(&self) -> Result<serde_json::Value, UpstreamError>;
}

/// Upstream call failures.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Upstream responded with status {0}")]
    Status(u16),

    #[error("Invalid upstream body: {0}")]
    Decode(String),
}
