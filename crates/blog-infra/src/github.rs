//! GitHub repository catalog - lists a fixed account's public repositories.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;

use blog_core::ports::{RepoCatalog, UpstreamError};

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// GitHub client configuration.
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// API base URL, without trailing slash.
    pub api_url: String,
    /// Account whose repositories are listed.
    pub username: String,
    /// Whole-request timeout for the upstream call.
    pub timeout: Duration,
}

/// Unauthenticated client for `GET /users/{username}/repos`.
pub struct GithubCatalog {
    client: reqwest::Client,
    repos_url: String,
}

impl GithubCatalog {
    pub fn new(config: &GithubConfig) -> Result<Self, UpstreamError> {
        // GitHub rejects requests without a User-Agent.
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("blog-api-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        let repos_url = format!(
            "{}/users/{}/repos",
            config.api_url.trim_end_matches('/'),
            config.username
        );

        tracing::info!(url = %repos_url, "GitHub catalog configured");

        Ok(Self { client, repos_url })
    }
}

#[async_trait]
impl RepoCatalog for GithubCatalog {
    async fn list_repos(&self) -> Result<serde_json::Value, UpstreamError> {
        let response = self
            .client
            .get(&self.repos_url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Answer one HTTP request with a canned response; yields the raw request head.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut chunk = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&chunk[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            String::from_utf8_lossy(&head).into_owned()
        });

        (format!("http://{addr}"), handle)
    }

    fn config(api_url: String) -> GithubConfig {
        GithubConfig {
            api_url,
            username: "octocat".to_string(),
            timeout: Duration::from_secs(2),
        }
    }

    #[tokio::test]
    async fn test_list_repos_passes_body_through() {
        let (url, server) = serve_once("200 OK", r#"[{"name":"hello-world","fork":false}]"#).await;
        let catalog = GithubCatalog::new(&config(url)).unwrap();

        let repos = catalog.list_repos().await.unwrap();
        assert_eq!(repos[0]["name"], "hello-world");
        assert_eq!(repos[0]["fork"], false);

        let head = server.await.unwrap();
        assert!(head.starts_with("GET /users/octocat/repos HTTP/1.1"));
        assert!(head.to_lowercase().contains("user-agent: blog-api-server/"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let (url, _server) = serve_once("404 Not Found", r#"{"message":"Not Found"}"#).await;
        let catalog = GithubCatalog::new(&config(url)).unwrap();

        assert!(matches!(
            catalog.list_repos().await,
            Err(UpstreamError::Status(404))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_error() {
        // Bind then drop to get a port nothing listens on.
        let addr = TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap()
            .local_addr()
            .unwrap();
        let catalog = GithubCatalog::new(&config(format!("http://{addr}"))).unwrap();

        assert!(matches!(
            catalog.list_repos().await,
            Err(UpstreamError::Request(_))
        ));
    }
}
