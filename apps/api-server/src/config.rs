//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use blog_infra::database::MongoConfig;
use blog_infra::github::{DEFAULT_GITHUB_API_URL, GithubConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Prebuilt frontend bundle served for non-API paths.
    pub static_dir: PathBuf,
    /// `None` runs the post routes against an in-memory store.
    pub database: Option<MongoConfig>,
    /// `None` leaves the GitHub proxy route answering 404.
    pub github: Option<GithubConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let database = var("MONGODB_URI")
            .filter(|uri| !uri.trim().is_empty())
            .map(|uri| MongoConfig {
                uri,
                database: var("MONGODB_DATABASE"),
                timeout: Duration::from_secs(parse_or(&var, "MONGODB_TIMEOUT_SECS", 10)),
            });

        let github = var("GITHUB_USERNAME")
            .filter(|name| !name.trim().is_empty())
            .map(|username| GithubConfig {
                api_url: var("GITHUB_API_URL")
                    .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
                username,
                timeout: Duration::from_secs(parse_or(&var, "GITHUB_TIMEOUT_SECS", 10)),
            });

        Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&var, "PORT", 3000),
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("../client/build")),
            database,
            github,
        }
    }
}

fn parse_or<T: FromStr>(var: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    var(key).and_then(|s| s.parse().ok()).unwrap_or(default)
}
