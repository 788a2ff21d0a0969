use std::time::Duration;

#[cfg(feature = "mongodb")]
use mongodb::{Client, Database, bson::doc, options::ClientOptions};

/// Database used when neither the configuration nor the URI names one.
pub const DEFAULT_DATABASE: &str = "test";

/// Configuration for the document store.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// Connection string, e.g. `mongodb://localhost:27017/blog`.
    pub uri: String,
    /// Overrides the database named in the URI.
    pub database: Option<String>,
    /// Bound on connecting and on selecting a server for each operation.
    pub timeout: Duration,
}

/// Handle to a MongoDB deployment.
///
/// The driver pools connections internally; clones share the pool.
#[cfg(feature = "mongodb")]
#[derive(Debug, Clone)]
pub struct MongoConnection {
    client: Client,
    db: Database,
}

#[cfg(feature = "mongodb")]
impl MongoConnection {
    /// Build the client from configuration and check that the server answers.
    ///
    /// Only an unusable connection string is an error. An unreachable server is
    /// logged and the handle is returned anyway, so each request fails on its own
    /// until the server comes up.
    pub async fn init(config: &MongoConfig) -> Result<Self, mongodb::error::Error> {
        tracing::info!("Initializing MongoDB connection...");

        let mut options = ClientOptions::parse(&config.uri).await?;
        options.connect_timeout = Some(config.timeout);
        options.server_selection_timeout = Some(config.timeout);
        options
            .app_name
            .get_or_insert_with(|| "blog-api-server".to_string());

        let db_name = config
            .database
            .clone()
            .or_else(|| options.default_database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let client = Client::with_options(options)?;
        let conn = Self {
            db: client.database(&db_name),
            client,
        };

        match conn.ping().await {
            Ok(()) => tracing::info!(database = %db_name, "Connected to MongoDB"),
            Err(e) => tracing::error!(
                database = %db_name,
                error = %e,
                "Could not reach MongoDB, requests will fail until it is available"
            ),
        }

        Ok(conn)
    }

    /// Round-trip a `ping` command to the server.
    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Close pooled connections and stop background monitoring.
    pub async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("MongoDB connection closed");
    }
}
