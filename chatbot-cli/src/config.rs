//! App config: rule database and log file. Loaded from env.

use anyhow::Result;
use std::env;

/// Default rule database; a file next to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./autoreply.db";
pub const DEFAULT_LOG_FILE: &str = "logs/autoreply.log";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// DATABASE_URL
    pub database_url: String,
    /// LOG_FILE
    pub log_file: String,
}

impl AppConfig {
    /// Load from environment variables. `database_url` overrides DATABASE_URL if provided.
    pub fn load(database_url: Option<String>) -> Result<Self> {
        let database_url = database_url
            .or_else(|| env::var("DATABASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            database_url,
            log_file,
        })
    }

    /// Only SQLite URLs are supported.
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must be a sqlite: URL (e.g. {}), got: {}",
                DEFAULT_DATABASE_URL,
                self.database_url
            );
        }
        if self.log_file.trim().is_empty() {
            anyhow::bail!("LOG_FILE is set but empty");
        }
        Ok(())
    }
}
