use std::fs;
use std::path::Path;

use crate::error::ScrapeError;

/// Read a secret mounted as a file, e.g. `/run/secrets/db_name`.
/// Trailing whitespace (the usual newline) is dropped.
pub fn read_secret(dir: &Path, name: &str) -> Result<String, ScrapeError> {
    let path = dir.join(name);
    match fs::read_to_string(&path) {
        Ok(contents) => Ok(contents.trim_end().to_string()),
        Err(e) => Err(ScrapeError::Config(format!(
            "Failed to read secret {}: {}",
            path.display(),
            e
        ))),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoCredentials {
    pub username: String,
    pub password: String,
    pub database: String,
}

impl MongoCredentials {
    pub fn from_secrets(dir: &Path) -> Result<MongoCredentials, ScrapeError> {
        Ok(MongoCredentials {
            username: read_secret(dir, "db_username")?,
            password: read_secret(dir, "db_password")?,
            database: read_secret(dir, "db_name")?,
        })
    }

    pub fn connection_url(&self, host: &str, port: u16) -> String {
        format!(
            "mongodb://{}:{}@{}:{}/{}",
            self.username, self.password, host, port, self.database
        )
    }
}
