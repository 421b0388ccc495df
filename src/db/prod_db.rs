use std::env;
use std::path::PathBuf;

use crate::db::indiecampers::catalog::AVAILABILITY_URL;
use crate::error::ScrapeError;
use crate::utils::secrets::MongoCredentials;

/// Where the IndieCampers prices come from and where they go.
#[derive(Debug, Clone, PartialEq)]
pub struct IndieCampersSettings {
    pub availability_url: String,
    pub secrets_dir: PathBuf,
    pub mongo_host: String,
    pub mongo_port: u16,
}

impl IndieCampersSettings {
    pub fn credentials(&self) -> Result<MongoCredentials, ScrapeError> {
        MongoCredentials::from_secrets(&self.secrets_dir)
    }

    pub fn connection_url(&self, credentials: &MongoCredentials) -> String {
        credentials.connection_url(&self.mongo_host, self.mongo_port)
    }
}

pub struct ProdDb {}

impl ProdDb {
    /// Read from the environment (usually loaded from `.env/<env>.env`), with
    /// the docker compose layout as the default.
    pub fn indiecampers_prices() -> Result<IndieCampersSettings, ScrapeError> {
        let mongo_port = match env::var("MONGO_PORT") {
            Ok(port) => port
                .parse::<u16>()
                .map_err(|e| ScrapeError::Config(format!("Invalid MONGO_PORT {}: {}", port, e)))?,
            Err(_) => 27017,
        };
        Ok(IndieCampersSettings {
            availability_url: env::var("INDIECAMPERS_URL")
                .unwrap_or_else(|_| AVAILABILITY_URL.to_string()),
            secrets_dir: PathBuf::from(
                env::var("SECRETS_DIR").unwrap_or_else(|_| "/run/secrets".to_string()),
            ),
            mongo_host: env::var("MONGO_HOST").unwrap_or_else(|_| "mongo".to_string()),
            mongo_port,
        })
    }
}
