use thiserror::Error;

/// Everything that can go wrong while scraping one (city, week) combination.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("availability request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to decode availability response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed parsing {value:?} as a date: {reason}")]
    DateParse { value: String, reason: String },

    #[error("calendar arithmetic failed: {0}")]
    Calendar(#[from] jiff::Error),

    #[error("database operation failed: {0}")]
    Persistence(#[from] mongodb::error::Error),

    #[error("{0}")]
    Config(String),
}
