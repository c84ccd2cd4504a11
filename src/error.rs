use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarvestError>;

/// Everything that can abort a harvest run. Nothing here is retried.
#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned http status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("invalid json from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("response from {url} has no `{field}` field")]
    MissingField { url: String, field: &'static str },

    #[error("product identifier is not a valid url: {id}")]
    InvalidUrl {
        id: String,
        #[source]
        source: url::ParseError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
