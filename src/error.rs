use thiserror::Error;

pub type Result<T> = std::result::Result<T, FeedError>;

// Error types for fetching and mapping the review feed
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Network error fetching {url}: {source}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} fetching {url}")]
    HttpError { status: u16, url: String },

    #[error("XML parse error: {0}")]
    XmlParseError(String),

    #[error("Schema error: {0}")]
    SchemaError(String),

    #[error("Invalid date in {field}: {value:?}")]
    DateFormatError { field: &'static str, value: String },

    #[error("Invalid number in {field}: {value:?}")]
    FormatError { field: &'static str, value: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Initialization error: {0}")]
    InitError(String),
}
