use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum FilterError {
    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("Invalid keyword: {0}")]
    InvalidKeyword(String),

    #[error("Invalid blocklist source: {0}")]
    InvalidBlocklistSource(String),

    #[error("Blocklist source not found: {0}")]
    SourceNotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out fetching {url}")]
    Timeout { url: String },

    #[error("Response too small ({bytes} bytes) from {url}")]
    TruncatedResponse { url: String, bytes: usize },

    #[error("No valid domains parsed from {0}")]
    EmptyBlocklist(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Cloud authentication failed: {0}")]
    CloudAuth(String),

    #[error("Cloud sync failed: {0}")]
    CloudSync(String),

    #[error("A blocklist update is already in progress")]
    UpdateInProgress,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),
}
