use thiserror::Error;

#[derive(Error, Debug)]
pub enum DexError {
    #[error("network error: {0}")]
    Network(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("API error: {endpoint} returned HTTP {status}")]
    Api { status: u16, endpoint: String },

    #[error("invalid sort key '{0}', expected one of: id, name, height, weight")]
    InvalidSortKey(String),

    #[error("invalid view mode '{0}', expected 'all' or 'favorites'")]
    InvalidViewMode(String),

    #[error("invalid theme '{0}', expected 'dark' or 'light'")]
    InvalidTheme(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl DexError {
    /// Whether re-issuing the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            DexError::Network(_) => true,
            DexError::Api { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, DexError>;
