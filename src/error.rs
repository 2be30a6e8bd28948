use axum::http::header::InvalidHeaderValue;

/// The main error type for web-essentials
#[derive(Debug, thiserror::Error)]
pub enum EssentialsError {
    /// A string did not name any value of the header's closed value set
    #[error("Unrecognized {header} value: {value:?}")]
    UnrecognizedValue {
        header: &'static str,
        value: String,
    },

    #[error("Static file max-age must be greater than 0 seconds")]
    InvalidMaxAge,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
}

impl EssentialsError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn unrecognized(header: &'static str, value: impl Into<String>) -> Self {
        Self::UnrecognizedValue {
            header,
            value: value.into(),
        }
    }
}

/// Result type alias for web-essentials operations
pub type Result<T> = std::result::Result<T, EssentialsError>;
