use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid dataset: {0}")]
    Dataset(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Geolocation failed: {0}")]
    Geolocation(#[from] GeolocationError),
}

/// Failure modes of the platform location query.
/// Messages are meant to be shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("Location permission was denied")]
    PermissionDenied,

    #[error("Location is unavailable: {0}")]
    Unavailable(String),

    #[error("Location request timed out after {0}s")]
    Timeout(u64),

    #[error("Geolocation is not supported on this platform")]
    Unsupported,
}

pub type Result<T> = std::result::Result<T, AppError>;
