use thiserror::Error;

/// Failures at the configuration boundary. The simulation itself never fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown toggle `{0}`")]
    UnknownToggle(String),
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}
