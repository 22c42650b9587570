use thiserror::Error;

pub type Result<T> = std::result::Result<T, PublishError>;

#[derive(Error, Debug)]
pub enum PublishError {
    /// The host document has no metadata region (`<head>`) to attach to.
    #[error("document environment unavailable: {0}")]
    EnvironmentUnavailable(String),

    #[error("failed to encode descriptor: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PublishError {
    pub fn is_environment_unavailable(&self) -> bool {
        matches!(self, PublishError::EnvironmentUnavailable(_))
    }
}
