use thiserror::Error;

/// Failures surfaced by [`crate::TaskClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to task service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("task service returned an unreadable body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("api base {0} cannot host the tasks endpoint")]
    Endpoint(String),
}

impl ClientError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, ClientError::Decode(_))
    }
}
