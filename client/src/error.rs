use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Communication failure: {0}")]
    Communication(String),
    #[error("{0} not found in registry")]
    NotBound(String),
    #[error("Server rejected the call ({status}): {message}")]
    Rejected { status: u16, message: String },
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Communication(e.to_string())
    }
}
