use reqwest::StatusCode;
use thiserror::Error;

pub type RetrievalResult<T> = Result<T, RetrievalError>;

/// Every way a directory retrieval can fail. All variants are treated the
/// same by the view: logged, never surfaced as an error to the caller.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("malformed directory document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("retrieval cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for RetrievalError {
    fn from(value: reqwest::Error) -> Self {
        match value.status() {
            Some(status) => Self::Status(status),
            None => Self::Transport(value),
        }
    }
}
