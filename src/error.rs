use thiserror::Error;

/// Any failed search request: transport error, non-2xx status or a body
/// that does not decode. Callers never branch on the cause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchFailure {
    message: String,
}

impl FetchFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn transport(err: &reqwest::Error) -> Self {
        Self::new(format!("request failed: {err}"))
    }

    pub fn status(status: reqwest::StatusCode) -> Self {
        Self::new(format!("search API responded with {status}"))
    }

    pub fn decode(err: &serde_json::Error) -> Self {
        Self::new(format!("malformed search response: {err}"))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
