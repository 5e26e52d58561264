use thiserror::Error;

/// Errors surfaced by the OpenAI client.
#[derive(Debug, Clone, Error)]
pub enum OpenAiError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("http {status}: {body}")]
    Http { status: u16, body: String },

    #[error("invalid api key")]
    InvalidApiKey,

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl OpenAiError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OpenAiError::Timeout
        } else {
            OpenAiError::Transport(err.to_string())
        }
    }
}
