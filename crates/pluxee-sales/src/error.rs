use thiserror::Error;

#[derive(Debug, Error)]
pub enum SalesError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("authentication rejected (status {status})")]
    Auth { status: u16 },

    #[error("sales listing failed (status {status})")]
    Listing { status: u16 },

    #[error("unexpected response shape: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, SalesError>;
