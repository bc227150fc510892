use thiserror::Error;

/// Failures talking to the content API.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The request never produced a response.
    #[error("content api transport error: {0}")]
    Transport(String),
    /// The API answered with a non-success status.
    #[error("content api returned {status} for {url}")]
    Http { status: u16, url: String },
    /// The response body was not the expected JSON.
    #[error("content api response could not be decoded: {0}")]
    Decode(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
