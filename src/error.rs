use thiserror::Error;

/// Everything that can go wrong between tapping the screen and seeing a fact.
#[derive(Debug, Error)]
pub enum Error {
    #[error("connection failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status; carries the status line, e.g. "404 Not Found".
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("could not parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The API answered with valid JSON but a status other than "success".
    #[error("response status is not success: {0}")]
    Status(String),
}
