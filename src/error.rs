use thiserror::Error;

/// Failure classes shared by the import pipeline and the link codec.
///
/// The import API maps these onto a small fixed set of user-facing responses
/// and never leaks parser internals, so the variants carry only what a caller
/// needs to pick a message: which class of thing went wrong.
#[derive(Error, Debug)]
pub enum MixtapeError {
    /// Source page unreachable, missing, or served a non-success status.
    #[error("playlist not found")]
    NotFound,
    /// No inline script block matched the expected page-properties shape.
    #[error("could not parse playlist data")]
    Unparseable,
    /// The playlist exists but carries zero usable tracks.
    #[error("playlist is empty")]
    EmptyResult,
    /// Malformed playlist identifier or malformed link token.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Transport-level failure outside the fixed taxonomy.
    #[error("http error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for MixtapeError {
    fn from(e: reqwest::Error) -> Self {
        MixtapeError::Http(e.to_string())
    }
}

impl From<serde_json::Error> for MixtapeError {
    fn from(_: serde_json::Error) -> Self {
        MixtapeError::Unparseable
    }
}
