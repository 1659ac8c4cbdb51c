use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    /// A field failed validation. The message is the human-readable reason
    /// surfaced to API clients, e.g. "Level must be a number.".
    #[error("{0}")]
    Validation(String),
}
