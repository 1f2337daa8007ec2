use thiserror::Error;

/// Errors raised while parsing textual timestamps
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MicrotimeError {
    #[error("Unable to parse string \"{0}\"")]
    InvalidFormat(String),
}

pub type MicrotimeResult<T> = std::result::Result<T, MicrotimeError>;
