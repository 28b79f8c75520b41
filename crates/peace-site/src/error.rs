//! Site errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<peace_core::CoreError> for SiteError {
    fn from(err: peace_core::CoreError) -> Self {
        SiteError::Config(err.to_string())
    }
}

pub type SiteResult<T> = Result<T, SiteError>;
