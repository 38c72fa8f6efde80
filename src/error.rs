use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown set kind ({0})")]
    UnknownKind(String),
    #[error("malformed config ({0})")]
    ConfigError(#[from] serde_json::Error),
    #[error("io error ({0})")]
    IoError(#[from] io::Error),
}

impl From<Error> for io::Error {
    fn from(e: Error) -> Self {
        match e {
            Error::IoError(e) => e,
            Error::UnknownKind(_) => Self::new(io::ErrorKind::InvalidInput, e),
            Error::ConfigError(_) => Self::new(io::ErrorKind::InvalidData, e),
        }
    }
}
