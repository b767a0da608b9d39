use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FolioError {
    #[error("invalid parallax speed {0:?}")]
    InvalidParallaxSpeed(String),
    #[error("unknown time zone {0:?}")]
    UnknownTimeZone(String),
    #[error("preference storage unavailable: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
