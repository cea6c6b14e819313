//! Abstractions of all remote services and the local device storage.

use thiserror::Error;

pub mod backend;
pub mod geocode;
pub mod routing;
pub mod storage;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("{0}")]
    Remote(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
