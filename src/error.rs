use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("start delimiter must not be empty")]
    EmptyStartDelimiter,
    #[error("end delimiter must not be empty")]
    EmptyEndDelimiter,
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
