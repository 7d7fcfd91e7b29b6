use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreetError {
    #[error("Reading input failed: {0}")]
    Read(#[source] io::Error),
    #[error("Writing output failed: {0}")]
    Write(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, GreetError>;
