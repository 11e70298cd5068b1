use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot locate the running executable: {0}")]
    CurrentExe(#[source] std::io::Error),

    #[error("executable path has no usable file name: {}", .0.display())]
    NoToolName(PathBuf),

    #[error("failed to launch {cmd}: {source}")]
    CommandFailed { cmd: String, source: std::io::Error },
}
