use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Notes file {} could not be parsed: {message}", path.display())]
    NotesParse { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
