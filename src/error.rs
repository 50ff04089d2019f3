use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A typed token that maps to no calculator key. `position` is a byte
    /// offset into the line.
    #[error("Unrecognised input `{token}`")]
    UnknownToken { token: String, position: usize },

    #[error("Unknown command `:{0}`, try :help")]
    UnknownCommand(String),

    #[error("Unknown theme `{0}`, expected light or dark")]
    UnknownTheme(String),

    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Line editor failed: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("Terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
