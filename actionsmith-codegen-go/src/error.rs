use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for registry operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(actionsmith::io_error),
        help("run actionsmith from the bot repository root, or pass --root")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(actionsmith::io_error))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("anchor line {marker:?} not found in '{path}'")]
    #[diagnostic(
        code(actionsmith::anchor_not_found),
        help(
            "the registry must contain a 'var actions = Actions{{' line followed by a closing '}}' line, each on its own line with no surrounding whitespace"
        )
    )]
    AnchorNotFound { path: PathBuf, marker: String },
}

impl Error {
    /// Create a read error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a write error for the given path
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Write {
            path: path.into(),
            source,
        })
    }

    /// Create an anchor-not-found error for the given marker line
    pub fn anchor_not_found(path: impl Into<PathBuf>, marker: impl Into<String>) -> Box<Self> {
        Box::new(Error::AnchorNotFound {
            path: path.into(),
            marker: marker.into(),
        })
    }
}
