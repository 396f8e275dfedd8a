//! Data document transport.
//!
//! # Responsibility
//! - Fetch the raw portfolio document text from its origin.
//! - Map transport failures into `LoadError::Transport`.
//!
//! # Invariants
//! - A source performs exactly one read per `fetch` call; no retry.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Result type for project store loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Failure while loading the project store.
#[derive(Debug)]
pub enum LoadError {
    /// The document could not be fetched from its origin.
    Transport { origin: String, message: String },
    /// The payload is not well-formed JSON, or has the wrong shape.
    Parse(serde_json::Error),
    /// The payload is valid JSON but not a top-level object.
    NotAnObject,
    /// Two projects share the same id.
    DuplicateId(String),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport { origin, message } => {
                write!(f, "failed to fetch `{origin}`: {message}")
            }
            Self::Parse(err) => write!(f, "invalid data format received: {err}"),
            Self::NotAnObject => write!(f, "invalid data format received: expected an object"),
            Self::DuplicateId(id) => write!(f, "duplicate project id: `{id}`"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Origin of the portfolio data document.
pub trait ProjectSource {
    /// Human-readable origin used in logs and error messages.
    fn origin(&self) -> String;
    /// Reads the full document text.
    fn fetch(&self) -> LoadResult<String>;
}

/// Reads the data document from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProjectSource for FileSource {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> LoadResult<String> {
        std::fs::read_to_string(&self.path).map_err(|err| LoadError::Transport {
            origin: self.origin(),
            message: err.to_string(),
        })
    }
}

/// Serves a document held in memory.
#[derive(Debug, Clone)]
pub struct InlineSource {
    text: String,
}

impl InlineSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl ProjectSource for InlineSource {
    fn origin(&self) -> String {
        "inline".to_string()
    }

    fn fetch(&self) -> LoadResult<String> {
        Ok(self.text.clone())
    }
}
