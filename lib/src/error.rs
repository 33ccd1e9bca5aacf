/// Custom error type for the markshelf library
///
/// Every fallible operation in the crate returns this enum so the presentation
/// layer can report failures without inspecting strings.
/// Using `thiserror` crate for automatic `Error` trait implementation and `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum MarkshelfError {
    /// A required field is missing or empty
    #[error("Validation error: {0}")]
    Validation(String),

    /// Persisted or imported text is not valid JSON for the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Parsed import data has the wrong top-level shape
    #[error("Format error: {0}")]
    Format(String),

    /// I/O errors (reading import files, writing exports)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key-value backend errors (SQLite)
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Export was requested for a collection with no records
    #[error("There are no bookmarks to export")]
    EmptyCollection,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing/serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Generic error for cases that don't fit other categories
    #[error("{0}")]
    Other(String),
}

/// Coarse classification of [`MarkshelfError`] for callers that only care
/// about which class of failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Parse,
    Format,
    Io,
    Other,
}

impl MarkshelfError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MarkshelfError::Validation(_) | MarkshelfError::EmptyCollection => {
                ErrorKind::Validation
            }
            MarkshelfError::Parse(_) => ErrorKind::Parse,
            MarkshelfError::Format(_) => ErrorKind::Format,
            MarkshelfError::Io(_) | MarkshelfError::Storage(_) => ErrorKind::Io,
            MarkshelfError::Config(_) | MarkshelfError::Yaml(_) | MarkshelfError::Other(_) => {
                ErrorKind::Other
            }
        }
    }
}

/// Result type alias using MarkshelfError
pub type Result<T> = std::result::Result<T, MarkshelfError>;

impl From<String> for MarkshelfError {
    fn from(s: String) -> Self {
        MarkshelfError::Other(s)
    }
}

impl From<&str> for MarkshelfError {
    fn from(s: &str) -> Self {
        MarkshelfError::Other(s.to_string())
    }
}

impl From<serde_yaml::Error> for MarkshelfError {
    fn from(err: serde_yaml::Error) -> Self {
        MarkshelfError::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for MarkshelfError {
    fn from(err: serde_json::Error) -> Self {
        MarkshelfError::Parse(err.to_string())
    }
}
