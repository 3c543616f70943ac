use std::fmt;

/// Result type for shelf-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// A posted-at value could not be parsed into a point in time
    InvalidDate(String),

    /// Two products in one collection share the same id
    DuplicateProductId(String),

    /// Inventory document is not valid JSON or has the wrong shape
    Json(serde_json::Error),

    /// Inventory document parsed but is neither an envelope nor a record array
    InvalidDocument(String),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDate(input) => write!(f, "Invalid date: {:?}", input),
            Error::DuplicateProductId(id) => write!(f, "Duplicate product id: {}", id),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::InvalidDocument(msg) => write!(f, "Invalid inventory document: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::InvalidDate(_) | Error::DuplicateProductId(_) | Error::InvalidDocument(_) => {
                None
            }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
