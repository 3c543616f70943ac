use std::fmt;
use std::time::Duration;

/// Result type for shelf-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Product/inventory data error
    Types(shelf_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Inventory source could not deliver products
    Source(String),

    /// A fetch finished with an error
    FetchFailed(String),

    /// A fetch did not finish in time
    FetchTimeout(Duration),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Types(err) => write!(f, "Inventory error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Source(msg) => write!(f, "Inventory source error: {}", msg),
            Error::FetchFailed(msg) => write!(f, "Inventory fetch failed: {}", msg),
            Error::FetchTimeout(after) => {
                write!(f, "Inventory fetch timed out after {:?}", after)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Types(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_)
            | Error::Source(_)
            | Error::FetchFailed(_)
            | Error::FetchTimeout(_) => None,
        }
    }
}

impl From<shelf_types::Error> for Error {
    fn from(err: shelf_types::Error) -> Self {
        Error::Types(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
