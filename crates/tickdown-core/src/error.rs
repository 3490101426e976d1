use std::fmt;

/// Result type for tickdown-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the core layer
#[derive(Debug)]
pub enum Error {
    /// Share token is not valid base64 or has an unrecognized shape
    Token(String),

    /// Share payload JSON failed to parse
    Payload(serde_json::Error),

    /// A timestamp field failed to parse
    Timestamp(chrono::ParseError),

    /// Interval is missing an endpoint and cannot be encoded
    PartialInterval,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Token(msg) => write!(f, "Invalid share token: {}", msg),
            Error::Payload(err) => write!(f, "Invalid share payload: {}", err),
            Error::Timestamp(err) => write!(f, "Invalid timestamp: {}", err),
            Error::PartialInterval => write!(f, "Interval is missing an endpoint"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Payload(err) => Some(err),
            Error::Timestamp(err) => Some(err),
            Error::Token(_) | Error::PartialInterval => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Payload(err)
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::Timestamp(err)
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::Token(err.to_string())
    }
}
