use reqwest::StatusCode;
use std::error::Error;
use std::fmt;

/// Main error type for the library
///
/// Transport failures and structurally invalid responses surface here.
/// A failed credential check is NOT an error: it is a non-zero
/// [`AuthResult`](crate::model::AuthResult) the caller must inspect.
#[derive(Debug)]
pub enum AppError {
    /// Network or protocol failure reported by the HTTP stack
    Network(reqwest::Error),
    /// The service answered with a non-success status code
    Unexpected(StatusCode),
    /// The response body is not readable XML
    Xml(quick_xml::Error),
    /// The response is readable XML but not the shape the operation expects
    MalformedResponse(String),
}

/// Convenience alias used across the crate
pub type PortalResult<T> = Result<T, AppError>;

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Unexpected(status) => write!(f, "unexpected status code: {status}"),
            AppError::Xml(e) => write!(f, "xml error: {e}"),
            AppError::MalformedResponse(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Xml(e) => Some(e),
            AppError::Unexpected(_) | AppError::MalformedResponse(_) => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<quick_xml::Error> for AppError {
    fn from(e: quick_xml::Error) -> Self {
        AppError::Xml(e)
    }
}
