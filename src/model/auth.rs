use crate::error::AppError;
use crate::soap::xml::first_text;
use serde::{Deserialize, Serialize};

/// Result of a credential check
///
/// The service reports the outcome as an integer error code: `0` means
/// the credentials are valid, anything else (commonly `1`) means they are
/// not. A non-zero code is a normal result, not an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResult {
    /// Error code reported by the service
    pub error_code: i32,
}

impl AuthResult {
    /// Parses the `checkLogin` response
    ///
    /// The response carries a single `<errorcode>` element; a response
    /// without one, or with non-numeric content, is malformed.
    pub fn from_xml(xml: &str) -> Result<Self, AppError> {
        let text = first_text(xml, "errorcode")?
            .ok_or_else(|| AppError::MalformedResponse("missing errorcode element".to_string()))?;
        let error_code = text
            .parse::<i32>()
            .map_err(|_| AppError::MalformedResponse(format!("non-numeric errorcode: {text:?}")))?;
        Ok(Self { error_code })
    }

    /// Whether the credentials were accepted
    pub fn is_success(&self) -> bool {
        self.error_code == 0
    }
}
