use serde::{Deserialize, Serialize};

/// Represents an error response body from the TeamPlan API.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Machine-readable error code, when the server assigned one.
    #[serde(default)]
    pub code: Option<String>,
    /// The main error message.
    pub message: String,
}

impl ErrorBody {
    /// Creates a new error body with just a message.
    ///
    /// # Arguments
    /// * `message` - The error message
    ///
    /// # Returns
    /// A new [`ErrorBody`] with the provided message and no code.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    /// Creates a new error body with a code and a message.
    ///
    /// # Arguments
    /// * `code` - The machine-readable error code
    /// * `message` - The error message
    ///
    /// # Returns
    /// A new [`ErrorBody`] with the provided code and message.
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }

    /// Checks if this error body carries a code.
    ///
    /// # Returns
    /// `true` if a code is present, `false` otherwise.
    pub const fn has_code(&self) -> bool {
        self.code.is_some()
    }
}

impl std::fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{}: {}", code, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ErrorBody {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test ErrorBody creation with new()
    #[test]
    fn test_error_body_new() {
        let error = ErrorBody::new("Test error");
        assert_eq!(error.message, "Test error");
        assert_eq!(error.code, None);
        assert!(!error.has_code());
    }

    /// Test ErrorBody creation with with_code()
    #[test]
    fn test_error_body_with_code() {
        let error = ErrorBody::with_code("EXPIRED_TOKEN", "Token has expired");
        assert_eq!(error.code.as_deref(), Some("EXPIRED_TOKEN"));
        assert_eq!(error.message, "Token has expired");
        assert!(error.has_code());
    }

    /// Test Display output with and without a code
    #[test]
    fn test_error_body_display() {
        let plain = ErrorBody::new("Something broke");
        assert_eq!(plain.to_string(), "Something broke");

        let coded = ErrorBody::with_code("NOT_FOUND", "No such board");
        assert_eq!(coded.to_string(), "NOT_FOUND: No such board");
    }

    /// Test deserialization from a typical server payload
    #[test]
    fn test_error_body_deserialize() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"code":"UNAUTHORIZED","message":"Sign in required"}"#)
                .expect("valid error body");
        assert_eq!(body.code.as_deref(), Some("UNAUTHORIZED"));
        assert_eq!(body.message, "Sign in required");

        let bare: ErrorBody =
            serde_json::from_str(r#"{"message":"oops"}"#).expect("valid error body without code");
        assert!(!bare.has_code());
    }
}
