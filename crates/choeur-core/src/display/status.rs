//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Wrapper type for displaying operation confirmation messages.
///
/// This provides consistent formatting for operations that succeed or fail
/// as a whole, such as a contact message check or a content validation run.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("All concerts data is valid");
        assert_eq!(format!("{success}"), "Success: All concerts data is valid\n");

        let failure = OperationStatus::failure("Validation failed");
        assert!(format!("{failure}").starts_with("Error:"));
    }
}
