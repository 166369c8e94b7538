//! Status and confirmation message types for operation feedback.

use std::fmt;

/// A one-line success or failure message.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

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
        let success = OperationStatus::success("Workout logged");
        assert_eq!(success.to_string(), "Success: Workout logged\n");

        let failure = OperationStatus::failure("Session too short to log");
        assert!(failure.to_string().starts_with("Error:"));
    }
}
