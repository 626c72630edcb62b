//! Status messages for operations that have no resource to show.

use std::fmt;

/// Outcome line for operations such as lookups that found nothing.
pub struct OperationStatus {
    pub message: String,
}

impl OperationStatus {
    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Failure status for a trip ID that matched nothing.
    pub fn trip_not_found(id: u64) -> Self {
        Self::failure(format!("Trip with ID {id} not found"))
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error: {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        assert_eq!(
            OperationStatus::failure("Nothing to do").to_string(),
            "Error: Nothing to do\n"
        );
        assert_eq!(
            OperationStatus::trip_not_found(4).to_string(),
            "Error: Trip with ID 4 not found\n"
        );
    }
}
