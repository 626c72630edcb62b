//! Error handling utilities for the MCP server

use rmcp::ErrorData;
use wayfarer_core::PlannerError;

/// Converts a planner error into an MCP error.
///
/// Input mistakes are reported as invalid params so the client can correct
/// the call; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &PlannerError) -> ErrorData {
    match error {
        PlannerError::InvalidInput { .. }
        | PlannerError::InvalidTimeOfDay { .. }
        | PlannerError::TripNotFound { .. } => {
            ErrorData::invalid_params(format!("{message}: {error}"), None)
        }
        _ => ErrorData::internal_error(format!("{message}: {error}"), None),
    }
}

/// Error for a trip ID that matched nothing.
pub fn trip_not_found(id: u64) -> ErrorData {
    ErrorData::invalid_params(format!("Trip with ID {id} not found"), None)
}
