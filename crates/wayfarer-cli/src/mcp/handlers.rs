//! MCP tool handler implementations

use std::sync::Arc;

use log::debug;
use rmcp::{
    model::{CallToolResult, Content},
    ErrorData,
};
use tokio::sync::Mutex;
use wayfarer_core::{
    display::{CreateResult, DeleteResult, OperationStatus},
    params::{AddActivity, AddFlight, AddHotel, CreateTrip, DeleteTrip, Id},
    Planner,
};

use super::errors::{to_mcp_error, trip_not_found};

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(body: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Mutex<Planner>>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Mutex<Planner>>) -> Self {
        Self { planner }
    }

    pub async fn create_trip(&self, params: CreateTrip) -> McpResult {
        debug!("create_trip: {params:?}");

        let trip = self
            .planner
            .lock()
            .await
            .create_trip(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to create trip", &e))?;

        text(CreateResult::new(trip).to_string())
    }

    pub async fn list_trips(&self) -> McpResult {
        debug!("list_trips");

        let summaries = self
            .planner
            .lock()
            .await
            .list_trips()
            .await
            .map_err(|e| to_mcp_error("Failed to list trips", &e))?;

        let title = if summaries.is_empty() {
            "No trips planned"
        } else {
            "Trips"
        };
        text(format!("# {title}\n\n{summaries}"))
    }

    pub async fn show_trip(&self, params: Id) -> McpResult {
        debug!("show_trip: {params:?}");

        let details = self
            .planner
            .lock()
            .await
            .show_trip(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to load trip", &e))?
            .ok_or_else(|| trip_not_found(params.id))?;

        text(details.to_string())
    }

    pub async fn delete_trip(&self, params: DeleteTrip) -> McpResult {
        debug!("delete_trip: {params:?}");

        let deleted = self
            .planner
            .lock()
            .await
            .delete_trip(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to delete trip", &e))?;

        match deleted {
            Some(trip) => text(DeleteResult::new(trip).to_string()),
            None => text(OperationStatus::trip_not_found(params.id).to_string()),
        }
    }

    pub async fn add_flight(&self, params: AddFlight) -> McpResult {
        debug!("add_flight: {params:?}");

        let flight = self
            .planner
            .lock()
            .await
            .add_flight(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to add flight", &e))?;

        text(CreateResult::new(flight).to_string())
    }

    pub async fn add_hotel(&self, params: AddHotel) -> McpResult {
        debug!("add_hotel: {params:?}");

        let hotel = self
            .planner
            .lock()
            .await
            .add_hotel(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to add hotel", &e))?;

        text(CreateResult::new(hotel).to_string())
    }

    pub async fn add_activity(&self, params: AddActivity) -> McpResult {
        debug!("add_activity: {params:?}");

        params
            .validated_time()
            .map_err(|e| to_mcp_error("Rejected activity time", &e))?;

        let activity = self
            .planner
            .lock()
            .await
            .add_activity(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to add activity", &e))?;

        text(CreateResult::new(activity).to_string())
    }

    pub async fn show_itinerary(&self, params: Id) -> McpResult {
        debug!("show_itinerary: {params:?}");

        let planner = self.planner.lock().await;
        let trip = planner
            .get_trip(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to load trip", &e))?
            .ok_or_else(|| trip_not_found(params.id))?;
        let itinerary = planner
            .itinerary(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to build itinerary", &e))?
            .unwrap_or_default();

        text(format!("{trip}\n{itinerary}"))
    }
}
