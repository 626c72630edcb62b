//! MCP server implementation for wayfarer
//!
//! Exposes trip planning as Model Context Protocol tools so an assistant can
//! create trips, book flights and hotels, and schedule activities.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};
use wayfarer_core::{
    params::{AddActivity, AddFlight, AddHotel, CreateTrip, DeleteTrip, Id},
    Planner,
};

pub mod errors;
pub mod handlers;

pub use handlers::{McpHandlers, McpResult};

const INSTRUCTIONS: &str = r#"Wayfarer is a trip planner. A trip has a title and an inclusive date range; flights, hotels and per-day activities hang off it.

## Workflow
1. Create a trip with `create_trip` (dates are YYYY-MM-DD). Note the returned trip ID.
2. Book travel with `add_flight` and `add_hotel`.
3. Schedule things to do with `add_activity`. Times use 12-hour form such as "8:00 AM"; leave the time out for unscheduled activities.
4. Review the day-by-day plan with `show_itinerary`, or everything at once with `show_trip`.

## Notes
- Activities within a day are ordered by time of day; unscheduled ones come last.
- `delete_trip` removes the trip and every flight, hotel and activity on it. It requires confirmed=true."#;

/// MCP server for wayfarer
#[derive(Clone)]
pub struct WayfarerMcpServer {
    planner: Arc<Mutex<Planner>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl WayfarerMcpServer {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(Mutex::new(planner)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "create_trip",
        description = "Create a new trip with a title and an inclusive date range (start_date and end_date as YYYY-MM-DD). Returns the trip with its new ID."
    )]
    async fn create_trip(&self, Parameters(params): Parameters<CreateTrip>) -> McpResult {
        self.handlers().create_trip(params).await
    }

    #[tool(
        name = "list_trips",
        description = "List every trip with its dates, number of days and booking counts."
    )]
    async fn list_trips(&self) -> McpResult {
        self.handlers().list_trips().await
    }

    #[tool(
        name = "show_trip",
        description = "Show a trip in full: dates, flights, hotels, total cost and the day-by-day itinerary."
    )]
    async fn show_trip(&self, Parameters(params): Parameters<Id>) -> McpResult {
        self.handlers().show_trip(params).await
    }

    #[tool(
        name = "delete_trip",
        description = "Permanently delete a trip and all of its flights, hotels and activities. Requires confirmed=true."
    )]
    async fn delete_trip(&self, Parameters(params): Parameters<DeleteTrip>) -> McpResult {
        self.handlers().delete_trip(params).await
    }

    #[tool(
        name = "add_flight",
        description = "Add a flight to a trip. All fields except trip_id are optional; cost defaults to 0."
    )]
    async fn add_flight(&self, Parameters(params): Parameters<AddFlight>) -> McpResult {
        self.handlers().add_flight(params).await
    }

    #[tool(
        name = "add_hotel",
        description = "Add a hotel stay to a trip. Rooms defaults to 1 and cost to 0."
    )]
    async fn add_hotel(&self, Parameters(params): Parameters<AddHotel>) -> McpResult {
        self.handlers().add_hotel(params).await
    }

    #[tool(
        name = "add_activity",
        description = "Schedule an activity on a day of a trip (date as YYYY-MM-DD). Give time in 12-hour form like \"2:30 PM\", or omit it for an unscheduled activity."
    )]
    async fn add_activity(&self, Parameters(params): Parameters<AddActivity>) -> McpResult {
        self.handlers().add_activity(params).await
    }

    #[tool(
        name = "show_itinerary",
        description = "Show the day-by-day itinerary of a trip. Every date in the range is listed, with activities ordered by time and unscheduled ones last."
    )]
    async fn show_itinerary(&self, Parameters(params): Parameters<Id>) -> McpResult {
        self.handlers().show_itinerary(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for WayfarerMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "wayfarer".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: WayfarerMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting wayfarer MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
