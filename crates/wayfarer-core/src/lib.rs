//! Core library for the wayfarer travel planner.
//!
//! This crate owns trip storage, bookings and activities, the day-by-day
//! itinerary builder, and the narrow clients for external services.
//!
//! - [`db`]: SQLite persistence with child-before-parent trip deletion
//! - [`itinerary`]: walks a trip's dates and orders each day by time of day
//! - [`planner`]: async facade used by the CLI and MCP server
//! - [`collaborators`]: booking search, attachment storage and geocoding
//! - [`display`]: markdown formatting shared by every interface
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wayfarer_core::{
//!     params::{AddActivity, CreateTrip, Id},
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("trips.db"))
//!     .build()
//!     .await?;
//!
//! let trip = planner
//!     .create_trip(&CreateTrip {
//!         title: "Paris".to_string(),
//!         start_date: "2024-06-01".to_string(),
//!         end_date: "2024-06-03".to_string(),
//!     })
//!     .await?;
//!
//! planner
//!     .add_activity(&AddActivity {
//!         trip_id: trip.id,
//!         date: "2024-06-02".to_string(),
//!         name: Some("Louvre".to_string()),
//!         time: Some("10:00 AM".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! if let Some(itinerary) = planner.itinerary(&Id { id: trip.id }).await? {
//!     println!("{itinerary}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod collaborators;
pub mod db;
pub mod display;
pub mod error;
pub mod itinerary;
pub mod models;
pub mod params;
pub mod planner;

// Re-export commonly used types
pub use db::Database;
pub use display::{CreateResult, DeleteResult, OperationStatus, TripSummaries};
pub use error::{PlannerError, Result};
pub use itinerary::{Itinerary, ItineraryDay, TimeSlot};
pub use models::{Activity, Flight, Hotel, Trip, TripDetails, TripSummary};
pub use params::{AddActivity, AddFlight, AddHotel, CreateTrip, DayQuery, DeleteTrip, Id};
pub use planner::{Planner, PlannerBuilder};
