//! High-level planner API for trips, bookings and itineraries.
//!
//! [`Planner`] is the single entry point the interfaces talk to. Every method
//! is async and runs its SQLite work on a blocking thread with a freshly
//! opened [`Database`](crate::db::Database), so no connection outlives a call.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (trip_handlers) │───▶│ (trip_ops,      │───▶│   (via db/)     │
//! │                 │    │  booking_ops,   │    │                 │
//! │                 │    │  activity_ops)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: resolves the database path and initializes the schema
//! - [`trip_ops`]: create, fetch, list and delete trips
//! - [`booking_ops`]: flights and hotels
//! - [`activity_ops`]: activities and per-day lookups
//! - [`trip_handlers`]: composite views (summaries, details, itinerary) and
//!   confirmed deletion
//!
//! # Example
//!
//! ```rust,no_run
//! use wayfarer_core::{params::CreateTrip, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("/tmp/wayfarer.db"))
//!     .build()
//!     .await?;
//!
//! let trip = planner
//!     .create_trip(&CreateTrip {
//!         title: "Lisbon".to_string(),
//!         start_date: "2024-05-01".to_string(),
//!         end_date: "2024-05-04".to_string(),
//!     })
//!     .await?;
//! assert_eq!(trip.day_count(), 4);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{PlannerError, Result},
};

pub mod activity_ops;
pub mod booking_ops;
pub mod builder;
pub mod trip_handlers;
pub mod trip_ops;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;

/// Main planner interface for managing trips.
pub struct Planner {
    pub(crate) db_path: PathBuf,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Location of the SQLite file this planner operates on.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Opens the database on a blocking thread and runs `op` against it.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(PlannerError::task_join)?
    }
}
