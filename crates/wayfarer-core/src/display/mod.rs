//! Display formatting and result wrapper types.
//!
//! Domain models implement `Display` directly (see [`models`]) and produce
//! markdown, which the CLI renders for the terminal and the MCP server
//! returns verbatim. Collections and operation outcomes get newtype wrappers
//! so each interface prints the same text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │  (Trip, Flight) │───▶│ Result Types    │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: collection wrappers (TripSummaries, Flights, Hotels,
//!   Activities)
//! - [`results`]: operation results (CreateResult, DeleteResult)
//! - [`status`]: plain status messages (OperationStatus)
//! - [`datetime`]: date range and day heading formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use jiff::civil::date;
//! use wayfarer_core::{display::CreateResult, models::Trip};
//!
//! let trip = Trip {
//!     id: 1,
//!     title: "Paris".to_string(),
//!     start_date: date(2024, 6, 1),
//!     end_date: date(2024, 6, 3),
//! };
//!
//! let output = CreateResult::new(trip).to_string();
//! assert!(output.contains("Created trip with ID: 1"));
//! assert!(output.contains("06/01/2024 - 06/03/2024 (3 days)"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Activities, Flights, Hotels, TripSummaries};
pub use datetime::{DayHeading, TripDates};
pub use results::{CreateResult, DeleteResult};
pub use status::OperationStatus;

/// Formats an amount as dollars with two decimals, e.g. `$12.50`.
pub(crate) fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// `1 flight`, `2 flights`.
pub(crate) fn count_of(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {plural}")
    }
}
