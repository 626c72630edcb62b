//! Data models for trips, bookings and activities.
//!
//! These are plain data structures. Display implementations live in
//! [`crate::display::models`] so presentation stays out of the data layer.
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use wayfarer_core::models::Trip;
//!
//! let trip = Trip {
//!     id: 1,
//!     title: "Paris".to_string(),
//!     start_date: date(2024, 6, 1),
//!     end_date: date(2024, 6, 3),
//! };
//! assert_eq!(trip.day_count(), 3);
//! assert!(trip.contains(date(2024, 6, 2)));
//! ```

pub mod activity;
pub mod booking;
pub mod summary;
pub mod trip;


pub use activity::{Activity, NewActivity};
pub use booking::{Flight, Hotel, NewFlight, NewHotel};
pub use summary::{TripDetails, TripSummary};
pub use trip::Trip;
