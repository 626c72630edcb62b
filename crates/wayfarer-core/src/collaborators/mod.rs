//! External services the planner talks to.
//!
//! Each collaborator is a narrow trait with one concrete implementation:
//!
//! - [`BookingSearch`] / [`HttpBookingSearch`]: flight and hotel search over
//!   HTTP. Results are passed through as opaque JSON.
//! - [`AttachmentStore`] / [`DirectoryAttachmentStore`]: keeps uploaded files
//!   and hands back the path recorded in `Activity.file_path`.
//! - [`Geocoder`] / [`NominatimGeocoder`]: turns an activity address into
//!   coordinates for map display.
//!
//! Failures surface as [`PlannerError::Collaborator`](crate::PlannerError)
//! and never touch stored trip data.

pub mod attachments;
pub mod geocode;
pub mod search;

pub use attachments::{AttachmentStore, DirectoryAttachmentStore};
pub use geocode::{Coordinates, Geocoder, NominatimGeocoder};
pub use search::{BookingSearch, FlightQuery, HotelQuery, HttpBookingSearch, SearchConfig, TokenConfig};
