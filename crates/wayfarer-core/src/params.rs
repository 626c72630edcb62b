//! Parameter structures for wayfarer operations.
//!
//! These are shared by every interface (CLI, MCP) and carry no framework
//! derives beyond serde. JSON schema generation is available behind the
//! `schema` feature so the MCP server can describe its tools.
//!
//! Dates travel as `YYYY-MM-DD` strings and are parsed by the planner, which
//! keeps these structs schema-friendly and lets malformed input surface as
//! [`PlannerError::InvalidInput`] naming the offending field.
//!
//! ```ignore
//! // In the CLI crate
//! #[derive(Args)]
//! pub struct CreateTripArgs {
//!     pub title: String,
//!     #[arg(long)]
//!     pub start: String,
//!     #[arg(long)]
//!     pub end: String,
//! }
//!
//! impl From<CreateTripArgs> for CreateTrip { /* ... */ }
//! ```

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PlannerError, Result},
    itinerary::{parse_time_of_day, TimeSlot},
    models::{NewActivity, NewFlight, NewHotel},
};

/// Parses a `YYYY-MM-DD` calendar date, naming `field` in the error.
pub fn parse_date(field: &str, value: &str) -> Result<Date> {
    value.trim().parse::<Date>().map_err(|e| {
        PlannerError::invalid_input(field)
            .with_reason(format!("expected a YYYY-MM-DD date, got '{value}': {e}"))
    })
}

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_trip, flights, hotels and itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the trip to operate on
    pub id: u64,
}

/// Parameters for creating a new trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateTrip {
    /// Title of the trip
    pub title: String,
    /// First day of the trip (YYYY-MM-DD)
    pub start_date: String,
    /// Last day of the trip, inclusive (YYYY-MM-DD)
    pub end_date: String,
}

impl CreateTrip {
    /// Parses both ends of the date range.
    pub fn date_range(&self) -> Result<(Date, Date)> {
        Ok((
            parse_date("start_date", &self.start_date)?,
            parse_date("end_date", &self.end_date)?,
        ))
    }
}

/// Parameters for permanently deleting a trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteTrip {
    /// The ID of the trip to delete
    pub id: u64,
    /// Must be true; deletion removes every flight, hotel and activity too
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for booking a flight on a trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddFlight {
    /// The trip this flight belongs to
    pub trip_id: u64,
    /// Ticket price
    #[serde(default)]
    pub cost: f64,
    /// Seat assignment
    pub seat: Option<String>,
    /// Operating airline
    pub airline: Option<String>,
    /// Flight number, e.g. "AF 123"
    pub flight_number: Option<String>,
    /// Booking confirmation code
    pub confirmation: Option<String>,
}

impl AddFlight {
    pub fn to_new_flight(&self) -> NewFlight {
        NewFlight {
            cost: self.cost,
            seat: self.seat.clone(),
            airline: self.airline.clone(),
            flight_number: self.flight_number.clone(),
            confirmation: self.confirmation.clone(),
        }
    }
}

/// Parameters for booking a hotel on a trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddHotel {
    /// The trip this stay belongs to
    pub trip_id: u64,
    /// Total price of the stay
    #[serde(default)]
    pub cost: f64,
    /// Hotel name
    pub name: Option<String>,
    /// Street address
    pub address: Option<String>,
    /// Number of rooms booked
    #[serde(default = "default_rooms")]
    pub rooms: u32,
    /// Booking confirmation code
    pub confirmation: Option<String>,
}

fn default_rooms() -> u32 {
    1
}

impl Default for AddHotel {
    fn default() -> Self {
        Self {
            trip_id: 0,
            cost: 0.0,
            name: None,
            address: None,
            rooms: default_rooms(),
            confirmation: None,
        }
    }
}

impl AddHotel {
    pub fn to_new_hotel(&self) -> NewHotel {
        NewHotel {
            cost: self.cost,
            name: self.name.clone(),
            address: self.address.clone(),
            rooms: self.rooms,
            confirmation: self.confirmation.clone(),
        }
    }
}

/// Parameters for scheduling an activity on one day of a trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddActivity {
    /// The trip this activity belongs to
    pub trip_id: u64,
    /// Day of the activity (YYYY-MM-DD)
    pub date: String,
    /// What is planned
    pub name: Option<String>,
    /// Time of day in 12-hour form, e.g. "8:00 AM"; omit for unscheduled
    pub time: Option<String>,
    /// Expected cost
    pub cost: Option<f64>,
    /// Reference to a stored attachment
    pub file_path: Option<String>,
    /// Where the activity takes place
    pub address: Option<String>,
    /// Booking confirmation code
    pub confirmation: Option<String>,
}

impl AddActivity {
    pub fn parsed_date(&self) -> Result<Date> {
        parse_date("date", &self.date)
    }

    /// Reads the time the way the itinerary builder will.
    ///
    /// Interfaces call this before storing an activity: the store keeps
    /// times verbatim and an unreadable one would fail every later itinerary
    /// of the trip.
    pub fn validated_time(&self) -> Result<TimeSlot> {
        match self.time.as_deref() {
            Some(time) => parse_time_of_day(time),
            None => Ok(TimeSlot::Unscheduled),
        }
    }

    pub fn to_new_activity(&self) -> NewActivity {
        NewActivity {
            name: self.name.clone(),
            time: self.time.clone(),
            cost: self.cost,
            file_path: self.file_path.clone(),
            address: self.address.clone(),
            confirmation: self.confirmation.clone(),
        }
    }
}

/// Parameters selecting a single day of a trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DayQuery {
    /// The trip to look in
    pub trip_id: u64,
    /// The day to list (YYYY-MM-DD)
    pub date: String,
}

impl DayQuery {
    pub fn parsed_date(&self) -> Result<Date> {
        parse_date("date", &self.date)
    }
}
