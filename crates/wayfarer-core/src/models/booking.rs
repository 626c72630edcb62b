//! Flight and hotel booking models.

use serde::{Deserialize, Serialize};

/// A flight booked for a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Flight {
    /// Unique identifier for the flight
    pub id: u64,
    /// ID of the parent trip
    pub trip_id: u64,
    /// Ticket cost
    pub cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<String>,
}

/// Fields of a flight that is about to be inserted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewFlight {
    pub cost: f64,
    pub seat: Option<String>,
    pub airline: Option<String>,
    pub flight_number: Option<String>,
    pub confirmation: Option<String>,
}

/// A hotel stay booked for a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hotel {
    /// Unique identifier for the hotel booking
    pub id: u64,
    /// ID of the parent trip
    pub trip_id: u64,
    /// Total cost of the stay
    pub cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Number of rooms booked
    pub rooms: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<String>,
}

/// Fields of a hotel booking that is about to be inserted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewHotel {
    pub cost: f64,
    pub name: Option<String>,
    pub address: Option<String>,
    pub rooms: u32,
    pub confirmation: Option<String>,
}

impl Default for NewHotel {
    fn default() -> Self {
        Self {
            cost: 0.0,
            name: None,
            address: None,
            rooms: 1,
            confirmation: None,
        }
    }
}
