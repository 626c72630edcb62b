//! Activity model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A single scheduled item on one day of a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Unique identifier for the activity
    pub id: u64,

    /// ID of the parent trip
    pub trip_id: u64,

    /// Calendar day the activity happens on
    pub date: Date,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Time of day as entered, e.g. `8:00 AM`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Cost of the activity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,

    /// Reference returned by the attachment store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    /// Street address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Booking confirmation code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<String>,
}

/// Fields of an activity that is about to be inserted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewActivity {
    pub name: Option<String>,
    pub time: Option<String>,
    pub cost: Option<f64>,
    pub file_path: Option<String>,
    pub address: Option<String>,
    pub confirmation: Option<String>,
}
