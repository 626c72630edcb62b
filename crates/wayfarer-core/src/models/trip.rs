//! Trip model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::itinerary;

/// A planned trip spanning an inclusive range of calendar dates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trip {
    /// Unique identifier for the trip
    pub id: u64,

    /// Free-text title of the trip
    pub title: String,

    /// First day of the trip
    pub start_date: Date,

    /// Last day of the trip (inclusive)
    pub end_date: Date,
}

impl Trip {
    /// Number of calendar days covered by the trip, counting both ends.
    ///
    /// A trip stored with its end before its start covers zero days.
    pub fn day_count(&self) -> usize {
        itinerary::trip_days(self.start_date, self.end_date).len()
    }

    /// Whether `date` falls inside the trip's inclusive range.
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
