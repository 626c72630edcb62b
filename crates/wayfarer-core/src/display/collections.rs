//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{Activity, Flight, Hotel, TripSummary};

/// Newtype wrapper for displaying the trip list.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use wayfarer_core::{display::TripSummaries, models::TripSummary};
///
/// let summary = TripSummary {
///     id: 1,
///     title: "Lisbon".to_string(),
///     start_date: date(2024, 5, 1),
///     end_date: date(2024, 5, 4),
///     flight_count: 2,
///     hotel_count: 1,
///     activity_count: 0,
///     total_cost: 820.0,
/// };
///
/// let output = TripSummaries(vec![summary]).to_string();
/// assert!(output.contains("Lisbon"));
/// assert!(output.contains("$820.00"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TripSummaries(pub Vec<TripSummary>);

impl TripSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of trips in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the trip summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, TripSummary> {
        self.0.iter()
    }
}

impl IntoIterator for TripSummaries {
    type Item = TripSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for TripSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No trips found.");
        }
        for trip in &self.0 {
            write!(f, "{trip}")?;
        }
        Ok(())
    }
}

/// Flights booked for one trip.
pub struct Flights(pub Vec<Flight>);

impl fmt::Display for Flights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No flights booked.");
        }
        for flight in &self.0 {
            write!(f, "{flight}")?;
        }
        Ok(())
    }
}

/// Hotel stays booked for one trip.
pub struct Hotels(pub Vec<Hotel>);

impl fmt::Display for Hotels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No hotels booked.");
        }
        for hotel in &self.0 {
            write!(f, "{hotel}")?;
        }
        Ok(())
    }
}

/// Activities of one day, shown in the order given.
pub struct Activities(pub Vec<Activity>);

impl fmt::Display for Activities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "_No activities planned._");
        }
        for activity in &self.0 {
            write!(f, "{activity}")?;
        }
        Ok(())
    }
}
