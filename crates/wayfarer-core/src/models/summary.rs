//! Trip summary and detail aggregates.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Activity, Flight, Hotel, Trip};
use crate::itinerary::Itinerary;

/// Summary information about a trip with booking statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripSummary {
    /// Trip ID
    pub id: u64,
    /// Title of the trip
    pub title: String,
    /// First day of the trip
    pub start_date: Date,
    /// Last day of the trip
    pub end_date: Date,
    /// Number of flights booked
    pub flight_count: u32,
    /// Number of hotel bookings
    pub hotel_count: u32,
    /// Number of scheduled activities
    pub activity_count: u32,
    /// Sum of flight, hotel and activity costs
    pub total_cost: f64,
}

impl TripSummary {
    /// Builds a summary from a trip and everything attached to it.
    pub fn new(trip: &Trip, flights: &[Flight], hotels: &[Hotel], activities: &[Activity]) -> Self {
        let total_cost = flights.iter().map(|f| f.cost).sum::<f64>()
            + hotels.iter().map(|h| h.cost).sum::<f64>()
            + activities.iter().filter_map(|a| a.cost).sum::<f64>();

        Self {
            id: trip.id,
            title: trip.title.clone(),
            start_date: trip.start_date,
            end_date: trip.end_date,
            flight_count: flights.len() as u32,
            hotel_count: hotels.len() as u32,
            activity_count: activities.len() as u32,
            total_cost,
        }
    }
}

/// A trip together with its bookings and day-by-day itinerary.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TripDetails {
    pub trip: Trip,
    pub flights: Vec<Flight>,
    pub hotels: Vec<Hotel>,
    pub itinerary: Itinerary,
}

impl TripDetails {
    /// Sum of every cost recorded against the trip.
    pub fn total_cost(&self) -> f64 {
        self.flights.iter().map(|f| f.cost).sum::<f64>()
            + self.hotels.iter().map(|h| h.cost).sum::<f64>()
            + self.itinerary.total_cost()
    }
}
