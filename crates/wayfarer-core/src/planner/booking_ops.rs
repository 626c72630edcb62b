//! Flight and hotel operations for the Planner.

use super::Planner;
use crate::{
    error::Result,
    models::{Flight, Hotel},
    params::{AddFlight, AddHotel, Id},
};

impl Planner {
    /// Books a flight on an existing trip.
    pub async fn add_flight(&self, params: &AddFlight) -> Result<Flight> {
        let trip_id = params.trip_id;
        let flight = params.to_new_flight();
        self.with_database(move |db| db.add_flight_to_trip(trip_id, &flight))
            .await
    }

    /// Books a hotel stay on an existing trip.
    pub async fn add_hotel(&self, params: &AddHotel) -> Result<Hotel> {
        let trip_id = params.trip_id;
        let hotel = params.to_new_hotel();
        self.with_database(move |db| db.add_hotel_to_trip(trip_id, &hotel))
            .await
    }

    /// Flights booked for a trip, in booking order.
    pub async fn flights(&self, params: &Id) -> Result<Vec<Flight>> {
        let trip_id = params.id;
        self.with_database(move |db| db.get_flights_for_trip(trip_id))
            .await
    }

    /// Hotel stays booked for a trip, in booking order.
    pub async fn hotels(&self, params: &Id) -> Result<Vec<Hotel>> {
        let trip_id = params.id;
        self.with_database(move |db| db.get_hotels_for_trip(trip_id))
            .await
    }
}
