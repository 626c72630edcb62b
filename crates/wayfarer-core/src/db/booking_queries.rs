//! Flight and hotel booking operations.

use rusqlite::{params, types::Type};

use super::collect_readable;
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Flight, Hotel, NewFlight, NewHotel},
};

const INSERT_FLIGHT_SQL: &str = "INSERT INTO flights (trip_id, cost, seat, airline, flight_number, confirmation) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_FLIGHTS_BY_TRIP_SQL: &str = "SELECT id, trip_id, cost, seat, airline, flight_number, confirmation FROM flights WHERE trip_id = ?1 ORDER BY id";
const INSERT_HOTEL_SQL: &str = "INSERT INTO hotels (trip_id, cost, name, address, rooms, confirmation) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_HOTELS_BY_TRIP_SQL: &str = "SELECT id, trip_id, cost, name, address, rooms, confirmation FROM hotels WHERE trip_id = ?1 ORDER BY id";

impl super::Database {
    fn build_flight_from_row(row: &rusqlite::Row) -> rusqlite::Result<Flight> {
        Ok(Flight {
            id: row.get::<_, i64>(0)? as u64,
            trip_id: row.get::<_, i64>(1)? as u64,
            cost: row.get::<_, Option<f64>>(2)?.unwrap_or_default(),
            seat: row.get(3)?,
            airline: row.get(4)?,
            flight_number: row.get(5)?,
            confirmation: row.get(6)?,
        })
    }

    fn build_hotel_from_row(row: &rusqlite::Row) -> rusqlite::Result<Hotel> {
        Ok(Hotel {
            id: row.get::<_, i64>(0)? as u64,
            trip_id: row.get::<_, i64>(1)? as u64,
            cost: row.get::<_, Option<f64>>(2)?.unwrap_or_default(),
            name: row.get(3)?,
            address: row.get(4)?,
            rooms: u32::try_from(row.get::<_, Option<i64>>(5)?.unwrap_or_default()).map_err(
                |e| rusqlite::Error::FromSqlConversionFailure(5, Type::Integer, Box::new(e)),
            )?,
            confirmation: row.get(6)?,
        })
    }

    /// Records a flight against a trip.
    ///
    /// Fails with [`crate::error::PlannerError::TripNotFound`] if the trip does not exist.
    pub fn add_flight_to_trip(&mut self, trip_id: u64, flight: &NewFlight) -> Result<Flight> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        Self::ensure_trip_exists(&tx, trip_id)?;

        tx.execute(
            INSERT_FLIGHT_SQL,
            params![
                trip_id as i64,
                flight.cost,
                flight.seat,
                flight.airline,
                flight.flight_number,
                flight.confirmation
            ],
        )
        .db_context("Failed to insert flight")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Flight {
            id,
            trip_id,
            cost: flight.cost,
            seat: flight.seat.clone(),
            airline: flight.airline.clone(),
            flight_number: flight.flight_number.clone(),
            confirmation: flight.confirmation.clone(),
        })
    }

    /// Records a hotel stay against a trip.
    ///
    /// Fails with [`crate::error::PlannerError::TripNotFound`] if the trip does not exist.
    pub fn add_hotel_to_trip(&mut self, trip_id: u64, hotel: &NewHotel) -> Result<Hotel> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        Self::ensure_trip_exists(&tx, trip_id)?;

        tx.execute(
            INSERT_HOTEL_SQL,
            params![
                trip_id as i64,
                hotel.cost,
                hotel.name,
                hotel.address,
                i64::from(hotel.rooms),
                hotel.confirmation
            ],
        )
        .db_context("Failed to insert hotel")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Hotel {
            id,
            trip_id,
            cost: hotel.cost,
            name: hotel.name.clone(),
            address: hotel.address.clone(),
            rooms: hotel.rooms,
            confirmation: hotel.confirmation.clone(),
        })
    }

    /// All flights booked for a trip, in insertion order.
    pub fn get_flights_for_trip(&self, trip_id: u64) -> Result<Vec<Flight>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_FLIGHTS_BY_TRIP_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![trip_id as i64], Self::build_flight_from_row)
            .db_context("Failed to query flights")?;
        let flights = collect_readable(rows, "flights")?;

        Ok(flights)
    }

    /// All hotel stays booked for a trip, in insertion order.
    pub fn get_hotels_for_trip(&self, trip_id: u64) -> Result<Vec<Hotel>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_HOTELS_BY_TRIP_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![trip_id as i64], Self::build_hotel_from_row)
            .db_context("Failed to query hotels")?;
        let hotels = collect_readable(rows, "hotels")?;

        Ok(hotels)
    }
}
