//! Trip CRUD operations and queries.

use jiff::civil::Date;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use super::{collect_readable, date_column};
use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::Trip,
};

const INSERT_TRIP_SQL: &str = "INSERT INTO trips (title, start_date, end_date) VALUES (?1, ?2, ?3)";
const SELECT_TRIP_SQL: &str = "SELECT id, title, start_date, end_date FROM trips WHERE id = ?1";
const SELECT_ALL_TRIPS_SQL: &str = "SELECT id, title, start_date, end_date FROM trips ORDER BY id";
const CHECK_TRIP_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM trips WHERE id = ?1)";
const DELETE_TRIP_ACTIVITIES_SQL: &str = "DELETE FROM activities WHERE trip_id = ?1";
const DELETE_TRIP_FLIGHTS_SQL: &str = "DELETE FROM flights WHERE trip_id = ?1";
const DELETE_TRIP_HOTELS_SQL: &str = "DELETE FROM hotels WHERE trip_id = ?1";
const DELETE_TRIP_SQL: &str = "DELETE FROM trips WHERE id = ?1";

impl super::Database {
    fn build_trip_from_row(row: &rusqlite::Row) -> rusqlite::Result<Trip> {
        Ok(Trip {
            id: row.get::<_, i64>(0)? as u64,
            title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            start_date: date_column(row, 2)?,
            end_date: date_column(row, 3)?,
        })
    }

    /// Creates a new trip and returns it with its assigned ID.
    ///
    /// Neither the title nor the date range is validated here: a blank title
    /// or an end date before the start date is stored as given.
    pub fn create_trip(&mut self, title: &str, start_date: Date, end_date: Date) -> Result<Trip> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_TRIP_SQL,
            params![title, start_date.to_string(), end_date.to_string()],
        )
        .db_context("Failed to insert trip")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Created trip {id} ({start_date} to {end_date})");

        Ok(Trip {
            id,
            title: title.into(),
            start_date,
            end_date,
        })
    }

    /// Lists every trip in insertion order.
    pub fn get_all_trips(&self) -> Result<Vec<Trip>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_TRIPS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map([], Self::build_trip_from_row)
            .db_context("Failed to query trips")?;
        let trips = collect_readable(rows, "trips")?;

        Ok(trips)
    }

    /// Retrieves a trip by its ID, or `None` if no such trip exists.
    pub fn get_trip(&self, id: u64) -> Result<Option<Trip>> {
        self.connection
            .query_row(SELECT_TRIP_SQL, params![id as i64], Self::build_trip_from_row)
            .optional()
            .db_context("Failed to query trip")
    }

    /// Fails with [`PlannerError::TripNotFound`] unless the trip exists.
    ///
    /// Takes the connection explicitly so child inserts can run it inside
    /// their own transaction.
    pub(super) fn ensure_trip_exists(connection: &Connection, id: u64) -> Result<()> {
        let exists: bool = connection
            .query_row(CHECK_TRIP_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check trip existence")?;

        if exists {
            Ok(())
        } else {
            Err(PlannerError::TripNotFound { id })
        }
    }

    /// Permanently deletes a trip together with its activities, flights and
    /// hotels.
    ///
    /// Children are removed before the trip row, all within one transaction.
    /// Returns `false` when the trip did not exist; that is not an error.
    pub fn delete_trip(&mut self, id: u64) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let activities = tx
            .execute(DELETE_TRIP_ACTIVITIES_SQL, params![id as i64])
            .db_context("Failed to delete trip activities")?;
        let flights = tx
            .execute(DELETE_TRIP_FLIGHTS_SQL, params![id as i64])
            .db_context("Failed to delete trip flights")?;
        let hotels = tx
            .execute(DELETE_TRIP_HOTELS_SQL, params![id as i64])
            .db_context("Failed to delete trip hotels")?;
        let trips = tx
            .execute(DELETE_TRIP_SQL, params![id as i64])
            .db_context("Failed to delete trip")?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!(
            "Deleted trip {id}: {activities} activities, {flights} flights, {hotels} hotels"
        );

        Ok(trips > 0)
    }
}
