//! Activity operations and per-day queries.

use jiff::civil::Date;
use rusqlite::params;

use super::{collect_readable, date_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Activity, NewActivity},
};

const INSERT_ACTIVITY_SQL: &str = "INSERT INTO activities (trip_id, date, name, time, cost, file_path, address, confirmation) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SELECT_ACTIVITIES_BY_DAY_SQL: &str = "SELECT id, trip_id, date, name, time, cost, file_path, address, confirmation FROM activities WHERE trip_id = ?1 AND date = ?2 ORDER BY id";
const SELECT_ACTIVITIES_BY_TRIP_SQL: &str = "SELECT id, trip_id, date, name, time, cost, file_path, address, confirmation FROM activities WHERE trip_id = ?1 ORDER BY date, id";

impl super::Database {
    fn build_activity_from_row(row: &rusqlite::Row) -> rusqlite::Result<Activity> {
        Ok(Activity {
            id: row.get::<_, i64>(0)? as u64,
            trip_id: row.get::<_, i64>(1)? as u64,
            date: date_column(row, 2)?,
            name: row.get(3)?,
            time: row.get(4)?,
            cost: row.get(5)?,
            file_path: row.get(6)?,
            address: row.get(7)?,
            confirmation: row.get(8)?,
        })
    }

    /// Schedules an activity on a day of a trip.
    ///
    /// Several activities may share the same date and time. The date is not
    /// checked against the trip's range.
    pub fn add_activity_to_day(
        &mut self,
        trip_id: u64,
        date: Date,
        activity: &NewActivity,
    ) -> Result<Activity> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        Self::ensure_trip_exists(&tx, trip_id)?;

        tx.execute(
            INSERT_ACTIVITY_SQL,
            params![
                trip_id as i64,
                date.to_string(),
                activity.name,
                activity.time,
                activity.cost,
                activity.file_path,
                activity.address,
                activity.confirmation
            ],
        )
        .db_context("Failed to insert activity")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Activity {
            id,
            trip_id,
            date,
            name: activity.name.clone(),
            time: activity.time.clone(),
            cost: activity.cost,
            file_path: activity.file_path.clone(),
            address: activity.address.clone(),
            confirmation: activity.confirmation.clone(),
        })
    }

    /// Activities scheduled on exactly `date`, in storage order.
    ///
    /// No time-of-day ordering is applied here; see [`crate::itinerary`].
    pub fn get_itinerary_for_trip(&self, trip_id: u64, date: Date) -> Result<Vec<Activity>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ACTIVITIES_BY_DAY_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(
                params![trip_id as i64, date.to_string()],
                Self::build_activity_from_row,
            )
            .db_context("Failed to query activities")?;
        let activities = collect_readable(rows, "activities")?;

        Ok(activities)
    }

    /// Every activity of a trip, ordered by date and then insertion.
    pub fn get_activities_for_trip(&self, trip_id: u64) -> Result<Vec<Activity>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ACTIVITIES_BY_TRIP_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![trip_id as i64], Self::build_activity_from_row)
            .db_context("Failed to query activities")?;
        let activities = collect_readable(rows, "activities")?;

        Ok(activities)
    }
}
