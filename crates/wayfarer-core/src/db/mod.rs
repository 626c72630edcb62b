//! Database operations and SQLite management for trips and their bookings.
//!
//! This module provides the low-level persistence layer. A [`Database`] wraps
//! one SQLite connection; opening it enables foreign keys and applies the
//! idempotent schema, so it is safe to construct on every operation. Query
//! methods are split by record type across the submodules.

use std::path::Path;

use log::{debug, warn};
use rusqlite::Connection;

use crate::error::{DatabaseResultExt, PlannerError, Result};

pub mod activity_queries;
pub mod booking_queries;
pub mod migrations;
pub mod trip_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Opening database at {}", path.as_ref().display());
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Creates a database backed by a private in-memory SQLite connection.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Reads a `YYYY-MM-DD` text column into a civil date.
pub(crate) fn date_column(row: &rusqlite::Row, index: usize) -> rusqlite::Result<jiff::civil::Date> {
    row.get::<_, String>(index)?
        .parse::<jiff::civil::Date>()
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                index,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}

/// Collects the rows of a listing, skipping rows whose stored values cannot
/// be read back into a model.
///
/// A hand-edited or legacy row (a NULL date, a negative room count) is logged
/// and left out rather than failing the whole listing. Any other SQLite error
/// still fails the call.
pub(crate) fn collect_readable<T>(
    rows: impl Iterator<Item = rusqlite::Result<T>>,
    what: &str,
) -> Result<Vec<T>> {
    let mut items = Vec::new();
    for row in rows {
        match row {
            Ok(item) => items.push(item),
            Err(
                e @ (rusqlite::Error::FromSqlConversionFailure(..)
                | rusqlite::Error::InvalidColumnType(..)),
            ) => warn!("Skipping unreadable {what} row: {e}"),
            Err(e) => {
                return Err(PlannerError::database(format!("Failed to fetch {what}")).with_source(e))
            }
        }
    }
    Ok(items)
}
