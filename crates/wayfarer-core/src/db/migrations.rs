//! Database schema initialization and migrations.

use log::info;

use crate::error::{DatabaseResultExt, Result};

/// Activity columns added after the first release of the schema.
const ACTIVITY_LATE_COLUMNS: [(&str, &str); 3] = [
    ("file_path", "TEXT"),
    ("address", "TEXT"),
    ("confirmation", "TEXT"),
];

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        for (column, column_type) in ACTIVITY_LATE_COLUMNS {
            if !self.has_column("activities", column)? {
                info!("Adding missing column activities.{column}");
                self.connection
                    .execute(
                        &format!("ALTER TABLE activities ADD COLUMN {column} {column_type}"),
                        [],
                    )
                    .db_context("Failed to add column to activities table")?;
            }
        }

        Ok(())
    }

    fn has_column(&self, table: &str, column: &str) -> Result<bool> {
        self.connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
                [table, column],
                |row| row.get::<_, i64>(0),
            )
            .map(|count| count > 0)
            .db_context("Failed to inspect table columns")
    }
}
