//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Activity, Flight, Hotel, Trip};

/// Wrapper type for displaying the result of create operations.
///
/// Prints a confirmation line with the new ID followed by the record.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Trip> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created trip with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Flight> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added flight with ID: {} to trip {}",
            self.resource.id, self.resource.trip_id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Hotel> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added hotel with ID: {} to trip {}",
            self.resource.id, self.resource.trip_id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Activity> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added activity with ID: {} to trip {} on {}",
            self.resource.id, self.resource.trip_id, self.resource.date
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Trip> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted trip '{}' (ID: {}) with all of its flights, hotels and activities",
            self.resource.title, self.resource.id
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_create_activity_result() {
        let activity = Activity {
            id: 5,
            trip_id: 2,
            date: date(2024, 6, 2),
            name: Some("Louvre".to_string()),
            time: Some("10:00 AM".to_string()),
            cost: None,
            file_path: None,
            address: None,
            confirmation: None,
        };
        let output = CreateResult::new(activity).to_string();
        assert!(output.starts_with("Added activity with ID: 5 to trip 2 on 2024-06-02\n"));
        assert!(output.contains("- **10:00 AM** Louvre"));
    }

    #[test]
    fn test_delete_trip_result() {
        let trip = Trip {
            id: 9,
            title: "Oslo".to_string(),
            start_date: date(2024, 12, 1),
            end_date: date(2024, 12, 2),
        };
        assert_eq!(
            DeleteResult::new(trip).to_string(),
            "Deleted trip 'Oslo' (ID: 9) with all of its flights, hotels and activities\n"
        );
    }
}
