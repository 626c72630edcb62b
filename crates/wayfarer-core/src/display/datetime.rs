//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

use crate::itinerary::trip_days;

/// An inclusive trip range, shown as `MM/DD/YYYY - MM/DD/YYYY (N days)`.
///
/// A reversed range is printed as stored and counts zero days.
pub struct TripDates<'a> {
    pub start: &'a Date,
    pub end: &'a Date,
}

impl fmt::Display for TripDates<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = trip_days(*self.start, *self.end).len();
        write!(
            f,
            "{} - {} ({})",
            self.start.strftime("%m/%d/%Y"),
            self.end.strftime("%m/%d/%Y"),
            super::count_of(days, "day", "days")
        )
    }
}

/// Long form of a single day, e.g. `Saturday, June 01, 2024`.
pub struct DayHeading<'a>(pub &'a Date);

impl fmt::Display for DayHeading<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%A, %B %d, %Y"))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_trip_dates_counts_inclusive_days() {
        let start = date(2024, 6, 1);
        let end = date(2024, 6, 3);
        assert_eq!(
            TripDates { start: &start, end: &end }.to_string(),
            "06/01/2024 - 06/03/2024 (3 days)"
        );
        assert_eq!(
            TripDates { start: &start, end: &start }.to_string(),
            "06/01/2024 - 06/01/2024 (1 day)"
        );
    }

    #[test]
    fn test_trip_dates_reversed_range() {
        let start = date(2024, 6, 5);
        let end = date(2024, 6, 1);
        assert_eq!(
            TripDates { start: &start, end: &end }.to_string(),
            "06/05/2024 - 06/01/2024 (0 days)"
        );
    }

    #[test]
    fn test_day_heading() {
        assert_eq!(
            DayHeading(&date(2024, 2, 29)).to_string(),
            "Thursday, February 29, 2024"
        );
    }
}
