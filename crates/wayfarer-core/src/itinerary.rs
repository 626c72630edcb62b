//! Day-by-day itinerary construction.
//!
//! The builder walks a trip's inclusive date range one calendar day at a
//! time, asks a fetcher for that day's activities and orders them by their
//! time of day. It holds no state of its own; the planner supplies a fetcher
//! backed by the database, tests supply one backed by a vector.
//!
//! Times are entered on a 12-hour clock (`8:00 AM`, `7:00 PM`). An activity
//! without a time sorts after every timed activity on the same day, and
//! activities with equal times keep the order the fetcher returned them in.
//! A time that is present but unreadable fails the whole build.
//!
//! ```rust
//! use jiff::civil::date;
//! use wayfarer_core::itinerary;
//!
//! let days = itinerary::trip_days(date(2024, 1, 1), date(2024, 1, 3));
//! assert_eq!(days, vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]);
//! ```

use jiff::{
    civil::{Date, Time},
    ToSpan,
};
use serde::Serialize;

use crate::{
    error::{PlannerError, Result},
    models::Activity,
};

const TIME_OF_DAY_FORMAT: &str = "%I:%M %p";

/// Sort key for an activity within its day.
///
/// Every `At` orders before `Unscheduled`, which acts as the end-of-day
/// sentinel for activities entered without a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    At(Time),
    Unscheduled,
}

/// Parses a 12-hour time such as `8:00 AM` into a [`TimeSlot`].
///
/// Blank input is treated as "no time". The designator is case-insensitive,
/// the hour may or may not be zero padded and the space before the
/// designator is optional (`8:00AM`).
///
/// # Errors
///
/// Returns [`PlannerError::InvalidTimeOfDay`] when non-blank input does not
/// match `H:MM AM` / `H:MM PM`.
pub fn parse_time_of_day(value: &str) -> Result<TimeSlot> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(TimeSlot::Unscheduled);
    }

    let normalized = normalize_time_of_day(trimmed);
    Time::strptime(TIME_OF_DAY_FORMAT, &normalized)
        .map(TimeSlot::At)
        .map_err(|e| PlannerError::InvalidTimeOfDay {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

fn normalize_time_of_day(value: &str) -> String {
    let upper = value.to_ascii_uppercase();
    match upper.find(':') {
        Some(1) => format!("0{upper}"),
        _ => upper,
    }
}

fn slot_of(activity: &Activity) -> Result<TimeSlot> {
    match activity.time.as_deref() {
        Some(time) => parse_time_of_day(time),
        None => Ok(TimeSlot::Unscheduled),
    }
}

/// Orders one day's activities by time of day.
///
/// The sort is stable. Activities without a time go last.
///
/// # Errors
///
/// Fails with [`PlannerError::InvalidTimeOfDay`] if any activity carries an
/// unreadable time; no partial result is returned.
pub fn sort_day(activities: Vec<Activity>) -> Result<Vec<Activity>> {
    let mut keyed = activities
        .into_iter()
        .map(|activity| Ok((slot_of(&activity)?, activity)))
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by_key(|(slot, _)| *slot);

    Ok(keyed.into_iter().map(|(_, activity)| activity).collect())
}

/// Every calendar date from `start` to `end`, both included.
///
/// Returns an empty vector when `end` is before `start`.
pub fn trip_days(start: Date, end: Date) -> Vec<Date> {
    if end < start {
        return Vec::new();
    }
    start
        .series(1.day())
        .take_while(|date| *date <= end)
        .collect()
}

/// One day of an itinerary.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ItineraryDay {
    /// The calendar day
    pub date: Date,
    /// Activities ordered by time of day
    pub activities: Vec<Activity>,
}

impl ItineraryDay {
    /// Whether nothing is planned for this day.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Sum of the costs of this day's activities.
    pub fn total_cost(&self) -> f64 {
        self.activities.iter().filter_map(|a| a.cost).sum()
    }
}

/// Ordered per-day agenda for a trip.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Itinerary {
    days: Vec<ItineraryDay>,
}

impl Itinerary {
    /// Days in chronological order.
    pub fn days(&self) -> &[ItineraryDay] {
        &self.days
    }

    /// Number of days covered.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the itinerary covers no days at all.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// The entry for a given date, if the date is inside the trip.
    pub fn get(&self, date: Date) -> Option<&ItineraryDay> {
        self.days
            .binary_search_by_key(&date, |day| day.date)
            .ok()
            .map(|index| &self.days[index])
    }

    /// Number of activities across all days.
    pub fn activity_count(&self) -> usize {
        self.days.iter().map(|day| day.activities.len()).sum()
    }

    /// Sum of activity costs across all days.
    pub fn total_cost(&self) -> f64 {
        self.days.iter().map(ItineraryDay::total_cost).sum()
    }
}

impl IntoIterator for Itinerary {
    type Item = ItineraryDay;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.into_iter()
    }
}

/// Builds the itinerary for the inclusive range `start..=end`.
///
/// `fetch` is called once per day, in chronological order, and must return
/// that day's activities in storage order. Days without activities are kept.
///
/// # Errors
///
/// Propagates any error from `fetch`, and fails with
/// [`PlannerError::InvalidTimeOfDay`] if a stored time cannot be read.
pub fn build<F>(start: Date, end: Date, mut fetch: F) -> Result<Itinerary>
where
    F: FnMut(Date) -> Result<Vec<Activity>>,
{
    let days = trip_days(start, end)
        .into_iter()
        .map(|date| {
            let activities = sort_day(fetch(date)?)?;
            Ok(ItineraryDay { date, activities })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Itinerary { days })
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use super::*;

    fn activity(id: u64, day: Date, time: Option<&str>) -> Activity {
        Activity {
            id,
            trip_id: 1,
            date: day,
            name: Some(format!("Activity {id}")),
            time: time.map(String::from),
            cost: None,
            file_path: None,
            address: None,
            confirmation: None,
        }
    }

    fn times(activities: &[Activity]) -> Vec<Option<&str>> {
        activities.iter().map(|a| a.time.as_deref()).collect()
    }

    #[test]
    fn test_parse_time_of_day() {
        assert_eq!(
            parse_time_of_day("8:00 AM").unwrap(),
            TimeSlot::At(time(8, 0, 0, 0))
        );
        assert_eq!(
            parse_time_of_day("7:00 PM").unwrap(),
            TimeSlot::At(time(19, 0, 0, 0))
        );
        assert_eq!(
            parse_time_of_day("12:15 AM").unwrap(),
            TimeSlot::At(time(0, 15, 0, 0))
        );
        assert_eq!(
            parse_time_of_day("12:30 PM").unwrap(),
            TimeSlot::At(time(12, 30, 0, 0))
        );
    }

    #[test]
    fn test_parse_time_of_day_is_lenient_about_case_and_padding() {
        assert_eq!(
            parse_time_of_day(" 09:05 pm ").unwrap(),
            TimeSlot::At(time(21, 5, 0, 0))
        );
        assert_eq!(
            parse_time_of_day("9:05 pm").unwrap(),
            TimeSlot::At(time(21, 5, 0, 0))
        );
        assert_eq!(
            parse_time_of_day("8:00AM").unwrap(),
            TimeSlot::At(time(8, 0, 0, 0))
        );
    }

    #[test]
    fn test_blank_time_is_unscheduled() {
        assert_eq!(parse_time_of_day("").unwrap(), TimeSlot::Unscheduled);
        assert_eq!(parse_time_of_day("   ").unwrap(), TimeSlot::Unscheduled);
    }

    #[test]
    fn test_malformed_time_is_an_error() {
        let err = parse_time_of_day("noon").unwrap_err();
        assert!(matches!(
            err,
            PlannerError::InvalidTimeOfDay { ref value, .. } if value == "noon"
        ));
        assert!(parse_time_of_day("19:00").is_err());
    }

    #[test]
    fn test_unscheduled_sorts_after_latest_time() {
        assert!(TimeSlot::At(time(23, 59, 59, 999_999_999)) < TimeSlot::Unscheduled);
    }

    #[test]
    fn test_sort_day_orders_by_time_with_untimed_last() {
        let day = date(2024, 1, 1);
        let sorted = sort_day(vec![
            activity(1, day, Some("7:00 PM")),
            activity(2, day, Some("8:00 AM")),
            activity(3, day, None),
        ])
        .unwrap();

        assert_eq!(times(&sorted), vec![Some("8:00 AM"), Some("7:00 PM"), None]);
    }

    #[test]
    fn test_sort_day_keeps_retrieval_order_for_ties() {
        let day = date(2024, 1, 1);
        let sorted = sort_day(vec![
            activity(1, day, None),
            activity(2, day, Some("10:00 AM")),
            activity(3, day, Some("")),
            activity(4, day, Some("10:00 AM")),
        ])
        .unwrap();

        let ids: Vec<u64> = sorted.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sort_day_fails_on_one_bad_time() {
        let day = date(2024, 1, 1);
        let result = sort_day(vec![
            activity(1, day, Some("8:00 AM")),
            activity(2, day, Some("tomorrow-ish")),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_trip_days_covers_range_inclusively() {
        let days = trip_days(date(2024, 1, 1), date(2024, 1, 3));
        assert_eq!(
            days,
            vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]
        );
    }

    #[test]
    fn test_trip_days_crosses_month_and_leap_day() {
        let days = trip_days(date(2024, 2, 28), date(2024, 3, 1));
        assert_eq!(
            days,
            vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]
        );
    }

    #[test]
    fn test_trip_days_reversed_range_is_empty() {
        assert!(trip_days(date(2024, 6, 5), date(2024, 6, 1)).is_empty());
    }

    #[test]
    fn test_build_includes_days_without_activities() {
        let stored = vec![
            activity(1, date(2024, 1, 2), Some("7:00 PM")),
            activity(2, date(2024, 1, 2), Some("8:00 AM")),
        ];

        let itinerary = build(date(2024, 1, 1), date(2024, 1, 3), |day| {
            Ok(stored.iter().filter(|a| a.date == day).cloned().collect())
        })
        .unwrap();

        assert_eq!(itinerary.len(), 3);
        let dates: Vec<Date> = itinerary.days().iter().map(|d| d.date).collect();
        assert_eq!(
            dates,
            vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]
        );
        assert!(itinerary.days()[0].is_empty());
        assert!(itinerary.days()[2].is_empty());

        let middle = itinerary.get(date(2024, 1, 2)).expect("day exists");
        assert_eq!(
            times(&middle.activities),
            vec![Some("8:00 AM"), Some("7:00 PM")]
        );
        assert_eq!(itinerary.activity_count(), 2);
        assert!(itinerary.get(date(2024, 1, 4)).is_none());
    }

    #[test]
    fn test_build_fetches_each_day_in_order() {
        let mut seen = Vec::new();
        build(date(2024, 1, 30), date(2024, 2, 1), |day| {
            seen.push(day);
            Ok(Vec::new())
        })
        .unwrap();

        assert_eq!(
            seen,
            vec![date(2024, 1, 30), date(2024, 1, 31), date(2024, 2, 1)]
        );
    }

    #[test]
    fn test_build_propagates_fetch_errors() {
        let result = build(date(2024, 1, 1), date(2024, 1, 2), |_| {
            Err(PlannerError::TripNotFound { id: 9 })
        });
        assert!(matches!(result, Err(PlannerError::TripNotFound { id: 9 })));
    }

    #[test]
    fn test_total_cost_sums_days() {
        let mut paid = activity(1, date(2024, 1, 1), Some("9:00 AM"));
        paid.cost = Some(12.5);
        let mut also_paid = activity(2, date(2024, 1, 2), None);
        also_paid.cost = Some(7.5);
        let stored = vec![paid, also_paid, activity(3, date(2024, 1, 2), None)];

        let itinerary = build(date(2024, 1, 1), date(2024, 1, 2), |day| {
            Ok(stored.iter().filter(|a| a.date == day).cloned().collect())
        })
        .unwrap();

        assert!((itinerary.total_cost() - 20.0).abs() < f64::EPSILON);
    }
}
