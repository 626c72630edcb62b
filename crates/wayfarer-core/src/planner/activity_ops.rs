//! Activity operations for the Planner.

use super::Planner;
use crate::{
    error::Result,
    models::Activity,
    params::{AddActivity, DayQuery},
};

impl Planner {
    /// Schedules an activity on one day of a trip.
    ///
    /// The time is stored verbatim; it is only interpreted when an itinerary
    /// is built.
    pub async fn add_activity(&self, params: &AddActivity) -> Result<Activity> {
        let trip_id = params.trip_id;
        let date = params.parsed_date()?;
        let activity = params.to_new_activity();
        self.with_database(move |db| db.add_activity_to_day(trip_id, date, &activity))
            .await
    }

    /// Activities on one day, in storage order and not sorted by time.
    pub async fn activities_on(&self, params: &DayQuery) -> Result<Vec<Activity>> {
        let trip_id = params.trip_id;
        let date = params.parsed_date()?;
        self.with_database(move |db| db.get_itinerary_for_trip(trip_id, date))
            .await
    }
}
