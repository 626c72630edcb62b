//! Trip operations for the Planner.

use log::debug;

use super::Planner;
use crate::{
    error::Result,
    models::Trip,
    params::{CreateTrip, Id},
};

impl Planner {
    /// Creates a new trip and returns it with its assigned ID.
    ///
    /// Both dates must be `YYYY-MM-DD`. The title may be blank and the end
    /// date may precede the start date; neither is rejected.
    pub async fn create_trip(&self, params: &CreateTrip) -> Result<Trip> {
        let (start_date, end_date) = params.date_range()?;
        let title = params.title.clone();

        let trip = self
            .with_database(move |db| db.create_trip(&title, start_date, end_date))
            .await?;
        debug!("Planner created trip {}", trip.id);
        Ok(trip)
    }

    /// Retrieves a trip by its ID.
    pub async fn get_trip(&self, params: &Id) -> Result<Option<Trip>> {
        let trip_id = params.id;
        self.with_database(move |db| db.get_trip(trip_id)).await
    }

    /// Lists every trip in creation order.
    pub async fn all_trips(&self) -> Result<Vec<Trip>> {
        self.with_database(|db| db.get_all_trips()).await
    }

    /// Permanently deletes a trip and everything attached to it.
    ///
    /// Returns whether a trip was removed. Prefer
    /// [`Planner::delete_trip`], which requires confirmation.
    pub async fn delete_trip_by_id(&self, params: &Id) -> Result<bool> {
        let trip_id = params.id;
        self.with_database(move |db| db.delete_trip(trip_id)).await
    }
}
