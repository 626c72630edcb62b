//! Trip handler operations that return composite views for the Planner.

use log::debug;

use super::Planner;
use crate::{
    display::TripSummaries,
    error::{PlannerError, Result},
    itinerary::{self, Itinerary},
    models::{Trip, TripDetails, TripSummary},
    params::{DeleteTrip, Id},
};

impl Planner {
    /// Handle listing trips with booking statistics.
    ///
    /// Each summary carries flight, hotel and activity counts together with
    /// the total recorded cost.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use wayfarer_core::PlannerBuilder;
    /// # async {
    /// let planner = PlannerBuilder::new().build().await?;
    /// let summaries = planner.list_trips().await?;
    /// println!("{summaries}");
    /// # Result::<(), wayfarer_core::PlannerError>::Ok(())
    /// # };
    /// ```
    pub async fn list_trips(&self) -> Result<TripSummaries> {
        self.with_database(|db| {
            let summaries = db
                .get_all_trips()?
                .iter()
                .map(|trip| {
                    Ok(TripSummary::new(
                        trip,
                        &db.get_flights_for_trip(trip.id)?,
                        &db.get_hotels_for_trip(trip.id)?,
                        &db.get_activities_for_trip(trip.id)?,
                    ))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(TripSummaries(summaries))
        })
        .await
    }

    /// Handle building the day-by-day itinerary of a trip.
    ///
    /// Returns `None` when the trip does not exist.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidTimeOfDay` if any stored activity time
    /// cannot be read as a 12-hour time.
    pub async fn itinerary(&self, params: &Id) -> Result<Option<Itinerary>> {
        let trip_id = params.id;
        self.with_database(move |db| {
            let Some(trip) = db.get_trip(trip_id)? else {
                return Ok(None);
            };
            itinerary::build(trip.start_date, trip.end_date, |date| {
                db.get_itinerary_for_trip(trip.id, date)
            })
            .map(Some)
        })
        .await
    }

    /// Handle showing a trip with its bookings and itinerary.
    ///
    /// Everything is read over one connection so the view is consistent.
    pub async fn show_trip(&self, params: &Id) -> Result<Option<TripDetails>> {
        let trip_id = params.id;
        self.with_database(move |db| {
            let Some(trip) = db.get_trip(trip_id)? else {
                return Ok(None);
            };
            let flights = db.get_flights_for_trip(trip.id)?;
            let hotels = db.get_hotels_for_trip(trip.id)?;
            let itinerary = itinerary::build(trip.start_date, trip.end_date, |date| {
                db.get_itinerary_for_trip(trip.id, date)
            })?;

            Ok(Some(TripDetails {
                trip,
                flights,
                hotels,
                itinerary,
            }))
        })
        .await
    }

    /// Handle permanently deleting a trip with confirmation.
    ///
    /// Removes the trip together with its activities, flights and hotels.
    /// Uses get-before-delete so the removed trip can be echoed back.
    ///
    /// # Returns
    ///
    /// The deleted trip, or `None` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if `confirmed` is false.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use wayfarer_core::{params::DeleteTrip, PlannerBuilder};
    /// # async {
    /// let planner = PlannerBuilder::new().build().await?;
    /// let deleted = planner.delete_trip(&DeleteTrip { id: 1, confirmed: true }).await?;
    /// # Result::<(), wayfarer_core::PlannerError>::Ok(())
    /// # };
    /// ```
    pub async fn delete_trip(&self, params: &DeleteTrip) -> Result<Option<Trip>> {
        if !params.confirmed {
            return Err(PlannerError::invalid_input("confirmed").with_reason(
                "Trip deletion requires explicit confirmation. Set 'confirmed' to true to remove the trip and all of its bookings and activities.",
            ));
        }

        let id_params = Id { id: params.id };
        let trip = self.get_trip(&id_params).await?;

        if trip.is_some() {
            self.delete_trip_by_id(&id_params).await?;
            debug!("Planner deleted trip {}", params.id);
        }

        Ok(trip)
    }
}
