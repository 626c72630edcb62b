//! Tests for the planner module.

use jiff::civil::date;
use tempfile::TempDir;

use super::*;
use crate::params::{AddActivity, AddFlight, AddHotel, CreateTrip, DayQuery, DeleteTrip, Id};

/// Helper function to create a test planner
async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

fn trip_params(title: &str, start: &str, end: &str) -> CreateTrip {
    CreateTrip {
        title: title.to_string(),
        start_date: start.to_string(),
        end_date: end.to_string(),
    }
}

fn activity_params(trip_id: u64, day: &str, name: &str, time: Option<&str>) -> AddActivity {
    AddActivity {
        trip_id,
        date: day.to_string(),
        name: Some(name.to_string()),
        time: time.map(str::to_string),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_builder_creates_parent_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("dir").join("trips.db");

    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");

    assert!(db_path.exists());
    assert_eq!(planner.database_path(), db_path.as_path());
}

#[tokio::test]
async fn test_create_trip_parses_dates() {
    let (_temp_dir, planner) = create_test_planner().await;

    let trip = planner
        .create_trip(&trip_params("Paris", "2024-06-01", "2024-06-03"))
        .await
        .expect("Failed to create trip");

    assert_eq!(trip.title, "Paris");
    assert_eq!(trip.start_date, date(2024, 6, 1));
    assert_eq!(trip.end_date, date(2024, 6, 3));

    let fetched = planner
        .get_trip(&Id { id: trip.id })
        .await
        .expect("Failed to get trip");
    assert_eq!(fetched, Some(trip));
}

#[tokio::test]
async fn test_create_trip_rejects_malformed_date() {
    let (_temp_dir, planner) = create_test_planner().await;

    let result = planner
        .create_trip(&trip_params("Paris", "June 1st", "2024-06-03"))
        .await;

    assert!(matches!(
        result,
        Err(PlannerError::InvalidInput { ref field, .. }) if field == "start_date"
    ));
    assert!(planner.all_trips().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_trips_summarizes_bookings() {
    let (_temp_dir, planner) = create_test_planner().await;

    let trip = planner
        .create_trip(&trip_params("Rome", "2024-09-10", "2024-09-12"))
        .await
        .unwrap();
    planner
        .add_flight(&AddFlight {
            trip_id: trip.id,
            cost: 300.0,
            airline: Some("ITA".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    planner
        .add_hotel(&AddHotel {
            trip_id: trip.id,
            cost: 450.0,
            name: Some("Hotel Roma".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    planner
        .add_activity(&AddActivity {
            cost: Some(25.5),
            ..activity_params(trip.id, "2024-09-11", "Colosseum", Some("9:00 AM"))
        })
        .await
        .unwrap();

    let summaries = planner.list_trips().await.expect("Failed to list trips");

    assert_eq!(summaries.0.len(), 1);
    let summary = &summaries.0[0];
    assert_eq!(summary.title, "Rome");
    assert_eq!(summary.flight_count, 1);
    assert_eq!(summary.hotel_count, 1);
    assert_eq!(summary.activity_count, 1);
    assert_eq!(summary.total_cost, 775.5);
}

#[tokio::test]
async fn test_add_children_to_missing_trip() {
    let (_temp_dir, planner) = create_test_planner().await;

    let flight = planner
        .add_flight(&AddFlight {
            trip_id: 42,
            ..Default::default()
        })
        .await;
    assert!(matches!(flight, Err(PlannerError::TripNotFound { id: 42 })));

    let activity = planner
        .add_activity(&activity_params(42, "2024-01-01", "Ghost tour", None))
        .await;
    assert!(matches!(activity, Err(PlannerError::TripNotFound { id: 42 })));
}

#[tokio::test]
async fn test_activities_on_keeps_storage_order() {
    let (_temp_dir, planner) = create_test_planner().await;

    let trip = planner
        .create_trip(&trip_params("Paris", "2024-06-01", "2024-06-03"))
        .await
        .unwrap();
    for (name, time) in [("Dinner", "7:00 PM"), ("Breakfast", "8:00 AM")] {
        planner
            .add_activity(&activity_params(trip.id, "2024-06-02", name, Some(time)))
            .await
            .unwrap();
    }

    let raw = planner
        .activities_on(&DayQuery {
            trip_id: trip.id,
            date: "2024-06-02".to_string(),
        })
        .await
        .unwrap();

    let names: Vec<_> = raw.iter().filter_map(|a| a.name.as_deref()).collect();
    assert_eq!(names, vec!["Dinner", "Breakfast"]);
}

#[tokio::test]
async fn test_itinerary_sorts_each_day() {
    let (_temp_dir, planner) = create_test_planner().await;

    let trip = planner
        .create_trip(&trip_params("Paris", "2024-06-01", "2024-06-03"))
        .await
        .unwrap();
    for (name, time) in [
        ("Dinner", Some("7:00 PM")),
        ("Souvenirs", None),
        ("Breakfast", Some("8:00 AM")),
    ] {
        planner
            .add_activity(&activity_params(trip.id, "2024-06-02", name, time))
            .await
            .unwrap();
    }

    let itinerary = planner
        .itinerary(&Id { id: trip.id })
        .await
        .unwrap()
        .expect("trip should exist");

    assert_eq!(itinerary.len(), 3);
    assert!(itinerary.get(date(2024, 6, 1)).unwrap().is_empty());
    assert!(itinerary.get(date(2024, 6, 3)).unwrap().is_empty());

    let names: Vec<_> = itinerary
        .get(date(2024, 6, 2))
        .unwrap()
        .activities
        .iter()
        .filter_map(|a| a.name.as_deref())
        .collect();
    assert_eq!(names, vec!["Breakfast", "Dinner", "Souvenirs"]);
}

#[tokio::test]
async fn test_itinerary_for_missing_trip() {
    let (_temp_dir, planner) = create_test_planner().await;
    assert!(planner.itinerary(&Id { id: 7 }).await.unwrap().is_none());
    assert!(planner.show_trip(&Id { id: 7 }).await.unwrap().is_none());
}

#[tokio::test]
async fn test_itinerary_fails_on_malformed_time() {
    let (_temp_dir, planner) = create_test_planner().await;

    let trip = planner
        .create_trip(&trip_params("Paris", "2024-06-01", "2024-06-01"))
        .await
        .unwrap();
    planner
        .add_activity(&activity_params(trip.id, "2024-06-01", "Lunch", Some("noonish")))
        .await
        .unwrap();

    let result = planner.itinerary(&Id { id: trip.id }).await;
    assert!(matches!(result, Err(PlannerError::InvalidTimeOfDay { .. })));
}

#[tokio::test]
async fn test_show_trip_collects_everything() {
    let (_temp_dir, planner) = create_test_planner().await;

    let trip = planner
        .create_trip(&trip_params("Tokyo", "2024-03-30", "2024-04-01"))
        .await
        .unwrap();
    planner
        .add_flight(&AddFlight {
            trip_id: trip.id,
            cost: 900.0,
            ..Default::default()
        })
        .await
        .unwrap();
    planner
        .add_activity(&AddActivity {
            cost: Some(100.0),
            ..activity_params(trip.id, "2024-03-31", "Shinjuku Gyoen", Some("10:00 AM"))
        })
        .await
        .unwrap();

    let details = planner
        .show_trip(&Id { id: trip.id })
        .await
        .unwrap()
        .expect("trip should exist");

    assert_eq!(details.trip, trip);
    assert_eq!(details.flights.len(), 1);
    assert!(details.hotels.is_empty());
    assert_eq!(details.itinerary.len(), 3);
    assert_eq!(details.itinerary.activity_count(), 1);
    assert_eq!(details.total_cost(), 1000.0);
}

#[tokio::test]
async fn test_delete_trip_requires_confirmation() {
    let (_temp_dir, planner) = create_test_planner().await;

    let trip = planner
        .create_trip(&trip_params("Oslo", "2024-12-01", "2024-12-02"))
        .await
        .unwrap();

    let result = planner
        .delete_trip(&DeleteTrip {
            id: trip.id,
            confirmed: false,
        })
        .await;
    assert!(matches!(
        result,
        Err(PlannerError::InvalidInput { ref field, .. }) if field == "confirmed"
    ));
    assert!(planner.get_trip(&Id { id: trip.id }).await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_trip_removes_children() {
    let (_temp_dir, planner) = create_test_planner().await;

    let trip = planner
        .create_trip(&trip_params("Oslo", "2024-12-01", "2024-12-02"))
        .await
        .unwrap();
    planner
        .add_hotel(&AddHotel {
            trip_id: trip.id,
            cost: 200.0,
            ..Default::default()
        })
        .await
        .unwrap();
    planner
        .add_activity(&activity_params(trip.id, "2024-12-01", "Fjord cruise", None))
        .await
        .unwrap();

    let deleted = planner
        .delete_trip(&DeleteTrip {
            id: trip.id,
            confirmed: true,
        })
        .await
        .unwrap();
    assert_eq!(deleted, Some(trip.clone()));

    assert!(planner.get_trip(&Id { id: trip.id }).await.unwrap().is_none());
    assert!(planner.hotels(&Id { id: trip.id }).await.unwrap().is_empty());
    assert!(planner
        .activities_on(&DayQuery {
            trip_id: trip.id,
            date: "2024-12-01".to_string(),
        })
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_delete_missing_trip_returns_none() {
    let (_temp_dir, planner) = create_test_planner().await;

    let deleted = planner
        .delete_trip(&DeleteTrip {
            id: 99,
            confirmed: true,
        })
        .await
        .expect("deleting a missing trip is not an error");
    assert!(deleted.is_none());
}
