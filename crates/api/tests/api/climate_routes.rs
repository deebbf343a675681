use crate::helpers::{measurement, spawn_app, station, MockClimateAccess};
use axum::http::StatusCode;
use climate_api::{db, ErrorBody, Message, TemperatureObservation, TemperatureSummary};
use serde_json::{json, Value};
use std::sync::Arc;
use time::macros::date;

fn busy_dataset() -> Vec<climate_api::Measurement> {
    vec![
        measurement("USC00519397", date!(2017 - 08 - 21), Some(0.0), 81.0),
        measurement("USC00519281", date!(2017 - 08 - 21), Some(0.56), 76.0),
        measurement("USC00519397", date!(2017 - 08 - 22), Some(0.0), 82.0),
        measurement("USC00519281", date!(2017 - 08 - 22), Some(0.5), 76.0),
        measurement("USC00513117", date!(2017 - 08 - 23), Some(0.08), 82.0),
    ]
}

#[tokio::test]
async fn stations_are_listed_in_dataset_order() {
    let mut climate_data = MockClimateAccess::new();
    climate_data.expect_stations().times(1).returning(|| {
        Ok(vec![
            station("USC00519397"),
            station("USC00513117"),
            station("USC00514830"),
        ])
    });

    let test_app = spawn_app(Arc::new(climate_data));
    let (status, stations): (_, Vec<String>) = test_app.get_json("/api/v1.0/stations").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stations, vec!["USC00519397", "USC00513117", "USC00514830"]);
}

#[tokio::test]
async fn tobs_tie_goes_to_smallest_station_identifier() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_measurements()
        .times(1)
        .returning(|| Ok(busy_dataset()));

    let test_app = spawn_app(Arc::new(climate_data));
    let (status, observations): (_, Vec<TemperatureObservation>) =
        test_app.get_json("/api/v1.0/tobs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        observations,
        vec![
            TemperatureObservation {
                date: date!(2017 - 08 - 21),
                tobs: 76.0
            },
            TemperatureObservation {
                date: date!(2017 - 08 - 22),
                tobs: 76.0
            },
        ]
    );
}

#[tokio::test]
async fn invalid_start_date_is_rejected_without_reading_data() {
    // no expectations: any call on the mock fails the test
    let climate_data = MockClimateAccess::new();
    let test_app = spawn_app(Arc::new(climate_data));

    let (status, body): (_, ErrorBody) = test_app.get_json("/api/v1.0/not-a-date").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.error.contains("Invalid date format 'not-a-date'"));
}

#[tokio::test]
async fn invalid_end_date_is_rejected_without_reading_data() {
    let climate_data = MockClimateAccess::new();
    let test_app = spawn_app(Arc::new(climate_data));

    let (status, body): (_, ErrorBody) =
        test_app.get_json("/api/v1.0/2017-08-01/2017-02-30").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.error.contains("'2017-02-30'"));
}

#[tokio::test]
async fn undecodable_dates_get_json_error_without_reading_data() {
    let climate_data = MockClimateAccess::new();
    let test_app = spawn_app(Arc::new(climate_data));

    let (status, body): (_, ErrorBody) = test_app.get_json("/api/v1.0/%FF").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.error.contains("Invalid date format '%FF'"), "{}", body.error);

    let (status, body): (_, ErrorBody) = test_app.get_json("/api/v1.0/2017-08-01/%FF").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body.error.contains("Invalid date format '2017-08-01/%FF'"),
        "{}",
        body.error
    );
}

#[tokio::test]
async fn start_after_all_data_returns_message() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_measurements()
        .times(1)
        .returning(|| Ok(busy_dataset()));

    let test_app = spawn_app(Arc::new(climate_data));
    let (status, body): (_, Value) = test_app.get_json("/api/v1.0/20180101").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "No data available for the specified start date."})
    );
}

#[tokio::test]
async fn range_ending_before_start_returns_message() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_measurements()
        .times(1)
        .returning(|| Ok(busy_dataset()));

    let test_app = spawn_app(Arc::new(climate_data));
    let (status, body): (_, Message) = test_app
        .get_json("/api/v1.0/2017-08-23/2017-08-21")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.message,
        "No data available for the specified date range."
    );
}

#[tokio::test]
async fn both_date_formats_work_on_both_summary_routes() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_measurements()
        .times(4)
        .returning(|| Ok(busy_dataset()));
    let test_app = spawn_app(Arc::new(climate_data));

    for uri in ["/api/v1.0/2017-08-22", "/api/v1.0/20170822"] {
        let (status, summary): (_, TemperatureSummary) = test_app.get_json(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(summary.start_date, date!(2017 - 08 - 22));
        assert_eq!(summary.end_date, None);
        assert_eq!(summary.min_temperature, 76.0);
        assert_eq!(summary.max_temperature, 82.0);
        assert_eq!(summary.avg_temperature, 80.0);
    }

    for uri in ["/api/v1.0/2017-08-21/2017-08-22", "/api/v1.0/20170821/20170822"] {
        let (status, summary): (_, TemperatureSummary) = test_app.get_json(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(summary.end_date, Some(date!(2017 - 08 - 22)));
        assert_eq!(summary.min_temperature, 76.0);
        assert_eq!(summary.max_temperature, 82.0);
        assert_eq!(summary.avg_temperature, 78.75);
    }
}

#[tokio::test]
async fn empty_dataset_returns_message_for_windowed_queries() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_measurements()
        .times(2)
        .returning(|| Ok(vec![]));
    let test_app = spawn_app(Arc::new(climate_data));

    for uri in ["/api/v1.0/precipitation", "/api/v1.0/tobs"] {
        let (status, body): (_, Message) = test_app.get_json(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body.message, "No measurements available in the dataset.");
    }
}

#[tokio::test]
async fn store_failure_becomes_error_response() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_stations()
        .times(1)
        .returning(|| Err(db::Error::Query(sqlx::Error::PoolTimedOut)));

    let test_app = spawn_app(Arc::new(climate_data));
    let (status, body): (_, ErrorBody) = test_app.get_json("/api/v1.0/stations").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.error.starts_with("Failed to query sqlite"));
}

#[tokio::test]
async fn index_lists_routes_as_html() {
    let climate_data = MockClimateAccess::new();
    let test_app = spawn_app(Arc::new(climate_data));

    let (status, body) = test_app.get("/").await;
    let html = String::from_utf8(body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Hawaii Climate API"));
    assert!(html.contains("/api/v1.0/precipitation"));
    assert!(html.contains("/api/v1.0/stations"));
    assert!(html.contains("/api/v1.0/tobs"));
}
