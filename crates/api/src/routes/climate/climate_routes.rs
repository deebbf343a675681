use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::Uri,
    Json,
};
use log::debug;
use std::sync::Arc;

use crate::{
    climate::{Error, ErrorBody, Precipitation, TemperatureObservation, TemperatureSummary},
    AppState,
};

const SUMMARY_PREFIX: &str = "/api/v1.0/";

#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    responses(
        (status = OK, description = "Precipitation for the last 365 days of data, keyed by date", body = Precipitation),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the climate data", body = ErrorBody)
    ))]
pub async fn precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Precipitation>, Error> {
    state.climate.recent_precipitation().await.map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    responses(
        (status = OK, description = "Identifiers of every station in the dataset", body = Vec<String>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the climate data", body = ErrorBody)
    ))]
pub async fn stations(State(state): State<Arc<AppState>>) -> Result<Json<Vec<String>>, Error> {
    state.climate.station_ids().await.map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    responses(
        (status = OK, description = "Last 365 days of temperature observations for the most active station", body = Vec<TemperatureObservation>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the climate data", body = ErrorBody)
    ))]
pub async fn tobs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TemperatureObservation>>, Error> {
    state
        .climate
        .most_active_station_observations()
        .await
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    params(
        ("start" = String, Path, description = "First day of the summary, YYYY-MM-DD or YYYYMMDD"),
    ),
    responses(
        (status = OK, description = "Temperature summary from the start date through the latest data, or a message when nothing matches", body = TemperatureSummary),
        (status = BAD_REQUEST, description = "Start date could not be parsed", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the climate data", body = ErrorBody)
    ))]
pub async fn start_summary(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    start: Result<Path<String>, PathRejection>,
) -> Result<Json<TemperatureSummary>, Error> {
    let Path(start) = start.map_err(|rejection| undecodable_dates(&uri, rejection))?;
    state
        .climate
        .temperature_summary(&start, None)
        .await
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    params(
        ("start" = String, Path, description = "First day of the summary, YYYY-MM-DD or YYYYMMDD"),
        ("end" = String, Path, description = "Last day of the summary (inclusive), YYYY-MM-DD or YYYYMMDD"),
    ),
    responses(
        (status = OK, description = "Temperature summary over the date range, or a message when nothing matches", body = TemperatureSummary),
        (status = BAD_REQUEST, description = "A date could not be parsed", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the climate data", body = ErrorBody)
    ))]
pub async fn range_summary(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    dates: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<TemperatureSummary>, Error> {
    let Path((start, end)) = dates.map_err(|rejection| undecodable_dates(&uri, rejection))?;
    state
        .climate
        .temperature_summary(&start, Some(&end))
        .await
        .map(Json)
}

/// Path segments that are not valid UTF-8 once percent-decoded never reach the
/// date parser; report them as the raw, still-encoded segments.
fn undecodable_dates(uri: &Uri, rejection: PathRejection) -> Error {
    debug!("summary path {} rejected: {}", uri.path(), rejection.body_text());
    let raw = uri.path();
    Error::InvalidDateFormat(raw.strip_prefix(SUMMARY_PREFIX).unwrap_or(raw).to_string())
}
