use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;
use utoipa::ToSchema;

time::serde::format_description!(iso_date, Date, crate::dates::ISO_DATE);

/// Precipitation (inches) keyed by `YYYY-MM-DD` date.
///
/// One value per date: when several stations report the same day the
/// measurement read last wins.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, ToSchema)]
pub struct Precipitation(pub BTreeMap<String, Option<f64>>);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TemperatureObservation {
    #[serde(with = "iso_date")]
    #[schema(value_type = String, format = Date)]
    pub date: Date,
    /// Observed temperature in degrees Fahrenheit
    pub tobs: f64,
}

/// Min/avg/max temperature over every measurement in a date range.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TemperatureSummary {
    #[serde(with = "iso_date")]
    #[schema(value_type = String, format = Date)]
    pub start_date: Date,
    /// Absent when the range runs through the latest measurement
    #[serde(
        with = "iso_date::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>, format = Date)]
    pub end_date: Option<Date>,
    pub min_temperature: f64,
    pub avg_temperature: f64,
    pub max_temperature: f64,
}

/// Returned when a query matches no data.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Message {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}
