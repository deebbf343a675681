mod climate_data;
pub mod schema;
mod sqlite;

pub use climate_data::*;
pub use sqlite::ClimateDatabase;

use time::Date;

/// A weather-reporting location.
///
/// Only `station` is used by the queries; the rest is carried as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub station: String,
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
}

/// One daily observation at a station.
///
/// `station` is not checked against the station table.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub station: String,
    pub date: Date,
    /// Precipitation in inches, missing on some days
    pub prcp: Option<f64>,
    /// Observed temperature in degrees Fahrenheit
    pub tobs: f64,
}
