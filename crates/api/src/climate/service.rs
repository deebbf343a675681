use log::{debug, info};
use std::{collections::BTreeMap, sync::Arc};
use time::{Date, Duration};

use super::{
    Error, Precipitation, TemperatureObservation, TemperatureSummary, NO_DATA_FOR_RANGE,
    NO_DATA_FOR_START, NO_MEASUREMENTS,
};
use crate::{
    dates::parse_request_date,
    db::{ClimateData, Measurement},
};

/// Length of the trailing observation window, ending at the latest measurement.
pub const OBSERVATION_WINDOW_DAYS: i64 = 365;

/// Answers the climate queries against an injected, read-only dataset.
pub struct ClimateService {
    data: Arc<dyn ClimateData>,
}

impl ClimateService {
    pub fn new(data: Arc<dyn ClimateData>) -> Self {
        Self { data }
    }

    pub async fn recent_precipitation(&self) -> Result<Precipitation, Error> {
        let measurements = self.data.measurements().await?;
        let precipitation =
            recent_precipitation(&measurements).ok_or(Error::DataUnavailable(NO_MEASUREMENTS))?;
        debug!("precipitation window holds {} dates", precipitation.0.len());
        Ok(precipitation)
    }

    /// Station identifiers in dataset order.
    pub async fn station_ids(&self) -> Result<Vec<String>, Error> {
        let stations = self.data.stations().await?;
        Ok(stations.into_iter().map(|s| s.station).collect())
    }

    pub async fn most_active_station_observations(
        &self,
    ) -> Result<Vec<TemperatureObservation>, Error> {
        let measurements = self.data.measurements().await?;
        let observations = most_active_station_observations(&measurements)
            .ok_or(Error::DataUnavailable(NO_MEASUREMENTS))?;
        Ok(observations)
    }

    /// Both dates are validated before the dataset is read.
    pub async fn temperature_summary(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureSummary, Error> {
        let start_date = parse_request_date(start)
            .ok_or_else(|| Error::InvalidDateFormat(start.to_string()))?;
        let end_date = match end {
            Some(end) => Some(
                parse_request_date(end).ok_or_else(|| Error::InvalidDateFormat(end.to_string()))?,
            ),
            None => None,
        };

        let measurements = self.data.measurements().await?;
        temperature_summary(&measurements, start_date, end_date).ok_or(Error::DataUnavailable(
            if end_date.is_some() {
                NO_DATA_FOR_RANGE
            } else {
                NO_DATA_FOR_START
            },
        ))
    }
}

/// First day of the observation window, or `None` for an empty dataset.
pub fn observation_window_start(measurements: &[Measurement]) -> Option<Date> {
    let latest = measurements.iter().map(|m| m.date).max()?;
    Some(
        latest
            .checked_sub(Duration::days(OBSERVATION_WINDOW_DAYS))
            .unwrap_or(Date::MIN),
    )
}

/// Precipitation for every measurement inside the observation window.
///
/// Dates are the map key, so a later measurement for the same date replaces
/// an earlier one.
pub fn recent_precipitation(measurements: &[Measurement]) -> Option<Precipitation> {
    let window_start = observation_window_start(measurements)?;
    let mut values = BTreeMap::new();
    for m in measurements.iter().filter(|m| m.date >= window_start) {
        values.insert(m.date.to_string(), m.prcp);
    }
    Some(Precipitation(values))
}

/// The station with the most measurements. Ties go to the smallest identifier.
pub fn most_active_station(measurements: &[Measurement]) -> Option<&str> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for m in measurements {
        *counts.entry(m.station.as_str()).or_default() += 1;
    }

    // ascending key order, so only a strictly larger count displaces the current pick
    counts
        .into_iter()
        .fold(None, |best: Option<(&str, usize)>, (station, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((station, count)),
        })
        .map(|(station, _)| station)
}

/// Temperatures of the most active station inside the observation window, in dataset order.
pub fn most_active_station_observations(
    measurements: &[Measurement],
) -> Option<Vec<TemperatureObservation>> {
    let station = most_active_station(measurements)?;
    let window_start = observation_window_start(measurements)?;
    info!("most active station: {}, window starts {}", station, window_start);

    Some(
        measurements
            .iter()
            .filter(|m| m.station == station && m.date >= window_start)
            .map(|m| TemperatureObservation {
                date: m.date,
                tobs: m.tobs,
            })
            .collect(),
    )
}

/// Min/avg/max temperature from `start` through `end` (inclusive), or through the
/// latest data when `end` is `None`. `None` when no measurement falls in range.
pub fn temperature_summary(
    measurements: &[Measurement],
    start: Date,
    end: Option<Date>,
) -> Option<TemperatureSummary> {
    let temperatures: Vec<f64> = measurements
        .iter()
        .filter(|m| m.date >= start && end.map_or(true, |end| m.date <= end))
        .map(|m| m.tobs)
        .collect();

    if temperatures.is_empty() {
        return None;
    }

    let min_temperature = temperatures.iter().copied().fold(f64::INFINITY, f64::min);
    let max_temperature = temperatures
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let avg_temperature = temperatures.iter().sum::<f64>() / temperatures.len() as f64;

    Some(TemperatureSummary {
        start_date: start,
        end_date: end,
        min_temperature,
        avg_temperature,
        max_temperature,
    })
}
