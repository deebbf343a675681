use anyhow::Context;
use async_trait::async_trait;
use log::{debug, info};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    FromRow,
};
use std::time::Duration;

use super::{
    schema::{self, TableSchema},
    ClimateData, Error, Measurement, Station,
};
use crate::dates::parse_iso_date;

#[derive(FromRow)]
struct StationRow {
    station: String,
    name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    elevation: Option<f64>,
}

impl From<StationRow> for Station {
    fn from(row: StationRow) -> Self {
        Station {
            station: row.station,
            name: row.name,
            latitude: row.latitude,
            longitude: row.longitude,
            elevation: row.elevation,
        }
    }
}

#[derive(FromRow)]
struct MeasurementRow {
    station: String,
    date: String,
    prcp: Option<f64>,
    tobs: f64,
}

impl TryFrom<MeasurementRow> for Measurement {
    type Error = Error;

    fn try_from(row: MeasurementRow) -> Result<Self, Self::Error> {
        let date = parse_iso_date(&row.date).map_err(|source| Error::StoredDate {
            table: schema::MEASUREMENT.name,
            value: row.date.clone(),
            source,
        })?;
        Ok(Measurement {
            station: row.station,
            date,
            prcp: row.prcp,
            tobs: row.tobs,
        })
    }
}

/// The climate dataset in a SQLite file, opened read-only.
pub struct ClimateDatabase {
    pool: SqlitePool,
}

impl ClimateDatabase {
    /// Open `path` read-only and check it carries the expected tables.
    pub async fn open(path: &str) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .pragma("busy_timeout", "5000");

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to open climate database at {}", path))?;

        let db = Self::from_pool(pool);
        db.verify_schema()
            .await
            .with_context(|| format!("Climate database at {} has an unexpected schema", path))?;
        info!("Climate database opened read-only at: {}", path);

        Ok(db)
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fails if any table in [`schema::TABLES`] lacks a required column.
    pub async fn verify_schema(&self) -> Result<(), Error> {
        for table in schema::TABLES {
            let present = self.table_columns(&table).await?;
            let missing = table.missing_columns(&present);
            if !missing.is_empty() {
                return Err(Error::Schema {
                    table: table.name,
                    columns: missing.join(", "),
                });
            }
            debug!("table {} has columns: {}", table.name, present.join(", "));
        }
        Ok(())
    }

    async fn table_columns(&self, table: &TableSchema) -> Result<Vec<String>, Error> {
        let columns: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info(?)")
            .bind(table.name)
            .fetch_all(&self.pool)
            .await?;
        Ok(columns)
    }
}

#[async_trait]
impl ClimateData for ClimateDatabase {
    async fn stations(&self) -> Result<Vec<Station>, Error> {
        let rows: Vec<StationRow> = sqlx::query_as(
            "SELECT station, name, latitude, longitude, elevation FROM station ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;
        debug!("loaded {} stations", rows.len());

        Ok(rows.into_iter().map(Station::from).collect())
    }

    async fn measurements(&self) -> Result<Vec<Measurement>, Error> {
        let rows: Vec<MeasurementRow> =
            sqlx::query_as("SELECT station, date, prcp, tobs FROM measurement ORDER BY rowid")
                .fetch_all(&self.pool)
                .await?;
        debug!("loaded {} measurements", rows.len());

        rows.into_iter().map(Measurement::try_from).collect()
    }
}
