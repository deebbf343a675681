use async_trait::async_trait;

use super::{Measurement, Station};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to query sqlite: {0}")]
    Query(#[from] sqlx::Error),
    #[error("Stored date '{value}' in table {table} is not a valid YYYY-MM-DD date: {source}")]
    StoredDate {
        table: &'static str,
        value: String,
        source: time::error::Parse,
    },
    #[error("Table '{table}' is missing required columns: {columns}")]
    Schema { table: &'static str, columns: String },
}

/// Read-only access to the climate dataset.
///
/// Both collections come back in dataset (insertion) order.
#[async_trait]
pub trait ClimateData: Send + Sync {
    async fn stations(&self) -> Result<Vec<Station>, Error>;
    async fn measurements(&self) -> Result<Vec<Measurement>, Error>;
}
