use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, warn};

use super::{ErrorBody, Message};
use crate::db;

pub const NO_MEASUREMENTS: &str = "No measurements available in the dataset.";
pub const NO_DATA_FOR_START: &str = "No data available for the specified start date.";
pub const NO_DATA_FOR_RANGE: &str = "No data available for the specified date range.";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(
        "Invalid date format '{0}'. Please provide dates in the 'YYYY-MM-DD' or 'YYYYMMDD' format."
    )]
    InvalidDateFormat(String),
    /// Informational: the query matched nothing. Rendered as a message, not an error.
    #[error("{0}")]
    DataUnavailable(&'static str),
    #[error("{0}")]
    Unexpected(#[from] db::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidDateFormat(_) => {
                warn!("rejected request: {}", self);
                let body = ErrorBody {
                    error: self.to_string(),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            Error::DataUnavailable(message) => {
                let body = Message {
                    message: message.to_string(),
                };
                (StatusCode::OK, Json(body)).into_response()
            }
            Error::Unexpected(e) => {
                error!("error querying climate data: {}", e);
                let body = ErrorBody {
                    error: e.to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
