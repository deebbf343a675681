pub mod climate;
pub mod dates;
pub mod db;
pub mod routes;
mod startup;
pub mod templates;
mod utils;

pub use climate::{
    ClimateService, Error, ErrorBody, Message, Precipitation, TemperatureObservation,
    TemperatureSummary,
};
pub use db::{ClimateData, ClimateDatabase, Measurement, Station};
pub use routes::*;
pub use startup::*;
pub use utils::*;
