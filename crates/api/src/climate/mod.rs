mod error;
mod models;
mod service;

pub use error::*;
pub use models::*;
pub use service::*;
