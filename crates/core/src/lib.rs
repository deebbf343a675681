//! Climate API core library
//!
//! Shared pieces used by the API server:
//! - Configuration file discovery and loading (XDG-compliant)
//! - Filesystem checks
//! - Application constants

mod config;
pub mod fs;

pub use config::{find_config_file, load_config, ConfigSource};
pub use fs::is_file;

/// Application name used for config search paths
pub const APP_NAME: &str = "climate-api";

/// Default port the API listens on
pub const DEFAULT_API_PORT: u16 = 5000;

/// Default location of the climate SQLite database
pub const DEFAULT_DATABASE_PATH: &str = "./Resources/hawaii.sqlite";
