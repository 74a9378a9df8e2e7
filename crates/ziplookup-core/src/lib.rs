//! Domain types shared across the ziplookup crates: the address parser, the
//! lookup result set, and environment-driven configuration.

pub mod address;
pub mod app_config;
pub mod config;
pub mod results;

use thiserror::Error;

pub use address::{parse_address, AddressError, ParsedAddress};
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use results::{Candidate, ResultSet};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
