use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Production Lookup Service endpoint.
pub const DEFAULT_API_URL: &str =
    "https://45xdbeisu1.execute-api.eu-central-1.amazonaws.com/prod/zip-api";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("ZIPLOOKUP_ENV", "development"))?;
    let log_level = or_default("ZIPLOOKUP_LOG_LEVEL", "info");

    let api_url = or_default("ZIPLOOKUP_API_URL", DEFAULT_API_URL)
        .trim()
        .to_string();
    if api_url.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "ZIPLOOKUP_API_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let request_timeout_secs = parse_u64("ZIPLOOKUP_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("ZIPLOOKUP_USER_AGENT", "ziplookup/0.1 (address-search)");

    Ok(AppConfig {
        env,
        log_level,
        api_url,
        request_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "ZIPLOOKUP_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
