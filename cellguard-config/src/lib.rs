//! JSON configuration for the CellGuard limit engine
//!
//! Deployments keep their battery limits in a small JSON document so the
//! same firmware image can serve different cell chemistries. Every key is
//! optional; anything left out falls back to the engine defaults.
//!
//! ```json
//! {
//!   "temperature": { "min": 5.0, "max": 40.0 },
//!   "soc": { "min": 20.0, "max": 80.0 },
//!   "charge_rate": { "min": 0.0, "max": 0.7 },
//!   "margins": { "temperature": 3.0 },
//!   "warnings": { "charge_rate": false },
//!   "charge_rate_floor_warning": true
//! }
//! ```
//!
//! Loading never produces an engine from a configuration the engine would
//! reject: parse errors and limit errors are both reported as [`LoadError`].
//!
//! ```rust
//! use cellguard_config::engine_from_json_str;
//! use cellguard_core::{BatterySnapshot, Parameter};
//!
//! let engine = engine_from_json_str(r#"{ "temperature": { "min": 5.0, "max": 40.0 } }"#)?;
//! assert_eq!(engine.spec(Parameter::Temperature).max(), 40.0);
//! assert!(!engine.is_ok(&BatterySnapshot::new(42.0, 50.0, 0.5)));
//! # Ok::<(), cellguard_config::LoadError>(())
//! ```

use std::{fs, path::Path};

use cellguard_core::{ConfigError, LimitConfig, LimitEngine};

/// Configuration loading errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum LoadError {
    /// File could not be read
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Document is not valid JSON or has unknown keys
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Document parsed but the limits are unusable
    #[error("Invalid limits: {0}")]
    Invalid(#[from] ConfigError),
}

/// Parse a configuration document
pub fn from_json_str(json: &str) -> Result<LimitConfig, LoadError> {
    let config: LimitConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Read and parse a configuration file
pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<LimitConfig, LoadError> {
    let path = path.as_ref();
    log::debug!("Loading limit configuration from {}", path.display());
    let json = fs::read_to_string(path)?;
    from_json_str(&json).map_err(|err| {
        log::warn!("Rejected limit configuration {}: {}", path.display(), err);
        err
    })
}

/// Render a configuration as pretty-printed JSON
pub fn to_json_string(config: &LimitConfig) -> Result<String, LoadError> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Parse a document and build an engine from it
pub fn engine_from_json_str(json: &str) -> Result<LimitEngine, LoadError> {
    Ok(LimitEngine::new(from_json_str(json)?)?)
}

/// Read a file and build an engine from it
pub fn engine_from_json_file<P: AsRef<Path>>(path: P) -> Result<LimitEngine, LoadError> {
    Ok(LimitEngine::new(from_json_file(path)?)?)
}
