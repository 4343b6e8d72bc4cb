//! Limit-evaluation engine for CellGuard
//!
//! Decides whether a battery's instantaneous temperature, state of charge
//! and charge rate are inside their safe operating bounds, and warns when a
//! value is closing in on a bound before it actually crosses it.
//!
//! Key constraints:
//! - Pure decision logic: no I/O, no printing, no global state
//! - No heap allocation in the evaluation path
//! - Constant-time evaluation (three parameters, two checks each)
//!
//! ```no_run
//! use cellguard_core::{BatterySnapshot, LimitEngine};
//!
//! let engine = LimitEngine::default();
//! let verdict = engine.evaluate(&BatterySnapshot::new(25.0, 70.0, 0.7));
//!
//! if !verdict.ok() {
//!     // stop charging
//! }
//! for event in verdict.events() {
//!     // render however the caller likes
//!     let _ = event;
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod checks;
pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod events;
pub mod parameter;
pub mod sink;
pub mod snapshot;
pub mod verdict;

// Public API
pub use config::{LimitConfig, Margins, Range, WarningToggles};
pub use engine::{battery_is_ok, LimitEngine};
pub use errors::{ConfigError, ConfigResult};
pub use events::{BoundKind, Event, WarningZone};
pub use parameter::{Parameter, ParameterSpec};
pub use sink::EventSink;
pub use snapshot::BatterySnapshot;
pub use verdict::{EventList, Verdict};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
