//! Constants for CellGuard Core
//!
//! Default safe-operating-area limits and sizing constants live here so the
//! engine, the configuration layer and the tests agree on a single source.
//!
//! ## Organization
//!
//! - **Limits**: default hard bounds and the warning-margin fraction
//! - **Buffers**: fixed capacities used in the evaluation path

/// Default battery operating limits and warning tolerance.
pub mod limits;

/// Fixed capacities for event storage.
pub mod buffers;

pub use limits::{
    TEMP_MIN_C, TEMP_MAX_C,
    SOC_MIN_PCT, SOC_MAX_PCT,
    CHARGE_RATE_MIN, CHARGE_RATE_MAX,
    WARNING_MARGIN_FRACTION,
};

pub use buffers::{MAX_EVENTS, MAX_EVENTS_PER_PARAMETER, PARAMETER_COUNT};
