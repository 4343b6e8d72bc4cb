//! Limit Events
//!
//! ## Overview
//!
//! Every evaluation produces zero or more events. The engine never prints
//! or logs them; it hands them to the caller, who decides whether they go
//! to a console, a log file or a telemetry bus.
//!
//! Two kinds exist:
//!
//! - **Violation**: the value is outside its hard `[min, max]` range. Any
//!   violation makes the verdict fail.
//! - **Warning**: the value is still in range but inside the tolerance band
//!   next to one of the bounds. Warnings never affect the verdict.
//!
//! ```text
//!   min        min+margin            max-margin        max
//!    |-----------|------------------------|-------------|
//!  Low  ApproachingLow         (quiet)       ApproachingHigh  High
//! ```
//!
//! Events are `Copy` and carry no heap data so they can sit in fixed
//! buffers on devices without an allocator.

use core::fmt;

use crate::parameter::Parameter;

/// Which hard bound a violation crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoundKind {
    /// Value below the minimum
    Low,
    /// Value above the maximum
    High,
}

/// Which warning band a value sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WarningZone {
    /// Within `margin` of the minimum
    ApproachingLow,
    /// Within `margin` of the maximum
    ApproachingHigh,
}

/// Outcome of one check on one parameter
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Event {
    /// Hard limit crossed
    Violation {
        /// Parameter that failed
        parameter: Parameter,
        /// Measured value
        value: f32,
        /// Bound that was crossed
        bound_kind: BoundKind,
    },

    /// In range, but close to an edge
    Warning {
        /// Parameter nearing a bound
        parameter: Parameter,
        /// Measured value
        value: f32,
        /// Band the value sits in
        zone: WarningZone,
    },
}

impl Event {
    /// Parameter this event is about
    pub const fn parameter(&self) -> Parameter {
        match self {
            Event::Violation { parameter, .. } | Event::Warning { parameter, .. } => *parameter,
        }
    }

    /// Measured value that produced the event
    pub const fn value(&self) -> f32 {
        match self {
            Event::Violation { value, .. } | Event::Warning { value, .. } => *value,
        }
    }

    /// True for hard-limit violations
    pub const fn is_violation(&self) -> bool {
        matches!(self, Event::Violation { .. })
    }

    /// True for early warnings
    pub const fn is_warning(&self) -> bool {
        matches!(self, Event::Warning { .. })
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.parameter().unit();
        match self {
            Event::Violation { parameter, value, bound_kind } => {
                let side = match bound_kind {
                    BoundKind::Low => "below minimum",
                    BoundKind::High => "above maximum",
                };
                write!(f, "{} {}{} {}", parameter, value, unit, side)
            }
            Event::Warning { parameter, value, zone } => {
                let side = match zone {
                    WarningZone::ApproachingLow => "approaching minimum",
                    WarningZone::ApproachingHigh => "approaching maximum",
                };
                write!(f, "{} {}{} {}", parameter, value, unit, side)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Event {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Event::Violation { parameter, value, bound_kind: BoundKind::Low } =>
                defmt::write!(fmt, "{} {} below min", parameter.name(), value),
            Event::Violation { parameter, value, bound_kind: BoundKind::High } =>
                defmt::write!(fmt, "{} {} above max", parameter.name(), value),
            Event::Warning { parameter, value, zone: WarningZone::ApproachingLow } =>
                defmt::write!(fmt, "{} {} near min", parameter.name(), value),
            Event::Warning { parameter, value, zone: WarningZone::ApproachingHigh } =>
                defmt::write!(fmt, "{} {} near max", parameter.name(), value),
        }
    }
}
