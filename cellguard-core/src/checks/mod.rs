//! Per-Parameter Checks
//!
//! ## Overview
//!
//! Each monitored parameter goes through two independent checks:
//!
//! ### 1. Hard-limit check ([`range`])
//! Is the value inside its inclusive `[min, max]` range? Failing this check
//! emits a violation and fails the whole verdict.
//!
//! ### 2. Warning-zone check ([`zone`])
//! Is the value within `margin` of a bound? Runs whether or not the hard
//! check passed, and only emits warnings. At most one warning per
//! parameter; the low zone is tested first.
//!
//! Both checks are pure functions of a [`ParameterSpec`] and a value, so
//! they are safe to call from any thread or interrupt context.
//!
//! ## Non-finite readings
//!
//! NaN and ±infinity are never in range. They violate both bounds at once
//! and never produce a warning:
//! ```rust
//! use cellguard_core::checks::check_parameter;
//! use cellguard_core::{Event, Parameter, ParameterSpec};
//!
//! let spec = ParameterSpec::new(Parameter::Temperature, 0.0, 45.0).unwrap();
//! let mut events = heapless::Vec::<Event, 2>::new();
//! assert!(!check_parameter(&spec, f32::NAN, &mut events));
//! assert_eq!(events.len(), 2);
//! ```

pub mod range;
pub mod zone;

pub use range::{check_range, RangeStatus};
pub use zone::check_zone;

use crate::{
    events::{BoundKind, Event},
    parameter::ParameterSpec,
    sink::EventSink,
};

/// Run both checks for one parameter, emitting events into `sink`.
///
/// Returns `true` if the value passed the hard-limit check.
pub fn check_parameter<S: EventSink + ?Sized>(
    spec: &ParameterSpec,
    value: f32,
    sink: &mut S,
) -> bool {
    let parameter = spec.parameter();
    let status = check_range(spec, value);

    let low = Event::Violation { parameter, value, bound_kind: BoundKind::Low };
    let high = Event::Violation { parameter, value, bound_kind: BoundKind::High };
    match status {
        RangeStatus::InRange => {}
        RangeStatus::Below => sink.emit(&low),
        RangeStatus::Above => sink.emit(&high),
        RangeStatus::NonFinite => {
            sink.emit(&low);
            sink.emit(&high);
        }
    }

    if let Some(zone) = check_zone(spec, value) {
        sink.emit(&Event::Warning { parameter, value, zone });
    }

    status.passed()
}
