//! Warning-zone check
//!
//! Zones are closed intervals measured inward from each bound:
//!
//! ```text
//! low zone:  [min, min + margin]
//! high zone: [max - margin, max]
//! ```
//!
//! The low zone is tested first, so when a wide margin makes the zones
//! overlap, a value in the overlap reports `ApproachingLow`.

use crate::{events::WarningZone, parameter::ParameterSpec};

/// Return the warning zone `value` falls in, if any.
///
/// Disabled warnings, a disabled low zone and non-finite values all yield
/// `None`. The hard-limit outcome is not consulted.
pub fn check_zone(spec: &ParameterSpec, value: f32) -> Option<WarningZone> {
    if !spec.warnings_enabled() || !value.is_finite() {
        return None;
    }

    let margin = spec.warning_margin();
    let (min, max) = (spec.min(), spec.max());

    if spec.low_zone_enabled() && min <= value && value <= min + margin {
        Some(WarningZone::ApproachingLow)
    } else if max - margin <= value && value <= max {
        Some(WarningZone::ApproachingHigh)
    } else {
        None
    }
}
