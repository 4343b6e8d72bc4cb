//! Hard-limit check

use crate::parameter::ParameterSpec;

/// Where a value sits relative to its hard range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeStatus {
    /// `min <= value <= max`
    InRange,
    /// `value < min`
    Below,
    /// `value > max`
    Above,
    /// NaN or infinite; counts as outside both bounds
    NonFinite,
}

impl RangeStatus {
    /// True only for [`RangeStatus::InRange`]
    pub const fn passed(&self) -> bool {
        matches!(self, RangeStatus::InRange)
    }
}

/// Classify `value` against the inclusive range in `spec`
pub fn check_range(spec: &ParameterSpec, value: f32) -> RangeStatus {
    if !value.is_finite() {
        RangeStatus::NonFinite
    } else if value < spec.min() {
        RangeStatus::Below
    } else if value > spec.max() {
        RangeStatus::Above
    } else {
        RangeStatus::InRange
    }
}
