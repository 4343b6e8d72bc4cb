//! Monitored parameters and their validated limit descriptors

use core::fmt;

use crate::{
    constants::WARNING_MARGIN_FRACTION,
    errors::{ConfigError, ConfigResult},
};

/// Battery parameter checked by the engine
///
/// Declaration order is evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Parameter {
    /// Cell temperature in °C
    Temperature,
    /// State of charge in percent
    #[cfg_attr(feature = "serde", serde(rename = "soc"))]
    StateOfCharge,
    /// Charge current as a fraction of rated current
    ChargeRate,
}

impl Parameter {
    /// All parameters, in evaluation order
    pub const ALL: [Parameter; 3] = [
        Parameter::Temperature,
        Parameter::StateOfCharge,
        Parameter::ChargeRate,
    ];

    /// Short machine-friendly name
    pub const fn name(&self) -> &'static str {
        match self {
            Parameter::Temperature => "temperature",
            Parameter::StateOfCharge => "soc",
            Parameter::ChargeRate => "charge_rate",
        }
    }

    /// Display unit
    pub const fn unit(&self) -> &'static str {
        match self {
            Parameter::Temperature => "°C",
            Parameter::StateOfCharge => "%",
            Parameter::ChargeRate => "",
        }
    }

    /// Position in evaluation order
    pub const fn index(&self) -> usize {
        match self {
            Parameter::Temperature => 0,
            Parameter::StateOfCharge => 1,
            Parameter::ChargeRate => 2,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Parameter {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name())
    }
}

/// Default warning margin for a range: a fixed fraction of the maximum.
///
/// Uses the magnitude of `max` so a range sitting entirely below zero still
/// gets a non-negative band.
pub fn default_margin(max: f32) -> f32 {
    libm::fabsf(max) * WARNING_MARGIN_FRACTION
}

/// Validated, immutable limits for one parameter
///
/// Invariants held after construction: `min <= max`, `warning_margin >= 0`,
/// all numbers finite. A margin wider than half the range is allowed; the
/// two warning zones then overlap and the low zone wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSpec {
    parameter: Parameter,
    min: f32,
    max: f32,
    warning_margin: f32,
    warnings_enabled: bool,
    low_zone_enabled: bool,
}

impl ParameterSpec {
    /// Build a spec with the default margin and warnings on
    pub fn new(parameter: Parameter, min: f32, max: f32) -> ConfigResult<Self> {
        Self::with_margin(parameter, min, max, default_margin(max))
    }

    /// Build a spec with an explicit warning margin
    pub fn with_margin(
        parameter: Parameter,
        min: f32,
        max: f32,
        warning_margin: f32,
    ) -> ConfigResult<Self> {
        if !min.is_finite() || !max.is_finite() || !warning_margin.is_finite() {
            return Err(ConfigError::NonFiniteBound { parameter });
        }
        if min > max {
            return Err(ConfigError::InvertedRange { parameter, min, max });
        }
        if warning_margin < 0.0 {
            return Err(ConfigError::NegativeMargin {
                parameter,
                margin: warning_margin,
            });
        }

        Ok(Self::trusted(parameter, min, max, warning_margin))
    }

    /// Build from limits already known to hold the invariants
    pub(crate) const fn trusted(
        parameter: Parameter,
        min: f32,
        max: f32,
        warning_margin: f32,
    ) -> Self {
        Self {
            parameter,
            min,
            max,
            warning_margin,
            warnings_enabled: true,
            low_zone_enabled: true,
        }
    }

    /// Turn warning zones on or off for this parameter
    pub fn warnings(mut self, enabled: bool) -> Self {
        self.warnings_enabled = enabled;
        self
    }

    /// Turn only the low-side warning zone on or off
    pub fn low_zone(mut self, enabled: bool) -> Self {
        self.low_zone_enabled = enabled;
        self
    }

    /// Parameter this spec describes
    pub const fn parameter(&self) -> Parameter {
        self.parameter
    }

    /// Inclusive lower bound
    pub const fn min(&self) -> f32 {
        self.min
    }

    /// Inclusive upper bound
    pub const fn max(&self) -> f32 {
        self.max
    }

    /// Width of each warning band
    pub const fn warning_margin(&self) -> f32 {
        self.warning_margin
    }

    /// Whether warning zones are evaluated at all
    pub const fn warnings_enabled(&self) -> bool {
        self.warnings_enabled
    }

    /// Whether the low-side zone is evaluated (given warnings are enabled)
    pub const fn low_zone_enabled(&self) -> bool {
        self.warnings_enabled && self.low_zone_enabled
    }

    /// True if `value` lies in `[min, max]`
    pub fn contains(&self, value: f32) -> bool {
        self.min <= value && value <= self.max
    }
}
