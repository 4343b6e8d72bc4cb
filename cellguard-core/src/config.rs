//! Engine Configuration
//!
//! ## Overview
//!
//! A [`LimitConfig`] is a plain value describing the acceptable range of
//! each parameter plus how early to warn. It is checked once, when an
//! engine is built, and turned into three immutable [`ParameterSpec`]s.
//!
//! ## Defaults
//!
//! | Parameter   | Range        | Margin (5% of max) | Warnings |
//! |-------------|--------------|--------------------|----------|
//! | temperature | 0 – 45 °C    | 2.25 °C            | on       |
//! | soc         | 20 – 80 %    | 4 %                | on       |
//! | charge_rate | 0 – 0.8      | 0.04 (ceiling)     | on       |
//!
//! The charge-rate floor is a domain boundary: a negative rate is a
//! violation, but by default charge rate only warns near its ceiling, so an
//! idle battery stays quiet. [`LimitConfig::symmetric_charge_rate`] (or
//! [`LimitConfig::with_charge_rate_floor_warning`]) adds the low-side zone.
//!
//! ## Customization
//!
//! ```rust
//! use cellguard_core::{LimitConfig, LimitEngine, Parameter, Range};
//!
//! // Cold-climate pack with a heater: allow charging down to 5 °C only,
//! // warn 3 °C before either temperature bound.
//! let config = LimitConfig::default()
//!     .with_temperature(Range::new(5.0, 40.0))
//!     .with_margin(Parameter::Temperature, 3.0);
//!
//! let engine = LimitEngine::new(config)?;
//! assert_eq!(engine.spec(Parameter::Temperature).min(), 5.0);
//! # Ok::<(), cellguard_core::ConfigError>(())
//! ```

use crate::{
    constants::limits::{
        CHARGE_RATE_MAX, CHARGE_RATE_MIN, SOC_MAX_PCT, SOC_MIN_PCT, TEMP_MAX_C, TEMP_MIN_C,
    },
    errors::ConfigResult,
    parameter::{default_margin, Parameter, ParameterSpec},
};

/// Inclusive `[min, max]` range
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct Range {
    /// Lower bound
    pub min: f32,
    /// Upper bound
    pub max: f32,
}

impl Range {
    /// Create a range; validity is checked when the engine is built
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

/// Per-parameter warning margins; `None` means 5% of that parameter's max
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Margins {
    /// Temperature margin in °C
    pub temperature: Option<f32>,
    /// SoC margin in percent
    pub soc: Option<f32>,
    /// Charge-rate margin
    pub charge_rate: Option<f32>,
}

impl Margins {
    fn get(&self, parameter: Parameter) -> Option<f32> {
        match parameter {
            Parameter::Temperature => self.temperature,
            Parameter::StateOfCharge => self.soc,
            Parameter::ChargeRate => self.charge_rate,
        }
    }

    fn slot(&mut self, parameter: Parameter) -> &mut Option<f32> {
        match parameter {
            Parameter::Temperature => &mut self.temperature,
            Parameter::StateOfCharge => &mut self.soc,
            Parameter::ChargeRate => &mut self.charge_rate,
        }
    }
}

/// Per-parameter warning switches
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct WarningToggles {
    /// Temperature warnings
    pub temperature: bool,
    /// SoC warnings
    pub soc: bool,
    /// Charge-rate warnings
    pub charge_rate: bool,
}

impl Default for WarningToggles {
    fn default() -> Self {
        Self::all(true)
    }
}

impl WarningToggles {
    /// Every parameter set to `enabled`
    pub const fn all(enabled: bool) -> Self {
        Self {
            temperature: enabled,
            soc: enabled,
            charge_rate: enabled,
        }
    }

    fn get(&self, parameter: Parameter) -> bool {
        match parameter {
            Parameter::Temperature => self.temperature,
            Parameter::StateOfCharge => self.soc,
            Parameter::ChargeRate => self.charge_rate,
        }
    }

    fn slot(&mut self, parameter: Parameter) -> &mut bool {
        match parameter {
            Parameter::Temperature => &mut self.temperature,
            Parameter::StateOfCharge => &mut self.soc,
            Parameter::ChargeRate => &mut self.charge_rate,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct LimitConfig {
    /// Temperature range in °C
    pub temperature: Range,
    /// SoC range in percent
    pub soc: Range,
    /// Charge-rate range
    pub charge_rate: Range,
    /// Warning margins
    pub margins: Margins,
    /// Warning switches
    pub warnings: WarningToggles,
    /// Whether charge rate also warns near its floor (off by default)
    pub charge_rate_floor_warning: bool,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            temperature: Range::new(TEMP_MIN_C, TEMP_MAX_C),
            soc: Range::new(SOC_MIN_PCT, SOC_MAX_PCT),
            charge_rate: Range::new(CHARGE_RATE_MIN, CHARGE_RATE_MAX),
            margins: Margins::default(),
            warnings: WarningToggles::default(),
            charge_rate_floor_warning: false,
        }
    }
}

impl LimitConfig {
    /// Default ranges, hard limits only
    pub fn strict() -> Self {
        Self {
            warnings: WarningToggles::all(false),
            ..Self::default()
        }
    }

    /// Default ranges; charge rate also warns near its floor
    pub fn symmetric_charge_rate() -> Self {
        Self::default().with_charge_rate_floor_warning(true)
    }

    /// Replace the temperature range
    pub fn with_temperature(mut self, range: Range) -> Self {
        self.temperature = range;
        self
    }

    /// Replace the SoC range
    pub fn with_soc(mut self, range: Range) -> Self {
        self.soc = range;
        self
    }

    /// Replace the charge-rate ceiling, keeping the floor
    pub fn with_charge_rate_max(mut self, max: f32) -> Self {
        self.charge_rate.max = max;
        self
    }

    /// Replace the whole charge-rate range
    pub fn with_charge_rate(mut self, range: Range) -> Self {
        self.charge_rate = range;
        self
    }

    /// Set an explicit warning margin for one parameter
    pub fn with_margin(mut self, parameter: Parameter, margin: f32) -> Self {
        *self.margins.slot(parameter) = Some(margin);
        self
    }

    /// Turn warnings on or off for one parameter
    pub fn with_warnings(mut self, parameter: Parameter, enabled: bool) -> Self {
        *self.warnings.slot(parameter) = enabled;
        self
    }

    /// Turn the charge-rate low-side warning zone on or off
    pub fn with_charge_rate_floor_warning(mut self, enabled: bool) -> Self {
        self.charge_rate_floor_warning = enabled;
        self
    }

    /// Configured range for `parameter`
    pub fn range(&self, parameter: Parameter) -> Range {
        match parameter {
            Parameter::Temperature => self.temperature,
            Parameter::StateOfCharge => self.soc,
            Parameter::ChargeRate => self.charge_rate,
        }
    }

    /// Check every setting and build the per-parameter specs.
    ///
    /// Parameters are checked in evaluation order; the first bad one wins.
    pub fn validate(&self) -> ConfigResult<[ParameterSpec; 3]> {
        Ok([
            self.spec_for(Parameter::Temperature)?,
            self.spec_for(Parameter::StateOfCharge)?,
            self.spec_for(Parameter::ChargeRate)?,
        ])
    }

    /// Specs for the default configuration, built without re-checking the
    /// constants (their ordering is asserted at compile time).
    pub(crate) fn default_specs() -> [ParameterSpec; 3] {
        [
            ParameterSpec::trusted(Parameter::Temperature, TEMP_MIN_C, TEMP_MAX_C, default_margin(TEMP_MAX_C)),
            ParameterSpec::trusted(Parameter::StateOfCharge, SOC_MIN_PCT, SOC_MAX_PCT, default_margin(SOC_MAX_PCT)),
            ParameterSpec::trusted(
                Parameter::ChargeRate,
                CHARGE_RATE_MIN,
                CHARGE_RATE_MAX,
                default_margin(CHARGE_RATE_MAX),
            )
            .low_zone(false),
        ]
    }

    fn spec_for(&self, parameter: Parameter) -> ConfigResult<ParameterSpec> {
        let range = self.range(parameter);
        let margin = self
            .margins
            .get(parameter)
            .unwrap_or_else(|| default_margin(range.max));

        let spec = ParameterSpec::with_margin(parameter, range.min, range.max, margin)?
            .warnings(self.warnings.get(parameter));

        Ok(match parameter {
            Parameter::ChargeRate => spec.low_zone(self.charge_rate_floor_warning),
            _ => spec,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConfigError;

    #[test]
    fn defaults_match_documented_limits() {
        let [temp, soc, rate] = LimitConfig::default().validate().unwrap();

        assert_eq!((temp.min(), temp.max()), (0.0, 45.0));
        assert_eq!((soc.min(), soc.max()), (20.0, 80.0));
        assert_eq!((rate.min(), rate.max()), (0.0, 0.8));

        assert!((temp.warning_margin() - 2.25).abs() < 1e-5);
        assert!((soc.warning_margin() - 4.0).abs() < 1e-5);
        assert!((rate.warning_margin() - 0.04).abs() < 1e-6);

        assert!(temp.warnings_enabled() && soc.warnings_enabled() && rate.warnings_enabled());
        assert!(temp.low_zone_enabled() && soc.low_zone_enabled());
        assert!(!rate.low_zone_enabled());
    }

    #[test]
    fn prebuilt_default_specs_match_validated_defaults() {
        assert_eq!(LimitConfig::default_specs(), LimitConfig::default().validate().unwrap());
    }

    #[test]
    fn explicit_margin_overrides_default() {
        let [_, soc, _] = LimitConfig::default()
            .with_margin(Parameter::StateOfCharge, 10.0)
            .validate()
            .unwrap();
        assert_eq!(soc.warning_margin(), 10.0);
    }

    #[test]
    fn margin_follows_configured_max() {
        let [_, _, rate] = LimitConfig::default()
            .with_charge_rate_max(1.0)
            .validate()
            .unwrap();
        assert!((rate.warning_margin() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn strict_preset_disables_warnings() {
        let specs = LimitConfig::strict().validate().unwrap();
        assert!(specs.iter().all(|s| !s.warnings_enabled()));
    }

    #[test]
    fn symmetric_preset_adds_charge_rate_floor_zone() {
        let [temp, _, rate] = LimitConfig::symmetric_charge_rate().validate().unwrap();
        assert!(rate.low_zone_enabled());
        assert!(rate.warnings_enabled());
        assert!(temp.low_zone_enabled());
    }

    #[test]
    fn first_bad_parameter_is_reported() {
        let err = LimitConfig::default()
            .with_soc(Range::new(90.0, 10.0))
            .with_margin(Parameter::ChargeRate, -1.0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvertedRange {
                parameter: Parameter::StateOfCharge,
                min: 90.0,
                max: 10.0,
            }
        );
    }

    #[test]
    fn charge_rate_ceiling_below_floor_is_inverted() {
        let err = LimitConfig::default().with_charge_rate_max(-0.5).validate().unwrap_err();
        assert_eq!(err.parameter(), Parameter::ChargeRate);
    }
}
