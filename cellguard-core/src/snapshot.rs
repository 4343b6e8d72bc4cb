//! Battery readings handed to the engine

use crate::parameter::Parameter;

/// One instantaneous read of the monitored values
///
/// No identity and no history; build one per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatterySnapshot {
    /// Cell temperature in °C
    pub temperature: f32,
    /// State of charge in percent
    pub soc: f32,
    /// Charge current as a fraction of rated current
    pub charge_rate: f32,
}

impl BatterySnapshot {
    /// Create a snapshot from raw readings
    pub const fn new(temperature: f32, soc: f32, charge_rate: f32) -> Self {
        Self { temperature, soc, charge_rate }
    }

    /// Reading for `parameter`
    pub const fn value(&self, parameter: Parameter) -> f32 {
        match parameter {
            Parameter::Temperature => self.temperature,
            Parameter::StateOfCharge => self.soc,
            Parameter::ChargeRate => self.charge_rate,
        }
    }

    /// Copy with one reading replaced
    pub fn with_value(mut self, parameter: Parameter, value: f32) -> Self {
        match parameter {
            Parameter::Temperature => self.temperature = value,
            Parameter::StateOfCharge => self.soc = value,
            Parameter::ChargeRate => self.charge_rate = value,
        }
        self
    }
}

impl From<(f32, f32, f32)> for BatterySnapshot {
    fn from((temperature, soc, charge_rate): (f32, f32, f32)) -> Self {
        Self::new(temperature, soc, charge_rate)
    }
}
