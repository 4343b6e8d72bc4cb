//! Error Types for Limit Configuration
//!
//! ## Design Philosophy
//!
//! An out-of-range battery reading is not an error. It is the expected
//! outcome the engine exists to report, so it travels inside a
//! [`Verdict`](crate::Verdict) with `ok == false`. The only thing that can
//! actually fail is building an engine from a bad configuration.
//!
//! Errors are kept small and `Copy`: no `String`, no heap, so they can be
//! returned from embedded init code and stored without allocation.
//!
//! ```rust
//! use cellguard_core::{ConfigError, LimitConfig, LimitEngine, Range};
//!
//! let config = LimitConfig::default().with_soc(Range::new(90.0, 10.0));
//! match LimitEngine::new(config) {
//!     Err(ConfigError::InvertedRange { parameter, .. }) => {
//!         // refuse to start charging with a nonsense SoC window
//!         let _ = parameter;
//!     }
//!     Err(_) | Ok(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

use crate::parameter::Parameter;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors - raised at construction, never during evaluation
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Range minimum is greater than its maximum
    #[error("{parameter} range is inverted: min {min} > max {max}")]
    InvertedRange {
        /// Parameter whose range was rejected
        parameter: Parameter,
        /// Configured lower bound
        min: f32,
        /// Configured upper bound
        max: f32,
    },

    /// Warning margin below zero
    #[error("{parameter} warning margin {margin} is negative")]
    NegativeMargin {
        /// Parameter whose margin was rejected
        parameter: Parameter,
        /// Configured margin
        margin: f32,
    },

    /// A bound or margin is NaN or infinite
    #[error("{parameter} limits must be finite numbers")]
    NonFiniteBound {
        /// Parameter with the non-finite setting
        parameter: Parameter,
    },

    /// The same parameter was configured more than once
    #[error("{parameter} configured more than once")]
    DuplicateParameter {
        /// Parameter that appeared twice
        parameter: Parameter,
    },
}

impl ConfigError {
    /// Parameter the error refers to
    pub const fn parameter(&self) -> Parameter {
        match self {
            Self::InvertedRange { parameter, .. }
            | Self::NegativeMargin { parameter, .. }
            | Self::NonFiniteBound { parameter }
            | Self::DuplicateParameter { parameter } => *parameter,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvertedRange { parameter, min, max } =>
                defmt::write!(fmt, "{} range inverted: [{}, {}]", parameter.name(), min, max),
            Self::NegativeMargin { parameter, margin } =>
                defmt::write!(fmt, "{} margin {} < 0", parameter.name(), margin),
            Self::NonFiniteBound { parameter } =>
                defmt::write!(fmt, "{} limits not finite", parameter.name()),
            Self::DuplicateParameter { parameter } =>
                defmt::write!(fmt, "{} given twice", parameter.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_names_parameter() {
        let err = ConfigError::NegativeMargin {
            parameter: Parameter::ChargeRate,
            margin: -0.1,
        };
        assert_eq!(err.parameter(), Parameter::ChargeRate);
    }

    #[cfg(feature = "std")]
    #[test]
    fn error_messages_are_readable() {
        let err = ConfigError::InvertedRange {
            parameter: Parameter::StateOfCharge,
            min: 90.0,
            max: 10.0,
        };
        assert_eq!(err.to_string(), "soc range is inverted: min 90 > max 10");
    }
}
