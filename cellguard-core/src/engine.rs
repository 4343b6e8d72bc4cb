//! The limit-evaluation engine
//!
//! ## Evaluation
//!
//! For each parameter, in the fixed order temperature, SoC, charge rate:
//!
//! 1. Hard-limit check: below `min` or above `max` emits a violation.
//! 2. Warning-zone check: independently, a value within `margin` of a bound
//!    emits one warning (low zone first).
//!
//! `ok` is the AND of the three hard checks. The engine keeps no memory of
//! earlier calls, so there is no hysteresis: the same snapshot always gives
//! the same verdict.
//!
//! ## Threading
//!
//! Configuration is immutable once built and `evaluate` only reads it, so a
//! single engine can be shared across threads behind `&` or `Arc`.
//! [`LimitEngine::reconfigure`] needs `&mut self`: a new configuration is
//! validated in full and then swapped in whole, never field by field.

use crate::{
    checks::check_parameter,
    config::LimitConfig,
    errors::{ConfigError, ConfigResult},
    parameter::{Parameter, ParameterSpec},
    sink::{EventSink, NullSink},
    snapshot::BatterySnapshot,
    verdict::{EventList, Verdict},
};

/// Battery safe-operating-area evaluator
#[derive(Debug, Clone, PartialEq)]
pub struct LimitEngine {
    specs: [ParameterSpec; 3],
}

impl Default for LimitEngine {
    fn default() -> Self {
        Self { specs: LimitConfig::default_specs() }
    }
}

impl LimitEngine {
    /// Build an engine, rejecting inverted ranges and bad margins
    pub fn new(config: LimitConfig) -> ConfigResult<Self> {
        let specs = config.validate().map_err(|err| {
            log_warn!("Rejected limit configuration: {}", err);
            err
        })?;
        log_debug!(
            "Limit engine configured: temperature [{}, {}], soc [{}, {}], charge_rate [{}, {}]",
            specs[0].min(), specs[0].max(),
            specs[1].min(), specs[1].max(),
            specs[2].min(), specs[2].max()
        );
        Ok(Self { specs })
    }

    /// Build an engine directly from specs, one per parameter.
    ///
    /// Specs are placed by their own [`Parameter`], so input order does not
    /// matter. A parameter given twice is rejected; with three slots that
    /// also means none is missing.
    pub fn from_specs(specs: [ParameterSpec; 3]) -> ConfigResult<Self> {
        let mut seen = [false; 3];
        for spec in &specs {
            let parameter = spec.parameter();
            if core::mem::replace(&mut seen[parameter.index()], true) {
                let err = ConfigError::DuplicateParameter { parameter };
                log_warn!("Rejected limit specs: {}", err);
                return Err(err);
            }
        }

        // Three distinct parameters: every slot below gets overwritten.
        let mut ordered = specs;
        for spec in specs {
            ordered[spec.parameter().index()] = spec;
        }
        Ok(Self { specs: ordered })
    }

    /// Replace the whole configuration.
    ///
    /// On error the current configuration is left untouched.
    pub fn reconfigure(&mut self, config: LimitConfig) -> ConfigResult<()> {
        *self = Self::new(config)?;
        Ok(())
    }

    /// Spec in use for `parameter`
    pub fn spec(&self, parameter: Parameter) -> &ParameterSpec {
        &self.specs[parameter.index()]
    }

    /// All specs, in evaluation order
    pub fn specs(&self) -> &[ParameterSpec; 3] {
        &self.specs
    }

    /// Evaluate a snapshot and collect every event into the verdict
    pub fn evaluate(&self, snapshot: &BatterySnapshot) -> Verdict {
        let mut events = EventList::new();
        let ok = self.evaluate_into(snapshot, &mut events);
        Verdict::new(ok, events)
    }

    /// Evaluate a snapshot, streaming events into `sink`.
    ///
    /// Returns the pass/fail verdict.
    pub fn evaluate_into<S: EventSink + ?Sized>(
        &self,
        snapshot: &BatterySnapshot,
        sink: &mut S,
    ) -> bool {
        // Every parameter is checked even after a failure so all events surface.
        self.specs.iter().fold(true, |ok, spec| {
            let passed = check_parameter(spec, snapshot.value(spec.parameter()), &mut *sink);
            ok && passed
        })
    }

    /// Pass/fail only, no events
    pub fn is_ok(&self, snapshot: &BatterySnapshot) -> bool {
        self.evaluate_into(snapshot, &mut NullSink)
    }
}

/// Check raw readings against the default limits
///
/// ```rust
/// use cellguard_core::battery_is_ok;
///
/// assert!(battery_is_ok(25.0, 70.0, 0.7));
/// assert!(!battery_is_ok(25.0, 70.0, 0.9));
/// ```
pub fn battery_is_ok(temperature: f32, soc: f32, charge_rate: f32) -> bool {
    LimitEngine::default().is_ok(&BatterySnapshot::new(temperature, soc, charge_rate))
}
