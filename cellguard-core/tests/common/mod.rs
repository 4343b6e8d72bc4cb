//! Shared fixtures for integration tests
//!
//! - Reference snapshots with their expected outcome
//! - proptest strategies for readings in and around the default ranges

#![allow(dead_code)]

use cellguard_core::{BatterySnapshot, Parameter};
use proptest::prelude::*;

/// Snapshots inside every default range
pub const VALID: &[(f32, f32, f32)] = &[
    (25.0, 70.0, 0.7),
    (30.0, 50.0, 0.8),
    (25.0, 30.0, 0.5),
    (0.0, 20.0, 0.8),
    (45.0, 80.0, 0.8),
];

/// Snapshots with exactly one out-of-range reading, and which one
pub const INVALID: &[((f32, f32, f32), Parameter)] = &[
    ((-1.0, 70.0, 0.7), Parameter::Temperature),
    ((46.0, 70.0, 0.7), Parameter::Temperature),
    ((25.0, 19.0, 0.7), Parameter::StateOfCharge),
    ((25.0, 81.0, 0.7), Parameter::StateOfCharge),
    ((25.0, 70.0, 0.9), Parameter::ChargeRate),
    ((25.0, 70.0, 0.81), Parameter::ChargeRate),
    ((0.0, 81.0, 0.8), Parameter::StateOfCharge),
    ((46.0, 20.0, 0.8), Parameter::Temperature),
    ((25.0, 80.0, 0.81), Parameter::ChargeRate),
];

/// Build a snapshot from a fixture tuple
pub fn snapshot(t: (f32, f32, f32)) -> BatterySnapshot {
    BatterySnapshot::from(t)
}

/// Readings spread well beyond the default ranges on both sides
pub fn any_snapshot() -> impl Strategy<Value = BatterySnapshot> {
    (-20.0f32..65.0, 0.0f32..100.0, -0.2f32..1.2)
        .prop_map(|(t, soc, rate)| BatterySnapshot::new(t, soc, rate))
}

/// Readings inside every default range
pub fn in_range_snapshot() -> impl Strategy<Value = BatterySnapshot> {
    (0.0f32..=45.0, 20.0f32..=80.0, 0.0f32..=0.8)
        .prop_map(|(t, soc, rate)| BatterySnapshot::new(t, soc, rate))
}

/// Any parameter
pub fn any_parameter() -> impl Strategy<Value = Parameter> {
    prop_oneof![
        Just(Parameter::Temperature),
        Just(Parameter::StateOfCharge),
        Just(Parameter::ChargeRate),
    ]
}
