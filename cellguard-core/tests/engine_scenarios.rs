//! Reference scenarios against the default limits

mod common;

use cellguard_core::{
    sink::FnSink, BatterySnapshot, BoundKind, Event, LimitConfig, LimitEngine, Parameter,
    WarningZone,
};
use common::{snapshot, INVALID, VALID};

#[test]
fn valid_snapshots_pass() {
    let engine = LimitEngine::default();
    for &t in VALID {
        let verdict = engine.evaluate(&snapshot(t));
        assert!(verdict.ok(), "{:?} should pass", t);
        assert_eq!(verdict.violations().count(), 0);
    }
}

#[test]
fn invalid_snapshots_fail_on_the_right_parameter() {
    let engine = LimitEngine::default();
    for &(t, parameter) in INVALID {
        let verdict = engine.evaluate(&snapshot(t));
        assert!(!verdict.ok(), "{:?} should fail", t);
        assert!(verdict.violation_for(parameter).is_some(), "{:?} should flag {}", t, parameter);
        assert_eq!(verdict.violations().count(), 1);
    }
}

#[test]
fn nominal_snapshot_has_no_events() {
    let verdict = LimitEngine::default().evaluate(&BatterySnapshot::new(25.0, 70.0, 0.7));
    assert!(verdict.ok());
    assert!(verdict.events().is_empty());
}

#[test]
fn low_bounds_scenario() {
    let verdict = LimitEngine::default().evaluate(&BatterySnapshot::new(0.0, 20.0, 0.8));
    assert!(verdict.ok());
    assert_eq!(
        verdict.events(),
        &[
            Event::Warning { parameter: Parameter::Temperature, value: 0.0, zone: WarningZone::ApproachingLow },
            Event::Warning { parameter: Parameter::StateOfCharge, value: 20.0, zone: WarningZone::ApproachingLow },
            Event::Warning { parameter: Parameter::ChargeRate, value: 0.8, zone: WarningZone::ApproachingHigh },
        ]
    );
}

#[test]
fn high_bounds_scenario() {
    let verdict = LimitEngine::default().evaluate(&BatterySnapshot::new(45.0, 80.0, 0.8));
    assert!(verdict.ok());
    assert_eq!(verdict.warnings().count(), 3);
    for parameter in Parameter::ALL {
        assert_eq!(verdict.warning_for(parameter), Some(WarningZone::ApproachingHigh));
    }
}

#[test]
fn violation_scenarios() {
    let engine = LimitEngine::default();
    let cases = [
        ((-1.0, 70.0, 0.7), Parameter::Temperature, BoundKind::Low),
        ((25.0, 81.0, 0.7), Parameter::StateOfCharge, BoundKind::High),
        ((25.0, 70.0, 0.81), Parameter::ChargeRate, BoundKind::High),
    ];
    for (t, parameter, bound_kind) in cases {
        let verdict = engine.evaluate(&snapshot(t));
        assert!(!verdict.ok());
        assert!(verdict.events().contains(&Event::Violation {
            parameter,
            value: snapshot(t).value(parameter),
            bound_kind,
        }));
    }
}

#[test]
fn negative_charge_rate_violates_floor() {
    let verdict = LimitEngine::default().evaluate(&BatterySnapshot::new(25.0, 50.0, -0.1));
    assert!(!verdict.ok());
    assert_eq!(verdict.violation_for(Parameter::ChargeRate), Some(BoundKind::Low));
}

#[test]
fn default_config_keeps_idle_charge_rate_quiet() {
    let idle = BatterySnapshot::new(25.0, 50.0, 0.0);

    let verdict = LimitEngine::default().evaluate(&idle);
    assert!(verdict.ok());
    assert!(verdict.events().is_empty());

    let engine = LimitEngine::new(LimitConfig::symmetric_charge_rate()).unwrap();
    let verdict = engine.evaluate(&idle);
    assert!(verdict.ok());
    assert_eq!(verdict.warning_for(Parameter::ChargeRate), Some(WarningZone::ApproachingLow));
}

#[test]
fn extreme_values_still_produce_a_verdict() {
    let engine = LimitEngine::default();
    let verdict = engine.evaluate(&BatterySnapshot::new(f32::MAX, f32::MIN, f32::INFINITY));
    assert!(!verdict.ok());
    assert_eq!(verdict.violation_for(Parameter::Temperature), Some(BoundKind::High));
    assert_eq!(verdict.violation_for(Parameter::StateOfCharge), Some(BoundKind::Low));
    // infinity flags both bounds
    assert_eq!(
        verdict.violations().filter(|e| e.parameter() == Parameter::ChargeRate).count(),
        2
    );
}

#[test]
fn streamed_events_match_collected_events() {
    let engine = LimitEngine::default();
    let snap = BatterySnapshot::new(44.0, 19.0, 0.79);

    let mut streamed = Vec::new();
    let ok = engine.evaluate_into(&snap, &mut FnSink(|e: &Event| streamed.push(*e)));

    let verdict = engine.evaluate(&snap);
    assert_eq!(ok, verdict.ok());
    assert_eq!(streamed.as_slice(), verdict.events());
}

#[test]
fn engine_is_shared_across_threads() {
    let engine = std::sync::Arc::new(LimitEngine::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = std::sync::Arc::clone(&engine);
            std::thread::spawn(move || engine.is_ok(&BatterySnapshot::new(10.0 * i as f32, 50.0, 0.5)))
        })
        .collect();
    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![true, true, true, true]);
}
