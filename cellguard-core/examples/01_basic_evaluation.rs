//! Basic Limit Evaluation Example
//!
//! Evaluates a handful of battery snapshots against the default limits and
//! prints the verdict plus any events.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_evaluation
//! ```

use cellguard_core::{BatterySnapshot, LimitEngine, Parameter};

fn main() {
    println!("CellGuard Basic Evaluation Example");
    println!("==================================\n");

    let engine = LimitEngine::default();

    println!("Configured limits:");
    for parameter in Parameter::ALL {
        let spec = engine.spec(parameter);
        println!(
            "  {:<12} [{}, {}]{}  margin {:.2}",
            parameter.name(),
            spec.min(),
            spec.max(),
            parameter.unit(),
            spec.warning_margin()
        );
    }
    println!();

    let snapshots = [
        ("nominal", BatterySnapshot::new(25.0, 70.0, 0.7)),
        ("low edge", BatterySnapshot::new(0.0, 20.0, 0.8)),
        ("high edge", BatterySnapshot::new(45.0, 80.0, 0.8)),
        ("too cold", BatterySnapshot::new(-1.0, 70.0, 0.7)),
        ("overcharged", BatterySnapshot::new(25.0, 81.0, 0.7)),
        ("fast charge", BatterySnapshot::new(25.0, 70.0, 0.81)),
        ("sensor fault", BatterySnapshot::new(f32::NAN, 50.0, 0.5)),
    ];

    for (label, snapshot) in &snapshots {
        let verdict = engine.evaluate(snapshot);
        let status = if verdict.ok() { "OK" } else { "FAIL" };
        println!(
            "{:<13} T={:>5} SoC={:>5} rate={:>5}  -> {}",
            label, snapshot.temperature, snapshot.soc, snapshot.charge_rate, status
        );
        for event in verdict.events() {
            let tag = if event.is_violation() { "VIOLATION" } else { "warning" };
            println!("    {:<9} {}", tag, event);
        }
    }
}
