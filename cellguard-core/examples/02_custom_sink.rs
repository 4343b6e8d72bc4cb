//! Custom Event Sink Example
//!
//! Streams events into a caller-defined sink instead of collecting them
//! into a verdict. Here the sink keeps running counts per parameter, the
//! way a telemetry uplink might batch alerts.
//!
//! ```bash
//! cargo run --example 02_custom_sink
//! ```

use cellguard_core::{
    BatterySnapshot, Event, EventSink, LimitConfig, LimitEngine, Parameter, Range,
};

#[derive(Default)]
struct AlertCounter {
    violations: [u32; 3],
    warnings: [u32; 3],
}

impl EventSink for AlertCounter {
    fn emit(&mut self, event: &Event) {
        let slot = event.parameter().index();
        if event.is_violation() {
            self.violations[slot] += 1;
        } else {
            self.warnings[slot] += 1;
        }
    }
}

fn main() {
    println!("CellGuard Custom Sink Example");
    println!("=============================\n");

    // Tighter SoC window and an early temperature warning
    let config = LimitConfig::default()
        .with_soc(Range::new(30.0, 70.0))
        .with_margin(Parameter::Temperature, 5.0);

    let engine = match LimitEngine::new(config) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("bad configuration: {}", err);
            return;
        }
    };

    // Simulated charge session: heating up while SoC climbs
    let mut counter = AlertCounter::default();
    let mut failures = 0;
    for step in 0..20 {
        let t = 20.0 + step as f32 * 1.5;
        let soc = 40.0 + step as f32 * 2.0;
        let rate = if step < 10 { 0.75 } else { 0.5 };

        if !engine.evaluate_into(&BatterySnapshot::new(t, soc, rate), &mut counter) {
            failures += 1;
        }
    }

    println!("Failed snapshots: {}/20\n", failures);
    println!("{:<12} {:>10} {:>10}", "parameter", "violations", "warnings");
    for parameter in Parameter::ALL {
        let i = parameter.index();
        println!(
            "{:<12} {:>10} {:>10}",
            parameter.name(),
            counter.violations[i],
            counter.warnings[i]
        );
    }
}
