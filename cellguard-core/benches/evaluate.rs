use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cellguard_core::{sink::NullSink, BatterySnapshot, LimitEngine};

fn evaluate(c: &mut Criterion) {
    let engine = LimitEngine::default();
    let nominal = BatterySnapshot::new(25.0, 70.0, 0.7);
    let edge = BatterySnapshot::new(45.0, 80.0, 0.8);
    let broken = BatterySnapshot::new(f32::NAN, 81.0, 0.9);

    c.bench_function("evaluate_nominal", |b| b.iter(|| engine.evaluate(black_box(&nominal))));
    c.bench_function("evaluate_all_warnings", |b| b.iter(|| engine.evaluate(black_box(&edge))));
    c.bench_function("evaluate_all_violations", |b| b.iter(|| engine.evaluate(black_box(&broken))));
    c.bench_function("is_ok_nominal", |b| {
        b.iter(|| engine.evaluate_into(black_box(&nominal), &mut NullSink))
    });
}

criterion_group!(benches, evaluate);
criterion_main!(benches);
