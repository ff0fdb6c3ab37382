//! 整定性能基准测试
//!
//! 单次推理、完整 397 步整定、带轨迹录制的整定三条基线，
//! 用于观察去模糊化采样与钩子观测的开销。

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lift_control::profile;
use lift_control::simulator::PositionSimulator;
use lift_control::trace::TraceRecorder;
use std::sync::Arc;

fn bench_infer(c: &mut Criterion) {
    let engine = profile::signed().unwrap();

    c.bench_function("infer_single_call", |b| {
        b.iter(|| {
            black_box(engine.infer(black_box(5.0), black_box(0.4)));
        });
    });
}

fn bench_settle_full_horizon(c: &mut Criterion) {
    let sim = PositionSimulator::new(profile::signed().unwrap());

    c.bench_function("settle_full_horizon", |b| {
        b.iter(|| {
            black_box(sim.settle(black_box(0.0), black_box(32.0), 32.0, 32.0));
        });
    });
}

fn bench_settle_with_trace(c: &mut Criterion) {
    let mut sim = PositionSimulator::new(profile::signed().unwrap());
    let recorder = Arc::new(TraceRecorder::new());
    sim.register_hook(recorder.clone());

    c.bench_function("settle_with_trace_recorder", |b| {
        b.iter(|| {
            black_box(sim.settle(black_box(0.0), black_box(32.0), 32.0, 32.0));
            black_box(recorder.take());
        });
    });
}

criterion_group!(
    benches,
    bench_infer,
    bench_settle_full_horizon,
    bench_settle_with_trace
);
criterion_main!(benches);
