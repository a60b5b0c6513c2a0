use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gputype::{detect_with, DetectorConfig, ScriptedInventory};

pub fn bench_classify_hybrid(c: &mut Criterion) {
    let inventory = ScriptedInventory::from_vendors([
        "Intel Corporation",
        "Advanced Micro Devices, Inc.",
        "NVIDIA",
    ]);
    let full = DetectorConfig::full();
    let legacy = DetectorConfig::legacy();

    c.bench_function("detect_full_scan", |b| {
        b.iter(|| detect_with(black_box(&inventory), &full))
    });
    c.bench_function("detect_first_match", |b| {
        b.iter(|| detect_with(black_box(&inventory), &legacy))
    });
}

pub fn bench_system_inventory(c: &mut Criterion) {
    c.bench_function("find_video_controllers", |b| {
        b.iter(gputype::find_video_controllers)
    });
}

criterion_group!(benches, bench_classify_hybrid, bench_system_inventory);
criterion_main!(benches);
