//! Enhancement chain throughput on speech-length buffers.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use narrata_core::SampleBuffer;
use narrata_dsp::{Biquad, Enhancer};

fn test_signal(sample_rate: u32, seconds: f32) -> Vec<f32> {
    let frames = (sample_rate as f32 * seconds) as usize;
    (0..frames)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            0.4 * (2.0 * std::f32::consts::PI * 180.0 * t).sin()
                + 0.2 * (2.0 * std::f32::consts::PI * 2400.0 * t).sin()
        })
        .collect()
}

fn bench_enhancer(c: &mut Criterion) {
    let mut group = c.benchmark_group("enhance");
    let enhancer = Enhancer::cinematic();

    for seconds in [1.0_f32, 10.0] {
        let buffer = SampleBuffer::mono(24000, test_signal(24000, seconds)).unwrap();
        group.throughput(Throughput::Elements(buffer.frame_count() as u64));
        group.bench_with_input(
            BenchmarkId::new("cinematic_mono_24k", format!("{}s", seconds)),
            &buffer,
            |b, buffer| b.iter(|| enhancer.process(black_box(buffer)).unwrap()),
        );
    }

    group.finish();
}

fn bench_biquad(c: &mut Criterion) {
    let samples = test_signal(48000, 1.0);
    c.bench_function("low_shelf_48k_1s", |b| {
        b.iter(|| {
            let mut filter = Biquad::low_shelf(48000, 120.0, 6.0);
            filter.process(black_box(&samples))
        })
    });
}

criterion_group!(benches, bench_enhancer, bench_biquad);
criterion_main!(benches);
