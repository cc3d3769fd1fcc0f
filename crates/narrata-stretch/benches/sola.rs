//! SOLA throughput at the speeds offered to listeners.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use narrata_core::SampleBuffer;
use narrata_stretch::{correlation::best_alignment, TimeStretcher};

fn speech_like(sample_rate: u32, seconds: f32) -> Vec<f32> {
    let frames = (sample_rate as f32 * seconds) as usize;
    (0..frames)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            // 150 Hz voice with a 4 Hz syllable envelope
            let envelope = 0.5 + 0.5 * (2.0 * std::f32::consts::PI * 4.0 * t).sin();
            envelope * 0.5 * (2.0 * std::f32::consts::PI * 150.0 * t).sin()
        })
        .collect()
}

fn bench_stretch(c: &mut Criterion) {
    let mut group = c.benchmark_group("sola_stretch");
    let stretcher = TimeStretcher::default();
    let buffer = SampleBuffer::mono(24000, speech_like(24000, 10.0)).unwrap();
    group.throughput(Throughput::Elements(buffer.frame_count() as u64));

    for speed in [0.5, 0.75, 1.25, 1.5, 2.0] {
        group.bench_with_input(BenchmarkId::from_parameter(speed), &speed, |b, &speed| {
            b.iter(|| stretcher.process(black_box(&buffer), speed).unwrap())
        });
    }

    group.finish();
}

fn bench_alignment(c: &mut Criterion) {
    let signal = speech_like(24000, 1.0);
    c.bench_function("best_alignment_24k", |b| {
        b.iter(|| best_alignment(black_box(&signal), 480, 528..=912, 480))
    });
}

criterion_group!(benches, bench_stretch, bench_alignment);
criterion_main!(benches);
