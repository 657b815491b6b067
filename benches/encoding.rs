use barcodec::{BarcodeGenerator, BatchEncoder, Format, FormatEncoder, encoders::builtin_encoder};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const SAMPLES: &[(Format, &str)] = &[
    (Format::Ean13, "590123412345"),
    (Format::Ean8, "9638507"),
    (Format::Upca, "03600029145"),
    (Format::Upce, "425261"),
    (Format::Code128, "Hello, World! 0123456789"),
    (Format::Code39, "HELLO WORLD 123"),
    (Format::Code93, "HELLO WORLD 123"),
    (Format::Itf14, "1234567890123"),
    (Format::Codabar, "A0123456789B"),
];

fn bench_encode_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for &(format, data) in SAMPLES {
        let encoder = builtin_encoder(format);
        group.bench_with_input(BenchmarkId::from_parameter(format.as_str()), data, |b, data| {
            b.iter(|| encoder.encode(black_box(data)));
        });
    }
    group.finish();
}

fn bench_code128_length(c: &mut Criterion) {
    let encoder = builtin_encoder(Format::Code128);
    let mut group = c.benchmark_group("code128_length");

    for size in [8, 32, 128, 512].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let data: String = (0..*size)
            .map(|i| if i % 3 == 0 { 'a' } else { char::from(b'0' + (i % 10) as u8) })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| encoder.encode(black_box(data)));
        });
    }
    group.finish();
}

fn bench_detect(c: &mut Criterion) {
    let generator = BarcodeGenerator::default();
    let detector = generator.detector();
    let mut group = c.benchmark_group("detect");

    for input in ["1234567890128", "425261", "A123B", "hello world", "Hello, World!"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| detector.detect(black_box(input)));
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let generator = BarcodeGenerator::default();
    let mut group = c.benchmark_group("batch");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let items: Vec<String> = (0..*size).map(|i| format!("{:012}", i)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| BatchEncoder::new(&generator).encode_all(black_box(items), None));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_encode_formats,
    bench_code128_length,
    bench_detect,
    bench_batch
);
criterion_main!(benches);
