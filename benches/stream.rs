use goldenseed::checksum::Checksums;
use goldenseed::gqs1::Gqs1;
use goldenseed::{ByteStream, SeedRegistry, StreamGenerator};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_next(c: &mut Criterion) {
    let mut generator = StreamGenerator::golden_ratio().unwrap();

    c.bench_function("stream next chunk", |b| b.iter(|| black_box(generator.next())));
}

pub fn bench_skip(c: &mut Criterion) {
    c.bench_function("stream skip 1000", |b| {
        b.iter(|| {
            let mut generator = StreamGenerator::golden_ratio().unwrap();
            generator.skip(black_box(1000));
            generator.position()
        })
    });
}

pub fn bench_bytes(c: &mut Criterion) {
    let mut stream = ByteStream::new(StreamGenerator::golden_ratio().unwrap());
    let mut buf = [0u8; 4096];

    c.bench_function("byte stream 4 KiB", |b| {
        b.iter(|| {
            stream.fill(black_box(&mut buf));
        })
    });
}

pub fn bench_gqs1(c: &mut Criterion) {
    let seed = SeedRegistry.lookup("golden-ratio").unwrap();
    let mut vectors = Gqs1::new(seed);

    c.bench_function("gqs1 vector", |b| b.iter(|| black_box(vectors.next_vector())));
}

pub fn bench_checksum(c: &mut Criterion) {
    c.bench_function("checksum 64 KiB of output", |b| {
        b.iter(|| {
            let mut stream = ByteStream::new(StreamGenerator::golden_ratio().unwrap());
            Checksums::of_stream(&mut stream, black_box(64 * 1024))
        })
    });
}

criterion_group!(benches, bench_next, bench_skip, bench_bytes, bench_gqs1, bench_checksum);
criterion_main!(benches);
