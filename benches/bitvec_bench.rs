use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dynbits::BitVector;

fn bench_bitvector(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitvector");
    let mut vector = BitVector::new(64_000).unwrap();
    for position in (0..64_000).step_by(2) {
        vector.set(position).unwrap();
    }

    group.bench_function("count", |b| {
        b.iter(|| black_box(vector.count()))
    });

    group.bench_function("shift_left_cross_word", |b| {
        b.iter(|| {
            let mut shifted = vector.clone();
            shifted.shift_left(black_box(777));
            black_box(shifted)
        })
    });

    group.bench_function("shift_right_cross_word", |b| {
        b.iter(|| {
            let mut shifted = vector.clone();
            shifted.shift_right(black_box(777));
            black_box(shifted)
        })
    });

    group.bench_function("to_string", |b| {
        b.iter(|| black_box(vector.to_string()))
    });
}

criterion_group!(benches, bench_bitvector);
criterion_main!(benches);
