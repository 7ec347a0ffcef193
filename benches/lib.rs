use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::{hint::black_box, time::Duration};

use swalign::{
    Mode, NUCLEOTIDES, Scoring, Sequence, run,
    smith_waterman::{smith_waterman, smith_waterman_lanes, smith_waterman_portable},
};

fn random_sequence(rng: &mut StdRng, label: &str, len: usize) -> Sequence {
    let symbols: Vec<u8> = (0..len)
        .map(|_| NUCLEOTIDES[rng.random_range(0..NUCLEOTIDES.len())])
        .collect();
    Sequence::new(label, symbols)
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let scoring = Scoring::default();

    let mut group = c.benchmark_group("score");
    for len in [64, 256, 1024] {
        let seq1 = random_sequence(&mut rng, "seq1", len);
        let seq2 = random_sequence(&mut rng, "seq2", len);
        group.throughput(Throughput::Elements((len * len) as u64));

        group.bench_with_input(BenchmarkId::new("scalar", len), &len, |b, _| {
            b.iter(|| smith_waterman(black_box(seq1.symbols()), black_box(seq2.symbols()), &scoring))
        });
        group.bench_with_input(BenchmarkId::new("lanes", len), &len, |b, _| {
            b.iter(|| smith_waterman_lanes(black_box(&seq1), black_box(&seq2), &scoring))
        });
        group.bench_with_input(BenchmarkId::new("portable-8", len), &len, |b, _| {
            b.iter(|| smith_waterman_portable::<8>(black_box(&seq1), black_box(&seq2), &scoring))
        });
    }
    group.finish();

    // Related sequences, long gaps force extra convergence sweeps
    let seq1 = random_sequence(&mut rng, "seq1", 2000);
    let insert = random_sequence(&mut rng, "insert", 200);
    let seq2 = Sequence::new(
        "seq2",
        [&seq1.symbols()[..1000], insert.symbols(), &seq1.symbols()[1000..]].concat(),
    );

    let mut score = 0;
    for mode in [Mode::Scalar, Mode::VectorLane] {
        c.bench_function(&format!("run/{mode}/indel"), |b| {
            b.iter(|| {
                let report = run(black_box(&seq2), black_box(&seq1), mode).unwrap();
                score = report.score;
            })
        });
        println!("{mode} score: {score}");
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_millis(200))
        .measurement_time(Duration::from_secs(2));
    targets = criterion_benchmark
}
criterion_main!(benches);
