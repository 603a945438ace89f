use criterion::{black_box, criterion_group, criterion_main, Criterion};

use genomics_algo::align::{approximate_match, naive_match, BoyerMoore};
use genomics_algo::kmer::{frequent_kmers_with_mismatches, minimum_skew_positions, pattern_clumps, MismatchOpt};

fn make_genome(len: usize) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut seq = Vec::with_capacity(len);
    let mut x: u32 = 42;
    for _ in 0..len {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        seq.push(bases[(x >> 16) as usize % 4]);
    }
    seq
}

fn bench_exact(c: &mut Criterion) {
    let genome = make_genome(100_000);
    let pattern = genome[5_000..5_020].to_vec();
    let bm = BoyerMoore::new(&pattern);

    c.bench_function("naive_20bp_100k", |b| {
        b.iter(|| black_box(naive_match(black_box(&pattern), black_box(&genome))));
    });
    c.bench_function("boyer_moore_20bp_100k", |b| {
        b.iter(|| black_box(bm.find_in(black_box(&genome))));
    });
    c.bench_function("boyer_moore_preprocess_20bp", |b| {
        b.iter(|| black_box(BoyerMoore::new(black_box(&pattern))));
    });
}

fn bench_approximate(c: &mut Criterion) {
    let genome = make_genome(2_000);
    let mut pattern = genome[700..730].to_vec();
    pattern[15] = b'N';

    c.bench_function("approximate_30bp_2k_d2", |b| {
        b.iter(|| black_box(approximate_match(black_box(&pattern), black_box(&genome), 2)));
    });
}

fn bench_kmer(c: &mut Criterion) {
    let genome = make_genome(10_000);
    let opt = MismatchOpt { threads: 0, ..MismatchOpt::default() };

    c.bench_function("clumps_k9_w500_10k", |b| {
        b.iter(|| black_box(pattern_clumps(black_box(&genome), 9, 500, 3)));
    });
    c.bench_function("min_skew_10k", |b| {
        b.iter(|| black_box(minimum_skew_positions(black_box(&genome))));
    });
    c.bench_function("mismatch_kmers_k6_d1_1k", |b| {
        b.iter(|| black_box(frequent_kmers_with_mismatches(black_box(&genome[..1_000]), 6, 1, &opt)));
    });
}

criterion_group!(benches, bench_exact, bench_approximate, bench_kmer);
criterion_main!(benches);
