use anagrams::cs::combinatorial::backtracking::permutations;
use anagrams::{generate_permutations, LetterSet};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const ALPHABET: [char; 9] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i'];

fn bench_generate_permutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_permutations");
    for n in [3, 5, 7, 9] {
        let letters = &ALPHABET[..n];
        group.bench_with_input(BenchmarkId::from_parameter(n), letters, |b, letters| {
            b.iter(|| generate_permutations(black_box(letters)))
        });
    }
    group.finish();
}

fn bench_validated_set(c: &mut Criterion) {
    let set = LetterSet::new(&ALPHABET[..8]).expect("distinct letters");
    c.bench_function("letter_set_permutations_8", |b| {
        b.iter(|| black_box(&set).permutations())
    });
}

fn bench_generic_permutations(c: &mut Criterion) {
    let items: Vec<u32> = (0..8).collect();
    c.bench_function("backtracking_permutations_8", |b| {
        b.iter(|| permutations(black_box(&items)))
    });
}

criterion_group!(
    benches,
    bench_generate_permutations,
    bench_validated_set,
    bench_generic_permutations
);
criterion_main!(benches);
