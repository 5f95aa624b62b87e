use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use permutations::combinatorial::{heap_permutations, insertion_permutations, recursive_permutations};

fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("permutations");
    for input in ["abcdef", "abcdefg", "aabbcdd"] {
        let chars: Vec<char> = input.chars().collect();
        for include_duplicates in [true, false] {
            let label = format!("{}/dupes={}", input, include_duplicates);
            group.bench_with_input(BenchmarkId::new("recursive", &label), &chars, |b, chars| {
                b.iter(|| recursive_permutations(black_box(chars), include_duplicates))
            });
            group.bench_with_input(BenchmarkId::new("heap", &label), &chars, |b, chars| {
                b.iter(|| heap_permutations(black_box(chars), include_duplicates))
            });
            group.bench_with_input(BenchmarkId::new("insertion", &label), &chars, |b, chars| {
                b.iter(|| insertion_permutations(black_box(chars), include_duplicates))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_generators);
criterion_main!(benches);
