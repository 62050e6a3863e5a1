// Criterion benchmarks comparing dictionary backings on the same board.
//
// Uses data/words_small.txt plus a seeded random word list so the prefix
// queries have something to chew on.
//
// Run:
//   cargo bench --bench find_words

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wordgrid::utils::loader;
use wordgrid::{Adjacency, Backing, Board, BoardSearcher};

fn word_list(rng: &mut StdRng) -> Vec<String> {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/words_small.txt");
    let mut words = loader::load_words(path).unwrap_or_default();
    for _ in 0..5_000 {
        let len = rng.gen_range(3..=8);
        words.push((0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect());
    }
    words
}

fn bench_backings(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let words = word_list(&mut rng);
    let board = Board::random(4, 4, &mut rng).expect("4x4 board");

    for &rule in Adjacency::iter() {
        let mut group = c.benchmark_group(format!("find_words_{}", rule));
        for &backing in Backing::iter() {
            let dictionary = backing.build(words.clone()).expect("dictionary");
            let searcher = BoardSearcher::new(board.clone(), dictionary);
            group.bench_with_input(BenchmarkId::from_parameter(backing), &searcher, |b, s| {
                b.iter(|| black_box(s.find_words(rule)))
            });
        }
        group.finish();
    }
}

fn bench_sequential(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let words = word_list(&mut rng);
    let board = Board::random(6, 6, &mut rng).expect("6x6 board");
    let dictionary = Backing::Sorted.build(words).expect("dictionary");
    let parallel = BoardSearcher::new(board, dictionary);

    let mut group = c.benchmark_group("parallelism_8way");
    group.bench_function("rayon", |b| {
        b.iter(|| black_box(parallel.find_words(Adjacency::EightWay)))
    });
    let sequential = parallel.with_parallelism(false);
    group.bench_function("sequential", |b| {
        b.iter(|| black_box(sequential.find_words(Adjacency::EightWay)))
    });
    group.finish();
}

criterion_group!(benches, bench_backings, bench_sequential);
criterion_main!(benches);
