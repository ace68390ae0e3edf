use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use sudoku_engine::{create_puzzle_from_solution, generate_full_solution};

fn generate_solution(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    c.bench_function("generate full solution", |b| {
        b.iter(|| generate_full_solution(&mut rng))
    });
}

fn carve_puzzle(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let solution = generate_full_solution(&mut rng);
    c.bench_function("carve puzzle (30 clues)", |b| {
        b.iter(|| create_puzzle_from_solution(black_box(&solution), 30, &mut rng).unwrap())
    });
}

criterion_group!(benches, generate_solution, carve_puzzle);
criterion_main!(benches);
