//! Performance measurement for full solves at varying board sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tilewave::algorithm::solver::{NullObserver, Solver};
use tilewave::io::tileset;
use tilewave::spatial::Board;

/// Measures a seeded random solve as the board grows
fn bench_full_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_solve");

    for size in &[3usize, 4, 5] {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut pile = tileset::random_pile(size * size - 1, 12345);
                let mut board = Board::new(size, size);
                if let Ok(first) = pile.pop_front() {
                    board.place(size / 2, size / 2, first);
                }

                let mut solver = Solver::new(board, pile);
                // Exhausted searches are as interesting as solved ones here
                let outcome = solver.solve(&mut NullObserver);
                black_box(outcome).ok();
            });
        });
    }

    group.finish();
}

/// Measures the possibility grid recomputation that dominates each frame
fn bench_possibility_grid(c: &mut Criterion) {
    let pile = tileset::random_pile(32, 12345);
    let mut board = Board::new(8, 8);
    let seed_pile = tileset::random_pile(8, 999);
    for (index, tile) in seed_pile.tiles().iter().enumerate() {
        board.place(index / 8 + 3, index % 8, *tile);
    }

    c.bench_function("possibility_grid_8x8", |b| {
        b.iter(|| black_box(board.possibility_grid(&pile)));
    });
}

criterion_group!(benches, bench_full_solve, bench_possibility_grid);
criterion_main!(benches);
