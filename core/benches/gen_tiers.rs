use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sapper_core::*;
use std::hint::black_box;

const SEEDS: u64 = 64;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for level in Level::ALL {
        for placement in [Placement::Shuffle, Placement::Rejection] {
            group.bench_with_input(
                BenchmarkId::new(format!("{placement:?}"), level.name()),
                &level.config(),
                |b, &config| {
                    b.iter(|| {
                        for seed in 0..SEEDS {
                            let board = RandomBoardGenerator::new(seed)
                                .with_placement(placement)
                                .generate(config)
                                .expect("preset config is valid");
                            black_box(board);
                        }
                    })
                },
            );
        }
    }

    // dense boards are where rejection sampling falls behind
    let dense = GameConfig::new((15, 15), 220).expect("dense config is valid");
    for placement in [Placement::Shuffle, Placement::Rejection] {
        group.bench_with_input(
            BenchmarkId::new(format!("{placement:?}"), "dense"),
            &dense,
            |b, &config| {
                b.iter(|| {
                    for seed in 0..SEEDS {
                        black_box(
                            RandomBoardGenerator::new(seed)
                                .with_placement(placement)
                                .generate(config)
                                .expect("dense config is valid"),
                        );
                    }
                })
            },
        );
    }
    group.finish();
}

fn bench_first_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_reveal");
    for level in Level::ALL {
        let boards: Vec<Board> = (0..SEEDS)
            .map(|seed| {
                RandomBoardGenerator::new(seed)
                    .generate(level.config())
                    .expect("preset config is valid")
            })
            .collect();
        let (rows, cols) = level.config().size;
        let center = (rows / 2, cols / 2);

        group.bench_with_input(BenchmarkId::from_parameter(level.name()), &boards, |b, boards| {
            b.iter(|| {
                for board in boards {
                    let mut engine = RevealEngine::new(board.clone());
                    black_box(engine.reveal(center).expect("center is in bounds"));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_first_reveal);
criterion_main!(benches);
