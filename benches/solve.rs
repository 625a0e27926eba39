use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_gametree::core::{GameRng, TreeConfig};
use rust_gametree::solver::GameTree;

pub fn criterion_benchmark(c: &mut Criterion) {
    let config = TreeConfig::new(3)
        .with_depth(10)
        .with_reward_range(0, 50);

    c.bench_function("GameTree - 3 players - depth 10 - generate + solve", |b| {
        b.iter(|| {
            let mut tree = GameTree::generate(config.clone(), &mut GameRng::new(42))
                .expect("valid config");
            tree.solve();
            black_box(tree.root().tie_count())
        })
    });

    let ties = config.clone().with_reward_range(0, 2);
    c.bench_function("GameTree - 3 players - depth 10 - tie heavy", |b| {
        b.iter(|| {
            let mut tree = GameTree::generate(ties.clone(), &mut GameRng::new(42))
                .expect("valid config");
            tree.solve();
            black_box(tree.root().tie_count())
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
