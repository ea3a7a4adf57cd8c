#[macro_use]
extern crate criterion;

use criterion::{black_box, BenchmarkId, Criterion};
use tally_mcts::connect_four::{ConnectFour, Token};
use tally_mcts::{RandomStrategy, SearchNode, Strategy, UctStrategy};

fn bench_explore(c: &mut Criterion) {
    let mut group = c.benchmark_group("explore");

    // Exploration cost from the opening position across simulation budgets
    for &tryouts in &[100usize, 500, 2000] {
        group.bench_with_input(
            BenchmarkId::new("random", tryouts),
            &tryouts,
            |b, &tryouts| {
                b.iter(|| {
                    let mut node = SearchNode::new(ConnectFour::new(Token::X));
                    let mut strategy = RandomStrategy::new(tryouts);
                    strategy.explore(&mut node).unwrap();
                    black_box(node.sampled_total())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("uct", tryouts),
            &tryouts,
            |b, &tryouts| {
                b.iter(|| {
                    let mut node = SearchNode::new(ConnectFour::new(Token::X));
                    let mut strategy = UctStrategy::new(tryouts);
                    strategy.explore(&mut node).unwrap();
                    black_box(node.sampled_total())
                })
            },
        );
    }

    group.finish();
}

fn bench_full_turn(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_turn");

    // One complete engine turn: explore then commit to a move
    group.bench_function("random_500", |b| {
        b.iter(|| {
            let mut node = SearchNode::new(ConnectFour::new(Token::X));
            let mut strategy = RandomStrategy::new(500);
            strategy.explore(&mut node).unwrap();
            black_box(strategy.advance(node).unwrap().0)
        })
    });

    group.bench_function("uct_500", |b| {
        b.iter(|| {
            let mut node = SearchNode::new(ConnectFour::new(Token::X));
            let mut strategy = UctStrategy::new(500);
            strategy.explore(&mut node).unwrap();
            black_box(strategy.advance(node).unwrap().0)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_explore, bench_full_turn);
criterion_main!(benches);
