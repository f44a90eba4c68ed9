#[macro_use]
extern crate criterion;
extern crate holdem_engine;

use criterion::Criterion;
use holdem_engine::core::Card;
use holdem_engine::holdem::EquityEvaluator;

fn aces_heads_up(c: &mut Criterion) {
    let hero = Card::parse_many("AsAc").expect("Should be able to parse the hero hand.");
    let mut evaluator = EquityEvaluator::with_seed(420);

    c.bench_function("Equity AsAc vs 1, 100 simulations", move |b| {
        b.iter(|| evaluator.evaluate(2, &hero, &[], 100))
    });
}

fn flop_six_handed(c: &mut Criterion) {
    let hero = Card::parse_many("KdQd").expect("Should be able to parse the hero hand.");
    let board = Card::parse_many("2d9sJd").expect("Should be able to parse the board.");
    let mut evaluator = EquityEvaluator::with_seed(7);

    c.bench_function("Equity KdQd on 2d9sJd vs 5, 100 simulations", move |b| {
        b.iter(|| evaluator.evaluate(6, &hero, &board, 100))
    });
}

#[cfg(feature = "rayon")]
fn aces_parallel(c: &mut Criterion) {
    let hero = Card::parse_many("AsAc").expect("Should be able to parse the hero hand.");
    let mut evaluator = EquityEvaluator::with_seed(420);

    c.bench_function("Parallel equity AsAc vs 1, 10k simulations", move |b| {
        b.iter(|| evaluator.evaluate_parallel(2, &hero, &[], 10_000, |_, _| {}))
    });
}

#[cfg(not(feature = "rayon"))]
fn aces_parallel(_c: &mut Criterion) {}

criterion_group!(benches, aces_heads_up, flop_six_handed, aces_parallel);
criterion_main!(benches);
