#[macro_use]
extern crate criterion;
extern crate holdem_engine;

use criterion::Criterion;
use holdem_engine::arena::{CallingStrategy, HandSimulationBuilder, RandomStrategy, Strategy};
use holdem_engine::table::{PokerTable, Table, TableConfig};

fn deal_to_river(c: &mut Criterion) {
    let mut table = Table::with_seed(TableConfig::default(), 420).expect("Default config is valid.");
    table.seat_players(6).expect("Six players fit at a table.");

    c.bench_function("Deal 6 handed to the river and conclude", move |b| {
        b.iter(|| {
            table.start_new_hand().expect("Should start a hand.");
            table.deal_community_cards(5).expect("Should deal a board.");
            table.conclude_round()
        })
    });
}

fn calling_station_hand(c: &mut Criterion) {
    let strategies: Vec<Box<dyn Strategy>> = (0..6)
        .map(|_| Box::new(CallingStrategy) as Box<dyn Strategy>)
        .collect();
    let mut sim = HandSimulationBuilder::default()
        .num_players(6)
        .config(TableConfig {
            starting_bankroll: u64::MAX / 4,
            ..TableConfig::default()
        })
        .strategies(strategies)
        .seed(420)
        .build()
        .expect("Should build a simulation.");

    c.bench_function("Simulate one 6 handed calling hand", move |b| {
        b.iter(|| sim.run_hand())
    });
}

fn random_hand(c: &mut Criterion) {
    let strategies: Vec<Box<dyn Strategy>> = (0..6)
        .map(|i| Box::new(RandomStrategy::with_seed(i)) as Box<dyn Strategy>)
        .collect();
    let mut sim = HandSimulationBuilder::default()
        .num_players(6)
        .config(TableConfig {
            starting_bankroll: 1_000_000_000,
            ..TableConfig::default()
        })
        .strategies(strategies)
        .seed(421)
        .build()
        .expect("Should build a simulation.");

    c.bench_function("Simulate one 6 handed random hand", move |b| {
        b.iter(|| sim.run_hand())
    });
}

criterion_group!(benches, deal_to_river, calling_station_hand, random_hand);
criterion_main!(benches);
