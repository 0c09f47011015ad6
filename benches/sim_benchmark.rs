//! Benchmarks for the economy step and the save codec.
//!
//! The economic step is the per-second hot path of a session; the codec
//! runs on every autosave.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use stead::save::codec;
use stead::{Command, GameState, Resource, ShopItem, SplitMixChance};

/// A mid-game state: every line staffed, some upgrades, a battle pending.
fn mid_game_state() -> GameState {
    let mut state = GameState::new();
    for resource in Resource::ALL {
        state.resource_set(resource, 1_000_000);
    }
    for item in ShopItem::ALL {
        assert!(state.apply(Command::Buy(item)));
        assert!(state.apply(Command::Buy(item)));
    }
    state.population_set(5_000);
    state.food_set(1_000_000);
    assert!(state.apply(Command::StartBattle));
    state
}

fn bench_economic_steps(c: &mut Criterion) {
    let state = mid_game_state();
    let mut rng = SplitMixChance::new(42);

    c.bench_function("1000_economic_steps", |b| {
        b.iter(|| {
            let mut run = black_box(state);
            for _ in 0..1000 * 60 {
                run.tick(&mut rng);
            }
            black_box(run)
        });
    });
}

fn bench_serialize(c: &mut Criterion) {
    let state = mid_game_state();

    c.bench_function("serialize_state", |b| {
        b.iter(|| black_box(codec::serialize(black_box(&state))));
    });
}

fn bench_deserialize(c: &mut Criterion) {
    let text = codec::serialize(&mid_game_state());

    c.bench_function("deserialize_state", |b| {
        b.iter(|| black_box(codec::deserialize(black_box(&text))));
    });
}

criterion_group!(
    benches,
    bench_economic_steps,
    bench_serialize,
    bench_deserialize
);
criterion_main!(benches);
