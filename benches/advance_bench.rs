use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::time::Duration;

use snake_engine::{Direction, GameRng, GameSettings, GameState, StepStatus};

fn bench_zigzag_100_steps() {
    let mut rng = GameRng::new(42);
    let mut state = GameState::new(&GameSettings::new(50, 50), &mut rng).unwrap();

    // Alternate Right/Down to stay on the field for the whole run.
    let mut down = false;
    for _ in 0..100 {
        let direction = if down { Direction::Down } else { Direction::Right };
        down = !down;
        if state.apply_move(direction, &mut rng) == StepStatus::Ended {
            break;
        }
    }
}

fn bench_game_until_wall() {
    let mut rng = GameRng::new(42);
    let mut state = GameState::new(&GameSettings::new(100, 100), &mut rng).unwrap();
    while state.keep_move(&mut rng) == StepStatus::Alive {}
}

fn advance_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    group
        .sampling_mode(SamplingMode::Flat)
        .measurement_time(Duration::from_secs(10));

    group.bench_function("zigzag_100_steps", |b| b.iter(bench_zigzag_100_steps));

    group.bench_function("game_until_wall", |b| b.iter(bench_game_until_wall));

    group.finish();
}

criterion_group!(benches, advance_bench);
criterion_main!(benches);
