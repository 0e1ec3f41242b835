use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use brick_snake_common::{AutopilotKind, BotController, Game, GameSettings, SessionRng};

fn play_autopilot_game(seed: u64, max_moves: u32) -> Game {
    let settings = GameSettings::default();
    let mut rng = SessionRng::new(seed);
    let mut game = Game::from_settings(&settings)
        .and_then(|g| g.spawn_apple(&mut rng))
        .unwrap();

    for tick in 1..=max_moves {
        if let Some(direction) = BotController::calculate_move(AutopilotKind::Greedy, &game, &mut rng) {
            game = game.set_heading(direction);
        }
        game = game.tick_move(&mut rng).unwrap();
        if tick % 20 == 0 {
            game = game.tick_obstacle(&mut rng).unwrap();
        }
        if game.is_terminal() {
            break;
        }
    }
    game
}

fn bench_single_tick_move(c: &mut Criterion) {
    let game = play_autopilot_game(7, 200);
    let mut rng = SessionRng::new(1);
    c.bench_function("tick_move_single", |b| {
        b.iter(|| black_box(game.tick_move(&mut rng).unwrap()))
    });
}

fn bench_single_tick_obstacle(c: &mut Criterion) {
    let game = play_autopilot_game(7, 200);
    let mut rng = SessionRng::new(1);
    c.bench_function("tick_obstacle_single", |b| {
        b.iter(|| black_box(game.tick_obstacle(&mut rng).unwrap()))
    });
}

fn bench_full_autopilot_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("autopilot_game");
    group.sample_size(20);
    group.bench_function("greedy_2000_moves", |b| {
        b.iter(|| black_box(play_autopilot_game(42, 2000)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_single_tick_move,
    bench_single_tick_obstacle,
    bench_full_autopilot_game
);
criterion_main!(benches);
