use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval_at, Instant};

use crate::games::{GameObserver, SessionRng};
use crate::log;
use super::bot_controller::{AutopilotKind, BotController};
use super::error::GameError;
use super::game_state::Game;
use super::settings::GameSettings;
use super::types::{Direction, GameStatus};

pub struct SessionConfig {
    pub move_interval: Duration,
    pub brick_interval: Duration,
    pub autopilot: Option<AutopilotKind>,
    /// Stop after this many move ticks even if the game is still running.
    pub max_moves: Option<u64>,
}

impl From<&GameSettings> for SessionConfig {
    fn from(settings: &GameSettings) -> Self {
        Self {
            move_interval: settings.move_interval(),
            brick_interval: settings.brick_interval(),
            autopilot: None,
            max_moves: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOutcome {
    pub status: GameStatus,
    pub score: u32,
    pub body_len: usize,
    pub moves: u64,
    pub bricks_added: u32,
    pub seed: u64,
}

impl SessionOutcome {
    fn from_game(game: &Game, seed: u64) -> Self {
        Self {
            status: game.status(),
            score: game.score(),
            body_len: game.body_len(),
            moves: game.moves(),
            bricks_added: game.bricks_added(),
            seed,
        }
    }
}

pub struct BrickSnakeSession;

impl BrickSnakeSession {
    /// Owns the only copy of the game and applies moves, bricks and heading
    /// events one at a time until the game ends or `max_moves` is reached.
    pub async fn run(
        game: Game,
        config: SessionConfig,
        mut rng: SessionRng,
        mut heading_rx: mpsc::UnboundedReceiver<Direction>,
        observer: &mut impl GameObserver,
    ) -> Result<SessionOutcome, GameError> {
        let mut game = game.spawn_apple(&mut rng)?;
        observer.on_state(&game);

        let start = Instant::now();
        let mut move_timer = interval_at(start + config.move_interval, config.move_interval);
        let mut brick_timer = interval_at(start + config.brick_interval, config.brick_interval);
        move_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        brick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut input_open = true;

        log!(
            "Session started (seed {}, move every {:?}, brick every {:?})",
            rng.seed(),
            config.move_interval,
            config.brick_interval
        );

        loop {
            tokio::select! {
                biased;

                direction = heading_rx.recv(), if input_open => {
                    match direction {
                        Some(direction) => game = game.set_heading(direction),
                        None => input_open = false,
                    }
                }
                _ = move_timer.tick() => {
                    if let Some(kind) = config.autopilot
                        && let Some(direction) = BotController::calculate_move(kind, &game, &mut rng)
                    {
                        game = game.set_heading(direction);
                    }
                    game = game.tick_move(&mut rng)?;
                    observer.on_state(&game);

                    if game.is_terminal() {
                        break;
                    }
                    if config.max_moves.is_some_and(|max| game.moves() >= max) {
                        log!("Move limit of {} reached", game.moves());
                        break;
                    }
                }
                _ = brick_timer.tick() => {
                    game = game.tick_obstacle(&mut rng)?;
                    observer.on_state(&game);
                }
            }
        }

        observer.on_game_over(&game);
        let outcome = SessionOutcome::from_game(&game, rng.seed());
        log!(
            "Session finished: {:?}, score {}, size {}, {} moves, {} bricks",
            outcome.status,
            outcome.score,
            outcome.body_len,
            outcome.moves,
            outcome.bricks_added
        );
        Ok(outcome)
    }
}
