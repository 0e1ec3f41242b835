use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::game_state::Game;
use super::snake::change_heading;
use super::types::{Direction, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutopilotKind {
    Greedy,
    Random,
}

/// Steers a headless game in place of keyboard input.
pub struct BotController;

impl BotController {
    pub fn calculate_move(
        kind: AutopilotKind,
        game: &Game,
        rng: &mut SessionRng,
    ) -> Option<Direction> {
        if game.is_terminal() {
            return None;
        }

        match kind {
            AutopilotKind::Greedy => Self::greedy_move(game, rng),
            AutopilotKind::Random => Self::random_safe_move(game, rng),
        }
    }

    fn greedy_move(game: &Game, rng: &mut SessionRng) -> Option<Direction> {
        let Some(apple) = game.apple() else {
            return Self::random_safe_move(game, rng);
        };
        let head = game.head();

        Self::safe_directions(game)
            .into_iter()
            .min_by_key(|&dir| head.step(dir).manhattan_distance(apple))
            .or_else(|| Self::random_safe_move(game, rng))
    }

    fn random_safe_move(game: &Game, rng: &mut SessionRng) -> Option<Direction> {
        let safe = Self::safe_directions(game);
        if safe.is_empty() {
            return Some(game.heading());
        }
        let idx = rng.random_range(0..safe.len());
        Some(safe[idx])
    }

    fn safe_directions(game: &Game) -> Vec<Direction> {
        let heading = game.heading();
        let head = game.head();
        Direction::ALL
            .into_iter()
            .filter(|&dir| change_heading(dir, heading) == dir)
            .filter(|&dir| Self::is_safe_position(game, head.step(dir)))
            .collect()
    }

    fn is_safe_position(game: &Game, pos: Position) -> bool {
        let growing = game.apple() == Some(pos);
        game.field_size().contains(pos)
            && !game.is_wall(pos)
            && !game.snake().would_collide(pos, growing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::game_state::initialize_game;
    use crate::games::snake::types::FieldSize;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn test_greedy_heads_towards_apple() {
        let game = initialize_game(
            FieldSize::new(20, 16),
            &[p(5, 5), p(4, 5), p(3, 5)],
            Direction::Right,
            60,
        )
        .unwrap()
        .with_apple(p(5, 10));
        let mut rng = SessionRng::new(42);
        assert_eq!(
            BotController::calculate_move(AutopilotKind::Greedy, &game, &mut rng),
            Some(Direction::Down)
        );
    }

    #[test]
    fn test_never_suggests_reversal_or_wall() {
        let game = initialize_game(
            FieldSize::new(10, 10),
            &[p(8, 1), p(7, 1), p(6, 1)],
            Direction::Right,
            20,
        )
        .unwrap();
        let mut rng = SessionRng::new(42);
        for _ in 0..50 {
            let dir = BotController::calculate_move(AutopilotKind::Random, &game, &mut rng);
            assert_eq!(dir, Some(Direction::Down));
        }
    }

    #[test]
    fn test_no_move_for_finished_game() {
        let game = initialize_game(
            FieldSize::new(10, 10),
            &[p(1, 4), p(2, 4)],
            Direction::Left,
            20,
        )
        .unwrap();
        let mut rng = SessionRng::new(42);
        let lost = game.tick_move(&mut rng).unwrap();
        assert_eq!(
            BotController::calculate_move(AutopilotKind::Greedy, &lost, &mut rng),
            None
        );
    }
}
