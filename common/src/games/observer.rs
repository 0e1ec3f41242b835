use super::snake::Game;

/// Receives every state the session driver commits.
pub trait GameObserver {
    fn on_state(&mut self, game: &Game);

    fn on_game_over(&mut self, _game: &Game) {}
}
