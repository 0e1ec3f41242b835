use brick_snake_common::games::GameObserver;
use brick_snake_common::{Game, GameStatus, Position, log};

pub struct ConsoleObserver {
    log_board_every: u64,
    last_logged_move: Option<u64>,
    last_score: u32,
    last_bricks: u32,
}

impl ConsoleObserver {
    pub fn new(log_board_every: u64) -> Self {
        Self {
            log_board_every,
            last_logged_move: None,
            last_score: 0,
            last_bricks: 0,
        }
    }
}

impl GameObserver for ConsoleObserver {
    fn on_state(&mut self, game: &Game) {
        if game.score() != self.last_score {
            self.last_score = game.score();
            log!("Score: {}  Size: {}", game.score(), game.body_len());
        }
        if game.bricks_added() != self.last_bricks {
            self.last_bricks = game.bricks_added();
            log!("Bricks added: {}", game.bricks_added());
        }

        let moves = game.moves();
        if self.log_board_every > 0
            && moves % self.log_board_every == 0
            && self.last_logged_move != Some(moves)
        {
            self.last_logged_move = Some(moves);
            log!("Move {}\n{}", moves, render_board(game));
        }
    }

    fn on_game_over(&mut self, game: &Game) {
        log!("Final board after {} moves\n{}", game.moves(), render_board(game));
        log!("{}", end_message(game));
    }
}

pub fn end_message(game: &Game) -> String {
    match game.status() {
        GameStatus::Won => format!("You Win! Score: {}  Size: {}", game.score(), game.body_len()),
        GameStatus::Lost(reason) => format!(
            "You Lose: the snake {}. Score: {}  Size: {}",
            reason,
            game.score(),
            game.body_len()
        ),
        GameStatus::Active => format!(
            "Stopped. Score: {}  Size: {}",
            game.score(),
            game.body_len()
        ),
    }
}

/// `#` wall, `@` head, `o` body, `*` apple, `.` empty.
pub fn render_board(game: &Game) -> String {
    let field = game.field_size();
    let mut out = String::with_capacity(field.cell_count() + field.height as usize);
    for y in 0..field.height {
        for x in 0..field.width {
            let pos = Position::new(x, y);
            let ch = if pos == game.head() {
                '@'
            } else if game.snake().contains(pos) {
                'o'
            } else if game.apple() == Some(pos) {
                '*'
            } else if game.is_wall(pos) {
                '#'
            } else {
                '.'
            };
            out.push(ch);
        }
        if y + 1 < field.height {
            out.push('\n');
        }
    }
    out
}
