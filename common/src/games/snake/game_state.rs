use std::collections::{HashSet, VecDeque};

use crate::debug_log;
use super::board::Board;
use super::error::GameError;
use super::segments::{SegmentKind, segment_kinds};
use super::settings::GameSettings;
use super::snake::Snake;
use super::spawn::{CellPicker, spawn_cell};
use super::types::{DeathReason, Direction, FieldSize, GameStatus, Position};

/// One immutable snapshot of a game. Every transition returns a new value;
/// the caller keeps the latest one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    snake: Snake,
    board: Board,
    apple: Option<Position>,
    score: u32,
    initial_length: usize,
    win_length: usize,
    status: GameStatus,
    moves: u64,
}

/// Starting state on a bordered field: no bricks, no apple, score 0.
pub fn initialize_game(
    field_size: FieldSize,
    initial_body: &[Position],
    initial_heading: Direction,
    win_length: usize,
) -> Result<Game, GameError> {
    Game::with_board(
        Board::new(field_size, true),
        initial_body,
        initial_heading,
        win_length,
    )
}

impl Game {
    pub fn from_settings(settings: &GameSettings) -> Result<Game, GameError> {
        Game::with_board(
            Board::new(settings.field_size(), settings.border_walls),
            &settings.initial_body(),
            settings.initial_heading(),
            settings.win_length as usize,
        )
    }

    fn with_board(
        board: Board,
        initial_body: &[Position],
        initial_heading: Direction,
        win_length: usize,
    ) -> Result<Game, GameError> {
        validate_setup(&board, initial_body, initial_heading, win_length)
            .map_err(GameError::InvalidSetup)?;

        Ok(Game {
            snake: Snake::new(initial_body.iter().copied(), initial_heading),
            board,
            apple: None,
            score: 0,
            initial_length: initial_body.len(),
            win_length,
            status: GameStatus::Active,
            moves: 0,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn death_reason(&self) -> Option<DeathReason> {
        match self.status {
            GameStatus::Lost(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn body(&self) -> &VecDeque<Position> {
        self.snake.body()
    }

    pub fn head(&self) -> Position {
        self.snake.head()
    }

    pub fn heading(&self) -> Direction {
        self.snake.heading()
    }

    pub fn pending_heading(&self) -> Option<Direction> {
        self.snake.pending_heading()
    }

    pub fn body_len(&self) -> usize {
        self.snake.len()
    }

    pub fn walls(&self) -> &HashSet<Position> {
        self.board.walls()
    }

    pub fn bricks_added(&self) -> u32 {
        self.board.bricks_added()
    }

    pub fn apple(&self) -> Option<Position> {
        self.apple
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn initial_length(&self) -> usize {
        self.initial_length
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn field_size(&self) -> FieldSize {
        self.board.field_size()
    }

    pub fn moves(&self) -> u64 {
        self.moves
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.board.is_wall(pos)
    }

    /// Inside the field and not covered by a wall, the snake or the apple.
    pub fn is_free(&self, pos: Position) -> bool {
        self.field_size().contains(pos)
            && !self.board.is_wall(pos)
            && !self.snake.contains(pos)
            && self.apple != Some(pos)
    }

    pub fn segments(&self) -> Vec<SegmentKind> {
        segment_kinds(self.snake.body(), self.snake.heading())
    }

    /// Records a heading request for the next move. Reversals are ignored.
    pub fn set_heading(&self, requested: Direction) -> Game {
        let mut next = self.clone();
        if !self.is_terminal() {
            next.snake.request_heading(requested);
        }
        next
    }

    /// Places an apple if there is none yet.
    pub fn spawn_apple<P: CellPicker + ?Sized>(&self, picker: &mut P) -> Result<Game, GameError> {
        let mut next = self.clone();
        if !self.is_terminal() && self.apple.is_none() {
            next.place_apple(picker)?;
        }
        Ok(next)
    }

    /// Advances the snake one cell and resolves apples, collisions and the
    /// win condition.
    pub fn tick_move<P: CellPicker + ?Sized>(&self, picker: &mut P) -> Result<Game, GameError> {
        if self.is_terminal() {
            return Ok(self.clone());
        }

        let mut next = self.clone();
        next.moves += 1;

        let heading = self.snake.effective_heading();
        let new_head = self.snake.head().step(heading);

        if let Some(reason) = self.classify_obstacle(new_head) {
            next.status = GameStatus::Lost(reason);
            debug_log!("Snake {} at {} after {} moves", reason, new_head, next.moves);
            return Ok(next);
        }

        let growing = self.apple == Some(new_head);
        next.snake = match self.snake.advance(heading, growing) {
            Ok(snake) => snake,
            Err(reason) => {
                next.status = GameStatus::Lost(reason);
                debug_log!("Snake {} at {} after {} moves", reason, new_head, next.moves);
                return Ok(next);
            }
        };

        if growing {
            next.apple = None;
            next.score += 1;
            debug_log!("Apple eaten at {}. Score: {}", new_head, next.score);
        }

        if next.snake.len() >= self.win_length {
            next.status = GameStatus::Won;
            debug_log!("Snake reached {} cells after {} moves", next.snake.len(), next.moves);
            return Ok(next);
        }

        if next.apple.is_none() {
            next.place_apple(picker)?;
        }
        Ok(next)
    }

    /// Drops one brick on a cell free of walls, the snake and the apple.
    pub fn tick_obstacle<P: CellPicker + ?Sized>(&self, picker: &mut P) -> Result<Game, GameError> {
        if self.is_terminal() {
            return Ok(self.clone());
        }

        let mut next = self.clone();
        let pos = spawn_cell(picker, self.field_size(), |p| !self.is_free(p))?;
        next.board.add_brick(pos);
        debug_log!("Brick added at {} ({} total)", pos, next.board.bricks_added());
        Ok(next)
    }

    fn classify_obstacle(&self, pos: Position) -> Option<DeathReason> {
        if !self.field_size().contains(pos) {
            Some(DeathReason::OutOfBounds)
        } else if self.board.is_wall(pos) {
            Some(DeathReason::WallCollision)
        } else {
            None
        }
    }

    fn place_apple<P: CellPicker + ?Sized>(&mut self, picker: &mut P) -> Result<(), GameError> {
        let board = &self.board;
        let snake = &self.snake;
        let pos = spawn_cell(picker, board.field_size(), |p| {
            board.is_wall(p) || snake.contains(p)
        })?;
        self.apple = Some(pos);
        debug_log!("Apple spawned at {}", pos);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn with_apple(mut self, pos: Position) -> Self {
        self.apple = Some(pos);
        self
    }
}

fn validate_setup(
    board: &Board,
    body: &[Position],
    heading: Direction,
    win_length: usize,
) -> Result<(), String> {
    let field = board.field_size();
    if field.width < 3 || field.height < 3 {
        return Err(format!("field {}x{} is smaller than 3x3", field.width, field.height));
    }
    let Some(&head) = body.first() else {
        return Err("snake body is empty".to_string());
    };

    let mut seen = HashSet::new();
    for &cell in body {
        if !field.contains(cell) {
            return Err(format!("snake cell {} is outside the field", cell));
        }
        if board.is_wall(cell) {
            return Err(format!("snake cell {} is on a wall", cell));
        }
        if !seen.insert(cell) {
            return Err(format!("snake cell {} appears twice", cell));
        }
    }
    if let Some(pair) = body.windows(2).find(|pair| !pair[0].is_adjacent(pair[1])) {
        return Err(format!("snake cells {} and {} are not adjacent", pair[0], pair[1]));
    }
    if body.get(1) == Some(&head.step(heading)) {
        return Err("initial heading points into the snake's neck".to_string());
    }
    if win_length <= body.len() {
        return Err(format!(
            "win length {} must be greater than the initial length {}",
            win_length,
            body.len()
        ));
    }
    Ok(())
}
