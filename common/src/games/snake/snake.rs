use std::collections::{HashSet, VecDeque};

use super::types::{DeathReason, Direction, Position};

/// Resolves a heading request against the heading the snake is moving in.
/// Turning straight back into the neck is ignored.
pub fn change_heading(requested: Direction, current: Direction) -> Direction {
    if requested.is_opposite(&current) {
        current
    } else {
        requested
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Position>,
    body_set: HashSet<Position>,
    heading: Direction,
    pending_heading: Option<Direction>,
}

impl Snake {
    /// `body` is head first. Callers validate shape before building a snake.
    pub(crate) fn new(body: impl IntoIterator<Item = Position>, heading: Direction) -> Self {
        let body: VecDeque<Position> = body.into_iter().collect();
        let body_set = body.iter().copied().collect();
        Self {
            body,
            body_set,
            heading,
            pending_heading: None,
        }
    }

    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body_set.contains(&pos)
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn pending_heading(&self) -> Option<Direction> {
        self.pending_heading
    }

    /// Heading the next advance will use.
    pub fn effective_heading(&self) -> Direction {
        self.pending_heading.unwrap_or(self.heading)
    }

    pub(crate) fn request_heading(&mut self, requested: Direction) {
        if requested.is_opposite(&self.heading) {
            return;
        }
        self.pending_heading = Some(requested);
    }

    /// True when moving the head onto `pos` would bite the body. The tail
    /// cell is free unless the snake is growing this step.
    pub fn would_collide(&self, pos: Position, growing: bool) -> bool {
        self.body_set.contains(&pos) && (growing || pos != self.tail())
    }

    /// Moves one cell towards `heading`. Returns the moved snake, or the
    /// collision that stopped it. Walls and apples are not considered here.
    pub fn advance(&self, heading: Direction, growing: bool) -> Result<Snake, DeathReason> {
        let new_head = self.head().step(heading);
        if self.would_collide(new_head, growing) {
            return Err(DeathReason::SelfCollision);
        }

        let mut next = self.clone();
        if !growing && let Some(tail) = next.body.pop_back() {
            next.body_set.remove(&tail);
        }
        next.body.push_front(new_head);
        next.body_set.insert(new_head);
        next.heading = heading;
        next.pending_heading = None;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_at(cells: &[(i32, i32)], heading: Direction) -> Snake {
        Snake::new(cells.iter().map(|&(x, y)| Position::new(x, y)), heading)
    }

    #[test]
    fn test_reversal_is_rejected_for_every_direction() {
        for h in Direction::ALL {
            assert_eq!(change_heading(h.opposite(), h), h);
        }
    }

    #[test]
    fn test_perpendicular_and_same_heading_accepted() {
        assert_eq!(change_heading(Direction::Up, Direction::Right), Direction::Up);
        assert_eq!(change_heading(Direction::Left, Direction::Down), Direction::Left);
        assert_eq!(change_heading(Direction::Right, Direction::Right), Direction::Right);
    }

    #[test]
    fn test_advance_drops_tail() {
        let snake = snake_at(&[(5, 5), (4, 5), (3, 5)], Direction::Right);
        let moved = snake.advance(Direction::Right, false).unwrap();
        let body: Vec<_> = moved.body().iter().copied().collect();
        assert_eq!(
            body,
            vec![Position::new(6, 5), Position::new(5, 5), Position::new(4, 5)]
        );
        assert!(!moved.contains(Position::new(3, 5)));
    }

    #[test]
    fn test_advance_growing_keeps_tail() {
        let snake = snake_at(&[(5, 5), (4, 5), (3, 5)], Direction::Right);
        let moved = snake.advance(Direction::Right, true).unwrap();
        assert_eq!(moved.len(), 4);
        assert_eq!(moved.tail(), Position::new(3, 5));
    }

    #[test]
    fn test_moving_into_vacated_tail_is_allowed() {
        // 2x2 loop: head (1,0), then (1,1), (0,1), tail (0,0)
        let snake = snake_at(&[(1, 0), (1, 1), (0, 1), (0, 0)], Direction::Up);
        let moved = snake.advance(Direction::Left, false).unwrap();
        assert_eq!(moved.head(), Position::new(0, 0));
        assert_eq!(moved.len(), 4);
    }

    #[test]
    fn test_moving_into_tail_while_growing_collides() {
        let snake = snake_at(&[(1, 0), (1, 1), (0, 1), (0, 0)], Direction::Up);
        assert_eq!(
            snake.advance(Direction::Left, true),
            Err(DeathReason::SelfCollision)
        );
    }

    #[test]
    fn test_moving_into_body_collides() {
        let snake = snake_at(&[(2, 1), (2, 2), (1, 2), (1, 1), (1, 0)], Direction::Up);
        assert_eq!(
            snake.advance(Direction::Left, false),
            Err(DeathReason::SelfCollision)
        );
    }

    #[test]
    fn test_request_heading_ignores_reversal_and_keeps_pending() {
        let mut snake = snake_at(&[(5, 5), (4, 5)], Direction::Right);
        snake.request_heading(Direction::Up);
        snake.request_heading(Direction::Left);
        assert_eq!(snake.pending_heading(), Some(Direction::Up));
        snake.request_heading(Direction::Down);
        assert_eq!(snake.effective_heading(), Direction::Down);
    }
}
