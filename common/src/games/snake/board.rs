use std::collections::HashSet;

use super::types::{FieldSize, Position};

/// Impassable cells: the border ring fixed at start plus bricks added later.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    field_size: FieldSize,
    walls: HashSet<Position>,
    bricks_added: u32,
}

impl Board {
    pub fn new(field_size: FieldSize, border_walls: bool) -> Self {
        let walls = if border_walls {
            field_size
                .cells()
                .filter(|p| {
                    p.x == 0 || p.y == 0 || p.x == field_size.width - 1 || p.y == field_size.height - 1
                })
                .collect()
        } else {
            HashSet::new()
        };

        Self {
            field_size,
            walls,
            bricks_added: 0,
        }
    }

    pub fn field_size(&self) -> FieldSize {
        self.field_size
    }

    pub fn walls(&self) -> &HashSet<Position> {
        &self.walls
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.walls.contains(&pos)
    }

    pub fn bricks_added(&self) -> u32 {
        self.bricks_added
    }

    pub(crate) fn add_brick(&mut self, pos: Position) {
        if self.walls.insert(pos) {
            self.bricks_added += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_ring_size() {
        let board = Board::new(FieldSize::new(20, 16), true);
        assert_eq!(board.walls().len(), 2 * 20 + 2 * 16 - 4);
        assert!(board.is_wall(Position::new(0, 0)));
        assert!(board.is_wall(Position::new(19, 7)));
        assert!(board.is_wall(Position::new(7, 15)));
        assert!(!board.is_wall(Position::new(1, 1)));
    }

    #[test]
    fn test_open_board_has_no_walls() {
        let board = Board::new(FieldSize::new(10, 10), false);
        assert!(board.walls().is_empty());
    }

    #[test]
    fn test_add_brick_counts_only_new_cells() {
        let mut board = Board::new(FieldSize::new(10, 10), true);
        board.add_brick(Position::new(4, 4));
        board.add_brick(Position::new(4, 4));
        board.add_brick(Position::new(0, 0));
        assert_eq!(board.bricks_added(), 1);
        assert!(board.is_wall(Position::new(4, 4)));
    }
}
