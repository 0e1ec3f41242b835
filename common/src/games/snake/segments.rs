use super::types::{Direction, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Shape of one body cell, enough for a renderer to pick a sprite.
///
/// Directions describe travel from tail towards head: `Corner { from, to }`
/// is entered moving `from` and left moving `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    Head(Direction),
    Straight(Axis),
    Corner { from: Direction, to: Direction },
    Tail(Direction),
}

pub fn segment_kinds<'a, I>(body: I, heading: Direction) -> Vec<SegmentKind>
where
    I: IntoIterator<Item = &'a Position>,
{
    let cells: Vec<Position> = body.into_iter().copied().collect();
    let last = cells.len().saturating_sub(1);

    cells
        .iter()
        .enumerate()
        .map(|(i, &cell)| {
            if i == 0 {
                return SegmentKind::Head(heading);
            }
            // Travel direction out of this cell, towards the head.
            let to = cell.direction_to(cells[i - 1]).unwrap_or(heading);
            if i == last {
                return SegmentKind::Tail(to);
            }
            let from = cells[i + 1].direction_to(cell).unwrap_or(to);
            if from == to {
                SegmentKind::Straight(axis_of(to))
            } else {
                SegmentKind::Corner { from, to }
            }
        })
        .collect()
}

fn axis_of(direction: Direction) -> Axis {
    match direction {
        Direction::Left | Direction::Right => Axis::Horizontal,
        Direction::Up | Direction::Down => Axis::Vertical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(list: &[(i32, i32)]) -> Vec<Position> {
        list.iter().map(|&(x, y)| Position::new(x, y)).collect()
    }

    #[test]
    fn test_straight_snake() {
        let body = cells(&[(5, 5), (4, 5), (3, 5)]);
        assert_eq!(
            segment_kinds(&body, Direction::Right),
            vec![
                SegmentKind::Head(Direction::Right),
                SegmentKind::Straight(Axis::Horizontal),
                SegmentKind::Tail(Direction::Right),
            ]
        );
    }

    #[test]
    fn test_corner_going_right_then_up() {
        // tail (3,5) -> (4,5) -> corner at (5,5) -> head (5,4)
        let body = cells(&[(5, 4), (5, 5), (4, 5), (3, 5)]);
        let kinds = segment_kinds(&body, Direction::Up);
        assert_eq!(
            kinds[1],
            SegmentKind::Corner {
                from: Direction::Right,
                to: Direction::Up
            }
        );
        assert_eq!(kinds[2], SegmentKind::Straight(Axis::Horizontal));
        assert_eq!(kinds[3], SegmentKind::Tail(Direction::Right));
    }

    #[test]
    fn test_single_cell_is_head() {
        let body = cells(&[(2, 2)]);
        assert_eq!(
            segment_kinds(&body, Direction::Down),
            vec![SegmentKind::Head(Direction::Down)]
        );
    }
}
