use super::types::{FieldSize, Position};

/// Rejected samples before switching to picking among the enumerated free cells.
pub const MAX_SPAWN_ATTEMPTS: usize = 100;

/// Source of random cells for apples and bricks.
pub trait CellPicker {
    /// A uniformly random cell of the field.
    fn pick_cell(&mut self, field_size: FieldSize) -> Position;

    /// A uniformly random index in `0..len`; `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnError {
    Exhausted,
}

impl std::fmt::Display for SpawnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpawnError::Exhausted => write!(f, "no free cell left to spawn on"),
        }
    }
}

impl std::error::Error for SpawnError {}

/// Picks a free cell uniformly at random.
///
/// Samples the whole field and rejects occupied candidates. After
/// `MAX_SPAWN_ATTEMPTS` rejections the free cells are enumerated and one is
/// picked directly, so the call always terminates and stays uniform.
pub fn spawn_cell<P, F>(
    picker: &mut P,
    field_size: FieldSize,
    is_occupied: F,
) -> Result<Position, SpawnError>
where
    P: CellPicker + ?Sized,
    F: Fn(Position) -> bool,
{
    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let candidate = picker.pick_cell(field_size);
        if field_size.contains(candidate) && !is_occupied(candidate) {
            return Ok(candidate);
        }
    }

    let free: Vec<Position> = field_size.cells().filter(|&p| !is_occupied(p)).collect();
    if free.is_empty() {
        return Err(SpawnError::Exhausted);
    }
    Ok(free[picker.pick_index(free.len())])
}


#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::test_support::ScriptedPicker;
    use super::*;
    use crate::games::SessionRng;

    #[test]
    fn test_first_free_candidate_is_taken() {
        let occupied: HashSet<Position> = [Position::new(1, 1)].into_iter().collect();
        let mut picker = ScriptedPicker::new(&[(1, 1), (1, 1), (2, 3)]);
        let pos = spawn_cell(&mut picker, FieldSize::new(5, 5), |p| occupied.contains(&p)).unwrap();
        assert_eq!(pos, Position::new(2, 3));
        assert_eq!(picker.picks, 3);
    }

    #[test]
    fn test_full_field_is_exhausted() {
        let mut rng = SessionRng::new(42);
        let result = spawn_cell(&mut rng, FieldSize::new(4, 4), |_| true);
        assert_eq!(result, Err(SpawnError::Exhausted));
    }

    #[test]
    fn test_single_free_cell_is_found_after_rejections() {
        let field = FieldSize::new(6, 6);
        let free = Position::new(4, 2);
        let mut picker = ScriptedPicker::new(&[]);
        let pos = spawn_cell(&mut picker, field, |p| p != free).unwrap();
        assert_eq!(pos, free);
        assert_eq!(picker.picks, MAX_SPAWN_ATTEMPTS);
    }

    #[test]
    fn test_random_spawn_never_lands_on_occupied() {
        let field = FieldSize::new(8, 8);
        let occupied: HashSet<Position> = field.cells().filter(|p| (p.x + p.y) % 3 != 0).collect();
        let mut rng = SessionRng::new(3);
        for _ in 0..100 {
            let pos = spawn_cell(&mut rng, field, |p| occupied.contains(&p)).unwrap();
            assert!(!occupied.contains(&pos));
        }
    }
}
