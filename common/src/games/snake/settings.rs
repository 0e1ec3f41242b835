use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::{Direction, FieldSize, Position};

pub const DEFAULT_FIELD_WIDTH: u32 = 20;
pub const DEFAULT_FIELD_HEIGHT: u32 = 16;
pub const DEFAULT_INITIAL_LENGTH: u32 = 3;
pub const DEFAULT_WIN_LENGTH: u32 = 60;
pub const DEFAULT_MOVE_INTERVAL_MS: u32 = 250;
pub const DEFAULT_BRICK_INTERVAL_MS: u32 = 5000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub field_width: u32,
    pub field_height: u32,
    #[serde(default = "default_border_walls")]
    pub border_walls: bool,
    pub initial_length: u32,
    pub win_length: u32,
    pub move_interval_ms: u32,
    pub brick_interval_ms: u32,
}

fn default_border_walls() -> bool {
    true
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,
            border_walls: true,
            initial_length: DEFAULT_INITIAL_LENGTH,
            win_length: DEFAULT_WIN_LENGTH,
            move_interval_ms: DEFAULT_MOVE_INTERVAL_MS,
            brick_interval_ms: DEFAULT_BRICK_INTERVAL_MS,
        }
    }
}

impl GameSettings {
    pub fn field_size(&self) -> FieldSize {
        FieldSize::new(self.field_width as i32, self.field_height as i32)
    }

    pub fn move_interval(&self) -> Duration {
        Duration::from_millis(self.move_interval_ms as u64)
    }

    pub fn brick_interval(&self) -> Duration {
        Duration::from_millis(self.brick_interval_ms as u64)
    }

    pub fn initial_heading(&self) -> Direction {
        Direction::Right
    }

    /// Horizontal snake in the upper-left third, head first, facing right.
    /// On the default 20x16 field this is `[(5,5), (4,5), (3,5)]`.
    pub fn initial_body(&self) -> Vec<Position> {
        let head_x = self.initial_length as i32 + 2;
        let y = (self.field_height as i32 - 1) / 3;
        (0..self.initial_length as i32)
            .map(|i| Position::new(head_x - i, y))
            .collect()
    }

    pub fn playable_cells(&self) -> usize {
        let w = self.field_width as usize;
        let h = self.field_height as usize;
        if self.border_walls {
            w.saturating_sub(2) * h.saturating_sub(2)
        } else {
            w * h
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if !(5..=100).contains(&self.field_width) || !(5..=100).contains(&self.field_height) {
            return Err("field dimensions must be between 5 and 100".to_string());
        }
        if self.initial_length < 1 {
            return Err("initial_length must be at least 1".to_string());
        }
        if self.initial_length.saturating_add(4) > self.field_width {
            return Err(format!(
                "initial_length {} does not fit a field {} cells wide",
                self.initial_length, self.field_width
            ));
        }
        if self.win_length <= self.initial_length {
            return Err("win_length must be greater than initial_length".to_string());
        }
        if self.win_length as usize > self.playable_cells() {
            return Err(format!(
                "win_length {} exceeds the {} playable cells",
                self.win_length,
                self.playable_cells()
            ));
        }
        if !(10..=60_000).contains(&self.move_interval_ms) {
            return Err("move_interval_ms must be between 10 and 60000".to_string());
        }
        if !(10..=60_000).contains(&self.brick_interval_ms) {
            return Err("brick_interval_ms must be between 10 and 60000".to_string());
        }
        if self.brick_interval_ms < self.move_interval_ms {
            return Err("brick_interval_ms must not be shorter than move_interval_ms".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert_eq!(GameSettings::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_initial_body() {
        let body = GameSettings::default().initial_body();
        assert_eq!(
            body,
            vec![Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)]
        );
    }

    #[test]
    fn test_win_length_must_exceed_initial_length() {
        let settings = GameSettings {
            win_length: 3,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_win_length_must_fit_playable_area() {
        let settings = GameSettings {
            field_width: 5,
            field_height: 5,
            initial_length: 1,
            win_length: 10,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_brick_interval_not_shorter_than_move_interval() {
        let settings = GameSettings {
            move_interval_ms: 500,
            brick_interval_ms: 100,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_huge_initial_length_is_rejected() {
        let settings = GameSettings {
            initial_length: u32::MAX - 1,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_missing_border_flag_defaults_to_true() {
        let yaml = "field_width: 20\nfield_height: 16\ninitial_length: 3\nwin_length: 60\nmove_interval_ms: 250\nbrick_interval_ms: 5000\n";
        let settings: GameSettings = serde_yaml_ng::from_str(yaml).unwrap();
        assert!(settings.border_walls);
        assert_eq!(settings, GameSettings::default());
    }
}
