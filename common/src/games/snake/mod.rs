mod board;
mod bot_controller;
mod error;
mod game_state;
mod segments;
mod session;
mod settings;
mod snake;
mod spawn;
mod types;

pub use board::Board;
pub use bot_controller::{AutopilotKind, BotController};
pub use error::GameError;
pub use game_state::{Game, initialize_game};
pub use segments::{Axis, SegmentKind, segment_kinds};
pub use session::{BrickSnakeSession, SessionConfig, SessionOutcome};
pub use settings::GameSettings;
pub use snake::{Snake, change_heading};
pub use spawn::{CellPicker, MAX_SPAWN_ATTEMPTS, SpawnError, spawn_cell};
pub use types::{DeathReason, Direction, FieldSize, GameStatus, Position};
