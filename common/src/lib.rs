pub mod config;
pub mod games;
pub mod logger;

pub use games::SessionRng;
pub use games::snake::{
    BotController, AutopilotKind, DeathReason, Direction, FieldSize, Game, GameError,
    GameSettings, GameStatus, Position, SpawnError,
};
