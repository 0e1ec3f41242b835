use brick_snake_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use brick_snake_common::{AutopilotKind, GameSettings};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "brick_snake_config.yaml";

pub fn default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: &str,
) -> ConfigManager<FileContentConfigProvider, RunnerConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct RunnerConfig {
    pub game: GameSettings,
    pub autopilot: AutopilotKind,
    /// Log the board every N moves; 0 logs only the final board.
    #[serde(default)]
    pub log_board_every: u64,
}

impl Validate for RunnerConfig {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            game: GameSettings::default(),
            autopilot: AutopilotKind::Greedy,
            log_board_every: 20,
        }
    }
}
