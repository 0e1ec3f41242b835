use super::spawn::SpawnError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    InvalidSetup(String),
    Spawn(SpawnError),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidSetup(e) => write!(f, "Invalid game setup: {}", e),
            GameError::Spawn(e) => write!(f, "Spawn failed: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Spawn(e) => Some(e),
            GameError::InvalidSetup(_) => None,
        }
    }
}

impl From<SpawnError> for GameError {
    fn from(e: SpawnError) -> Self {
        GameError::Spawn(e)
    }
}
