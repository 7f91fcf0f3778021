use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("at least one team is required for balancing")]
    NoTeams,

    #[error("every team must have a non-empty id")]
    BlankTeamId,

    #[error("duplicate team id: {0}")]
    DuplicateTeamId(String),

    #[error("team not found: {0}")]
    TeamNotFound(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
