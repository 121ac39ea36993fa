use thiserror::Error;

/// Failures surfaced by the battle driver and the simulator.
#[derive(Error, Debug)]
pub enum BattleError {
    #[error("a battle needs at least one hero")]
    EmptyRoster,

    #[error("battle still undecided after {limit} rounds")]
    RoundLimitExceeded { limit: u32 },

    #[error("invalid value '{value}' for {flag}")]
    InvalidArgument { flag: String, value: String },

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BattleError>;
