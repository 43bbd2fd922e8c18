//! Error type shared by lookups and the damage pipeline.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Effective attack or defense was requested for a Status move.
    #[error("{move_name} is a status move and has no offensive or defensive stat")]
    StatusMoveHasNoStat { move_name: String },

    /// The move asks for a computed base power that no handler covers.
    #[error("no base power handler for {0}")]
    UnhandledBasePowerCallback(String),

    #[error("unknown ability: {0}")]
    UnknownAbility(String),

    #[error("unknown type: {0}")]
    UnknownType(String),

    #[error("unknown nature: {0}")]
    UnknownNature(String),

    #[error("unknown stat: {0}")]
    UnknownStat(String),

    #[error("unknown weather: {0}")]
    UnknownWeather(String),

    #[error("unknown terrain: {0}")]
    UnknownTerrain(String),
}
