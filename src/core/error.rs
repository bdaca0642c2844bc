//! Engine error taxonomy.
//!
//! Every failed transition returns an `EngineError`. Errors are raised at the
//! first validation step that detects them, before any state is replaced, so
//! the caller's committed state is always untouched on failure.
//!
//! ## Categories
//!
//! - `NotFound`: the caller referenced something that does not exist.
//! - `RuleViolation`: an expected, caller-recoverable condition that a UI
//!   should prevent or surface.
//! - `Internal`: unreachable with correctly authored card content; a defect in
//!   content or engine.

use thiserror::Error;

use super::ids::{AttackId, GameCardId, SpeciesId, StableCardId};
use super::state::GameResult;
use crate::cards::CardClass;
use crate::effects::EffectKind;

/// Engine result alias.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Broad classification of an `EngineError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    RuleViolation,
    Internal,
}

impl ErrorKind {
    /// Whether the error is meant to reach the player as a message.
    #[must_use]
    pub const fn is_user_facing(self) -> bool {
        !matches!(self, ErrorKind::Internal)
    }
}

/// Errors produced by the rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    // === Not found ===
    #[error("card not found for stable ID [{0}]")]
    CardNotFound(StableCardId),

    #[error("card instance [{0}] not found")]
    CardInstanceNotFound(GameCardId),

    #[error("attack [{attack_id}] not found{}", .on_card.as_ref().map(|c| format!(" on Pokemon card [{c}]")).unwrap_or_default())]
    AttackNotFound {
        attack_id: AttackId,
        on_card: Option<StableCardId>,
    },

    // === Rule violations ===
    #[error("Energy requirements not met for attack [{attack_id}]. Required: {required}. Attached: {attached}.")]
    EnergyRequirementNotMet {
        attack_id: AttackId,
        required: String,
        attached: String,
    },

    #[error("card [{stable_id}] is a {actual} card, expected {expected}")]
    ImproperCardClass {
        stable_id: StableCardId,
        expected: CardClass,
        actual: CardClass,
    },

    #[error("invalid params for attack [{attack_id}]: {message}")]
    InvalidAttackParams { attack_id: AttackId, message: String },

    #[error("card [{0}] is not an evolution card")]
    NonEvolutionCard(StableCardId),

    #[error("card [{evolution}] evolves from [{expected}], not [{actual}]")]
    DoesNotEvolveFrom {
        evolution: StableCardId,
        expected: SpeciesId,
        actual: SpeciesId,
    },

    #[error("Pokemon [{0}] entered play this turn and cannot evolve yet")]
    IneligibleToEvolveThisTurn(GameCardId),

    #[error("game is over ({0:?}), no further actions are accepted")]
    GameOver(GameResult),

    // === Internal consistency ===
    #[error("invalid game state: {0}")]
    InvalidGameState(String),

    #[error("invalid attack result: {0}")]
    InvalidAttackResult(String),

    #[error("effect handler for [{handler:?}] called on effect [{effect:?}]")]
    InvalidEffectCall { handler: EffectKind, effect: EffectKind },

    #[error("invalid card configuration: {0}")]
    InvalidCardConfiguration(String),
}

impl EngineError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::CardNotFound(_)
            | EngineError::CardInstanceNotFound(_)
            | EngineError::AttackNotFound { .. } => ErrorKind::NotFound,

            EngineError::EnergyRequirementNotMet { .. }
            | EngineError::ImproperCardClass { .. }
            | EngineError::InvalidAttackParams { .. }
            | EngineError::NonEvolutionCard(_)
            | EngineError::DoesNotEvolveFrom { .. }
            | EngineError::IneligibleToEvolveThisTurn(_)
            | EngineError::GameOver(_) => ErrorKind::RuleViolation,

            EngineError::InvalidGameState(_)
            | EngineError::InvalidAttackResult(_)
            | EngineError::InvalidEffectCall { .. }
            | EngineError::InvalidCardConfiguration(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            EngineError::CardNotFound(StableCardId::new("x")).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            EngineError::IneligibleToEvolveThisTurn(GameCardId(1)).kind(),
            ErrorKind::RuleViolation
        );
        assert_eq!(
            EngineError::InvalidAttackResult("dup".into()).kind(),
            ErrorKind::Internal
        );
        assert!(ErrorKind::RuleViolation.is_user_facing());
        assert!(!ErrorKind::Internal.is_user_facing());
    }

    #[test]
    fn test_attack_not_found_message() {
        let bare = EngineError::AttackNotFound {
            attack_id: AttackId::new("bite"),
            on_card: None,
        };
        assert_eq!(bare.to_string(), "attack [bite] not found");

        let on_card = EngineError::AttackNotFound {
            attack_id: AttackId::new("bite"),
            on_card: Some(StableCardId::new("a1-001")),
        };
        assert_eq!(
            on_card.to_string(),
            "attack [bite] not found on Pokemon card [a1-001]"
        );
    }

    #[test]
    fn test_energy_message() {
        let err = EngineError::EnergyRequirementNotMet {
            attack_id: AttackId::new("vine_whip"),
            required: "GC".into(),
            attached: "G".into(),
        };
        assert_eq!(
            err.to_string(),
            "Energy requirements not met for attack [vine_whip]. Required: GC. Attached: G."
        );
    }
}
