//! Player actions.
//!
//! An `Action` is one public move by the active player. The engine's
//! `apply_action` dispatches over it, and the session host records every
//! accepted action as an `ActionRecord` so a match can be replayed.

use serde::{Deserialize, Serialize};

use super::ids::{AttackId, GameCardId};
use super::player::Player;
use crate::cards::AttackParams;

/// A move by the active player.
///
/// ## Example
///
/// ```
/// use rust_ptcg::cards::AttackParams;
/// use rust_ptcg::core::{Action, GameCardId};
///
/// let attack = Action::use_attack("vine_whip", AttackParams::default());
/// let evolve = Action::evolve_to(GameCardId(1), GameCardId(7));
///
/// assert!(attack.ends_turn());
/// assert!(!evolve.ends_turn());
/// assert!(Action::EndTurn.ends_turn());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Use an attack of the active Pokémon. Always ends the turn.
    UseAttack {
        attack_id: AttackId,
        #[serde(default)]
        params: AttackParams,
    },

    /// Evolve a Pokémon in play with a card from hand.
    EvolveTo {
        target: GameCardId,
        hand_card: GameCardId,
    },

    EndTurn,
}

impl Action {
    #[must_use]
    pub fn use_attack(attack_id: impl Into<AttackId>, params: AttackParams) -> Self {
        Action::UseAttack {
            attack_id: attack_id.into(),
            params,
        }
    }

    #[must_use]
    pub const fn evolve_to(target: GameCardId, hand_card: GameCardId) -> Self {
        Action::EvolveTo { target, hand_card }
    }

    /// Whether applying this action passes the turn.
    #[must_use]
    pub const fn ends_turn(&self) -> bool {
        matches!(self, Action::UseAttack { .. } | Action::EndTurn)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::UseAttack { attack_id, .. } => write!(f, "use attack [{attack_id}]"),
            Action::EvolveTo { target, hand_card } => write!(f, "evolve {target} into {hand_card}"),
            Action::EndTurn => write!(f, "end turn"),
        }
    }
}

/// Record of an accepted action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Player who took the action.
    pub player: Player,

    /// Turn on which it was taken.
    pub turn: u32,

    pub action: Action,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: Player, turn: u32, action: Action) -> Self {
        Self {
            player,
            turn,
            action,
        }
    }
}
