//! Effect definitions.
//!
//! Effects are the typed side results of an attack, applied after damage.
//! The set is closed: every variant has exactly one handler in
//! `EffectResolver`, and the resolver matches exhaustively, so a new variant
//! without a handler fails to compile.

use serde::{Deserialize, Serialize};

use crate::cards::EnergyType;
use crate::core::ids::GameCardId;

/// A typed attack effect.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttackEffect {
    /// Discard up to `count` energy of one type from a Pokémon, most recently
    /// attached first.
    DiscardEnergy {
        target: GameCardId,
        energy_type: EnergyType,
        count: u32,
    },
}

/// Tag of an `AttackEffect`, used to route effects to handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    DiscardEnergy,
}

impl AttackEffect {
    /// Discard `count` energy of `energy_type` from `target`.
    #[must_use]
    pub const fn discard_energy(target: GameCardId, energy_type: EnergyType, count: u32) -> Self {
        AttackEffect::DiscardEnergy {
            target,
            energy_type,
            count,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> EffectKind {
        match self {
            AttackEffect::DiscardEnergy { .. } => EffectKind::DiscardEnergy,
        }
    }

    /// The Pokémon this effect acts on.
    #[must_use]
    pub const fn target(&self) -> GameCardId {
        match self {
            AttackEffect::DiscardEnergy { target, .. } => *target,
        }
    }
}
