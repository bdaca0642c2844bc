//! Effect resolution - applying attack effects to game state.
//!
//! `EffectResolver` routes each effect to its handler by kind. Handlers work
//! on the engine's private working copy of the state; if any handler fails
//! the whole transition is discarded by the caller.

use im::Vector;
use log::debug;

use crate::cards::EnergyType;
use crate::core::error::{EngineError, Result};
use crate::core::GameState;

use super::{AttackEffect, EffectKind};

/// Resolves attack effects on game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve effects strictly in the given order.
    pub fn resolve_all<'a>(
        state: &mut GameState,
        effects: impl IntoIterator<Item = &'a AttackEffect>,
    ) -> Result<()> {
        for effect in effects {
            Self::resolve(state, effect)?;
        }
        Ok(())
    }

    /// Resolve a single effect.
    pub fn resolve(state: &mut GameState, effect: &AttackEffect) -> Result<()> {
        match effect.kind() {
            EffectKind::DiscardEnergy => Self::discard_energy(state, effect),
        }
    }

    fn discard_energy(state: &mut GameState, effect: &AttackEffect) -> Result<()> {
        #[allow(irrefutable_let_patterns)]
        let AttackEffect::DiscardEnergy {
            target,
            energy_type,
            count,
        } = effect
        else {
            return Err(EngineError::InvalidEffectCall {
                handler: EffectKind::DiscardEnergy,
                effect: effect.kind(),
            });
        };

        let pokemon = state
            .pokemon
            .get_mut(target)
            .ok_or(EngineError::CardInstanceNotFound(*target))?;

        let (kept, discarded) = discard_from_tail(&pokemon.attached_energy, *energy_type, *count);
        pokemon.attached_energy = kept;

        debug!(
            "Discarded {discarded} {energy_type} energy from {target} (requested {count})"
        );
        Ok(())
    }
}

/// Remove up to `count` tokens of `energy` starting from the tail.
///
/// Returns the remaining sequence (other tokens keep their relative order)
/// and the number of tokens removed.
fn discard_from_tail(
    attached: &Vector<EnergyType>,
    energy: EnergyType,
    count: u32,
) -> (Vector<EnergyType>, u32) {
    let mut kept = Vector::new();
    let mut removed = 0;

    for &token in attached.iter().rev() {
        if token == energy && removed < count {
            removed += 1;
        } else {
            kept.push_front(token);
        }
    }

    (kept, removed)
}
