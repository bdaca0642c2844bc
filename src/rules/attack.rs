//! Attack resolution pipeline.
//!
//! Turns the raw output of an attack's computation into board changes:
//!
//! 1. Weakness: damage against a target weak to the attacker's type is
//!    multiplied by `WEAKNESS_MULTIPLIER`.
//! 2. Damage: every entry is subtracted from its own target. Two entries for
//!    the same target are an authoring bug and reject the whole result.
//! 3. Effects: resolved in the order the attack listed them.
//!
//! Each step works on the caller's working copy; any error discards it.

use log::debug;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::cards::{AttackDamage, AttackResult, PokemonType, Registry};
use crate::core::config::WEAKNESS_MULTIPLIER;
use crate::core::error::{EngineError, Result};
use crate::core::GameState;
use crate::effects::EffectResolver;

/// Scale each damage entry by the target's weakness to `attacker_type`.
pub fn apply_weakness(
    registry: &Registry,
    state: &GameState,
    attacker_type: PokemonType,
    damages: &[AttackDamage],
) -> Result<SmallVec<[AttackDamage; 2]>> {
    damages
        .iter()
        .map(|entry| {
            let target = state
                .pokemon(entry.target)
                .ok_or(EngineError::CardInstanceNotFound(entry.target))?;
            let card = registry.pokemon_card_by_stable_id(&target.card.stable_id)?;

            if card.is_weak_to(attacker_type) {
                Ok(AttackDamage::new(
                    entry.target,
                    entry.damage.saturating_mul(WEAKNESS_MULTIPLIER),
                ))
            } else {
                Ok(*entry)
            }
        })
        .collect()
}

/// Fail with `InvalidAttackResult` if any target appears twice.
pub fn ensure_distinct_targets(damages: &[AttackDamage]) -> Result<()> {
    let mut seen = FxHashSet::default();
    match damages.iter().find(|entry| !seen.insert(entry.target)) {
        Some(entry) => Err(EngineError::InvalidAttackResult(format!(
            "damage target {} appears more than once",
            entry.target
        ))),
        None => Ok(()),
    }
}

/// Subtract damage from every target.
///
/// Fails with `InvalidAttackResult` if a target appears twice, before any
/// health is changed.
pub fn apply_damages(state: &mut GameState, damages: &[AttackDamage]) -> Result<()> {
    ensure_distinct_targets(damages)?;
    for entry in damages {
        if state.pokemon(entry.target).is_none() {
            return Err(EngineError::CardInstanceNotFound(entry.target));
        }
    }

    for entry in damages {
        if let Some(pokemon) = state.pokemon.get_mut(&entry.target) {
            pokemon.current_hp = pokemon.current_hp.saturating_sub_unsigned(entry.damage);
            debug!(
                "{} took {} damage, {} HP left",
                entry.target, entry.damage, pokemon.current_hp
            );
        }
    }

    Ok(())
}

/// Run the full pipeline for one attack result.
pub fn apply_attack_result(
    registry: &Registry,
    state: &mut GameState,
    attacker_type: PokemonType,
    result: &AttackResult,
) -> Result<()> {
    ensure_distinct_targets(&result.damages)?;
    let damages = apply_weakness(registry, state, attacker_type, &result.damages)?;
    apply_damages(state, &damages)?;
    EffectResolver::resolve_all(state, &result.effects)
}
