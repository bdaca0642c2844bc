//! Evolution handling.
//!
//! Evolving places a card from hand on top of a Pokémon in play. Damage taken
//! carries over: the evolved Pokémon's health changes by the difference in
//! base health, nothing more. Energy and tool stay attached, and the old card
//! joins the lineage.
//!
//! The evolved Pokémon is re-keyed under the game id of the card placed on
//! top, and every board slot that pointed at the old id is updated.

use log::debug;

use crate::cards::{CardClass, CardReference, PokemonState, Registry};
use crate::core::error::{EngineError, Result};
use crate::core::{GameCardId, GameState};

/// Evolve a Pokémon on the active player's board using a card from their hand.
///
/// Validation happens entirely before the working copy is modified.
pub fn evolve(
    registry: &Registry,
    state: &mut GameState,
    target: GameCardId,
    hand_card: GameCardId,
) -> Result<()> {
    let player = state.active_player;

    let pre_evolution = state
        .pokemon(target)
        .filter(|p| p.owner == player)
        .ok_or(EngineError::CardInstanceNotFound(target))?
        .clone();
    let slot = state
        .board(player)
        .slot_of(target)
        .ok_or(EngineError::CardInstanceNotFound(target))?;
    let hand_position = state
        .board(player)
        .hand_position(hand_card)
        .ok_or(EngineError::CardInstanceNotFound(hand_card))?;
    let hand_ref = state.board(player).hand[hand_position].clone();

    let hand_config = registry.card_by_stable_id(&hand_ref.stable_id)?;
    let evolved_card = hand_config
        .as_pokemon()
        .ok_or_else(|| EngineError::ImproperCardClass {
            stable_id: hand_ref.stable_id.clone(),
            expected: CardClass::Pokemon,
            actual: hand_config.class(),
        })?;
    let pre_card = registry.pokemon_card_by_stable_id(&pre_evolution.card.stable_id)?;

    let evolves_from = evolved_card
        .evolves_from
        .as_ref()
        .ok_or_else(|| EngineError::NonEvolutionCard(evolved_card.stable_id.clone()))?;
    if *evolves_from != pre_card.species_id {
        return Err(EngineError::DoesNotEvolveFrom {
            evolution: evolved_card.stable_id.clone(),
            expected: evolves_from.clone(),
            actual: pre_card.species_id.clone(),
        });
    }

    if pre_evolution.played_on_turn == state.turn_number {
        return Err(EngineError::IneligibleToEvolveThisTurn(target));
    }

    let health_delta = evolved_card.base_hp.saturating_sub(pre_card.base_hp);
    let evolved_ref = CardReference::pokemon(hand_card, evolved_card);

    let mut lineage = pre_evolution.evolved_from.clone();
    lineage.push_back(pre_evolution.card.clone());

    let evolved = PokemonState {
        owner: player,
        card: evolved_ref.clone(),
        current_hp: pre_evolution.current_hp.saturating_add(health_delta),
        attached_energy: pre_evolution.attached_energy.clone(),
        attached_tool: pre_evolution.attached_tool.clone(),
        evolved_from: lineage,
        played_on_turn: state.turn_number,
    };

    state.pokemon.remove(&target);
    state.pokemon.insert(hand_card, evolved);

    let board = &mut state.boards[player];
    board.set_slot(slot, Some(evolved_ref));
    board.hand.remove(hand_position);

    debug!(
        "{player} evolved {} {target} into {} {hand_card}",
        pre_card.name, evolved_card.name
    );
    Ok(())
}
