//! The turn controller.
//!
//! `Engine` validates and applies public actions. Every operation borrows the
//! current `GameState` and returns the next one; the input is never modified,
//! so a rejected action leaves the caller with exactly the state it had.
//!
//! ## Turn Flow
//!
//! - `use_attack`: resolve the attack, process knockouts, evaluate the
//!   result, then pass the turn. Passes the turn even when the game ends.
//! - `evolve_to`: does not pass the turn.
//! - `end_turn`: passes the turn.
//!
//! Once the result is terminal every action fails with `GameOver`.

use std::sync::Arc;

use log::{debug, info};

use crate::cards::{AttackParams, Registry};
use crate::core::error::{EngineError, Result};
use crate::core::{Action, AttackId, DeckConfig, GameCardId, GameParams, GameResult, GameState};
use crate::core::{Player, PlayerMap};

use super::attack::apply_attack_result;
use super::energy::{has_met_requirements, AttachedEnergy};
use super::evolution::evolve;
use super::knockout::{evaluate_game_result, resolve_knockouts};

/// Rules engine trait.
///
/// The seam between a host and the rules: a pure transition function plus a
/// terminal check.
pub trait RulesEngine {
    /// Apply an action to the game state, returning the next state.
    ///
    /// Must be deterministic: the same state and action always produce the
    /// same result.
    fn apply_action(&self, state: &GameState, action: &Action) -> Result<GameState>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;
}

/// Rules engine for one catalog and pair of decks.
///
/// Immutable after construction; share it between threads behind an `Arc`.
#[derive(Clone, Debug)]
pub struct Engine {
    registry: Arc<Registry>,
    decks: PlayerMap<DeckConfig>,
}

impl Engine {
    /// Build an engine from catalogs and deck lists.
    pub fn new(params: GameParams) -> Result<Self> {
        let registry = Registry::new(params.cards, params.attacks)?;
        Self::with_registry(Arc::new(registry), params.deck_a, params.deck_b)
    }

    /// Build an engine over an existing, shared registry.
    ///
    /// Every deck entry must be in the registry, and each deck must name at
    /// least one energy zone type.
    pub fn with_registry(registry: Arc<Registry>, deck_a: DeckConfig, deck_b: DeckConfig) -> Result<Self> {
        let decks = PlayerMap::from_pair(deck_a, deck_b);

        for (player, deck) in decks.iter() {
            if deck.energy_zone_types.is_empty() {
                return Err(EngineError::InvalidCardConfiguration(format!(
                    "deck [{}] of {player} has no energy zone types",
                    deck.name
                )));
            }
            if let Some(missing) = deck.cards.keys().find(|id| !registry.contains_card(id)) {
                return Err(EngineError::CardNotFound(missing.clone()));
            }
        }

        Ok(Self { registry, decks })
    }

    /// The card and attack catalog.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// A shared handle to the catalog.
    #[must_use]
    pub fn shared_registry(&self) -> Arc<Registry> {
        Arc::clone(&self.registry)
    }

    /// A player's deck list.
    #[must_use]
    pub fn deck(&self, player: Player) -> &DeckConfig {
        &self.decks[player]
    }

    fn ensure_in_progress(state: &GameState) -> Result<()> {
        if state.result.is_terminal() {
            return Err(EngineError::GameOver(state.result));
        }
        Ok(())
    }

    /// Use an attack of the active player's active Pokémon.
    pub fn use_attack(
        &self,
        state: &GameState,
        attack_id: &AttackId,
        params: &AttackParams,
    ) -> Result<GameState> {
        Self::ensure_in_progress(state)?;

        let player = state.active_player;
        let attacker = state.active_pokemon(player).ok_or_else(|| {
            EngineError::InvalidGameState(format!("{player} has no active Pokemon"))
        })?;
        let card = self.registry.pokemon_card_by_stable_id(&attacker.card.stable_id)?;

        if !card.has_attack(attack_id) {
            return Err(EngineError::AttackNotFound {
                attack_id: attack_id.clone(),
                on_card: Some(card.stable_id.clone()),
            });
        }
        let attack = self.registry.attack_by_id(attack_id)?;

        if !has_met_requirements(&attack.energy_requirements, &attacker.attached_energy) {
            return Err(EngineError::EnergyRequirementNotMet {
                attack_id: attack_id.clone(),
                required: attack.energy_requirements.to_string(),
                attached: AttachedEnergy(&attacker.attached_energy).to_string(),
            });
        }

        attack.validate(state, params)?;
        let result = attack.compute(state, params)?;

        let mut next = state.clone();
        apply_attack_result(&self.registry, &mut next, card.pokemon_type, &result)?;
        resolve_knockouts(&self.registry, &mut next)?;
        next.result = evaluate_game_result(&next);

        debug!("{player} used {} ({attack_id}) on turn {}", attack.name, state.turn_number);
        if next.result.is_terminal() {
            info!("Game over on turn {}: {:?}", next.turn_number, next.result);
        }

        next.advance_turn();
        Ok(next)
    }

    /// Evolve a Pokémon in play using a card from the active player's hand.
    pub fn evolve_to(&self, state: &GameState, target: GameCardId, hand_card: GameCardId) -> Result<GameState> {
        Self::ensure_in_progress(state)?;

        let mut next = state.clone();
        evolve(&self.registry, &mut next, target, hand_card)?;
        Ok(next)
    }

    /// Pass the turn to the other player.
    pub fn end_turn(&self, state: &GameState) -> Result<GameState> {
        Self::ensure_in_progress(state)?;

        let mut next = state.clone();
        next.advance_turn();
        debug!(
            "{} ended turn {}, {} to move",
            state.active_player, state.turn_number, next.active_player
        );
        Ok(next)
    }
}

impl RulesEngine for Engine {
    fn apply_action(&self, state: &GameState, action: &Action) -> Result<GameState> {
        match action {
            Action::UseAttack { attack_id, params } => self.use_attack(state, attack_id, params),
            Action::EvolveTo { target, hand_card } => self.evolve_to(state, *target, *hand_card),
            Action::EndTurn => self.end_turn(state),
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.result.is_terminal().then_some(state.result)
    }
}
