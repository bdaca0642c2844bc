//! Match configuration.
//!
//! - Rule constants shared by every match
//! - `DeckConfig`: one player's deck list and energy zone
//! - `GameParams`: everything an `Engine` is built from
//!
//! Deck shuffling and drawing happen outside the engine; a deck config only
//! describes the list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ids::StableCardId;
use crate::cards::{AttackConfig, CardConfig, EnergyType};

/// Number of bench slots per player.
pub const BENCH_SIZE: usize = 3;

/// Prize points needed to win.
pub const POINTS_TO_WIN: u32 = 3;

/// Damage multiplier applied when the target is weak to the attacker's type.
pub const WEAKNESS_MULTIPLIER: u32 = 2;

/// One player's deck list.
///
/// ## Example
///
/// ```
/// use rust_ptcg::cards::EnergyType;
/// use rust_ptcg::core::DeckConfig;
///
/// let deck = DeckConfig::new("Grass starter")
///     .with_energy(EnergyType::Grass)
///     .with_card("a1-001", 2)
///     .with_card("a1-002", 2);
///
/// assert_eq!(deck.card_count(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    pub name: String,

    /// Energy types the energy zone produces.
    pub energy_zone_types: Vec<EnergyType>,

    /// Copies of each catalog card.
    pub cards: BTreeMap<StableCardId, u32>,
}

impl DeckConfig {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            energy_zone_types: Vec::new(),
            cards: BTreeMap::new(),
        }
    }

    /// Add an energy zone type (builder pattern).
    #[must_use]
    pub fn with_energy(mut self, energy: EnergyType) -> Self {
        if !self.energy_zone_types.contains(&energy) {
            self.energy_zone_types.push(energy);
        }
        self
    }

    /// Add copies of a card (builder pattern).
    #[must_use]
    pub fn with_card(mut self, stable_id: impl Into<StableCardId>, count: u32) -> Self {
        *self.cards.entry(stable_id.into()).or_insert(0) += count;
        self
    }

    /// Total number of cards in the list.
    #[must_use]
    pub fn card_count(&self) -> u32 {
        self.cards.values().sum()
    }
}

/// Everything needed to build an `Engine`.
#[derive(Clone, Debug, Default)]
pub struct GameParams {
    pub cards: Vec<CardConfig>,
    pub attacks: Vec<AttackConfig>,
    pub deck_a: DeckConfig,
    pub deck_b: DeckConfig,
}

impl GameParams {
    #[must_use]
    pub fn new(cards: Vec<CardConfig>, attacks: Vec<AttackConfig>) -> Self {
        Self {
            cards,
            attacks,
            deck_a: DeckConfig::default(),
            deck_b: DeckConfig::default(),
        }
    }

    /// Set both deck lists (builder pattern).
    #[must_use]
    pub fn with_decks(mut self, deck_a: DeckConfig, deck_b: DeckConfig) -> Self {
        self.deck_a = deck_a;
        self.deck_b = deck_b;
        self
    }
}
