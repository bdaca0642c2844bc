//! Card instances - runtime card state.
//!
//! `CardReference` points at one physical card and the catalog entry it was
//! printed from. `PokemonState` tracks the mutable state of a Pokémon on the
//! board: damage, attached energy, tool and evolution lineage.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::definition::{HealthPoints, PokemonCardConfig};
use super::types::{CardClass, EnergyType};
use crate::core::ids::{GameCardId, StableCardId};
use crate::core::player::Player;

/// Typed pointer into both the registry and the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardReference {
    /// The physical card.
    pub id: GameCardId,

    /// The catalog entry.
    pub stable_id: StableCardId,

    pub class: CardClass,
}

impl CardReference {
    #[must_use]
    pub fn new(id: GameCardId, stable_id: StableCardId, class: CardClass) -> Self {
        Self {
            id,
            stable_id,
            class,
        }
    }

    /// Reference to a physical copy of a Pokémon card.
    #[must_use]
    pub fn pokemon(id: GameCardId, card: &PokemonCardConfig) -> Self {
        Self::new(id, card.stable_id.clone(), CardClass::Pokemon)
    }
}

/// A Pokémon in play.
///
/// ## Attached Energy
///
/// Attached energy is an ordered multiset: the tail holds the most recently
/// attached tokens. Discard effects rely on this order.
///
/// ## Lineage
///
/// `evolved_from` lists every card this Pokémon evolved through, oldest
/// first. It is empty exactly when the Pokémon is a basic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonState {
    /// Player whose board this Pokémon is on.
    pub owner: Player,

    /// The card currently on top.
    pub card: CardReference,

    /// Current health. May be zero or negative until knockouts are processed.
    pub current_hp: HealthPoints,

    pub attached_energy: Vector<EnergyType>,

    pub attached_tool: Option<CardReference>,

    pub evolved_from: Vector<CardReference>,

    /// Turn on which this card entered play.
    pub played_on_turn: u32,
}

impl PokemonState {
    /// Create the state of a Pokémon entering play undamaged.
    #[must_use]
    pub fn initial(owner: Player, card: &PokemonCardConfig, id: GameCardId, played_on_turn: u32) -> Self {
        Self {
            owner,
            card: CardReference::pokemon(id, card),
            current_hp: card.base_hp,
            attached_energy: Vector::new(),
            attached_tool: None,
            evolved_from: Vector::new(),
            played_on_turn,
        }
    }

    /// Attach energy tokens (builder pattern).
    #[must_use]
    pub fn with_energy(mut self, energy: impl IntoIterator<Item = EnergyType>) -> Self {
        self.attached_energy.extend(energy);
        self
    }

    /// Set current health (builder pattern).
    #[must_use]
    pub fn with_hp(mut self, hp: HealthPoints) -> Self {
        self.current_hp = hp;
        self
    }

    /// Game card ID of the card on top.
    #[must_use]
    pub fn id(&self) -> GameCardId {
        self.card.id
    }

    /// Whether this Pokémon has been knocked out.
    #[must_use]
    pub fn is_knocked_out(&self) -> bool {
        self.current_hp <= 0
    }

    /// Count attached tokens of one type.
    #[must_use]
    pub fn energy_count(&self, energy: EnergyType) -> usize {
        self.attached_energy.iter().filter(|&&e| e == energy).count()
    }

    /// Every physical card that makes up this Pokémon: lineage, the card on
    /// top, then the tool.
    pub fn all_cards(&self) -> impl Iterator<Item = &CardReference> {
        self.evolved_from
            .iter()
            .chain(std::iter::once(&self.card))
            .chain(self.attached_tool.iter())
    }
}
