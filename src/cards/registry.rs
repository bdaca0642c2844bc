//! Card registry for definition lookup.
//!
//! The `Registry` stores every card and attack definition a match can
//! reference. It is built once, never modified, and shared between matches
//! behind an `Arc`.

use rustc_hash::FxHashMap;

use super::attack::AttackConfig;
use super::definition::{CardConfig, PokemonCardConfig};
use super::types::CardClass;
use crate::core::error::{EngineError, Result};
use crate::core::ids::{AttackId, SpeciesId, StableCardId};

/// Registry of card and attack definitions.
///
/// ## Example
///
/// ```
/// use rust_ptcg::cards::{AttackConfig, PokemonCardConfig, PokemonType, Registry};
/// use rust_ptcg::core::StableCardId;
/// use rust_ptcg::rules::EnergyRequirements;
///
/// let bulbasaur = PokemonCardConfig::basic("a1-001", "Bulbasaur", "bulbasaur", PokemonType::Grass, 70)
///     .with_attack("tackle");
/// let tackle = AttackConfig::damaging("tackle", "Tackle", 10, EnergyRequirements::new());
///
/// let registry = Registry::new(vec![bulbasaur.into()], vec![tackle]).unwrap();
///
/// let found = registry.pokemon_card_by_stable_id(&StableCardId::new("a1-001")).unwrap();
/// assert_eq!(found.base_hp, 70);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Registry {
    cards: FxHashMap<StableCardId, CardConfig>,
    attacks: FxHashMap<AttackId, AttackConfig>,
}

impl Registry {
    /// Build a registry from catalogs.
    ///
    /// Fails with `InvalidCardConfiguration` on a duplicate card or attack id.
    pub fn new(
        cards: impl IntoIterator<Item = CardConfig>,
        attacks: impl IntoIterator<Item = AttackConfig>,
    ) -> Result<Self> {
        let mut registry = Self::default();

        for card in cards {
            let id = card.stable_id().clone();
            if registry.cards.insert(id.clone(), card).is_some() {
                return Err(EngineError::InvalidCardConfiguration(format!(
                    "duplicate card stable ID [{id}]"
                )));
            }
        }

        for attack in attacks {
            let id = attack.id.clone();
            if registry.attacks.insert(id.clone(), attack).is_some() {
                return Err(EngineError::InvalidCardConfiguration(format!(
                    "duplicate attack ID [{id}]"
                )));
            }
        }

        Ok(registry)
    }

    /// Get any card definition.
    pub fn card_by_stable_id(&self, id: &StableCardId) -> Result<&CardConfig> {
        self.cards
            .get(id)
            .ok_or_else(|| EngineError::CardNotFound(id.clone()))
    }

    /// Get a Pokémon card definition.
    ///
    /// Fails with `ImproperCardClass` if the id names a trainer card.
    pub fn pokemon_card_by_stable_id(&self, id: &StableCardId) -> Result<&PokemonCardConfig> {
        let card = self.card_by_stable_id(id)?;
        card.as_pokemon().ok_or_else(|| EngineError::ImproperCardClass {
            stable_id: id.clone(),
            expected: CardClass::Pokemon,
            actual: card.class(),
        })
    }

    /// Get an attack definition.
    pub fn attack_by_id(&self, id: &AttackId) -> Result<&AttackConfig> {
        self.attacks.get(id).ok_or_else(|| EngineError::AttackNotFound {
            attack_id: id.clone(),
            on_card: None,
        })
    }

    /// All Pokémon cards of one species, ordered by stable id.
    #[must_use]
    pub fn pokemon_cards_for_species(&self, species: &SpeciesId) -> Vec<&PokemonCardConfig> {
        let mut found: Vec<_> = self
            .cards
            .values()
            .filter_map(CardConfig::as_pokemon)
            .filter(|p| &p.species_id == species)
            .collect();
        found.sort_by(|a, b| a.stable_id.cmp(&b.stable_id));
        found
    }

    /// Check if a card is registered.
    #[must_use]
    pub fn contains_card(&self, id: &StableCardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of registered attacks.
    #[must_use]
    pub fn attack_count(&self) -> usize {
        self.attacks.len()
    }
}
