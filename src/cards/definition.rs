//! Card definitions - static card data.
//!
//! `CardConfig` holds the immutable properties of a catalog entry.
//! For example, Bulbasaur is a 70 HP Grass Pokémon that knows Vine Whip and
//! is weak to Fire - these are part of the definition.
//!
//! Instance-specific data (damage taken, attached energy, lineage) is stored
//! separately in `PokemonState`.

use serde::{Deserialize, Serialize};

use super::types::{CardClass, PokemonType, Rarity, Stage};
use crate::core::ids::{AttackId, SpeciesId, StableCardId};

/// Health points. Signed, since damage may push a Pokémon below zero.
pub type HealthPoints = i32;

/// Static definition of a Pokémon card.
///
/// ## Example
///
/// ```
/// use rust_ptcg::cards::{PokemonCardConfig, PokemonType, Stage};
///
/// let ivysaur = PokemonCardConfig::basic("a1-002", "Ivysaur", "ivysaur", PokemonType::Grass, 90)
///     .evolves_from("bulbasaur", Stage::Stage1)
///     .with_attack("razor_leaf")
///     .weak_to(PokemonType::Fire)
///     .with_retreat_cost(2);
///
/// assert_eq!(ivysaur.stage, Stage::Stage1);
/// assert_eq!(ivysaur.prize_points(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonCardConfig {
    pub stable_id: StableCardId,
    pub name: String,
    pub species_id: SpeciesId,
    pub pokemon_type: PokemonType,
    pub base_hp: HealthPoints,

    /// Species this card evolves from. `None` for basic Pokémon.
    #[serde(default)]
    pub evolves_from: Option<SpeciesId>,

    pub stage: Stage,

    #[serde(default)]
    pub rarity: Rarity,

    #[serde(default)]
    pub is_fossil: bool,

    /// Attacks this card can use, by id.
    #[serde(default)]
    pub attacks: Vec<AttackId>,

    /// Attacker types that deal double damage to this card.
    #[serde(default)]
    pub weaknesses: Vec<PokemonType>,

    #[serde(default)]
    pub retreat_cost: u32,
}

impl PokemonCardConfig {
    /// Create a basic Pokémon with no attacks, weaknesses or retreat cost.
    #[must_use]
    pub fn basic(
        stable_id: impl Into<StableCardId>,
        name: impl Into<String>,
        species_id: impl Into<SpeciesId>,
        pokemon_type: PokemonType,
        base_hp: HealthPoints,
    ) -> Self {
        Self {
            stable_id: stable_id.into(),
            name: name.into(),
            species_id: species_id.into(),
            pokemon_type,
            base_hp,
            evolves_from: None,
            stage: Stage::Basic,
            rarity: Rarity::Regular,
            is_fossil: false,
            attacks: Vec::new(),
            weaknesses: Vec::new(),
            retreat_cost: 0,
        }
    }

    /// Make this card an evolution of `species` at the given stage.
    #[must_use]
    pub fn evolves_from(mut self, species: impl Into<SpeciesId>, stage: Stage) -> Self {
        self.evolves_from = Some(species.into());
        self.stage = stage;
        self
    }

    /// Add an attack (builder pattern).
    #[must_use]
    pub fn with_attack(mut self, attack: impl Into<AttackId>) -> Self {
        self.attacks.push(attack.into());
        self
    }

    /// Add a weakness.
    #[must_use]
    pub fn weak_to(mut self, attacker_type: PokemonType) -> Self {
        self.weaknesses.push(attacker_type);
        self
    }

    #[must_use]
    pub fn with_retreat_cost(mut self, cost: u32) -> Self {
        self.retreat_cost = cost;
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn fossil(mut self) -> Self {
        self.is_fossil = true;
        self
    }

    /// Check if this card knows an attack.
    #[must_use]
    pub fn has_attack(&self, attack: &AttackId) -> bool {
        self.attacks.contains(attack)
    }

    /// Check if attacks of `attacker_type` are doubled against this card.
    #[must_use]
    pub fn is_weak_to(&self, attacker_type: PokemonType) -> bool {
        self.weaknesses.contains(&attacker_type)
    }

    /// Prize points the opponent earns by knocking this card out.
    #[must_use]
    pub fn prize_points(&self) -> u32 {
        self.rarity.prize_points()
    }
}

/// Static definition of a trainer card (item, supporter or tool).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerCardConfig {
    pub stable_id: StableCardId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl TrainerCardConfig {
    #[must_use]
    pub fn new(
        stable_id: impl Into<StableCardId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            stable_id: stable_id.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Any catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "card_class", rename_all = "snake_case")]
pub enum CardConfig {
    Pokemon(PokemonCardConfig),
    Item(TrainerCardConfig),
    Supporter(TrainerCardConfig),
    Tool(TrainerCardConfig),
}

impl CardConfig {
    /// Catalog identifier.
    #[must_use]
    pub fn stable_id(&self) -> &StableCardId {
        match self {
            CardConfig::Pokemon(p) => &p.stable_id,
            CardConfig::Item(t) | CardConfig::Supporter(t) | CardConfig::Tool(t) => &t.stable_id,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            CardConfig::Pokemon(p) => &p.name,
            CardConfig::Item(t) | CardConfig::Supporter(t) | CardConfig::Tool(t) => &t.name,
        }
    }

    #[must_use]
    pub fn class(&self) -> CardClass {
        match self {
            CardConfig::Pokemon(_) => CardClass::Pokemon,
            CardConfig::Item(_) => CardClass::Item,
            CardConfig::Supporter(_) => CardClass::Supporter,
            CardConfig::Tool(_) => CardClass::Tool,
        }
    }

    /// Get the Pokémon definition, if this is a Pokémon card.
    #[must_use]
    pub fn as_pokemon(&self) -> Option<&PokemonCardConfig> {
        match self {
            CardConfig::Pokemon(p) => Some(p),
            _ => None,
        }
    }
}

impl From<PokemonCardConfig> for CardConfig {
    fn from(card: PokemonCardConfig) -> Self {
        CardConfig::Pokemon(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bulbasaur() -> PokemonCardConfig {
        PokemonCardConfig::basic("a1-001", "Bulbasaur", "bulbasaur", PokemonType::Grass, 70)
            .with_attack("vine_whip")
            .weak_to(PokemonType::Fire)
            .with_retreat_cost(1)
    }

    #[test]
    fn test_pokemon_builder() {
        let card = bulbasaur();

        assert_eq!(card.stable_id, StableCardId::new("a1-001"));
        assert_eq!(card.stage, Stage::Basic);
        assert!(card.evolves_from.is_none());
        assert!(card.has_attack(&AttackId::new("vine_whip")));
        assert!(!card.has_attack(&AttackId::new("razor_leaf")));
        assert!(card.is_weak_to(PokemonType::Fire));
        assert!(!card.is_weak_to(PokemonType::Water));
        assert_eq!(card.retreat_cost, 1);
    }

    #[test]
    fn test_prize_points_by_rarity() {
        assert_eq!(bulbasaur().prize_points(), 1);
        assert_eq!(bulbasaur().with_rarity(Rarity::Ex).prize_points(), 2);
        assert_eq!(bulbasaur().with_rarity(Rarity::MegaEx).prize_points(), 3);
        assert_eq!(bulbasaur().fossil().prize_points(), 1);
    }

    #[test]
    fn test_card_config_accessors() {
        let pokemon = CardConfig::from(bulbasaur());
        assert_eq!(pokemon.class(), CardClass::Pokemon);
        assert_eq!(pokemon.name(), "Bulbasaur");
        assert!(pokemon.as_pokemon().is_some());

        let potion = CardConfig::Item(TrainerCardConfig::new("pa-001", "Potion", "Heal 20 damage."));
        assert_eq!(potion.class(), CardClass::Item);
        assert_eq!(potion.stable_id(), &StableCardId::new("pa-001"));
        assert!(potion.as_pokemon().is_none());
    }

    #[test]
    fn test_card_config_from_json() {
        let json = r#"{
            "card_class": "pokemon",
            "stable_id": "a1-033",
            "name": "Charmander",
            "species_id": "charmander",
            "pokemon_type": "fire",
            "base_hp": 60,
            "stage": "basic",
            "attacks": ["ember"],
            "weaknesses": ["water"],
            "retreat_cost": 1
        }"#;

        let card: CardConfig = serde_json::from_str(json).unwrap();
        let pokemon = card.as_pokemon().unwrap();

        assert_eq!(pokemon.species_id, SpeciesId::new("charmander"));
        assert_eq!(pokemon.pokemon_type, PokemonType::Fire);
        assert_eq!(pokemon.rarity, Rarity::Regular);
        assert!(pokemon.is_weak_to(PokemonType::Water));
    }
}
