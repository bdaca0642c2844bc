//! Element types, energy types, card classes and stages.
//!
//! `EnergyType` is what can be attached to a Pokémon. `PokemonType` is the
//! element of a Pokémon card, which also includes Colorless and Dragon (no
//! energy of those types exists).
//!
//! Energy notation follows the usual one-letter convention: Fire is `R`,
//! Fighting is `F`, and a wildcard requirement is `C`.

use serde::{Deserialize, Serialize};

/// A typed energy token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyType {
    Grass,
    Fire,
    Water,
    Lightning,
    Fighting,
    Psychic,
    Dark,
    Metal,
}

impl EnergyType {
    /// Number of energy types.
    pub const COUNT: usize = 8;

    /// All energy types in canonical order.
    pub const ALL: [EnergyType; Self::COUNT] = [
        EnergyType::Grass,
        EnergyType::Fire,
        EnergyType::Water,
        EnergyType::Lightning,
        EnergyType::Fighting,
        EnergyType::Psychic,
        EnergyType::Dark,
        EnergyType::Metal,
    ];

    /// Dense index, usable for per-type buckets.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// One-letter notation.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            EnergyType::Grass => 'G',
            EnergyType::Fire => 'R',
            EnergyType::Water => 'W',
            EnergyType::Lightning => 'L',
            EnergyType::Fighting => 'F',
            EnergyType::Psychic => 'P',
            EnergyType::Dark => 'D',
            EnergyType::Metal => 'M',
        }
    }
}

impl std::fmt::Display for EnergyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Element type of a Pokémon card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PokemonType {
    Grass,
    Fire,
    Water,
    Lightning,
    Fighting,
    Psychic,
    Dark,
    Metal,
    Colorless,
    Dragon,
}

impl From<EnergyType> for PokemonType {
    fn from(energy: EnergyType) -> Self {
        match energy {
            EnergyType::Grass => PokemonType::Grass,
            EnergyType::Fire => PokemonType::Fire,
            EnergyType::Water => PokemonType::Water,
            EnergyType::Lightning => PokemonType::Lightning,
            EnergyType::Fighting => PokemonType::Fighting,
            EnergyType::Psychic => PokemonType::Psychic,
            EnergyType::Dark => PokemonType::Dark,
            EnergyType::Metal => PokemonType::Metal,
        }
    }
}

/// Card class. Only Pokémon can be placed on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardClass {
    Pokemon,
    Item,
    Supporter,
    Tool,
}

impl std::fmt::Display for CardClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardClass::Pokemon => "Pokemon",
            CardClass::Item => "item",
            CardClass::Supporter => "supporter",
            CardClass::Tool => "tool",
        };
        f.write_str(name)
    }
}

/// Evolution stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Basic,
    #[serde(rename = "stage_1")]
    Stage1,
    #[serde(rename = "stage_2")]
    Stage2,
}

/// Rarity tier, which decides how many prize points a knockout is worth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Regular,
    Ex,
    MegaEx,
}

impl Rarity {
    /// Prize points awarded to the opponent on knockout.
    #[must_use]
    pub const fn prize_points(self) -> u32 {
        match self {
            Rarity::Regular => 1,
            Rarity::Ex => 2,
            Rarity::MegaEx => 3,
        }
    }
}
