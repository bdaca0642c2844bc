//! Card system: catalog definitions, attacks, in-play instances, registry.
//!
//! ## Key Types
//!
//! - `CardConfig`: Static catalog entry (Pokémon or trainer)
//! - `AttackConfig`: Attack data plus its pure computation
//! - `CardReference`: A physical card in a game
//! - `PokemonState`: A Pokémon in play with its damage, energy and lineage
//! - `Registry`: Catalog lookup by stable id

pub mod attack;
pub mod definition;
pub mod instance;
pub mod registry;
pub mod types;

pub use attack::{
    attacking_pokemon, defending_pokemon, AttackConfig, AttackDamage, AttackFn, AttackParams,
    AttackResult, ChanceParams, CoinFlip, ParamsValidator,
};
pub use definition::{CardConfig, HealthPoints, PokemonCardConfig, TrainerCardConfig};
pub use instance::{CardReference, PokemonState};
pub use registry::Registry;
pub use types::{CardClass, EnergyType, PokemonType, Rarity, Stage};
