//! # rust-ptcg
//!
//! A deterministic rules engine for two-player Pokémon TCG Pocket battles.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every rule takes a `GameState` by reference and
//!    returns the next one. A rejected action never changes anything.
//!
//! 2. **No Hidden Randomness**: Coin flips are inputs (`ChanceParams`), so a
//!    recorded action list replays to the same state.
//!
//! 3. **Data-Driven Content**: Cards and attacks are registered at startup.
//!    Card data is serde, attacks are data plus a pure computation.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, so building the
//!   next state is cheap.
//!
//! - **Shared Catalog**: `Engine` holds its `Registry` behind an `Arc` and is
//!   `Send + Sync`.
//!
//! ## Modules
//!
//! - `core`: Ids, players, state, actions, configuration, errors, views
//! - `cards`: Card and attack definitions, in-play instances, registry
//! - `effects`: Attack effects and their resolver
//! - `rules`: Energy, damage, evolution, knockouts, and the turn controller
//! - `sets`: Card content
//! - `session`: An owned game host with action history

pub mod cards;
pub mod core;
pub mod effects;
pub mod rules;
pub mod sets;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, AttackId, ChanceRoller, DeckConfig, EngineError, ErrorKind, GameCardId,
    GameParams, GameResult, GameState, Player, PlayerMap, PlayerView, SpeciesId, StableCardId,
};

pub use crate::cards::{
    AttackConfig, AttackParams, AttackResult, CardConfig, CardReference, ChanceParams, EnergyType,
    PokemonCardConfig, PokemonState, PokemonType, Registry,
};

pub use crate::rules::{Engine, EnergyRequirements, RulesEngine};

pub use crate::effects::{AttackEffect, EffectResolver};

pub use crate::session::GameSession;
