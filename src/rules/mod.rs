//! Game rules.
//!
//! - `energy`: Attack cost matching
//! - `attack`: Weakness and damage application
//! - `evolution`: Evolving a Pokémon in play
//! - `knockout`: Knockouts, prize points and the game result
//! - `engine`: The `RulesEngine` trait and the turn controller

pub mod attack;
pub mod energy;
pub mod engine;
pub mod evolution;
pub mod knockout;

pub use energy::{has_met_requirements, AttachedEnergy, EnergyRequirements};
pub use engine::{Engine, RulesEngine};
