//! Attack effects.
//!
//! - `AttackEffect`: A state change an attack asks for beyond damage
//! - `EffectResolver`: Applies effects to a game state
//!
//! Effects are data. Attacks return them in an `AttackResult` and the engine
//! resolves them after damage, in order.

mod effect;
mod resolver;

pub use effect::{AttackEffect, EffectKind};
pub use resolver::EffectResolver;
