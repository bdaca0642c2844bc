//! Identifier types.
//!
//! Two kinds of card identifiers exist and must never be mixed up:
//!
//! - `StableCardId`: a catalog entry ("a1-001" is Bulbasaur), shared by every
//!   physical copy of that card.
//! - `GameCardId`: one physical card inside a single match.
//!
//! Attacks and species have their own catalog identifiers.
//!
//! ## Usage
//!
//! ```
//! use rust_ptcg::core::{GameCardId, StableCardId};
//!
//! let bulbasaur = StableCardId::new("a1-001");
//! let first_copy = GameCardId::new(1);
//! let second_copy = GameCardId::new(2);
//!
//! assert_eq!(bulbasaur.as_str(), "a1-001");
//! assert_ne!(first_copy, second_copy);
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of one physical card instance within a match.
///
/// Allocated by whoever sets up the match. Unique per match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameCardId(pub u32);

impl GameCardId {
    /// Create a new game card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for GameCardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for GameCardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

catalog_id! {
    /// Identifier of a card template in the catalog.
    StableCardId
}

catalog_id! {
    /// Identifier of an attack definition.
    AttackId
}

catalog_id! {
    /// Identifier of a species; evolution chains are expressed between species.
    SpeciesId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_card_id() {
        let id = GameCardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(GameCardId::from(42), id);
        assert_eq!(format!("{}", id), "#42");
    }

    #[test]
    fn test_catalog_ids() {
        let stable = StableCardId::new("a1-001");
        assert_eq!(stable.as_str(), "a1-001");
        assert_eq!(format!("{}", stable), "a1-001");
        assert_eq!(AttackId::from("vine_whip"), AttackId::new("vine_whip"));
    }

    #[test]
    fn test_game_card_ids_order() {
        let mut ids = vec![GameCardId(3), GameCardId(1), GameCardId(2)];
        ids.sort();
        assert_eq!(ids, vec![GameCardId(1), GameCardId(2), GameCardId(3)]);
    }

    #[test]
    fn test_catalog_id_serializes_as_plain_string() {
        let id = SpeciesId::new("bulbasaur");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"bulbasaur\"");

        let deserialized: SpeciesId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
