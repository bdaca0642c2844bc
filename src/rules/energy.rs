//! Energy requirements and the energy validator.
//!
//! An attack cost is a set of buckets: one per energy type plus a wildcard
//! bucket that any energy can pay. Validation is a pure pass/fail predicate and
//! does not depend on the order in which energy was attached.
//!
//! ## Example
//!
//! ```
//! use rust_ptcg::cards::EnergyType;
//! use rust_ptcg::rules::{has_met_requirements, EnergyRequirements};
//!
//! // Vine Whip: one Grass and one of anything.
//! let cost = EnergyRequirements::new().with(EnergyType::Grass, 1).with_any(1);
//! assert_eq!(cost.to_string(), "GC");
//!
//! assert!(has_met_requirements(&cost, &[EnergyType::Fire, EnergyType::Grass]));
//! assert!(!has_met_requirements(&cost, &[EnergyType::Fire, EnergyType::Fire]));
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::EnergyType;

/// Energy needed to use an attack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnergyRequirements {
    typed: [u32; EnergyType::COUNT],
    any: u32,
}

impl EnergyRequirements {
    /// A free cost.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            typed: [0; EnergyType::COUNT],
            any: 0,
        }
    }

    /// Require `count` more energy of one type.
    #[must_use]
    pub fn with(mut self, energy: EnergyType, count: u32) -> Self {
        self.typed[energy.index()] += count;
        self
    }

    /// Require `count` more energy of any type.
    #[must_use]
    pub fn with_any(mut self, count: u32) -> Self {
        self.any += count;
        self
    }

    /// Required count for one energy type.
    #[must_use]
    pub const fn typed(&self, energy: EnergyType) -> u32 {
        self.typed[energy.index()]
    }

    /// Required wildcard count.
    #[must_use]
    pub const fn any(&self) -> u32 {
        self.any
    }

    /// Total energy this cost consumes.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.typed.iter().sum::<u32>() + self.any
    }

    #[must_use]
    pub fn is_free(&self) -> bool {
        self.total() == 0
    }
}

impl std::fmt::Display for EnergyRequirements {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for energy in EnergyType::ALL {
            for _ in 0..self.typed(energy) {
                write!(f, "{}", energy.letter())?;
            }
        }
        for _ in 0..self.any {
            f.write_str("C")?;
        }
        Ok(())
    }
}

/// Check whether attached energy can pay for `requirements`.
///
/// Each token pays its own type first, then the wildcard bucket; tokens that
/// fit neither are unused.
#[must_use]
pub fn has_met_requirements<'a>(
    requirements: &EnergyRequirements,
    attached: impl IntoIterator<Item = &'a EnergyType>,
) -> bool {
    let mut remaining = *requirements;

    for &energy in attached {
        let bucket = &mut remaining.typed[energy.index()];
        if *bucket > 0 {
            *bucket -= 1;
        } else if remaining.any > 0 {
            remaining.any -= 1;
        }
    }

    remaining.is_free()
}

/// Letter notation for a sequence of attached energy, in attachment order.
///
/// An empty sequence renders as `none`.
pub struct AttachedEnergy<'a, I>(pub &'a I);

impl<'a, I> std::fmt::Display for AttachedEnergy<'a, I>
where
    &'a I: IntoIterator<Item = &'a EnergyType>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut empty = true;
        for energy in self.0 {
            write!(f, "{}", energy.letter())?;
            empty = false;
        }
        if empty {
            f.write_str("none")?;
        }
        Ok(())
    }
}
