//! Attack definitions.
//!
//! An attack is data plus a pure computation. `on_use` looks at the state and
//! the caller-supplied params and returns a raw `AttackResult`: who takes how
//! much damage and which effects follow. The engine then applies weakness,
//! damage and effects itself, so attack content never mutates state.
//!
//! ## Chance
//!
//! Attacks never roll dice. Coin flips reach them through `ChanceParams`,
//! which the host fills in (see `ChanceRoller`), keeping every transition
//! replayable.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::error::{EngineError, Result};
use crate::core::ids::{AttackId, GameCardId};
use crate::core::state::GameState;
use crate::effects::AttackEffect;
use crate::rules::EnergyRequirements;

/// Result of a single coin flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoinFlip {
    Heads,
    Tails,
}

/// Chance outcomes supplied with an attack.
///
/// Always filled in by the host, even for attacks that ignore them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChanceParams {
    #[serde(default)]
    pub single_coin_flip: Option<CoinFlip>,

    /// Heads out of a fixed number of flips.
    #[serde(default)]
    pub multiple_coin_flip_heads: Option<u32>,

    /// Heads before the first tails.
    #[serde(default)]
    pub continuous_coin_flip_heads: Option<u32>,

    #[serde(default)]
    pub random_damage_targets: SmallVec<[GameCardId; 2]>,
}

/// Player-controlled parameters of an attack.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttackParams {
    #[serde(default)]
    pub damage_targets: SmallVec<[GameCardId; 2]>,

    #[serde(default)]
    pub effect_targets: SmallVec<[GameCardId; 2]>,

    #[serde(default)]
    pub chance: ChanceParams,
}

impl AttackParams {
    /// Params carrying only chance outcomes.
    #[must_use]
    pub fn with_chance(chance: ChanceParams) -> Self {
        Self {
            chance,
            ..Self::default()
        }
    }
}

/// Damage dealt to one Pokémon, before weakness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttackDamage {
    pub target: GameCardId,
    pub damage: u32,
}

impl AttackDamage {
    #[must_use]
    pub const fn new(target: GameCardId, damage: u32) -> Self {
        Self { target, damage }
    }
}

/// Raw output of an attack's computation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackResult {
    pub damages: SmallVec<[AttackDamage; 2]>,

    /// Applied in order, after all damage.
    pub effects: SmallVec<[AttackEffect; 2]>,
}

impl AttackResult {
    /// A result that damages a single target.
    #[must_use]
    pub fn damage(target: GameCardId, damage: u32) -> Self {
        let mut result = Self::default();
        result.damages.push(AttackDamage::new(target, damage));
        result
    }

    /// Add an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: AttackEffect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Pure attack computation.
pub type AttackFn = Arc<dyn Fn(&GameState, &AttackParams) -> Result<AttackResult> + Send + Sync>;

/// Attack-specific parameter check. `Err` carries a player-facing message.
pub type ParamsValidator =
    Arc<dyn Fn(&GameState, &AttackParams) -> std::result::Result<(), String> + Send + Sync>;

/// Definition of an attack.
///
/// ## Example
///
/// ```
/// use rust_ptcg::cards::{AttackConfig, EnergyType};
/// use rust_ptcg::rules::EnergyRequirements;
///
/// let vine_whip = AttackConfig::damaging(
///     "vine_whip",
///     "Vine Whip",
///     40,
///     EnergyRequirements::new().with(EnergyType::Grass, 1).with_any(1),
/// );
///
/// assert_eq!(vine_whip.damage_descriptor, "40");
/// assert_eq!(vine_whip.energy_requirements.to_string(), "GC");
/// ```
#[derive(Clone)]
pub struct AttackConfig {
    pub id: AttackId,
    pub name: String,
    pub description: Option<String>,
    pub energy_requirements: EnergyRequirements,

    /// Damage as printed on the card ("40", "50x").
    pub damage_descriptor: String,

    pub on_use: AttackFn,
    pub validate_params: Option<ParamsValidator>,
}

impl std::fmt::Debug for AttackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttackConfig")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("energy_requirements", &self.energy_requirements.to_string())
            .field("damage_descriptor", &self.damage_descriptor)
            .field("validates_params", &self.validate_params.is_some())
            .finish_non_exhaustive()
    }
}

impl AttackConfig {
    /// Create an attack from its computation.
    pub fn new(
        id: impl Into<AttackId>,
        name: impl Into<String>,
        energy_requirements: EnergyRequirements,
        damage_descriptor: impl Into<String>,
        on_use: impl Fn(&GameState, &AttackParams) -> Result<AttackResult> + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            energy_requirements,
            damage_descriptor: damage_descriptor.into(),
            on_use: Arc::new(on_use),
            validate_params: None,
        }
    }

    /// Create an attack that deals fixed damage to the opponent's active Pokémon.
    pub fn damaging(
        id: impl Into<AttackId>,
        name: impl Into<String>,
        damage: u32,
        energy_requirements: EnergyRequirements,
    ) -> Self {
        Self::new(id, name, energy_requirements, damage.to_string(), move |state, _| {
            Ok(AttackResult::damage(defending_pokemon(state)?, damage))
        })
    }

    /// Append an effect computed from the state to every result.
    #[must_use]
    pub fn with_effect(
        mut self,
        effect: impl Fn(&GameState) -> Result<AttackEffect> + Send + Sync + 'static,
    ) -> Self {
        let base = Arc::clone(&self.on_use);
        self.on_use = Arc::new(
            move |state: &GameState, params: &AttackParams| -> Result<AttackResult> {
                let result = base(state, params)?;
                Ok(result.with_effect(effect(state)?))
            },
        );
        self
    }

    /// Set the params validator (builder pattern).
    #[must_use]
    pub fn with_validator(
        mut self,
        validator: impl Fn(&GameState, &AttackParams) -> std::result::Result<(), String>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.validate_params = Some(Arc::new(validator));
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Run the params validator, if any.
    pub fn validate(&self, state: &GameState, params: &AttackParams) -> Result<()> {
        match &self.validate_params {
            Some(validator) => validator(state, params).map_err(|message| {
                EngineError::InvalidAttackParams {
                    attack_id: self.id.clone(),
                    message,
                }
            }),
            None => Ok(()),
        }
    }

    /// Run the attack's computation.
    pub fn compute(&self, state: &GameState, params: &AttackParams) -> Result<AttackResult> {
        (self.on_use)(state, params)
    }
}

/// The active player's active Pokémon.
pub fn attacking_pokemon(state: &GameState) -> Result<GameCardId> {
    state
        .active_pokemon(state.active_player)
        .map(|p| p.id())
        .ok_or_else(|| {
            EngineError::InvalidGameState(format!(
                "{} has no active Pokemon",
                state.active_player
            ))
        })
}

/// The opponent's active Pokémon.
pub fn defending_pokemon(state: &GameState) -> Result<GameCardId> {
    let defender = state.active_player.opponent();
    state
        .active_pokemon(defender)
        .map(|p| p.id())
        .ok_or_else(|| EngineError::InvalidGameState(format!("{defender} has no active Pokemon")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{EnergyType, PokemonCardConfig, PokemonState, PokemonType};
    use crate::core::player::Player;

    fn board() -> GameState {
        let card = PokemonCardConfig::basic("a1-001", "Bulbasaur", "bulbasaur", PokemonType::Grass, 70);
        let mut state = GameState::new();
        state.put_active(PokemonState::initial(Player::A, &card, GameCardId(1), 1)).unwrap();
        state.put_active(PokemonState::initial(Player::B, &card, GameCardId(2), 1)).unwrap();
        state
    }

    #[test]
    fn test_damaging_attack_targets_defender() {
        let attack = AttackConfig::damaging("tackle", "Tackle", 30, EnergyRequirements::new().with_any(1));
        let result = attack.compute(&board(), &AttackParams::default()).unwrap();

        assert_eq!(result.damages.as_slice(), &[AttackDamage::new(GameCardId(2), 30)]);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_damaging_attack_without_defender() {
        let attack = AttackConfig::damaging("tackle", "Tackle", 30, EnergyRequirements::new());
        let mut state = board();
        state.advance_turn();
        state.boards[Player::A].active = None;

        assert!(matches!(
            attack.compute(&state, &AttackParams::default()),
            Err(EngineError::InvalidGameState(_))
        ));
    }

    #[test]
    fn test_with_effect_appends() {
        let attack = AttackConfig::damaging("ember", "Ember", 30, EnergyRequirements::new())
            .with_effect(|state| {
                Ok(AttackEffect::DiscardEnergy {
                    target: attacking_pokemon(state)?,
                    energy_type: EnergyType::Fire,
                    count: 1,
                })
            });

        let result = attack.compute(&board(), &AttackParams::default()).unwrap();
        assert_eq!(result.damages.len(), 1);
        assert_eq!(
            result.effects.as_slice(),
            &[AttackEffect::DiscardEnergy {
                target: GameCardId(1),
                energy_type: EnergyType::Fire,
                count: 1,
            }]
        );
    }

    #[test]
    fn test_validator() {
        let attack = AttackConfig::damaging("flip", "Flip", 10, EnergyRequirements::new()).with_validator(
            |_, params| match params.chance.single_coin_flip {
                Some(_) => Ok(()),
                None => Err("coin flip required".to_string()),
            },
        );

        let state = board();
        assert_eq!(
            attack.validate(&state, &AttackParams::default()),
            Err(EngineError::InvalidAttackParams {
                attack_id: AttackId::new("flip"),
                message: "coin flip required".to_string(),
            })
        );

        let params = AttackParams::with_chance(ChanceParams {
            single_coin_flip: Some(CoinFlip::Heads),
            ..ChanceParams::default()
        });
        assert!(attack.validate(&state, &params).is_ok());
    }

    #[test]
    fn test_params_serialization() {
        let params = AttackParams::with_chance(ChanceParams {
            multiple_coin_flip_heads: Some(2),
            ..ChanceParams::default()
        });
        let json = serde_json::to_string(&params).unwrap();
        let deserialized: AttackParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, deserialized);

        let empty: AttackParams = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, AttackParams::default());
    }
}
