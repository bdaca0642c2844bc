//! A small slice of the Genetic Apex set.
//!
//! Enough content to play the scenarios the engine is tested against: a
//! Grass evolution line, two Fire basics, a coin-flip attacker and a trainer.

use crate::cards::{
    attacking_pokemon, defending_pokemon, AttackConfig, AttackResult, CardConfig, CardReference,
    EnergyType, PokemonCardConfig, PokemonState, PokemonType, Rarity, Stage, TrainerCardConfig,
};
use crate::core::error::Result;
use crate::core::{DeckConfig, GameCardId, GameParams, GameState, Player};
use crate::effects::AttackEffect;
use crate::rules::{Engine, EnergyRequirements};

/// Damage per heads for Double Horn.
const DOUBLE_HORN_DAMAGE: u32 = 50;
const DOUBLE_HORN_COINS: u32 = 2;

// === Attacks ===

#[must_use]
pub fn vine_whip() -> AttackConfig {
    AttackConfig::damaging(
        "vine_whip",
        "Vine Whip",
        40,
        EnergyRequirements::new().with(EnergyType::Grass, 1).with_any(1),
    )
}

#[must_use]
pub fn razor_leaf() -> AttackConfig {
    AttackConfig::damaging(
        "razor_leaf",
        "Razor Leaf",
        60,
        EnergyRequirements::new().with(EnergyType::Grass, 1).with_any(2),
    )
}

#[must_use]
pub fn giant_bloom() -> AttackConfig {
    AttackConfig::damaging(
        "giant_bloom",
        "Giant Bloom",
        100,
        EnergyRequirements::new().with(EnergyType::Grass, 2).with_any(2),
    )
}

/// Ember: 30 damage, then discard a Fire energy from the attacker.
#[must_use]
pub fn ember() -> AttackConfig {
    AttackConfig::damaging(
        "ember",
        "Ember",
        30,
        EnergyRequirements::new().with(EnergyType::Fire, 1),
    )
    .with_description("Discard a R energy from this Pokemon.")
    .with_effect(|state| {
        Ok(AttackEffect::discard_energy(
            attacking_pokemon(state)?,
            EnergyType::Fire,
            1,
        ))
    })
}

#[must_use]
pub fn bite() -> AttackConfig {
    AttackConfig::damaging("bite", "Bite", 20, EnergyRequirements::new().with_any(2))
}

/// Double Horn: flip 2 coins, 50 damage for each heads.
#[must_use]
pub fn double_horn() -> AttackConfig {
    AttackConfig::new(
        "double_horn",
        "Double Horn",
        EnergyRequirements::new().with_any(2),
        format!("{DOUBLE_HORN_DAMAGE}x"),
        |state, params| {
            let heads = params.chance.multiple_coin_flip_heads.unwrap_or(0);
            Ok(AttackResult::damage(
                defending_pokemon(state)?,
                DOUBLE_HORN_DAMAGE * heads,
            ))
        },
    )
    .with_description("Flip 2 coins. This attack does 50 damage for each heads.")
    .with_validator(|_, params| match params.chance.multiple_coin_flip_heads {
        Some(heads) if heads <= DOUBLE_HORN_COINS => Ok(()),
        Some(heads) => Err(format!(
            "{heads} heads is impossible with {DOUBLE_HORN_COINS} coins"
        )),
        None => Err("coin flip results are missing".to_string()),
    })
}

// === Cards ===

#[must_use]
pub fn bulbasaur() -> PokemonCardConfig {
    PokemonCardConfig::basic("a1-001", "Bulbasaur", "bulbasaur", PokemonType::Grass, 70)
        .with_attack("vine_whip")
        .weak_to(PokemonType::Fire)
        .with_retreat_cost(1)
}

#[must_use]
pub fn ivysaur() -> PokemonCardConfig {
    PokemonCardConfig::basic("a1-002", "Ivysaur", "ivysaur", PokemonType::Grass, 90)
        .evolves_from("bulbasaur", Stage::Stage1)
        .with_attack("razor_leaf")
        .weak_to(PokemonType::Fire)
        .with_retreat_cost(2)
}

#[must_use]
pub fn venusaur_ex() -> PokemonCardConfig {
    PokemonCardConfig::basic("a1-004", "Venusaur ex", "venusaur", PokemonType::Grass, 190)
        .evolves_from("ivysaur", Stage::Stage2)
        .with_rarity(Rarity::Ex)
        .with_attack("giant_bloom")
        .weak_to(PokemonType::Fire)
        .with_retreat_cost(3)
}

#[must_use]
pub fn pinsir() -> PokemonCardConfig {
    PokemonCardConfig::basic("a1-017", "Pinsir", "pinsir", PokemonType::Grass, 90)
        .with_attack("double_horn")
        .weak_to(PokemonType::Fire)
        .with_retreat_cost(2)
}

#[must_use]
pub fn charmander() -> PokemonCardConfig {
    PokemonCardConfig::basic("a1-033", "Charmander", "charmander", PokemonType::Fire, 60)
        .with_attack("ember")
        .weak_to(PokemonType::Water)
        .with_retreat_cost(1)
}

#[must_use]
pub fn growlithe() -> PokemonCardConfig {
    PokemonCardConfig::basic("a1-039", "Growlithe", "growlithe", PokemonType::Fire, 70)
        .with_attack("bite")
        .weak_to(PokemonType::Water)
        .with_retreat_cost(1)
}

#[must_use]
pub fn potion() -> CardConfig {
    CardConfig::Item(TrainerCardConfig::new(
        "pa-001",
        "Potion",
        "Heal 20 damage from 1 of your Pokemon.",
    ))
}

/// Every attack in the set.
#[must_use]
pub fn attacks() -> Vec<AttackConfig> {
    vec![
        vine_whip(),
        razor_leaf(),
        giant_bloom(),
        ember(),
        bite(),
        double_horn(),
    ]
}

/// Every card in the set.
#[must_use]
pub fn cards() -> Vec<CardConfig> {
    vec![
        bulbasaur().into(),
        ivysaur().into(),
        venusaur_ex().into(),
        pinsir().into(),
        charmander().into(),
        growlithe().into(),
        potion(),
    ]
}

// === Decks ===

#[must_use]
pub fn grass_deck() -> DeckConfig {
    DeckConfig::new("Grass")
        .with_energy(EnergyType::Grass)
        .with_card("a1-001", 2)
        .with_card("a1-002", 2)
        .with_card("a1-004", 2)
        .with_card("a1-017", 2)
        .with_card("pa-001", 2)
}

#[must_use]
pub fn fire_deck() -> DeckConfig {
    DeckConfig::new("Fire")
        .with_energy(EnergyType::Fire)
        .with_card("a1-033", 2)
        .with_card("a1-039", 2)
        .with_card("pa-001", 2)
}

/// Full catalog with the Grass deck for Player A and the Fire deck for Player B.
#[must_use]
pub fn params() -> GameParams {
    GameParams::new(cards(), attacks()).with_decks(grass_deck(), fire_deck())
}

pub fn engine() -> Result<Engine> {
    Engine::new(params())
}

/// A ready-to-play position on turn 1.
///
/// - Player A: Bulbasaur #1 active with two Grass, Ivysaur #10 in hand.
/// - Player B: Charmander #2 active with one Fire, Growlithe #3 on the bench.
pub fn demo_board(state: &mut GameState) -> Result<()> {
    state.put_active(
        PokemonState::initial(Player::A, &bulbasaur(), GameCardId(1), 1)
            .with_energy([EnergyType::Grass, EnergyType::Grass]),
    )?;
    state.add_to_hand(Player::A, CardReference::pokemon(GameCardId(10), &ivysaur()))?;

    state.put_active(
        PokemonState::initial(Player::B, &charmander(), GameCardId(2), 1)
            .with_energy([EnergyType::Fire]),
    )?;
    state.put_on_bench(0, PokemonState::initial(Player::B, &growlithe(), GameCardId(3), 1))?;
    Ok(())
}
