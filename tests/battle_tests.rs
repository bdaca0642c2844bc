//! Battle integration tests.
//!
//! Whole-turn scenarios driven through the public engine and session API
//! with the Genetic Apex sample cards.

use std::sync::Arc;

use proptest::prelude::*;

use rust_ptcg::cards::{
    defending_pokemon, AttackConfig, AttackDamage, AttackParams, AttackResult, ChanceParams,
    EnergyType, PokemonCardConfig, PokemonState, PokemonType,
};
use rust_ptcg::core::{
    Action, DeckConfig, EngineError, GameCardId, GameParams, GameResult, GameState, Player,
    PlayerGameResult,
};
use rust_ptcg::rules::{Engine, EnergyRequirements, RulesEngine};
use rust_ptcg::sets::genetic_apex::{self, bulbasaur, charmander, growlithe, pinsir};
use rust_ptcg::{ChanceRoller, GameSession};

fn engine() -> Arc<Engine> {
    Arc::new(genetic_apex::engine().unwrap())
}

/// A session on a board built by `setup`.
fn session_with(setup: impl FnOnce(&mut GameState) -> rust_ptcg::core::Result<()>) -> GameSession {
    let mut session = GameSession::new(engine());
    session.update_state(setup).unwrap();
    session
}

fn hp(session: &GameSession, id: u32) -> i32 {
    session.game_state().pokemon(GameCardId(id)).unwrap().current_hp
}

/// A 40-damage attack kills nothing at full health and passes the turn.
#[test]
fn test_basic_attack_passes_turn() {
    let mut session = session_with(|state| {
        state.put_active(
            PokemonState::initial(Player::A, &bulbasaur(), GameCardId(1), 1)
                .with_energy([EnergyType::Grass, EnergyType::Grass]),
        )?;
        state.put_active(PokemonState::initial(Player::B, &growlithe(), GameCardId(2), 1))
    });

    session.use_attack("vine_whip", AttackParams::default()).unwrap();

    assert_eq!(hp(&session, 2), 30);
    assert_eq!(session.game_state().turn_number, 2);
    assert_eq!(session.game_state().active_player, Player::B);
    assert_eq!(session.result(), GameResult::InProgress);
}

#[test]
fn test_missing_energy_is_rejected() {
    let mut session = session_with(|state| {
        state.put_active(PokemonState::initial(Player::A, &bulbasaur(), GameCardId(1), 1))?;
        state.put_active(PokemonState::initial(Player::B, &growlithe(), GameCardId(2), 1))
    });
    let before = session.game_state().clone();

    let err = session.use_attack("vine_whip", AttackParams::default()).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Energy requirements not met for attack [vine_whip]. Required: GC. Attached: none."
    );
    assert!(err.kind().is_user_facing());
    assert_eq!(session.game_state(), &before);
    assert!(session.history().is_empty());
}

#[test]
fn test_partial_energy_is_reported() {
    let mut session = session_with(|state| {
        state.put_active(
            PokemonState::initial(Player::A, &bulbasaur(), GameCardId(1), 1)
                .with_energy([EnergyType::Grass]),
        )?;
        state.put_active(PokemonState::initial(Player::B, &growlithe(), GameCardId(2), 1))
    });

    let err = session.use_attack("vine_whip", AttackParams::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Energy requirements not met for attack [vine_whip]. Required: GC. Attached: G."
    );
}

/// Knocking out the last Pokémon wins the game on the spot.
#[test]
fn test_knockout_of_last_pokemon_wins() {
    let mut session = session_with(|state| {
        state.put_active(
            PokemonState::initial(Player::A, &bulbasaur(), GameCardId(1), 1)
                .with_energy([EnergyType::Grass, EnergyType::Grass]),
        )?;
        state.put_active(
            PokemonState::initial(Player::B, &charmander(), GameCardId(2), 1).with_hp(40),
        )
    });

    session.use_attack("vine_whip", AttackParams::default()).unwrap();

    let state = session.game_state();
    assert!(state.board(Player::B).active.is_none());
    assert!(state.pokemon(GameCardId(2)).is_none());
    assert_eq!(state.board(Player::B).discard.len(), 1);
    assert_eq!(state.board(Player::A).prize_points, 1);
    assert_eq!(state.result, GameResult::PlayerAWon);

    // The finishing attack still passes the turn.
    assert_eq!(state.turn_number, 2);
    assert_eq!(session.view(Player::A).result, PlayerGameResult::Won);
    assert_eq!(session.view(Player::B).result, PlayerGameResult::Lost);

    assert_eq!(
        session.end_turn(),
        Err(EngineError::GameOver(GameResult::PlayerAWon))
    );
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_knockout_with_bench_keeps_playing() {
    let mut session = session_with(|state| {
        state.put_active(
            PokemonState::initial(Player::A, &bulbasaur(), GameCardId(1), 1)
                .with_energy([EnergyType::Grass, EnergyType::Grass]),
        )?;
        state.put_active(
            PokemonState::initial(Player::B, &charmander(), GameCardId(2), 1).with_hp(40),
        )?;
        state.put_on_bench(0, PokemonState::initial(Player::B, &growlithe(), GameCardId(3), 1))
    });

    session.use_attack("vine_whip", AttackParams::default()).unwrap();

    assert_eq!(session.game_state().board(Player::A).prize_points, 1);
    assert_eq!(session.result(), GameResult::InProgress);
    assert!(session.engine().is_terminal(session.game_state()).is_none());
}

#[test]
fn test_weakness_doubles_damage() {
    let mut session = session_with(|state| {
        state.put_active(
            PokemonState::initial(Player::A, &growlithe(), GameCardId(1), 1)
                .with_energy([EnergyType::Fire, EnergyType::Fire]),
        )?;
        state.put_active(PokemonState::initial(Player::B, &bulbasaur(), GameCardId(2), 1))
    });

    session.use_attack("bite", AttackParams::default()).unwrap();

    assert_eq!(hp(&session, 2), 30);
}

#[test]
fn test_ember_discards_fire_from_attacker() {
    let mut session = session_with(|state| {
        state.put_active(
            PokemonState::initial(Player::A, &charmander(), GameCardId(1), 1)
                .with_energy([EnergyType::Fire, EnergyType::Grass, EnergyType::Fire]),
        )?;
        state.put_active(PokemonState::initial(Player::B, &bulbasaur(), GameCardId(2), 1))
    });

    session.use_attack("ember", AttackParams::default()).unwrap();

    assert_eq!(hp(&session, 2), 10);
    let charmander = session.game_state().pokemon(GameCardId(1)).unwrap();
    assert_eq!(
        charmander.attached_energy.iter().copied().collect::<Vec<_>>(),
        vec![EnergyType::Fire, EnergyType::Grass]
    );
}

/// Evolution keeps damage taken and swaps the usable attacks.
#[test]
fn test_evolution_keeps_damage_and_changes_attacks() {
    let mut session = session_with(|state| {
        genetic_apex::demo_board(state)?;
        if let Some(bulbasaur) = state.pokemon.get_mut(&GameCardId(1)) {
            bulbasaur.current_hp = 10;
        }
        Ok(())
    });

    // Entered play this turn.
    assert_eq!(
        session.evolve_to(GameCardId(1), GameCardId(10)),
        Err(EngineError::IneligibleToEvolveThisTurn(GameCardId(1)))
    );

    session.end_turn().unwrap();
    session.end_turn().unwrap();
    session.evolve_to(GameCardId(1), GameCardId(10)).unwrap();

    let state = session.game_state();
    let ivysaur = state.pokemon(GameCardId(10)).unwrap();
    assert_eq!(ivysaur.current_hp, 30);
    assert_eq!(ivysaur.evolved_from.len(), 1);
    assert_eq!(ivysaur.played_on_turn, 3);
    assert!(state.pokemon(GameCardId(1)).is_none());
    assert!(state.board(Player::A).hand.is_empty());
    assert_eq!(state.active_player, Player::A);

    assert!(matches!(
        session.use_attack("vine_whip", AttackParams::default()),
        Err(EngineError::AttackNotFound { .. })
    ));

    session
        .update_state(|state| state.attach_energy(GameCardId(10), EnergyType::Grass))
        .unwrap();
    session.use_attack("razor_leaf", AttackParams::default()).unwrap();

    // Charmander takes 60 and is knocked out; Growlithe is still on the bench.
    let state = session.game_state();
    assert!(state.pokemon(GameCardId(2)).is_none());
    assert_eq!(state.board(Player::A).prize_points, 1);
    assert_eq!(state.result, GameResult::InProgress);
}

#[test]
fn test_evolving_opponent_pokemon_is_rejected() {
    let mut session = session_with(genetic_apex::demo_board);
    session.end_turn().unwrap();
    session.end_turn().unwrap();

    assert_eq!(
        session.evolve_to(GameCardId(2), GameCardId(10)),
        Err(EngineError::CardInstanceNotFound(GameCardId(2)))
    );
}

#[test]
fn test_coin_flip_attack_with_rolled_params() {
    let mut session = session_with(|state| {
        state.put_active(
            PokemonState::initial(Player::A, &pinsir(), GameCardId(1), 1)
                .with_energy([EnergyType::Grass, EnergyType::Grass]),
        )?;
        state.put_active(PokemonState::initial(Player::B, &growlithe(), GameCardId(2), 1))
    });

    // Missing flips are rejected before anything happens.
    assert!(matches!(
        session.use_attack("double_horn", AttackParams::default()),
        Err(EngineError::InvalidAttackParams { .. })
    ));

    let chance = ChanceRoller::new(11).roll(2);
    let heads = chance.multiple_coin_flip_heads.unwrap();
    session
        .use_attack("double_horn", AttackParams::with_chance(chance))
        .unwrap();

    let expected_hp = 70 - 50 * i32::try_from(heads).unwrap();
    match session.game_state().pokemon(GameCardId(2)) {
        Some(growlithe) => assert_eq!(growlithe.current_hp, expected_hp),
        None => assert!(expected_hp <= 0),
    }
}

#[test]
fn test_replay_from_json_history() {
    let mut live = session_with(genetic_apex::demo_board);
    live.use_attack("vine_whip", AttackParams::default()).unwrap();
    live.end_turn().unwrap();
    live.evolve_to(GameCardId(1), GameCardId(10)).unwrap();

    let actions: Vec<Action> = live.history().iter().map(|r| r.action.clone()).collect();
    let json = serde_json::to_string(&actions).unwrap();
    let loaded: Vec<Action> = serde_json::from_str(&json).unwrap();

    let initial = session_with(genetic_apex::demo_board).game_state().clone();
    let replayed = GameSession::replay(engine(), initial, loaded).unwrap();

    assert_eq!(replayed.game_state(), live.game_state());
}

/// An engine whose only attack hits the defender twice.
fn double_hit_engine() -> Engine {
    let attacker = PokemonCardConfig::basic(
        "t-001",
        "Double Hitter",
        "double_hitter",
        PokemonType::Colorless,
        100,
    )
    .with_attack("double_hit");
    let double_hit = AttackConfig::new(
        "double_hit",
        "Double Hit",
        EnergyRequirements::new(),
        "?",
        |state, params| {
            let target = defending_pokemon(state)?;
            let mut result = AttackResult::default();
            let amount = params.chance.continuous_coin_flip_heads.unwrap_or(0) * 10;
            result.damages.push(AttackDamage::new(target, amount));
            result.damages.push(AttackDamage::new(target, amount + 10));
            Ok(result)
        },
    );
    let deck = DeckConfig::new("Test")
        .with_energy(EnergyType::Metal)
        .with_card("t-001", 1);

    Engine::new(GameParams::new(vec![attacker.into()], vec![double_hit]).with_decks(deck.clone(), deck))
        .unwrap()
}

proptest! {
    #[test]
    fn prop_duplicate_damage_targets_are_rejected(heads in 0u32..20) {
        let engine = double_hit_engine();
        let card = engine
            .registry()
            .pokemon_card_by_stable_id(&"t-001".into())
            .unwrap()
            .clone();
        let mut state = GameState::new();
        state.put_active(PokemonState::initial(Player::A, &card, GameCardId(1), 1)).unwrap();
        state.put_active(PokemonState::initial(Player::B, &card, GameCardId(2), 1)).unwrap();

        let params = AttackParams::with_chance(ChanceParams {
            continuous_coin_flip_heads: Some(heads),
            ..ChanceParams::default()
        });
        let result = engine.apply_action(&state, &Action::use_attack("double_hit", params));

        prop_assert!(matches!(result, Err(EngineError::InvalidAttackResult(_))));
        prop_assert_eq!(state.pokemon(GameCardId(2)).unwrap().current_hp, 100);
        prop_assert_eq!(state.turn_number, 1);
    }
}
