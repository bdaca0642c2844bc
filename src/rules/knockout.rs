//! Knockout processing and win evaluation.
//!
//! Runs after every attack. Only active Pokémon are checked: a benched
//! Pokémon at zero health stays where it is.
//!
//! ## Win Conditions
//!
//! A player qualifies to win with `POINTS_TO_WIN` prize points, or when the
//! opponent has no Pokémon left in play. If both qualify at once, the higher
//! prize total wins, then the player who did not white out, else it is a draw.

use std::cmp::Ordering;

use log::info;

use crate::cards::Registry;
use crate::core::config::POINTS_TO_WIN;
use crate::core::error::{EngineError, Result};
use crate::core::state::BoardSlot;
use crate::core::{GameResult, GameState, Player};

/// Remove knocked-out active Pokémon and award prize points to their
/// opponents. Returns the players whose active Pokémon was knocked out.
pub fn resolve_knockouts(registry: &Registry, state: &mut GameState) -> Result<Vec<Player>> {
    let mut knocked_out = Vec::new();

    for player in Player::all() {
        let Some(fainted) = state.active_pokemon(player).filter(|p| p.is_knocked_out()) else {
            continue;
        };
        let fainted = fainted.clone();
        let card = registry.pokemon_card_by_stable_id(&fainted.card.stable_id)?;
        let points = card.prize_points();

        if state.pokemon.remove(&fainted.id()).is_none() {
            return Err(EngineError::InvalidGameState(format!(
                "active Pokemon {} has no state record",
                fainted.id()
            )));
        }

        let board = &mut state.boards[player];
        board.set_slot(BoardSlot::Active, None);
        board.discard.extend(fainted.all_cards().cloned());

        state.boards[player.opponent()].prize_points += points;
        knocked_out.push(player);

        info!(
            "{} {} was knocked out, {} earns {} point(s)",
            card.name,
            fainted.id(),
            player.opponent(),
            points
        );
    }

    Ok(knocked_out)
}

/// Compute the match result from prize points and whiteouts.
#[must_use]
pub fn evaluate_game_result(state: &GameState) -> GameResult {
    let points = |p: Player| state.board(p).prize_points;
    let whited_out = |p: Player| state.board(p).is_whited_out();
    let qualifies = |p: Player| points(p) >= POINTS_TO_WIN || whited_out(p.opponent());

    match (qualifies(Player::A), qualifies(Player::B)) {
        (false, false) => GameResult::InProgress,
        (true, false) => GameResult::PlayerAWon,
        (false, true) => GameResult::PlayerBWon,
        (true, true) => match points(Player::A).cmp(&points(Player::B)) {
            Ordering::Greater => GameResult::PlayerAWon,
            Ordering::Less => GameResult::PlayerBWon,
            Ordering::Equal => match (whited_out(Player::A), whited_out(Player::B)) {
                (false, true) => GameResult::PlayerAWon,
                (true, false) => GameResult::PlayerBWon,
                _ => GameResult::Draw,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardReference, PokemonCardConfig, PokemonState, PokemonType, Rarity, Stage};
    use crate::core::GameCardId;

    fn bulbasaur() -> PokemonCardConfig {
        PokemonCardConfig::basic("a1-001", "Bulbasaur", "bulbasaur", PokemonType::Grass, 70)
    }

    fn ivysaur() -> PokemonCardConfig {
        PokemonCardConfig::basic("a1-002", "Ivysaur", "ivysaur", PokemonType::Grass, 90)
            .evolves_from("bulbasaur", Stage::Stage1)
    }

    fn venusaur_ex() -> PokemonCardConfig {
        PokemonCardConfig::basic("a1-004", "Venusaur ex", "venusaur", PokemonType::Grass, 190)
            .evolves_from("ivysaur", Stage::Stage2)
            .with_rarity(Rarity::Ex)
    }

    fn registry() -> Registry {
        Registry::new(
            vec![bulbasaur().into(), ivysaur().into(), venusaur_ex().into()],
            vec![],
        )
        .unwrap()
    }

    fn two_actives() -> GameState {
        let mut state = GameState::new();
        state
            .put_active(PokemonState::initial(Player::A, &bulbasaur(), GameCardId(1), 1))
            .unwrap();
        state
            .put_active(PokemonState::initial(Player::B, &bulbasaur(), GameCardId(2), 1))
            .unwrap();
        state
    }

    #[test]
    fn test_no_knockout() {
        let mut state = two_actives();
        let before = state.clone();
        assert!(resolve_knockouts(&registry(), &mut state).unwrap().is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn test_knockout_clears_slot_and_awards_opponent() {
        let mut state = two_actives();
        state.pokemon.get_mut(&GameCardId(2)).unwrap().current_hp = 0;

        let fainted = resolve_knockouts(&registry(), &mut state).unwrap();

        assert_eq!(fainted, vec![Player::B]);
        assert!(state.board(Player::B).active.is_none());
        assert!(state.pokemon(GameCardId(2)).is_none());
        assert_eq!(state.board(Player::A).prize_points, 1);
        assert_eq!(state.board(Player::B).prize_points, 0);
        assert_eq!(state.board(Player::B).discard.len(), 1);
    }

    #[test]
    fn test_knockout_discards_lineage_and_tool() {
        let mut state = GameState::new();
        let mut venusaur = PokemonState::initial(Player::B, &venusaur_ex(), GameCardId(3), 2).with_hp(-40);
        venusaur
            .evolved_from
            .push_back(CardReference::pokemon(GameCardId(1), &bulbasaur()));
        venusaur
            .evolved_from
            .push_back(CardReference::pokemon(GameCardId(2), &ivysaur()));
        state.put_active(venusaur).unwrap();

        resolve_knockouts(&registry(), &mut state).unwrap();

        let discard: Vec<_> = state.board(Player::B).discard.iter().map(|c| c.id).collect();
        assert_eq!(discard, vec![GameCardId(1), GameCardId(2), GameCardId(3)]);
        assert_eq!(state.board(Player::A).prize_points, 2);
    }

    #[test]
    fn test_mega_ex_knockout_awards_three_points() {
        let mega = PokemonCardConfig::basic("a2-999", "Mega Venusaur ex", "venusaur", PokemonType::Grass, 270)
            .evolves_from("ivysaur", Stage::Stage2)
            .with_rarity(Rarity::MegaEx);
        let registry = Registry::new(vec![bulbasaur().into(), mega.clone().into()], vec![]).unwrap();

        let mut state = GameState::new();
        state
            .put_active(PokemonState::initial(Player::A, &bulbasaur(), GameCardId(1), 1))
            .unwrap();
        state
            .put_active(PokemonState::initial(Player::B, &mega, GameCardId(2), 1).with_hp(0))
            .unwrap();

        assert_eq!(resolve_knockouts(&registry, &mut state).unwrap(), vec![Player::B]);
        assert_eq!(state.board(Player::A).prize_points, 3);
        assert_eq!(evaluate_game_result(&state), GameResult::PlayerAWon);
    }

    #[test]
    fn test_bench_knockout_ignored() {
        let mut state = two_actives();
        state
            .put_on_bench(0, PokemonState::initial(Player::B, &bulbasaur(), GameCardId(5), 1).with_hp(0))
            .unwrap();

        assert!(resolve_knockouts(&registry(), &mut state).unwrap().is_empty());
        assert!(state.pokemon(GameCardId(5)).is_some());
    }

    #[test]
    fn test_result_in_progress() {
        assert_eq!(evaluate_game_result(&two_actives()), GameResult::InProgress);
    }

    #[test]
    fn test_result_points_win() {
        let mut state = two_actives();
        state.boards[Player::B].prize_points = 3;
        assert_eq!(evaluate_game_result(&state), GameResult::PlayerBWon);
    }

    #[test]
    fn test_result_whiteout_win() {
        let mut state = two_actives();
        state.boards[Player::B].active = None;
        assert_eq!(evaluate_game_result(&state), GameResult::PlayerAWon);
    }

    #[test]
    fn test_result_both_qualify_points_break_tie() {
        // Both whited out, so both qualify; B has more points.
        let mut state = two_actives();
        state.boards[Player::A].prize_points = 1;
        state.boards[Player::B].prize_points = 3;
        state.boards[Player::A].active = None;
        state.boards[Player::B].active = None;
        assert_eq!(evaluate_game_result(&state), GameResult::PlayerBWon);
    }

    #[test]
    fn test_result_both_qualify_whiteout_breaks_tie() {
        let mut state = two_actives();
        state.boards[Player::A].prize_points = 3;
        state.boards[Player::B].prize_points = 3;
        state.boards[Player::B].active = None;
        assert_eq!(evaluate_game_result(&state), GameResult::PlayerAWon);
    }

    #[test]
    fn test_result_draw() {
        let mut state = two_actives();
        state.boards[Player::A].active = None;
        state.boards[Player::B].active = None;
        assert_eq!(evaluate_game_result(&state), GameResult::Draw);
    }

    #[test]
    fn test_result_single_qualifier_despite_fewer_points() {
        // B whited out, so only A qualifies even with fewer points.
        let mut state = two_actives();
        state.boards[Player::A].prize_points = 1;
        state.boards[Player::B].prize_points = 2;
        state.boards[Player::B].active = None;
        assert_eq!(evaluate_game_result(&state), GameResult::PlayerAWon);
    }
}
