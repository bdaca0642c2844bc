//! Per-player projection of the game state.
//!
//! A `PlayerView` is what one seat is allowed to see: the whole board, its own
//! hand, and only the size of the opponent's hand and both decks.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::BENCH_SIZE;
use super::player::Player;
use super::state::{GameResult, GameState, PlayerBoard, TurnAllowances};
use crate::cards::{CardReference, PokemonState};

/// Match result from one player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerGameResult {
    InProgress,
    Won,
    Lost,
    Draw,
}

impl PlayerGameResult {
    #[must_use]
    pub fn for_player(result: GameResult, player: Player) -> Self {
        match result {
            GameResult::InProgress => PlayerGameResult::InProgress,
            GameResult::Draw => PlayerGameResult::Draw,
            won if won.winner() == Some(player) => PlayerGameResult::Won,
            _ => PlayerGameResult::Lost,
        }
    }
}

/// Read-only snapshot for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub player: Player,
    pub result: PlayerGameResult,
    pub turn_number: u32,
    pub is_own_turn: bool,
    pub allowances: TurnAllowances,

    pub own_prize_points: u32,
    pub opponent_prize_points: u32,

    pub own_active: Option<PokemonState>,
    pub own_bench: [Option<PokemonState>; BENCH_SIZE],
    pub opponent_active: Option<PokemonState>,
    pub opponent_bench: [Option<PokemonState>; BENCH_SIZE],

    pub own_hand: Vector<CardReference>,
    pub opponent_hand_size: usize,
    pub own_deck_size: usize,
    pub opponent_deck_size: usize,
    pub own_discard: Vector<CardReference>,
    pub opponent_discard: Vector<CardReference>,
}

impl PlayerView {
    /// Project `state` for `player`.
    #[must_use]
    pub fn new(state: &GameState, player: Player) -> Self {
        let own = state.board(player);
        let opponent = state.board(player.opponent());

        let lookup = |card: &Option<CardReference>| {
            card.as_ref().and_then(|c| state.pokemon(c.id)).cloned()
        };
        let bench = |board: &PlayerBoard| -> [Option<PokemonState>; BENCH_SIZE] {
            std::array::from_fn(|i| lookup(&board.bench[i]))
        };

        Self {
            player,
            result: PlayerGameResult::for_player(state.result, player),
            turn_number: state.turn_number,
            is_own_turn: state.active_player == player,
            allowances: state.allowances,
            own_prize_points: own.prize_points,
            opponent_prize_points: opponent.prize_points,
            own_active: lookup(&own.active),
            own_bench: bench(own),
            opponent_active: lookup(&opponent.active),
            opponent_bench: bench(opponent),
            own_hand: own.hand.clone(),
            opponent_hand_size: opponent.hand.len(),
            own_deck_size: own.deck.len(),
            opponent_deck_size: opponent.deck.len(),
            own_discard: own.discard.clone(),
            opponent_discard: opponent.discard.clone(),
        }
    }
}
