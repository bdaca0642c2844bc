//! Game state: the complete, immutable snapshot of a match.
//!
//! ## GameState
//!
//! - Result, turn number, active player, turn allowances
//! - Arena of Pokémon in play, keyed by `GameCardId`
//! - Per-player board: active slot, bench, hand, deck, discard, prize points
//!
//! Uses `im` persistent data structures: cloning a state is O(1) and the
//! clone shares structure with the original until either is modified. Rules
//! transitions clone the input, modify the clone and return it, so a failed
//! transition never touches the caller's snapshot.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use super::config::BENCH_SIZE;
use super::error::{EngineError, Result};
use super::ids::GameCardId;
use super::player::{Player, PlayerMap};
use crate::cards::{CardReference, EnergyType, PokemonState};

/// Overall result of a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    #[default]
    InProgress,
    PlayerAWon,
    PlayerBWon,
    Draw,
}

impl GameResult {
    /// The result in which `player` won.
    #[must_use]
    pub const fn won_by(player: Player) -> Self {
        match player {
            Player::A => GameResult::PlayerAWon,
            Player::B => GameResult::PlayerBWon,
        }
    }

    /// Check if the match is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// The winning player, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameResult::PlayerAWon => Some(Player::A),
            GameResult::PlayerBWon => Some(Player::B),
            GameResult::InProgress | GameResult::Draw => None,
        }
    }
}

/// One-shot actions available once per turn.
///
/// All flags are reset to available whenever the turn advances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnAllowances {
    pub energy_attach_available: bool,
    pub supporter_available: bool,
    pub retreat_available: bool,
}

impl Default for TurnAllowances {
    fn default() -> Self {
        Self {
            energy_attach_available: true,
            supporter_available: true,
            retreat_available: true,
        }
    }
}

/// A board position that can hold a Pokémon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoardSlot {
    Active,
    Bench(usize),
}

/// One player's side of the table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBoard {
    pub active: Option<CardReference>,

    /// Always exactly `BENCH_SIZE` slots.
    pub bench: [Option<CardReference>; BENCH_SIZE],

    pub hand: Vector<CardReference>,
    pub deck: Vector<CardReference>,
    pub discard: Vector<CardReference>,

    /// Score towards `POINTS_TO_WIN`. Never decreases.
    pub prize_points: u32,
}

impl PlayerBoard {
    /// Whether this player has no Pokémon left in play.
    #[must_use]
    pub fn is_whited_out(&self) -> bool {
        self.active.is_none() && self.bench.iter().all(Option::is_none)
    }

    /// Find the slot holding a Pokémon.
    #[must_use]
    pub fn slot_of(&self, id: GameCardId) -> Option<BoardSlot> {
        if self.active.as_ref().is_some_and(|c| c.id == id) {
            return Some(BoardSlot::Active);
        }
        self.bench
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|c| c.id == id))
            .map(BoardSlot::Bench)
    }

    /// Get the reference in a slot.
    #[must_use]
    pub fn slot(&self, slot: BoardSlot) -> Option<&CardReference> {
        match slot {
            BoardSlot::Active => self.active.as_ref(),
            BoardSlot::Bench(i) => self.bench.get(i).and_then(Option::as_ref),
        }
    }

    /// Replace the contents of a slot, returning the previous reference.
    pub fn set_slot(&mut self, slot: BoardSlot, card: Option<CardReference>) -> Option<CardReference> {
        match slot {
            BoardSlot::Active => std::mem::replace(&mut self.active, card),
            BoardSlot::Bench(i) => self
                .bench
                .get_mut(i)
                .and_then(|s| std::mem::replace(s, card)),
        }
    }

    /// Pokémon in play: active first, then bench in slot order.
    pub fn in_play(&self) -> impl Iterator<Item = &CardReference> {
        self.active.iter().chain(self.bench.iter().flatten())
    }

    /// Position of a card in hand.
    #[must_use]
    pub fn hand_position(&self, id: GameCardId) -> Option<usize> {
        self.hand.iter().position(|c| c.id == id)
    }
}

/// Complete game state.
///
/// ## Example
///
/// ```
/// use rust_ptcg::core::{GameState, Player, GameResult};
///
/// let mut state = GameState::new();
/// assert_eq!(state.turn_number, 1);
/// assert_eq!(state.active_player, Player::A);
///
/// state.advance_turn();
/// assert_eq!(state.turn_number, 2);
/// assert_eq!(state.active_player, Player::B);
/// assert_eq!(state.result, GameResult::InProgress);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub result: GameResult,

    /// Turn number (starts at 1, strictly increasing).
    pub turn_number: u32,

    /// Player whose turn it is.
    pub active_player: Player,

    pub allowances: TurnAllowances,

    /// Every Pokémon in play, keyed by the id of its top card.
    pub pokemon: OrdMap<GameCardId, PokemonState>,

    pub boards: PlayerMap<PlayerBoard>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create an empty state: turn 1, Player A to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            result: GameResult::InProgress,
            turn_number: 1,
            active_player: Player::A,
            allowances: TurnAllowances::default(),
            pokemon: OrdMap::new(),
            boards: PlayerMap::default(),
        }
    }

    // === Lookups ===

    /// Get a Pokémon in play.
    #[must_use]
    pub fn pokemon(&self, id: GameCardId) -> Option<&PokemonState> {
        self.pokemon.get(&id)
    }

    /// Get a player's board.
    #[must_use]
    pub fn board(&self, player: Player) -> &PlayerBoard {
        &self.boards[player]
    }

    /// Get a player's active Pokémon, if the slot is occupied.
    #[must_use]
    pub fn active_pokemon(&self, player: Player) -> Option<&PokemonState> {
        self.boards[player]
            .active
            .as_ref()
            .and_then(|card| self.pokemon.get(&card.id))
    }

    /// Get a card from a player's hand.
    #[must_use]
    pub fn hand_card(&self, player: Player, id: GameCardId) -> Option<&CardReference> {
        self.boards[player].hand.iter().find(|c| c.id == id)
    }

    /// Whether a game card id is already used anywhere in this match.
    #[must_use]
    pub fn contains_card(&self, id: GameCardId) -> bool {
        self.pokemon
            .values()
            .flat_map(PokemonState::all_cards)
            .any(|c| c.id == id)
            || self.boards.iter().any(|(_, board)| {
                board
                    .hand
                    .iter()
                    .chain(board.deck.iter())
                    .chain(board.discard.iter())
                    .any(|c| c.id == id)
            })
    }

    // === Setup ===

    fn ensure_unused(&self, id: GameCardId) -> Result<()> {
        if self.contains_card(id) {
            return Err(EngineError::InvalidGameState(format!(
                "game card id {id} is already in use"
            )));
        }
        Ok(())
    }

    fn place(&mut self, slot: BoardSlot, pokemon: PokemonState) -> Result<()> {
        for card in pokemon.all_cards() {
            self.ensure_unused(card.id)?;
        }
        let board = &mut self.boards[pokemon.owner];
        if let BoardSlot::Bench(i) = slot {
            if i >= BENCH_SIZE {
                return Err(EngineError::InvalidGameState(format!(
                    "bench slot {i} out of range"
                )));
            }
        }
        if board.slot(slot).is_some() {
            return Err(EngineError::InvalidGameState(format!(
                "{slot:?} slot of {} is occupied",
                pokemon.owner
            )));
        }
        board.set_slot(slot, Some(pokemon.card.clone()));
        self.pokemon.insert(pokemon.id(), pokemon);
        Ok(())
    }

    /// Put a Pokémon into its owner's empty active slot.
    pub fn put_active(&mut self, pokemon: PokemonState) -> Result<()> {
        self.place(BoardSlot::Active, pokemon)
    }

    /// Put a Pokémon into an empty bench slot of its owner.
    pub fn put_on_bench(&mut self, slot: usize, pokemon: PokemonState) -> Result<()> {
        self.place(BoardSlot::Bench(slot), pokemon)
    }

    /// Add a card to the end of a player's hand.
    pub fn add_to_hand(&mut self, player: Player, card: CardReference) -> Result<()> {
        self.ensure_unused(card.id)?;
        self.boards[player].hand.push_back(card);
        Ok(())
    }

    /// Add a card to the bottom of a player's deck.
    pub fn add_to_deck(&mut self, player: Player, card: CardReference) -> Result<()> {
        self.ensure_unused(card.id)?;
        self.boards[player].deck.push_back(card);
        Ok(())
    }

    /// Attach one energy token to a Pokémon in play.
    pub fn attach_energy(&mut self, id: GameCardId, energy: EnergyType) -> Result<()> {
        let pokemon = self
            .pokemon
            .get_mut(&id)
            .ok_or(EngineError::CardInstanceNotFound(id))?;
        pokemon.attached_energy.push_back(energy);
        Ok(())
    }

    // === Turn Advancement ===

    /// Advance to the next turn: flip the active player and reset allowances.
    pub fn advance_turn(&mut self) {
        self.turn_number += 1;
        self.active_player = self.active_player.opponent();
        self.allowances = TurnAllowances::default();
    }
}
