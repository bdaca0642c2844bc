//! Core engine types: ids, players, state, actions, configuration, errors.
//!
//! Everything here is plain data. The rules that move a `GameState` from one
//! turn to the next live in `rules`.

pub mod action;
pub mod config;
pub mod error;
pub mod ids;
pub mod player;
pub mod rng;
pub mod state;
pub mod view;

pub use action::{Action, ActionRecord};
pub use config::{DeckConfig, GameParams, BENCH_SIZE, POINTS_TO_WIN, WEAKNESS_MULTIPLIER};
pub use error::{EngineError, ErrorKind, Result};
pub use ids::{AttackId, GameCardId, SpeciesId, StableCardId};
pub use player::{Player, PlayerMap};
pub use rng::ChanceRoller;
pub use state::{BoardSlot, GameResult, GameState, PlayerBoard, TurnAllowances};
pub use view::{PlayerGameResult, PlayerView};
