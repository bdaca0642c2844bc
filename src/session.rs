//! Game session - the owned host around the pure engine.
//!
//! `GameSession` holds the committed state of one match and applies actions
//! to it through the engine. A rejected action leaves the committed state and
//! history untouched.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use rust_ptcg::cards::AttackParams;
//! use rust_ptcg::core::Player;
//! use rust_ptcg::sets::genetic_apex;
//! use rust_ptcg::GameSession;
//!
//! let engine = Arc::new(genetic_apex::engine().unwrap());
//! let mut session = GameSession::new(engine);
//! session
//!     .update_state(|state| genetic_apex::demo_board(state))
//!     .unwrap();
//!
//! session.use_attack("vine_whip", AttackParams::default()).unwrap();
//!
//! assert_eq!(session.game_state().turn_number, 2);
//! assert_eq!(session.game_state().active_player, Player::B);
//! assert_eq!(session.history().len(), 1);
//! ```

use std::sync::Arc;

use im::Vector;
use log::{error, warn};

use crate::cards::AttackParams;
use crate::core::error::Result;
use crate::core::{Action, ActionRecord, AttackId, GameCardId, GameResult, GameState, Player, PlayerView};
use crate::rules::{Engine, RulesEngine};

/// One match in progress.
#[derive(Clone, Debug)]
pub struct GameSession {
    engine: Arc<Engine>,
    state: GameState,
    history: Vector<ActionRecord>,
}

impl GameSession {
    /// Start a session on an empty board.
    #[must_use]
    pub fn new(engine: Arc<Engine>) -> Self {
        Self::from_state(engine, GameState::new())
    }

    /// Start a session from a prepared state.
    #[must_use]
    pub fn from_state(engine: Arc<Engine>, state: GameState) -> Self {
        Self {
            engine,
            state,
            history: Vector::new(),
        }
    }

    /// Rebuild a session by applying recorded actions to an initial state.
    ///
    /// Stops at the first rejected action and returns its error.
    pub fn replay(
        engine: Arc<Engine>,
        initial: GameState,
        actions: impl IntoIterator<Item = Action>,
    ) -> Result<Self> {
        let mut session = Self::from_state(engine, initial);
        for action in actions {
            session.apply(action)?;
        }
        Ok(session)
    }

    /// Modify the committed state directly, bypassing the rules.
    ///
    /// For setting up positions in tools and tests. The change is applied to
    /// a copy and committed only if `edit` succeeds.
    pub fn update_state(&mut self, edit: impl FnOnce(&mut GameState) -> Result<()>) -> Result<()> {
        let mut next = self.state.clone();
        edit(&mut next)?;
        self.state = next;
        Ok(())
    }

    /// Apply an action for the active player.
    pub fn apply(&mut self, action: Action) -> Result<()> {
        let player = self.state.active_player;
        let turn = self.state.turn_number;

        match self.engine.apply_action(&self.state, &action) {
            Ok(next) => {
                self.state = next;
                self.history.push_back(ActionRecord::new(player, turn, action));
                Ok(())
            }
            Err(err) => {
                if err.kind().is_user_facing() {
                    warn!("Rejected {action} by {player} on turn {turn}: {err}");
                } else {
                    error!("Internal error applying {action} by {player} on turn {turn}: {err}");
                }
                Err(err)
            }
        }
    }

    /// Use an attack of the active Pokémon.
    pub fn use_attack(&mut self, attack_id: impl Into<AttackId>, params: AttackParams) -> Result<()> {
        self.apply(Action::use_attack(attack_id, params))
    }

    /// Evolve a Pokémon with a card from hand.
    pub fn evolve_to(&mut self, target: GameCardId, hand_card: GameCardId) -> Result<()> {
        self.apply(Action::evolve_to(target, hand_card))
    }

    pub fn end_turn(&mut self) -> Result<()> {
        self.apply(Action::EndTurn)
    }

    /// The committed state.
    #[must_use]
    pub fn game_state(&self) -> &GameState {
        &self.state
    }

    /// The committed state as seen by one player.
    #[must_use]
    pub fn view(&self, player: Player) -> PlayerView {
        PlayerView::new(&self.state, player)
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        self.state.result
    }

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::EngineError;
    use crate::sets::genetic_apex;

    fn session() -> GameSession {
        let engine = Arc::new(genetic_apex::engine().unwrap());
        let mut session = GameSession::new(engine);
        session.update_state(genetic_apex::demo_board).unwrap();
        session
    }

    #[test]
    fn test_accepted_action_is_recorded() {
        let mut session = session();
        session.end_turn().unwrap();

        assert_eq!(session.history().len(), 1);
        let record = &session.history()[0];
        assert_eq!(record.player, Player::A);
        assert_eq!(record.turn, 1);
        assert_eq!(record.action, Action::EndTurn);
    }

    #[test]
    fn test_rejected_action_leaves_session_unchanged() {
        let mut session = session();
        let before = session.game_state().clone();

        let err = session.use_attack("razor_leaf", AttackParams::default()).unwrap_err();

        assert!(matches!(err, EngineError::AttackNotFound { .. }));
        assert_eq!(session.game_state(), &before);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_failed_update_is_discarded() {
        let mut session = session();
        let before = session.game_state().clone();

        let result = session.update_state(|state| {
            state.turn_number = 99;
            Err(EngineError::InvalidGameState("abort".into()))
        });

        assert!(result.is_err());
        assert_eq!(session.game_state(), &before);
    }

    #[test]
    fn test_replay_matches_live_session() {
        let mut live = session();
        live.use_attack("vine_whip", AttackParams::default()).unwrap();
        live.end_turn().unwrap();

        let actions = live.history().iter().map(|r| r.action.clone());
        let initial = session().game_state().clone();
        let replayed = GameSession::replay(Arc::new(genetic_apex::engine().unwrap()), initial, actions).unwrap();

        assert_eq!(replayed.game_state(), live.game_state());
        assert_eq!(replayed.history(), live.history());
    }

    #[test]
    fn test_view() {
        let session = session();
        let view = session.view(Player::B);
        assert!(!view.is_own_turn);
        assert!(view.own_active.is_some());
    }
}
