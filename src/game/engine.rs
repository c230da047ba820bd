//! Game engine: move legality, outcome detection, turn alternation.

use super::error::MoveError;
use super::rules;
use super::types::{Coord, GameState, GameStatus};
use tracing::{debug, instrument};

/// Engine for a single game.
///
/// Owns one [`GameState`] and is the only path that mutates it. Each
/// front end holds its own instance; nothing is shared across games.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies the current player's mark at (row, col).
    ///
    /// After a successful placement the outcome is evaluated in fixed
    /// order: win first, then draw, otherwise the turn passes to the
    /// opponent. A move that fills the board and completes a line is
    /// therefore a win, not a draw. On a terminal move the turn does
    /// not pass; the mover stays recorded as current player.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if row or col is outside 0..=2.
    /// - [`MoveError::IllegalMove`] if the square is occupied or the
    ///   game is already over.
    ///
    /// Neither error mutates the state.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        let coord = Coord::new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;

        if self.state.status().is_terminal() {
            return Err(MoveError::IllegalMove);
        }

        if !self.state.board().is_empty(coord) {
            return Err(MoveError::IllegalMove);
        }

        let mover = self.state.current_player();
        self.state.place(coord, mover);

        if let Some(winner) = rules::check_winner(self.state.board()) {
            self.state.set_status(GameStatus::Won(winner));
        } else if rules::is_full(self.state.board()) {
            self.state.set_status(GameStatus::Draw);
        } else {
            self.state.pass_turn();
        }

        debug!(%coord, status = ?self.state.status(), "move applied");
        Ok(())
    }

    /// Discards the current game and starts a fresh one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves_discarded = self.state.history().len(), "game reset");
        self.state = GameState::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
