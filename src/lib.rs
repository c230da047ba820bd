//! Noughts - hot-seat noughts and crosses.
//!
//! One game-state engine, two front ends:
//!
//! - **Engine**: move legality, win/draw detection, turn alternation
//! - **Terminal**: prompt loop for two players at one keyboard
//! - **Web**: button-grid board with per-browser sessions
//!
//! # Example
//!
//! ```
//! use noughts::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! game.make_move(1, 1)?;
//! assert_eq!(game.state().current_player(), Player::O);
//! assert_eq!(game.state().status(), GameStatus::InProgress);
//! # Ok::<(), noughts::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod game;
mod server;
mod session;
mod terminal;

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - Game engine
pub use game::{
    Board, Coord, Game, GameState, GameStatus, MoveError, Player, Square, check_winner, is_full,
};

// Crate-level exports - Web front end
pub use server::{MoveForm, router, serve};

// Crate-level exports - Session management
pub use session::{GameSession, SessionError, SessionId, SessionManager};

// Crate-level exports - Terminal front end
pub use terminal::play;
