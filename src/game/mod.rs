//! Game-state engine for noughts and crosses.

mod engine;
mod error;
mod rules;
mod types;

pub use engine::Game;
pub use error::MoveError;
pub use rules::{check_winner, is_full};
pub use types::{Board, Coord, GameState, GameStatus, Player, Square};
