//! Win and draw detection over a board.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_winner;
