//! Terminal front end: two players at one keyboard.
//!
//! The loop only hands the engine already-parsed integers; unparseable
//! or out-of-range text is re-prompted here without touching the game.

use crate::game::Game;
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument};

/// Runs a game at the terminal, prompting players for moves until the
/// game ends. Offers a rematch on the same engine via `reset`.
#[instrument]
pub fn play() -> Result<()> {
    println!("Noughts & Crosses - two players, one keyboard.");

    let mut game = Game::new();

    loop {
        println!();
        println!("{}", game.state().board().display());
        println!("{}", game.state().status_line());

        if game.state().status().is_terminal() {
            if !prompt_yes_no("Play again? [y/N] ")? {
                return Ok(());
            }
            game.reset();
            continue;
        }

        let mover = game.state().current_player();
        let Some(row) = prompt_coordinate(&format!("Player {mover}, choose a row (0-2): "))?
        else {
            return Ok(());
        };
        let Some(col) = prompt_coordinate(&format!("Player {mover}, choose a column (0-2): "))?
        else {
            return Ok(());
        };

        if let Err(err) = game.make_move(row, col) {
            debug!(row, col, error = %err, "Move rejected");
            println!("Invalid move: {err}. Try again.");
        }
    }
}

/// Prompts until the player enters an integer in 0..=2.
///
/// Returns `None` on end of input.
fn prompt_coordinate(prompt: &str) -> Result<Option<usize>> {
    loop {
        let Some(line) = read_line(prompt)? else {
            return Ok(None);
        };

        match line.trim().parse::<usize>() {
            Ok(value) if value <= 2 => return Ok(Some(value)),
            Ok(value) => println!("{value} is outside the board. Enter 0, 1 or 2."),
            Err(_) => println!("Please enter a whole number between 0 and 2."),
        }
    }
}

/// Asks a yes/no question; anything but y/yes counts as no.
fn prompt_yes_no(prompt: &str) -> Result<bool> {
    let Some(line) = read_line(prompt)? else {
        return Ok(false);
    };
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Prints a prompt and reads one line; `None` on end of input.
fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line))
}
