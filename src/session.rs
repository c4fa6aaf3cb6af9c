#![cfg(feature = "std")]

//! Interactive turn loop: render, read a coordinate line, apply the click.

use std::io::{BufRead, Write};

use anyhow::{bail, Context};

use crate::{
    common::{ClickResult, GameStatus},
    game::Game,
    input::parse_coordinates,
};

pub const GREETING: &str =
    "This is Minesweeper! Enter a row number, a space, then a column number and press enter.";
pub const SAFE_MESSAGE: &str = "ok";
pub const ALREADY_CLICKED_MESSAGE: &str = "You've already clicked that position.";
pub const WIN_MESSAGE: &str = "You won!";
pub const LOSS_MESSAGE: &str = "Boom! That was a mine. Better luck next time.";

/// Play `game` to completion, reading moves from `input` and writing the
/// board and status text to `output`.
///
/// Returns the final status, which is never `InProgress`. Running out of input
/// before the game ends is an error.
pub fn run<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    mut output: W,
) -> anyhow::Result<GameStatus> {
    writeln!(output, "{}", GREETING)?;
    let mut line = String::new();
    while game.status() == GameStatus::InProgress {
        write!(output, "{}", game.board().render_hidden())?;
        output.flush()?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("failed to read coordinates")?;
        if read == 0 {
            bail!("input closed before the game finished");
        }

        let (row, col) = match parse_coordinates(&line) {
            Ok(coord) => coord,
            Err(e) => {
                log::debug!("rejected input {:?}: {}", line.trim_end(), e);
                writeln!(output, "Invalid input: {}", e)?;
                continue;
            }
        };

        match game.click(row, col) {
            Some(ClickResult::Safe) => writeln!(output, "{}", SAFE_MESSAGE)?,
            Some(ClickResult::AlreadyClicked) => writeln!(output, "{}", ALREADY_CLICKED_MESSAGE)?,
            Some(ClickResult::Mine) | None => {}
        }
    }

    let status = game.status();
    write!(output, "{}", game.finish())?;
    match status {
        GameStatus::Won => writeln!(output, "{}", WIN_MESSAGE)?,
        GameStatus::Lost => writeln!(output, "{}", LOSS_MESSAGE)?,
        GameStatus::InProgress => {}
    }
    output.flush()?;
    log::info!("game over: {:?}", status);
    Ok(status)
}
