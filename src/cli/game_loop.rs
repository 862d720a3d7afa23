//! Interactive driving loop.
//!
//! Alternates turns until a pile is empty. Human moves are read line by
//! line from `input` and validated against the current position before they
//! reach the state; computer moves come from the search engine. Everything
//! the player sees goes to `output`.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{GameState, Move, MoveList, Side};
use crate::error::{Error, Result};
use crate::rules::{FinalScore, Winner};
use crate::search::Minimax;

const PROMPT: &str = "Enter your move (red blue): ";

/// A move played during the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The side that played the move.
    pub side: Side,

    /// The move played.
    pub mv: Move,

    /// Ply number, starting at 1.
    pub ply: u32,
}

/// Summary of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub history: Vec<MoveRecord>,
    pub final_red: u32,
    pub final_blue: u32,
    pub score: FinalScore,
    pub winner: Winner,
}

/// Play `state` to the end.
///
/// Fails only on I/O errors, including end of input while waiting for a
/// human move. Invalid human input is reported on `output` and asked for
/// again.
pub fn play<R: BufRead, W: Write>(
    state: &mut GameState,
    engine: &mut Minimax,
    mut input: R,
    mut output: W,
) -> Result<GameReport> {
    let mut history = Vec::new();

    while !state.is_terminal() {
        let side = state.side_to_move();
        let mv = match side {
            Side::Human => {
                emit(
                    &mut output,
                    format_args!(
                        "Current state: Red marbles = {}, Blue marbles = {}",
                        state.red(),
                        state.blue()
                    ),
                )?;
                emit(
                    &mut output,
                    format_args!("Available moves: {}", format_moves(&state.available_moves())),
                )?;
                read_human_move(state, &mut input, &mut output)?
            }
            Side::Computer => {
                let Some(mv) = engine.best_move(state) else {
                    warn!("search returned no move for a non-terminal state");
                    break;
                };
                emit(&mut output, format_args!("Computer moves: {}", mv))?;
                mv
            }
        };

        state.apply_move(mv);
        history.push(MoveRecord { side, mv, ply: history.len() as u32 + 1 });
        debug!(%side, %mv, red = state.red(), blue = state.blue(), "move played");
        state.pass_turn();
    }

    let score = state.final_score();
    let winner = score.winner();

    emit(&mut output, format_args!("Game Over!"))?;
    emit(
        &mut output,
        format_args!("Remaining marbles: Red = {}, Blue = {}", state.red(), state.blue()),
    )?;
    emit(
        &mut output,
        format_args!("Final scores: Human = {}, Computer = {}", score.human, score.computer),
    )?;
    emit(&mut output, format_args!("{}", winner))?;

    info!(
        plies = history.len(),
        human = score.human,
        computer = score.computer,
        computer_won = winner.is_winner(Side::Computer),
        "game over"
    );

    Ok(GameReport {
        history,
        final_red: state.red(),
        final_blue: state.blue(),
        score,
        winner,
    })
}

/// Prompt until the human enters a move that is legal in `state`.
fn read_human_move<R: BufRead, W: Write>(
    state: &GameState,
    input: &mut R,
    output: &mut W,
) -> Result<Move> {
    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT).map_err(|e| Error::io("write prompt", e))?;
        output.flush().map_err(|e| Error::io("flush prompt", e))?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .map_err(|e| Error::io("read move", e))?;
        if read == 0 {
            return Err(Error::io(
                "read move",
                std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "input closed"),
            ));
        }

        match line.parse::<Move>() {
            Ok(mv) if state.is_legal(mv) => return Ok(mv),
            Ok(mv) => {
                debug!(%mv, "rejected illegal move");
                emit(output, format_args!("Invalid move {}. Try again.", mv))?;
            }
            Err(err) => {
                debug!(%err, "rejected move input");
                emit(output, format_args!("{}", err))?;
            }
        }
    }
}

fn format_moves(moves: &MoveList) -> String {
    let listed: Vec<String> = moves.iter().map(Move::to_string).collect();
    format!("[{}]", listed.join(", "))
}

fn emit<W: Write>(output: &mut W, line: std::fmt::Arguments<'_>) -> Result<()> {
    writeln!(output, "{}", line).map_err(|e| Error::io("write game output", e))
}
