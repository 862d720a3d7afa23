//! Command-line front end.
//!
//! `marbles <num-red> <num-blue> <version> <first-player> [<depth>]`
//!
//! Arguments are validated by clap before any game state exists; a missing
//! or malformed argument prints the usage message and no game is played.

pub mod game_loop;

use std::io;

use clap::Parser;
use tracing::info;

use crate::core::{Depth, GameConfig, Side, Variant};
use crate::search::Minimax;

pub use game_loop::{play, GameReport, MoveRecord};

/// Play red/blue marbles against a minimax opponent.
#[derive(Parser, Debug, Clone)]
#[command(name = "marbles", version, about, long_about = None)]
pub struct Args {
    /// Red marbles at the start
    #[arg(value_name = "num-red")]
    pub red: u32,

    /// Blue marbles at the start
    #[arg(value_name = "num-blue")]
    pub blue: u32,

    /// Rule variant: standard or misere
    #[arg(value_name = "version")]
    pub variant: Variant,

    /// Who moves first: human or computer
    #[arg(value_name = "first-player")]
    pub first_player: Side,

    /// Computer search depth in plies; searches to the end of the game when omitted
    #[arg(value_name = "depth", allow_negative_numbers = true)]
    pub depth: Option<Depth>,

    /// Log search details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Game configuration described by these arguments.
    #[must_use]
    pub fn game_config(&self) -> GameConfig {
        GameConfig::new(self.red, self.blue)
            .with_variant(self.variant)
            .with_first_player(self.first_player)
            .with_depth(self.depth.unwrap_or_default())
    }
}

/// Play one game on stdin/stdout.
pub fn run(args: &Args) -> anyhow::Result<GameReport> {
    let config = args.game_config();
    info!(?config, "starting game");

    let mut state = config.new_state();
    let mut engine = Minimax::new(config.search_config());

    let report = play(&mut state, &mut engine, io::stdin().lock(), io::stdout().lock())?;
    Ok(report)
}
