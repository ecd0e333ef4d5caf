// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs;
use std::path::Path;

use clap::Parser;
use podshuffle_core::config::PlannerConfig;
use podshuffle_core::error::Fallible;

use crate::cmd::players::join;
use crate::cmd::players::record_winner;
use crate::cmd::players::toggle_drop;
use crate::cmd::round::next_round;
use crate::cmd::round::start_game;
use crate::cmd::show::stored_rounds;
use crate::render::OutputFormat;
use crate::render::render_round;
use crate::render::render_rounds;
use crate::state::DEFAULT_STATE_PATH;
use crate::utils::read_roster;
use crate::utils::seed_or_random;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Start a game: shuffle the roster into the first round.
    Start {
        /// File with one name per line (or comma-separated). By default, names are read from stdin.
        roster: Option<String>,
        /// Path to the session file.
        #[arg(long, default_value = DEFAULT_STATE_PATH)]
        state: String,
        /// Seed for the random number generator. By default, a random seed is used.
        #[arg(long)]
        seed: Option<u64>,
        /// Path to a TOML file with `max_trials` and `history_limit`.
        #[arg(long)]
        config: Option<String>,
    },
    /// Set the winner of a group in the current round.
    Winner {
        /// Group number, starting at 1.
        group: usize,
        /// The winner's name. Leave out to clear the winner.
        name: Option<String>,
        /// Path to the session file.
        #[arg(long, default_value = DEFAULT_STATE_PATH)]
        state: String,
    },
    /// Drop a player from the following rounds, or undo a drop.
    Drop {
        name: String,
        /// Path to the session file.
        #[arg(long, default_value = DEFAULT_STATE_PATH)]
        state: String,
    },
    /// Add a player from the next round on.
    Join {
        name: String,
        /// Path to the session file.
        #[arg(long, default_value = DEFAULT_STATE_PATH)]
        state: String,
    },
    /// Generate the next round.
    Next {
        /// Path to the session file.
        #[arg(long, default_value = DEFAULT_STATE_PATH)]
        state: String,
        /// Seed for the random number generator. By default, a random seed is used.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the current round.
    Show {
        /// Path to the session file.
        #[arg(long, default_value = DEFAULT_STATE_PATH)]
        state: String,
        /// Print every retained round, oldest first.
        #[arg(long)]
        all: bool,
        /// Which output format to use.
        #[arg(long, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Start {
            roster,
            state,
            seed,
            config,
        } => {
            let config = match config {
                Some(path) => PlannerConfig::from_toml(&fs::read_to_string(path)?)?,
                None => PlannerConfig::default(),
            };
            let roster = read_roster(roster.as_deref())?;
            let round = start_game(Path::new(&state), &roster, seed_or_random(seed)?, config)?;
            print!("{}", render_round(&round));
            Ok(())
        }
        Command::Winner { group, name, state } => {
            record_winner(Path::new(&state), group, name.as_deref())
        }
        Command::Drop { name, state } => {
            if toggle_drop(Path::new(&state), &name)? {
                println!("{name} will sit out from the next round.");
            } else {
                println!("{name} is back in.");
            }
            Ok(())
        }
        Command::Join { name, state } => {
            let joiners = join(Path::new(&state), &name)?;
            println!("Joining next round: {}", joiners.join(", "));
            Ok(())
        }
        Command::Next { state, seed } => {
            let round = next_round(Path::new(&state), seed_or_random(seed)?)?;
            print!("{}", render_round(&round));
            Ok(())
        }
        Command::Show { state, all, format } => {
            let rounds = stored_rounds(Path::new(&state), all)?;
            println!("{}", render_rounds(&rounds, format)?);
            Ok(())
        }
    }
}
