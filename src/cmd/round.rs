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

use std::path::Path;

use podshuffle_core::config::PlannerConfig;
use podshuffle_core::error::Fallible;
use podshuffle_core::rng::TinyRng;
use podshuffle_core::session::Session;
use podshuffle_core::types::round::Round;

use crate::state::load_session;
use crate::state::save_session;

/// Start a new game from `roster` and save it, replacing any game already
/// stored at `state`.
pub fn start_game(state: &Path, roster: &str, seed: u64, config: PlannerConfig) -> Fallible<Round> {
    log::debug!("Starting game with seed {seed}");
    let mut rng = TinyRng::from_seed(seed);
    let mut session = Session::new(config);
    let round = session.randomize(roster, &mut rng)?.clone();
    save_session(state, &session)?;
    Ok(round)
}

/// Generate the next round of the stored game.
pub fn next_round(state: &Path, seed: u64) -> Fallible<Round> {
    log::debug!("Generating next round with seed {seed}");
    let mut session = load_session(state)?;
    let mut rng = TinyRng::from_seed(seed);
    let round = session.new_round(&mut rng)?.clone();
    save_session(state, &session)?;
    Ok(round)
}
