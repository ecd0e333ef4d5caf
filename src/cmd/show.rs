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

use podshuffle_core::error::Fallible;
use podshuffle_core::types::round::Round;

use crate::state::load_session;

/// The current round, or with `all`, every retained round.
pub fn stored_rounds(state: &Path, all: bool) -> Fallible<Vec<Round>> {
    let session = load_session(state)?;
    let rounds = session.rounds();
    if all {
        Ok(rounds.to_vec())
    } else {
        Ok(rounds.last().cloned().into_iter().collect())
    }
}
