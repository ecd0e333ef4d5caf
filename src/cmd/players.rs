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
use podshuffle_core::error::fail;
use podshuffle_core::types::aliases::Name;

use crate::state::load_session;
use crate::state::save_session;

/// Set or clear the winner of a group. `group` counts from 1.
pub fn record_winner(state: &Path, group: usize, name: Option<&str>) -> Fallible<()> {
    if group == 0 {
        return fail("groups are numbered from 1");
    }
    let mut session = load_session(state)?;
    session.select_winner(group - 1, name)?;
    save_session(state, &session)
}

/// Toggle a drop. Returns whether the player is now dropped.
pub fn toggle_drop(state: &Path, name: &str) -> Fallible<bool> {
    let mut session = load_session(state)?;
    let dropped = session.toggle_drop(name)?;
    save_session(state, &session)?;
    Ok(dropped)
}

/// Queue a late joiner for the next round. Returns everyone queued so far.
pub fn join(state: &Path, name: &str) -> Fallible<Vec<Name>> {
    let mut session = load_session(state)?;
    session.add_participant(name)?;
    save_session(state, &session)?;
    Ok(session.joiners().to_vec())
}
