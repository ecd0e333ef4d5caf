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

use podshuffle_core::error::Fallible;
use podshuffle_core::error::fail;
use podshuffle_core::session::Session;

/// Default location of the session file, relative to the working directory.
pub const DEFAULT_STATE_PATH: &str = "podshuffle.json";

/// Read a session saved by a previous command.
pub fn load_session(path: &Path) -> Fallible<Session> {
    if !path.exists() {
        return fail(format!(
            "no session found at {}. Start one with `podshuffle start`.",
            path.display()
        ));
    }
    let text = fs::read_to_string(path)?;
    let session: Session = serde_json::from_str(&text)?;
    session.config().validate()?;
    log::debug!(
        "Loaded session with {} rounds from {}",
        session.rounds().len(),
        path.display()
    );
    Ok(session)
}

/// Write the session, replacing the file's previous contents.
pub fn save_session(path: &Path, session: &Session) -> Fallible<()> {
    let text = serde_json::to_string_pretty(session)?;
    fs::write(path, text)?;
    log::debug!("Saved session to {}", path.display());
    Ok(())
}
