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

use std::collections::HashSet;

use crate::error::GroupingError;
use crate::types::aliases::Name;

/// Split raw text on newlines and commas into trimmed, non-empty names.
pub fn parse_roster(raw: &str) -> Vec<Name> {
    raw.split(['\n', ','])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// A roster needs at least three names, each appearing once.
pub fn validate_roster(names: &[Name]) -> Result<(), GroupingError> {
    if names.len() < 3 {
        return Err(GroupingError::InvalidRosterSize(names.len()));
    }
    let mut seen: HashSet<&str> = HashSet::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(GroupingError::DuplicateParticipant(name.clone()));
        }
    }
    Ok(())
}
