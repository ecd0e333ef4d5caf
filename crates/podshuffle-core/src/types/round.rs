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

use serde::Deserialize;
use serde::Serialize;

use crate::types::aliases::Group;
use crate::types::aliases::Name;

/// One complete assignment of the active participants into groups, plus the
/// winners recorded for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Position of this round in the game, starting at 1. Keeps counting
    /// after old rounds are discarded from the history.
    pub number: usize,
    pub label: String,
    pub groups: Vec<Group>,
    /// The winner of each group, indexed like `groups`.
    pub winners: Vec<Option<Name>>,
    /// Participants who dropped out before this round was generated.
    #[serde(default)]
    pub dropped_names: Vec<Name>,
}

impl Round {
    pub fn new(number: usize, groups: Vec<Group>, dropped_names: Vec<Name>) -> Self {
        let winners = vec![None; groups.len()];
        Self {
            number,
            label: format!("Round {number}"),
            groups,
            winners,
            dropped_names,
        }
    }

    /// Every participant in this round, in group order.
    pub fn participants(&self) -> Vec<Name> {
        self.groups.iter().flatten().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.groups.iter().flatten().any(|member| member == name)
    }

    /// The distinct winners selected so far, in group order.
    pub fn winner_names(&self) -> Vec<Name> {
        let mut names: Vec<Name> = Vec::new();
        for name in self.winners.iter().flatten() {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
        names
    }
}
