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

use crate::error::Fallible;
use crate::error::fail;

/// Default number of shuffles tried when searching for a low-repeat grouping.
pub const DEFAULT_MAX_TRIALS: usize = 1000;

/// Default number of rounds kept in the history.
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// Tunables for round generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Upper bound on shuffles tried when no winners were recorded. The
    /// search is a heuristic: it keeps the best grouping found within this
    /// budget.
    pub max_trials: usize,
    /// How many of the most recent rounds to retain.
    pub history_limit: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_trials: DEFAULT_MAX_TRIALS,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl PlannerConfig {
    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml(text: &str) -> Fallible<Self> {
        let config: PlannerConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Fallible<()> {
        if self.max_trials == 0 {
            return fail("max_trials must be at least 1");
        }
        if self.history_limit == 0 {
            return fail("history_limit must be at least 1");
        }
        Ok(())
    }
}
