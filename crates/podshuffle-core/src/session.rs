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

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::config::PlannerConfig;
use crate::error::GroupingError;
use crate::planner::check_roster_integrity;
use crate::planner::first_round_groups;
use crate::planner::plan_next_groups;
use crate::rng::RandomSource;
use crate::roster::parse_roster;
use crate::types::aliases::Name;
use crate::types::round::Round;

/// The state of one game: the retained round history, pending drops and
/// late joiners. Randomness is supplied by the caller on every operation
/// that needs it.
///
/// Calls against a single session must be serialized by the caller; separate
/// sessions share nothing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    config: PlannerConfig,
    rounds: Vec<Round>,
    dropped: BTreeSet<Name>,
    joiners: Vec<Name>,
}

impl Session {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// The retained rounds, oldest first.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    /// Players who will be left out of the next round.
    pub fn dropped(&self) -> &BTreeSet<Name> {
        &self.dropped
    }

    /// Players who will join at the next round.
    pub fn joiners(&self) -> &[Name] {
        &self.joiners
    }

    /// Start a new game from a newline- or comma-separated list of names.
    /// Any previous history is discarded.
    pub fn randomize(
        &mut self,
        raw: &str,
        rng: &mut impl RandomSource,
    ) -> Result<&Round, GroupingError> {
        let roster = parse_roster(raw);
        let groups = first_round_groups(roster.clone(), rng)?;
        let round = Round::new(1, groups, Vec::new());
        let mut fresh = Session::new(self.config);
        fresh.commit(&roster, round)?;
        *self = fresh;
        self.current_round().ok_or(GroupingError::NoRounds)
    }

    /// Record (or with `None`, clear) the winner of a group in the current
    /// round.
    pub fn select_winner(
        &mut self,
        group_index: usize,
        winner: Option<&str>,
    ) -> Result<(), GroupingError> {
        let round = self.rounds.last_mut().ok_or(GroupingError::NoRounds)?;
        let group = round
            .groups
            .get(group_index)
            .ok_or(GroupingError::GroupOutOfRange {
                index: group_index,
                groups: round.groups.len(),
            })?;
        if let Some(name) = winner {
            if !group.iter().any(|member| member == name) {
                return Err(GroupingError::NotInGroup {
                    name: name.to_string(),
                    index: group_index,
                });
            }
        }
        round.winners.resize(round.groups.len(), None);
        round.winners[group_index] = winner.map(str::to_string);
        Ok(())
    }

    /// Mark a player of the current round as dropped, or un-mark them.
    /// Returns whether the player is now dropped.
    pub fn toggle_drop(&mut self, name: &str) -> Result<bool, GroupingError> {
        let playing = self
            .current_round()
            .ok_or(GroupingError::NoRounds)?
            .contains(name);
        if self.dropped.remove(name) {
            return Ok(false);
        }
        if !playing {
            return Err(GroupingError::UnknownParticipant(name.to_string()));
        }
        self.dropped.insert(name.to_string());
        Ok(true)
    }

    /// Queue a late joiner for the next round.
    pub fn add_participant(&mut self, name: &str) -> Result<(), GroupingError> {
        let round = self.current_round().ok_or(GroupingError::NoRounds)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(GroupingError::EmptyName);
        }
        if round.contains(name) || self.joiners.iter().any(|joiner| joiner == name) {
            return Err(GroupingError::DuplicateParticipant(name.to_string()));
        }
        self.joiners.push(name.to_string());
        Ok(())
    }

    /// Generate the next round from the current one. On error nothing
    /// changes, and the current round stays current.
    pub fn new_round(&mut self, rng: &mut impl RandomSource) -> Result<&Round, GroupingError> {
        let last = self.current_round().ok_or(GroupingError::NoRounds)?;

        let mut dropped_names: Vec<Name> = Vec::new();
        let mut roster: Vec<Name> = Vec::new();
        for name in last.participants() {
            if self.dropped.contains(&name) {
                dropped_names.push(name);
            } else {
                roster.push(name);
            }
        }
        dropped_names.sort();
        roster.extend(self.joiners.iter().cloned());

        let winners: Vec<Name> = last
            .winner_names()
            .into_iter()
            .filter(|name| !self.dropped.contains(name))
            .collect();

        let groups = plan_next_groups(
            &roster,
            &winners,
            &last.groups,
            self.config.max_trials,
            rng,
        )?;
        let round = Round::new(last.number + 1, groups, dropped_names);
        self.commit(&roster, round)?;
        self.dropped.clear();
        self.joiners.clear();
        self.current_round().ok_or(GroupingError::NoRounds)
    }

    /// Append a round after checking it accounts for `roster` exactly, then
    /// trim the history to the configured length.
    pub(crate) fn commit(&mut self, roster: &[Name], round: Round) -> Result<(), GroupingError> {
        check_roster_integrity(roster, &round.groups)?;
        log::debug!(
            "Committing {} with {} groups for {} players",
            round.label,
            round.groups.len(),
            roster.len()
        );
        self.rounds.push(round);
        let limit = self.config.history_limit.max(1);
        if self.rounds.len() > limit {
            let excess = self.rounds.len() - limit;
            self.rounds.drain(..excess);
        }
        Ok(())
    }
}
