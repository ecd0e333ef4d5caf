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

use std::collections::HashMap;
use std::collections::HashSet;

use crate::error::GroupingError;
use crate::history::RepeatScore;
use crate::history::names_in_three_groups;
use crate::history::pairs_of;
use crate::partition::partition;
use crate::rng::RandomSource;
use crate::rng::shuffle;
use crate::roster::validate_roster;
use crate::types::aliases::Group;
use crate::types::aliases::Name;
use crate::winners::WinnerGrouping;
use crate::winners::group_winners_allowing_threes;
use crate::winners::group_winners_as_fours;

/// The smallest and largest group sizes allowed in a committed round.
const MIN_GROUP: usize = 3;
const MAX_GROUP: usize = 5;

/// Groups of 5 only appear when the whole roster is 5.
const FULL_GROUP: usize = 4;
const LONE_FIVE: usize = 5;

/// Shuffle and split the opening roster.
pub fn first_round_groups(
    names: Vec<Name>,
    rng: &mut impl RandomSource,
) -> Result<Vec<Group>, GroupingError> {
    validate_roster(&names)?;
    let groups = partition(shuffle(names.clone(), rng))?;
    check_roster_integrity(&names, &groups)?;
    Ok(groups)
}

/// Build the groups for the round after `previous`.
///
/// With winners, the winners are grouped together and placed first. Without
/// them, a bounded search looks for the grouping that repeats the fewest
/// pairings (and short groups) from `previous`.
pub fn plan_next_groups(
    roster: &[Name],
    winners: &[Name],
    previous: &[Group],
    max_trials: usize,
    rng: &mut impl RandomSource,
) -> Result<Vec<Group>, GroupingError> {
    validate_roster(roster)?;
    let winners: Vec<Name> = winners
        .iter()
        .filter(|name| roster.contains(*name))
        .cloned()
        .collect();
    let groups = if winners.is_empty() {
        search_least_repeats(roster, previous, max_trials, rng)?.groups
    } else {
        plan_with_winners(roster, winners, rng)?
    };
    check_roster_integrity(roster, &groups)?;
    Ok(groups)
}

fn plan_with_winners(
    roster: &[Name],
    winners: Vec<Name>,
    rng: &mut impl RandomSource,
) -> Result<Vec<Group>, GroupingError> {
    let rest: Vec<Name> = roster
        .iter()
        .filter(|name| !winners.contains(*name))
        .cloned()
        .collect();

    let fours = group_winners_as_fours(winners.clone(), rest.clone(), rng);
    if let Some(groups) = assemble(roster, fours.clone()) {
        return Ok(groups);
    }

    log::debug!("Winner groups of four leave an invalid remainder, trying groups of three");
    let threes = group_winners_allowing_threes(winners, rest, rng);
    if let Some(groups) = assemble(roster, threes) {
        return Ok(groups);
    }

    // Winners lead the list, so a contiguous split still puts them first.
    log::debug!("Re-splitting winners and remaining players contiguously");
    let WinnerGrouping {
        winner_groups,
        rest,
    } = fours;
    let ordered: Vec<Name> = winner_groups.into_iter().flatten().chain(rest).collect();
    partition(ordered)
}

/// Winner groups followed by the partitioned rest, if that is a valid round.
fn assemble(roster: &[Name], grouping: WinnerGrouping) -> Option<Vec<Group>> {
    let WinnerGrouping {
        mut winner_groups,
        rest,
    } = grouping;
    let rest_groups = partition(rest).ok()?;
    winner_groups.extend(rest_groups);
    check_roster_integrity(roster, &winner_groups).ok()?;
    let max_size = if roster.len() == LONE_FIVE {
        LONE_FIVE
    } else {
        FULL_GROUP
    };
    if winner_groups.iter().any(|group| group.len() > max_size) {
        return None;
    }
    Some(winner_groups)
}

/// The best grouping found by the search, how it scored, and how many
/// shuffles it took.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub groups: Vec<Group>,
    pub score: RepeatScore,
    pub trials: usize,
}

/// Try up to `max_trials` shuffles of `roster`, keeping the grouping that
/// repeats the fewest pairs from `previous`, breaking ties on players who
/// were in a group of three last time. Stops at the first grouping with no
/// repeats at all.
pub fn search_least_repeats(
    roster: &[Name],
    previous: &[Group],
    max_trials: usize,
    rng: &mut impl RandomSource,
) -> Result<SearchOutcome, GroupingError> {
    let previous_pairs = pairs_of(previous);
    let previous_threes = names_in_three_groups(previous);

    let mut best_groups = partition(shuffle(roster.to_vec(), rng))?;
    let mut best_score = RepeatScore::against(&best_groups, &previous_pairs, &previous_threes);
    let mut trials = 1;
    while best_score != RepeatScore::PERFECT && trials < max_trials {
        trials += 1;
        let candidate = partition(shuffle(roster.to_vec(), rng))?;
        let score = RepeatScore::against(&candidate, &previous_pairs, &previous_threes);
        if score < best_score {
            best_groups = candidate;
            best_score = score;
        }
    }

    log::debug!(
        "Search finished after {trials} trials: {} repeated pairs, {} repeated short groups",
        best_score.pairs,
        best_score.three_groups
    );
    Ok(SearchOutcome {
        groups: best_groups,
        score: best_score,
        trials,
    })
}

/// Check that `groups` contain every name in `roster` exactly once, nothing
/// else, and that every group has between 3 and 5 members.
pub fn check_roster_integrity(roster: &[Name], groups: &[Group]) -> Result<(), GroupingError> {
    let expected: HashSet<&str> = roster.iter().map(String::as_str).collect();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in groups.iter().flatten() {
        *counts.entry(name.as_str()).or_default() += 1;
    }

    let mut missing: Vec<Name> = expected
        .iter()
        .filter(|name| !counts.contains_key(*name))
        .map(|name| name.to_string())
        .collect();
    let mut duplicated: Vec<Name> = counts
        .iter()
        .filter(|(_, count)| **count > 1)
        .map(|(name, _)| name.to_string())
        .collect();
    let mut unexpected: Vec<Name> = counts
        .keys()
        .filter(|name| !expected.contains(*name))
        .map(|name| name.to_string())
        .collect();
    if !(missing.is_empty() && duplicated.is_empty() && unexpected.is_empty()) {
        missing.sort();
        duplicated.sort();
        unexpected.sort();
        return Err(GroupingError::RosterIntegrity {
            missing,
            duplicated,
            unexpected,
        });
    }

    for (index, group) in groups.iter().enumerate() {
        if !(MIN_GROUP..=MAX_GROUP).contains(&group.len()) {
            return Err(GroupingError::MalformedGroup {
                index,
                size: group.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::TinyRng;

    fn names(prefix: &str, n: usize) -> Vec<Name> {
        (0..n).map(|i| format!("{prefix}{i}")).collect()
    }

    fn group(names: &[&str]) -> Group {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn sizes(groups: &[Group]) -> Vec<usize> {
        groups.iter().map(|g| g.len()).collect()
    }

    /// Every group holding a winner comes before every group without one.
    fn winners_lead(groups: &[Group], winners: &[Name]) -> bool {
        let has_winner: Vec<bool> = groups
            .iter()
            .map(|g| g.iter().any(|name| winners.contains(name)))
            .collect();
        let leading = has_winner.iter().take_while(|w| **w).count();
        has_winner[leading..].iter().all(|w| !w)
    }

    #[test]
    fn test_first_round() -> Result<(), GroupingError> {
        let mut rng = TinyRng::from_seed(1);
        let roster = names("p", 10);
        let groups = first_round_groups(roster.clone(), &mut rng)?;
        assert_eq!(sizes(&groups), vec![4, 3, 3]);
        check_roster_integrity(&roster, &groups)
    }

    #[test]
    fn test_first_round_rejects_two() {
        let mut rng = TinyRng::from_seed(1);
        assert_eq!(
            first_round_groups(names("p", 2), &mut rng),
            Err(GroupingError::InvalidRosterSize(2))
        );
    }

    #[test]
    fn test_winner_groups_come_first() -> Result<(), GroupingError> {
        let mut rng = TinyRng::from_seed(2);
        let roster = names("p", 13);
        let winners = vec!["p3".to_string(), "p7".to_string(), "p11".to_string()];
        let groups = plan_next_groups(&roster, &winners, &[], 1000, &mut rng)?;
        assert_eq!(sizes(&groups), vec![4, 3, 3, 3]);
        for winner in &winners {
            assert!(groups[0].contains(winner));
        }
        Ok(())
    }

    #[test]
    fn test_winners_that_fill_groups_exactly() -> Result<(), GroupingError> {
        let mut rng = TinyRng::from_seed(2);
        let roster = names("p", 12);
        let winners = names("p", 8);
        let groups = plan_next_groups(&roster, &winners, &[], 1000, &mut rng)?;
        assert_eq!(sizes(&groups), vec![4, 4, 4]);
        for group in &groups[..2] {
            assert!(group.iter().all(|name| winners.contains(name)));
        }
        assert!(groups[2].iter().all(|name| !winners.contains(name)));
        Ok(())
    }

    #[test]
    fn test_winner_remainder_falls_back_to_contiguous_split() -> Result<(), GroupingError> {
        let mut rng = TinyRng::from_seed(3);
        let roster = names("p", 6);
        let winners = names("p", 5);
        let groups = plan_next_groups(&roster, &winners, &[], 1000, &mut rng)?;
        assert_eq!(sizes(&groups), vec![3, 3]);
        assert!(groups[0].iter().all(|name| winners.contains(name)));
        Ok(())
    }

    #[test]
    fn test_winners_in_small_roster() -> Result<(), GroupingError> {
        let mut rng = TinyRng::from_seed(4);
        let roster = names("p", 5);
        let winners = names("p", 2);
        let groups = plan_next_groups(&roster, &winners, &[], 1000, &mut rng)?;
        assert_eq!(sizes(&groups), vec![5]);
        Ok(())
    }

    #[test]
    fn test_five_leftover_players_split_into_threes() -> Result<(), GroupingError> {
        let roster = names("p", 9);
        for seed in 0..50 {
            for w in 1..=2 {
                let mut rng = TinyRng::from_seed(seed);
                let winners = roster[..w].to_vec();
                let groups = plan_next_groups(&roster, &winners, &[], 1000, &mut rng)?;
                assert_eq!(sizes(&groups), vec![3, 3, 3], "seed = {seed}, w = {w}");
                for winner in &winners {
                    assert!(groups[0].contains(winner));
                }
            }
            for w in 3..=4 {
                let mut rng = TinyRng::from_seed(seed);
                let winners = roster[..w].to_vec();
                let groups = plan_next_groups(&roster, &winners, &[], 1000, &mut rng)?;
                assert!(groups.iter().all(|g| g.len() == 3 || g.len() == 4));
                assert!(winners_lead(&groups, &winners), "seed = {seed}, w = {w}");
            }
        }
        Ok(())
    }

    #[test]
    fn test_every_roster_and_winner_count() -> Result<(), GroupingError> {
        let mut rng = TinyRng::from_seed(5);
        for n in 3..=30 {
            let roster = names("p", n);
            for w in 0..=n {
                let winners = roster[..w].to_vec();
                let groups = plan_next_groups(&roster, &winners, &[], 10, &mut rng)?;
                check_roster_integrity(&roster, &groups)?;
                if n != 5 {
                    assert!(
                        groups.iter().all(|g| g.len() == 3 || g.len() == 4),
                        "n = {n}, w = {w}, sizes = {:?}",
                        sizes(&groups)
                    );
                }
                assert!(winners_lead(&groups, &winners), "n = {n}, w = {w}");
            }
        }
        Ok(())
    }

    #[test]
    fn test_unknown_winners_are_ignored() -> Result<(), GroupingError> {
        let mut rng = TinyRng::from_seed(6);
        let roster = names("p", 8);
        let winners = vec!["ghost".to_string()];
        let groups = plan_next_groups(&roster, &winners, &[], 50, &mut rng)?;
        check_roster_integrity(&roster, &groups)
    }

    #[test]
    fn test_search_without_history_stops_at_once() -> Result<(), GroupingError> {
        let mut rng = TinyRng::from_seed(7);
        let outcome = search_least_repeats(&names("p", 11), &[], 1000, &mut rng)?;
        assert_eq!(outcome.trials, 1);
        assert_eq!(outcome.score, RepeatScore::PERFECT);
        Ok(())
    }

    #[test]
    fn test_search_stops_early_on_perfect_grouping() -> Result<(), GroupingError> {
        let mut rng = TinyRng::from_seed(8);
        let roster = names("p", 16);
        let previous = vec![group(&["p0", "p1", "p2", "p3"])];
        let outcome = search_least_repeats(&roster, &previous, 1000, &mut rng)?;
        assert_eq!(outcome.score, RepeatScore::PERFECT);
        assert!(outcome.trials < 1000);
        for group in &outcome.groups {
            let old_members = group
                .iter()
                .filter(|name| previous[0].contains(*name))
                .count();
            assert!(old_members <= 1);
        }
        Ok(())
    }

    #[test]
    fn test_search_uses_whole_budget_when_repeats_are_unavoidable() -> Result<(), GroupingError> {
        let mut rng = TinyRng::from_seed(9);
        let roster = names("p", 4);
        let previous = vec![roster.clone()];
        let outcome = search_least_repeats(&roster, &previous, 1000, &mut rng)?;
        assert_eq!(outcome.trials, 1000);
        assert_eq!(
            outcome.score,
            RepeatScore {
                pairs: 6,
                three_groups: 0
            }
        );
        Ok(())
    }

    #[test]
    fn test_search_prefers_fewer_repeats() -> Result<(), GroupingError> {
        let mut rng = TinyRng::from_seed(10);
        let roster = names("p", 8);
        let previous = vec![names("p", 4), roster[4..].to_vec()];
        let outcome = search_least_repeats(&roster, &previous, 1000, &mut rng)?;
        // Two groups of four drawn from two old groups of four share at
        // least two pairs each way.
        assert_eq!(outcome.score.pairs, 4);
        Ok(())
    }

    #[test]
    fn test_integrity_detects_missing_name() {
        let roster = names("p", 7);
        let groups = vec![
            group(&["p0", "p1", "p2", "p3"]),
            group(&["p4", "p5", "p5"]),
        ];
        assert_eq!(
            check_roster_integrity(&roster, &groups),
            Err(GroupingError::RosterIntegrity {
                missing: vec!["p6".to_string()],
                duplicated: vec!["p5".to_string()],
                unexpected: vec![],
            })
        );
    }

    #[test]
    fn test_integrity_detects_stranger() {
        let roster = names("p", 3);
        let groups = vec![group(&["p0", "p1", "p2", "eve"])];
        assert_eq!(
            check_roster_integrity(&roster, &groups),
            Err(GroupingError::RosterIntegrity {
                missing: vec![],
                duplicated: vec![],
                unexpected: vec!["eve".to_string()],
            })
        );
    }

    #[test]
    fn test_integrity_detects_undersized_group() {
        let roster = names("p", 6);
        let groups = vec![group(&["p0", "p1", "p2", "p3"]), group(&["p4", "p5"])];
        assert_eq!(
            check_roster_integrity(&roster, &groups),
            Err(GroupingError::MalformedGroup { index: 1, size: 2 })
        );
    }
}
