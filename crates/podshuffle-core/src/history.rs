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

use crate::types::aliases::Group;
use crate::types::aliases::Name;

/// An unordered pair of participants who shared a group.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair(Name, Name);

impl Pair {
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Pair(a.to_string(), b.to_string())
        } else {
            Pair(b.to_string(), a.to_string())
        }
    }
}

/// Every unordered pair of distinct members that shared a group.
pub fn pairs_of(groups: &[Group]) -> HashSet<Pair> {
    let mut pairs = HashSet::new();
    for group in groups {
        for (i, a) in group.iter().enumerate() {
            for b in &group[i + 1..] {
                if a != b {
                    pairs.insert(Pair::new(a, b));
                }
            }
        }
    }
    pairs
}

/// The members of every group of exactly three.
pub fn names_in_three_groups(groups: &[Group]) -> HashSet<Name> {
    groups
        .iter()
        .filter(|group| group.len() == 3)
        .flatten()
        .cloned()
        .collect()
}

/// How much a candidate grouping repeats the previous round. Compared
/// lexicographically: repeated pairs first, then repeated short groups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RepeatScore {
    pub pairs: usize,
    pub three_groups: usize,
}

impl RepeatScore {
    pub const PERFECT: RepeatScore = RepeatScore {
        pairs: 0,
        three_groups: 0,
    };

    pub fn against(
        candidate: &[Group],
        previous_pairs: &HashSet<Pair>,
        previous_threes: &HashSet<Name>,
    ) -> Self {
        let pairs = pairs_of(candidate)
            .iter()
            .filter(|pair| previous_pairs.contains(*pair))
            .count();
        let three_groups = names_in_three_groups(candidate)
            .iter()
            .filter(|name| previous_threes.contains(*name))
            .count();
        RepeatScore {
            pairs,
            three_groups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(names: &[&str]) -> Group {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn name_set(names: &[&str]) -> HashSet<Name> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pair_is_unordered() {
        assert_eq!(Pair::new("bob", "alice"), Pair::new("alice", "bob"));
    }

    #[test]
    fn test_pairs_of_single_group() {
        let pairs = pairs_of(&[group(&["a", "b", "c"])]);
        let expected: HashSet<Pair> = [
            Pair::new("a", "b"),
            Pair::new("a", "c"),
            Pair::new("b", "c"),
        ]
        .into_iter()
        .collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_pairs_do_not_cross_groups() {
        let pairs = pairs_of(&[group(&["a", "b", "c"]), group(&["d", "e", "f", "g"])]);
        assert_eq!(pairs.len(), 3 + 6);
        assert!(!pairs.contains(&Pair::new("c", "d")));
    }

    #[test]
    fn test_names_in_three_groups() {
        let names = names_in_three_groups(&[group(&["a", "b", "c"]), group(&["d", "e", "f", "g"])]);
        assert_eq!(names, name_set(&["a", "b", "c"]));
    }

    #[test]
    fn test_score_counts_repeats() {
        let previous = [group(&["a", "b", "c"]), group(&["d", "e", "f", "g"])];
        let previous_pairs = pairs_of(&previous);
        let previous_threes = names_in_three_groups(&previous);

        let candidate = [group(&["a", "b", "d", "e"]), group(&["c", "f", "g"])];
        let score = RepeatScore::against(&candidate, &previous_pairs, &previous_threes);
        // a-b, d-e and f-g again; c is short-handed twice.
        assert_eq!(
            score,
            RepeatScore {
                pairs: 3,
                three_groups: 1
            }
        );
    }

    #[test]
    fn test_scores_order_pairs_first() {
        let fewer_pairs = RepeatScore {
            pairs: 1,
            three_groups: 9,
        };
        let more_pairs = RepeatScore {
            pairs: 2,
            three_groups: 0,
        };
        assert!(fewer_pairs < more_pairs);
        assert!(RepeatScore::PERFECT < fewer_pairs);
    }
}
