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

use std::collections::VecDeque;

use crate::rng::RandomSource;
use crate::rng::shuffle;
use crate::types::aliases::Group;
use crate::types::aliases::Name;

/// Groups built from the previous round's winners, and the players left over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinnerGrouping {
    pub winner_groups: Vec<Group>,
    pub rest: Vec<Name>,
}

/// Put winners together in groups of 4. When the winners don't divide evenly,
/// the last group is topped up to 4 from `rest`, or as far as `rest` allows.
pub fn group_winners_as_fours(
    winners: Vec<Name>,
    rest: Vec<Name>,
    rng: &mut impl RandomSource,
) -> WinnerGrouping {
    group_winners(winners, rest, 4, rng)
}

/// Like [`group_winners_as_fours`], but a trailing remainder of winners is
/// only padded to 3, so fewer players are taken from `rest`.
pub fn group_winners_allowing_threes(
    winners: Vec<Name>,
    rest: Vec<Name>,
    rng: &mut impl RandomSource,
) -> WinnerGrouping {
    group_winners(winners, rest, 3, rng)
}

fn group_winners(
    winners: Vec<Name>,
    rest: Vec<Name>,
    pad_to: usize,
    rng: &mut impl RandomSource,
) -> WinnerGrouping {
    let winners = shuffle(winners, rng);
    let mut rest: VecDeque<Name> = shuffle(rest, rng).into();

    let mut winner_groups: Vec<Group> = Vec::with_capacity(winners.len().div_ceil(4));
    for chunk in winners.chunks(4) {
        let mut group: Group = chunk.to_vec();
        if group.len() < 4 {
            while group.len() < pad_to {
                match rest.pop_front() {
                    Some(name) => group.push(name),
                    None => break,
                }
            }
        }
        winner_groups.push(group);
    }

    WinnerGrouping {
        winner_groups,
        rest: rest.into(),
    }
}
