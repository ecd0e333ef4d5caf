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

use crate::error::GroupingError;

/// The preferred group size.
const FULL: usize = 4;

/// The smallest allowed group size.
const SHORT: usize = 3;

/// Split `items` into contiguous groups of 4, finishing with groups of 3
/// where `n` doesn't divide evenly. The split preserves order; shuffle
/// before calling.
///
/// - `n % 4 == 1`, `n >= 9`: fours, then 3 + 3 + 3.
/// - `n % 4 == 2`, `n >= 6`: fours, then 3 + 3.
/// - `n % 4 == 3`: fours, then a single 3.
/// - `n == 5`: a single group of 5.
///
/// Rosters of 1 or 2 cannot be split and are rejected. An empty input gives
/// no groups.
pub fn partition<T>(items: Vec<T>) -> Result<Vec<Vec<T>>, GroupingError> {
    let n = items.len();
    let trailing_threes = match n {
        0 => return Ok(Vec::new()),
        1 | 2 => return Err(GroupingError::InvalidRosterSize(n)),
        5 => return Ok(vec![items]),
        _ if n % FULL == 1 => 3,
        _ if n % FULL == 2 => 2,
        _ if n % FULL == 3 => 1,
        _ => 0,
    };
    let fours = (n - trailing_threes * SHORT) / FULL;

    let mut groups = Vec::with_capacity(fours + trailing_threes);
    let mut items = items.into_iter();
    for _ in 0..fours {
        groups.push(items.by_ref().take(FULL).collect());
    }
    for _ in 0..trailing_threes {
        groups.push(items.by_ref().take(SHORT).collect());
    }
    Ok(groups)
}
