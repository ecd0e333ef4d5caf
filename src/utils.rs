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
use std::io::Read;
use std::io::stdin;

use podshuffle_core::error::ErrorReport;
use podshuffle_core::error::Fallible;

/// Use the given seed, or draw one from the operating system.
pub fn seed_or_random(seed: Option<u64>) -> Fallible<u64> {
    if let Some(seed) = seed {
        return Ok(seed);
    }
    let mut bytes = [0u8; 8];
    getrandom::getrandom(&mut bytes)
        .map_err(|e| ErrorReport::new(format!("failed to gather entropy: {e}")))?;
    Ok(u64::from_le_bytes(bytes))
}

/// Read the roster from a file, or from stdin when no path (or `-`) is given.
pub fn read_roster(path: Option<&str>) -> Fallible<String> {
    match path {
        None | Some("-") => {
            let mut text = String::new();
            stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        Some(path) => Ok(fs::read_to_string(path)?),
    }
}
