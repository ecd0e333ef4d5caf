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

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;
use podshuffle_core::error::Fallible;
use podshuffle_core::types::round::Round;

#[derive(ValueEnum, Clone, Copy, PartialEq, Debug)]
pub enum OutputFormat {
    /// One line per group.
    Text,
    /// The rounds as JSON.
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn render_rounds(rounds: &[Round], format: OutputFormat) -> Fallible<String> {
    match format {
        OutputFormat::Text => Ok(rounds
            .iter()
            .map(render_round)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rounds)?),
    }
}

/// Render a round as text, numbering groups from 1.
pub fn render_round(round: &Round) -> String {
    let mut out = format!("{}\n", round.label);
    for (index, group) in round.groups.iter().enumerate() {
        out.push_str(&format!("  Group {}: {}", index + 1, group.join(", ")));
        if let Some(Some(winner)) = round.winners.get(index) {
            out.push_str(&format!(" (winner: {winner})"));
        }
        out.push('\n');
    }
    if !round.dropped_names.is_empty() {
        out.push_str(&format!("  Dropped: {}\n", round.dropped_names.join(", ")));
    }
    out
}
