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

//! podshuffle-core: Core library for the podshuffle pod randomizer.
//!
//! This library provides WASM-compatible types and algorithms for:
//! - Splitting a roster into balanced groups of 3 and 4
//! - Grouping a round's winners together in the next round
//! - Searching for groupings that avoid repeating the previous round's pairings
//! - Tracking a bounded round history with drops and late joiners

pub mod config;
pub mod error;
pub mod history;
pub mod partition;
pub mod planner;
pub mod rng;
pub mod roster;
pub mod session;
pub mod types;
pub mod winners;

// Re-exports for convenience
pub use config::PlannerConfig;
pub use error::{ErrorReport, Fallible, GroupingError, fail};
pub use rng::{RandomSource, TinyRng, shuffle};
pub use session::Session;
pub use types::aliases::{Group, Name};
pub use types::round::Round;
