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

//! WASM bindings for podshuffle - runs the pod randomizer in the browser.

use wasm_bindgen::prelude::*;
use web_sys::console;

use podshuffle_core::config::PlannerConfig;
use podshuffle_core::error::GroupingError;
use podshuffle_core::rng::TinyRng;
use podshuffle_core::session::Session;
use podshuffle_core::types::round::Round;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console::log_1(&"podshuffle WASM initialized".into());
}

/// The game state managed from JavaScript.
#[wasm_bindgen]
pub struct PodApp {
    /// Rounds, drops and joiners
    session: Session,
    /// Random source for every shuffle
    rng: TinyRng,
}

#[wasm_bindgen]
impl PodApp {
    /// Create a new PodApp instance with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: Session::new(PlannerConfig::default()),
            rng: TinyRng::from_seed(random_seed()),
        }
    }

    /// Replace the configuration with one parsed from TOML. Clears the game.
    #[wasm_bindgen]
    pub fn set_config(&mut self, toml: &str) -> Result<(), JsValue> {
        let config = PlannerConfig::from_toml(toml)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?;
        self.session = Session::new(config);
        Ok(())
    }

    /// Start a game from newline- or comma-separated names.
    /// Returns the first round as JSON.
    #[wasm_bindgen]
    pub fn randomize(&mut self, raw: &str) -> Result<String, JsValue> {
        let round = self.session.randomize(raw, &mut self.rng).map_err(to_js)?;
        round_json(round)
    }

    /// Record the winner of a group in the current round.
    /// Passing no name clears the selection.
    #[wasm_bindgen]
    pub fn select_winner(&mut self, group_index: usize, name: Option<String>) -> Result<(), JsValue> {
        self.session
            .select_winner(group_index, name.as_deref())
            .map_err(to_js)
    }

    /// Toggle whether a player sits out the following rounds.
    /// Returns whether the player is now dropped.
    #[wasm_bindgen]
    pub fn toggle_drop(&mut self, name: &str) -> Result<bool, JsValue> {
        self.session.toggle_drop(name).map_err(to_js)
    }

    /// Check whether a player is marked as dropped.
    #[wasm_bindgen]
    pub fn is_dropped(&self, name: &str) -> bool {
        self.session.dropped().contains(name)
    }

    /// Queue a player to join from the next round.
    #[wasm_bindgen]
    pub fn add_participant(&mut self, name: &str) -> Result<(), JsValue> {
        self.session.add_participant(name).map_err(to_js)
    }

    /// Generate the next round. Returns it as JSON.
    #[wasm_bindgen]
    pub fn new_round(&mut self) -> Result<String, JsValue> {
        let round = self.session.new_round(&mut self.rng).map_err(to_js)?;
        round_json(round)
    }

    /// Get the number of retained rounds.
    #[wasm_bindgen]
    pub fn round_count(&self) -> usize {
        self.session.rounds().len()
    }

    /// Get the retained rounds, oldest first, as JSON.
    #[wasm_bindgen]
    pub fn rounds_json(&self) -> String {
        serde_json::to_string(self.session.rounds()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get the current round as JSON, or null before the game starts.
    #[wasm_bindgen]
    pub fn current_round_json(&self) -> String {
        serde_json::to_string(&self.session.current_round()).unwrap_or_else(|_| "null".to_string())
    }

    /// Export the whole session as JSON.
    #[wasm_bindgen]
    pub fn export_session(&self) -> String {
        serde_json::to_string(&self.session).unwrap_or_else(|_| "{}".to_string())
    }

    /// Import a session previously produced by `export_session`.
    #[wasm_bindgen]
    pub fn import_session(&mut self, json: &str) -> Result<(), JsValue> {
        let session: Session = serde_json::from_str(json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse session data: {}", e)))?;
        session
            .config()
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.session = session;
        Ok(())
    }
}

impl Default for PodApp {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js(error: GroupingError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn round_json(round: &Round) -> Result<String, JsValue> {
    serde_json::to_string(round)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize round: {}", e)))
}

/// Seed from the platform's entropy source, or the clock if that is missing.
fn random_seed() -> u64 {
    let mut bytes = [0u8; 8];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => u64::from_le_bytes(bytes),
        Err(_) => js_sys::Date::now() as u64,
    }
}
