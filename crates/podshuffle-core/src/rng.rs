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

/// A source of random numbers. Everything that shuffles takes one of these
/// explicitly, so tests can run against a fixed seed.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    // Generate random number in range [0, max).
    fn generate(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// A minimal, zero-dependency, completely insecure PRNG to shuffle players.
#[derive(Clone, Debug)]
pub struct TinyRng {
    state: u64,
}

const A: u64 = 6364136223846793005;
const C: u64 = 1442695040888963407;

impl TinyRng {
    /// Initialize the RNG from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl RandomSource for TinyRng {
    fn next_u32(&mut self) -> u32 {
        let new = self.state.wrapping_mul(A).wrapping_add(C);
        self.state = new;
        (new >> 32) as u32
    }
}

/// Fisher-Yates shuffle. Walks from the last index down to 1, swapping each
/// position with a uniformly chosen index at or before it.
pub fn shuffle<T>(v: Vec<T>, rng: &mut impl RandomSource) -> Vec<T> {
    let mut v = v;
    for i in (1..v.len()).rev() {
        let j = rng.generate(i as u32 + 1) as usize;
        v.swap(i, j);
    }
    v
}
