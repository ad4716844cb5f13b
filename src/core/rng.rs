//! RNG module - deterministic and live uniform sources
//!
//! `SeededRandom` is a Mulberry32 generator keyed by a string seed. Daily
//! challenges construct one from the shared seed so every player sees the same
//! letter/effect sequence. `LiveRandom` wraps the thread RNG for endless mode.
//! Both sides sit behind the `RandomSource` trait so spawn/effect logic runs
//! identically in either mode.

use std::fmt;

use rand::Rng;

/// Uniform random source driving every stochastic decision in the core.
///
/// Object-safe so the game state can own either generator behind one box.
pub trait RandomSource: fmt::Debug {
    /// Next value in [0, 1)
    fn next(&mut self) -> f64;

    /// Uniform integer in [min, max); returns `min` when the range is empty
    fn next_range(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        min + (self.next() * f64::from(max - min)) as u32
    }
}

/// Fisher-Yates shuffle driven by any `RandomSource`
pub fn shuffle_with<T>(rng: &mut dyn RandomSource, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.next_range(0, (i + 1) as u32) as usize;
        items.swap(i, j);
    }
}

/// Deterministic Mulberry32 generator keyed by a string seed
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    /// Create a new generator from a seed string
    pub fn new(seed: &str) -> Self {
        Self {
            state: hash_seed(seed),
        }
    }

    /// Current internal state (stable across identical call sequences)
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Uniform integer in [min, max)
    pub fn next_int(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        min + (self.next() * (max - min) as f64) as i64
    }

    /// Uniformly pick an element; `None` on an empty slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.next_int(0, items.len() as i64) as usize;
        Some(&items[idx])
    }

    /// In-place Fisher-Yates shuffle
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_int(0, i as i64 + 1) as usize;
            items.swap(i, j);
        }
    }
}

impl RandomSource for SeededRandom {
    fn next(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }
}

/// Fold a seed string into a non-zero 32-bit state.
///
/// An empty or all-cancelling seed maps to 1 so the generator never degenerates.
fn hash_seed(seed: &str) -> u32 {
    let mut hash: i32 = 0;
    for ch in seed.chars() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(ch as i32);
    }
    let state = hash.unsigned_abs();
    if state == 0 {
        1
    } else {
        state
    }
}

/// Live uniform source for endless mode (thread-local entropy)
pub struct LiveRandom {
    rng: rand::rngs::ThreadRng,
}

impl LiveRandom {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for LiveRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LiveRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveRandom").finish_non_exhaustive()
    }
}

impl RandomSource for LiveRandom {
    fn next(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}
