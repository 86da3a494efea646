//! Source of random draws for response composition.
//!
//! The composer never touches a global RNG. Production code hands it an
//! `RngSource` over a seeded `StdRng`; tests hand it `ScriptedChoices` so
//! every branch can be driven deterministically.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random draws used by the composer.
pub trait ChoiceSource: Send {
    /// A probability draw in `[0, 1)`.
    fn roll(&mut self) -> f64;

    /// An index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Adapter from any `rand` generator.
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    /// Non-deterministic source seeded from the OS.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl<R: Rng + Send> ChoiceSource for RngSource<R> {
    fn roll(&mut self) -> f64 {
        self.0.gen::<f64>()
    }

    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Replays fixed sequences of rolls and picks.
///
/// When a queue runs dry it keeps answering with the fallback: `1.0` for
/// rolls (every probability gate fails) and `0` for picks (first element).
#[derive(Debug, Default, Clone)]
pub struct ScriptedChoices {
    rolls: VecDeque<f64>,
    picks: VecDeque<usize>,
}

impl ScriptedChoices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rolls(mut self, rolls: &[f64]) -> Self {
        self.rolls.extend(rolls.iter().copied());
        self
    }

    pub fn with_picks(mut self, picks: &[usize]) -> Self {
        self.picks.extend(picks.iter().copied());
        self
    }

    /// Scripted rolls not consumed yet.
    #[cfg(test)]
    pub fn remaining_rolls(&self) -> usize {
        self.rolls.len()
    }
}

impl ChoiceSource for ScriptedChoices {
    fn roll(&mut self) -> f64 {
        self.rolls.pop_front().unwrap_or(1.0)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len
    }
}

/// Pick one element of a non-empty pool.
pub fn choose<'a>(source: &mut dyn ChoiceSource, pool: &[&'a str]) -> &'a str {
    pool[source.pick(pool.len())]
}
