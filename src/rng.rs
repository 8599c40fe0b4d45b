//! Dice rolls for ability actions
//!
//! Actions never touch a global generator: whoever drives the fight hands
//! in a roller, so outcomes are reproducible under a fixed seed and exact
//! under a scripted sequence.

use rand::Rng;

/// Uniform integer rolls over an inclusive range.
pub trait Dice {
    fn roll(&mut self, low: i32, high: i32) -> i32;
}

/// Adapter over any `rand` generator. Seed a `ChaCha8Rng` for reproducible
/// fights.
#[derive(Debug, Clone)]
pub struct RandDice<R: Rng>(pub R);

impl<R: Rng> RandDice<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: Rng> Dice for RandDice<R> {
    fn roll(&mut self, low: i32, high: i32) -> i32 {
        self.0.gen_range(low..=high)
    }
}

/// Replays a fixed sequence of rolls, cycling when exhausted. The scripted
/// values are returned as-is; callers are trusted to script values inside
/// the ranges their abilities roll.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    rolls: Vec<i32>,
    next: usize,
}

impl ScriptedDice {
    pub fn new(rolls: Vec<i32>) -> Self {
        Self { rolls, next: 0 }
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, low: i32, _high: i32) -> i32 {
        if self.rolls.is_empty() {
            return low;
        }
        let roll = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        roll
    }
}
