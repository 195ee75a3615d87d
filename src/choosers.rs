use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::cells::Direction;

/// The source of every random decision made while carving paths.
pub trait DirectionChooser {
    /// Pick one of the candidate directions. Only ever called with a non-empty slice.
    fn choose(&mut self, candidates: &[Direction]) -> Direction;
}

/// Uniformly random choice from any random number generator.
#[derive(Debug, Clone)]
pub struct RandomChooser<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomChooser<R> {
    pub fn new(rng: R) -> RandomChooser<R> {
        RandomChooser { rng }
    }
}

impl RandomChooser<XorShiftRng> {
    /// Reproducible choices: the same seed always carves the same paths.
    pub fn from_seed(seed: u64) -> RandomChooser<XorShiftRng> {
        RandomChooser::new(XorShiftRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> RandomChooser<XorShiftRng> {
        RandomChooser::new(XorShiftRng::from_entropy())
    }
}

impl<R: Rng> DirectionChooser for RandomChooser<R> {
    fn choose(&mut self, candidates: &[Direction]) -> Direction {
        match candidates.len() {
            0 => Direction::None,
            1 => candidates[0],
            n => candidates[self.rng.gen_range(0..n)],
        }
    }
}

/// Replays a fixed sequence of candidate indices, each wrapped to the number of candidates
/// on offer. Once the script runs out the first candidate is always taken.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChooser {
    script: Vec<usize>,
    position: usize,
}

impl ScriptedChooser {
    pub fn new(script: Vec<usize>) -> ScriptedChooser {
        ScriptedChooser {
            script,
            position: 0,
        }
    }

    /// Always takes the first candidate.
    pub fn first() -> ScriptedChooser {
        ScriptedChooser::new(vec![])
    }

    /// Number of choices made so far.
    #[inline]
    pub fn choices_made(&self) -> usize {
        self.position
    }
}

impl DirectionChooser for ScriptedChooser {
    fn choose(&mut self, candidates: &[Direction]) -> Direction {
        if candidates.is_empty() {
            return Direction::None;
        }
        let scripted = self.script.get(self.position).cloned().unwrap_or(0);
        self.position += 1;
        candidates[scripted % candidates.len()]
    }
}
