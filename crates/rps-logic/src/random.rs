//! Randomness for the computer's hand
//!
//! `SeededRng` is a small xorshift generator: same seed, same sequence,
//! which keeps sessions reproducible in tests. Anything implementing
//! `RandomSource` can stand in for it.

use crate::choice::Choice;

/// Supplies the computer's choice for each live round
pub trait RandomSource {
    /// Next choice, uniformly distributed over rock/paper/scissors
    fn next_choice(&mut self) -> Choice;
}

/// Seeded random number generator
///
/// Deterministic: same seed = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 64-bit seed
    pub fn new(seed: u64) -> Self {
        // xorshift has a fixed point at zero
        let state = (seed ^ 0x9e3779b97f4a7c15).max(1);

        // Warm up the generator
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    /// Generate next u32
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Generate a value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }
}

impl RandomSource for SeededRng {
    fn next_choice(&mut self) -> Choice {
        match self.next_range(3) {
            0 => Choice::Rock,
            1 => Choice::Paper,
            _ => Choice::Scissors,
        }
    }
}

/// Replays a scripted sequence of choices, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct FixedChoices {
    script: Vec<Choice>,
    cursor: usize,
}

impl FixedChoices {
    /// # Panics
    /// If `script` is empty.
    pub fn new(script: Vec<Choice>) -> Self {
        assert!(!script.is_empty(), "FixedChoices needs at least one choice");
        Self { script, cursor: 0 }
    }

    /// Always the same choice
    pub fn always(choice: Choice) -> Self {
        Self::new(vec![choice])
    }
}

impl RandomSource for FixedChoices {
    fn next_choice(&mut self) -> Choice {
        let choice = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut r1 = SeededRng::new(42);
        let mut r2 = SeededRng::new(42);

        for _ in 0..100 {
            assert_eq!(r1.next_u64(), r2.next_u64());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = SeededRng::new(1);
        let mut rng2 = SeededRng::new(2);

        let vals1: Vec<_> = (0..10).map(|_| rng1.next_u64()).collect();
        let vals2: Vec<_> = (0..10).map(|_| rng2.next_u64()).collect();

        assert_ne!(vals1, vals2);
    }

    #[test]
    fn test_zero_seed_still_moves() {
        let mut rng = SeededRng::new(0x9e3779b97f4a7c15);
        let first = rng.next_u64();
        assert_ne!(first, 0);
        assert_ne!(first, rng.next_u64());
    }

    #[test]
    fn test_next_range() {
        let mut rng = SeededRng::new(42);

        for max in [1, 3, 10, 1000].iter() {
            for _ in 0..100 {
                let val = rng.next_range(*max);
                assert!(val < *max, "next_range({}) returned {}", max, val);
            }
        }

        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_choice_distribution() {
        let mut rng = SeededRng::new(7);
        let mut counts = [0u32; 3];
        let samples = 30_000;

        for _ in 0..samples {
            counts[rng.next_choice().ordinal() as usize] += 1;
        }

        // Each bucket should sit near 10_000
        for (i, count) in counts.iter().enumerate() {
            assert!(*count > 9_000 && *count < 11_000, "choice {} drawn {} times", i, count);
        }
    }

    #[test]
    fn test_fixed_choices_cycle() {
        let mut fixed = FixedChoices::new(vec![Choice::Paper, Choice::Rock]);
        assert_eq!(fixed.next_choice(), Choice::Paper);
        assert_eq!(fixed.next_choice(), Choice::Rock);
        assert_eq!(fixed.next_choice(), Choice::Paper);

        let mut always = FixedChoices::always(Choice::Scissors);
        for _ in 0..5 {
            assert_eq!(always.next_choice(), Choice::Scissors);
        }
    }
}
