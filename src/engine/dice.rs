use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::VecDeque;

/// Source of uniform randomness for the decisions that are coin flips.
/// Swappable so that tests can script outcomes.
pub trait Dice: Send {
    /// Uniform integer in `0..sides`.
    fn roll(&mut self, sides: usize) -> usize;
}

/// Pseudo-random dice.
#[derive(Debug)]
pub struct Random(SmallRng);

impl Random {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Random {
    fn default() -> Self {
        Self(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl Dice for Random {
    fn roll(&mut self, sides: usize) -> usize {
        match sides {
            0 => 0,
            n => self.0.random_range(0..n),
        }
    }
}

/// Dice that replay a fixed sequence, wrapped into range.
/// Rolls past the end of the script come up zero.
#[derive(Debug, Default, Clone)]
pub struct Scripted(VecDeque<usize>);

impl Scripted {
    pub fn new(rolls: impl IntoIterator<Item = usize>) -> Self {
        Self(rolls.into_iter().collect())
    }
    pub fn remaining(&self) -> usize {
        self.0.len()
    }
}

impl<const N: usize> From<[usize; N]> for Scripted {
    fn from(rolls: [usize; N]) -> Self {
        Self::new(rolls)
    }
}

impl Dice for Scripted {
    fn roll(&mut self, sides: usize) -> usize {
        match sides {
            0 => 0,
            n => self.0.pop_front().unwrap_or(0) % n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn random_rolls_stay_in_range() {
        let mut dice = Random::seeded(7);
        assert!((0..1000).map(|_| dice.roll(4)).all(|n| n < 4));
        assert_eq!(dice.roll(0), 0);
    }
    #[test]
    fn seeded_dice_repeat() {
        let a = (0..32).map({
            let mut d = Random::seeded(42);
            move |_| d.roll(10)
        });
        let b = (0..32).map({
            let mut d = Random::seeded(42);
            move |_| d.roll(10)
        });
        assert!(a.eq(b));
    }
    #[test]
    fn scripted_dice_replay_then_zero() {
        let mut dice = Scripted::from([3, 5]);
        assert_eq!(dice.roll(4), 3);
        assert_eq!(dice.roll(4), 1);
        assert_eq!(dice.remaining(), 0);
        assert_eq!(dice.roll(4), 0);
    }
}
