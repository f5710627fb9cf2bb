use super::dice::Dice;
use super::dice::Random;
use super::select;
use crate::cards::*;

/// The player's decision policy.
///
/// Card choice is a pure function of the hand and the pile.
/// Color choice, challenges, and the special-logic signal are uniform
/// draws from the injected dice with no memory of earlier turns.
#[derive(Debug)]
pub struct Strategy<D = Random> {
    dice: D,
}

impl Default for Strategy<Random> {
    fn default() -> Self {
        Self::new(Random::default())
    }
}

impl<D> Strategy<D>
where
    D: Dice,
{
    pub fn new(dice: D) -> Self {
        Self { dice }
    }
    pub fn choose_card(&self, hand: &Hand, played: &Played) -> Option<Card> {
        select::choose_card(hand, played)
    }
    /// One of the four non-wild colors, uniformly.
    pub fn choose_color(&mut self) -> Color {
        Color::PALETTE[self.dice.roll(Color::PALETTE.len())]
    }
    /// Contest a wild draw four with probability one half.
    pub fn challenge(&mut self) -> bool {
        self.dice.roll(2) >= 1
    }
    /// Raise the special-logic signal with probability one tenth.
    pub fn special_logic(&mut self) -> bool {
        self.dice.roll(10) == 0
    }
    pub fn dice(&self) -> &D {
        &self.dice
    }
}
