//! Dice sources.

use serde::{Deserialize, Serialize};

use crate::core::rng::DIE_FACES;
use crate::core::{GameError, GameRng};

/// Supplies two independent die faces per roll.
///
/// Implementations must return faces in `1..=6`. The engine checks every
/// roll and stops the game with [`GameError::InvalidDice`] otherwise.
pub trait DiceSource {
    fn roll(&mut self) -> (u8, u8);
}

impl DiceSource for GameRng {
    fn roll(&mut self) -> (u8, u8) {
        (self.roll_die(), self.roll_die())
    }
}

impl<T: DiceSource + ?Sized> DiceSource for Box<T> {
    fn roll(&mut self) -> (u8, u8) {
        (**self).roll()
    }
}

/// A validated pair of dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    first: u8,
    second: u8,
}

impl Roll {
    /// Validate raw faces from a dice source.
    pub fn new(first: u8, second: u8) -> Result<Self, GameError> {
        let valid = 1..=DIE_FACES;
        if !valid.contains(&first) || !valid.contains(&second) {
            return Err(GameError::InvalidDice(first, second));
        }
        Ok(Self { first, second })
    }

    /// Draw from `source` and validate.
    pub fn draw(source: &mut (impl DiceSource + ?Sized)) -> Result<Self, GameError> {
        let (first, second) = source.roll();
        Self::new(first, second)
    }

    #[must_use]
    pub fn first(self) -> u8 {
        self.first
    }

    #[must_use]
    pub fn second(self) -> u8 {
        self.second
    }

    /// Fields to move.
    #[must_use]
    pub fn total(self) -> usize {
        usize::from(self.first) + usize::from(self.second)
    }

    #[must_use]
    pub fn is_double(self) -> bool {
        self.first == self.second
    }
}

/// Replays a fixed list of rolls, starting over when it runs out.
///
/// Faces are not checked here, so a script can feed malformed dice to the
/// engine on purpose.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    script: Vec<(u8, u8)>,
    next: usize,
}

impl ScriptedDice {
    pub fn new(script: impl IntoIterator<Item = (u8, u8)>) -> Self {
        let script: Vec<_> = script.into_iter().collect();
        assert!(!script.is_empty(), "dice script must not be empty");
        Self { script, next: 0 }
    }

    /// Rolls drawn so far.
    #[must_use]
    pub fn rolls_drawn(&self) -> usize {
        self.next
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> (u8, u8) {
        let roll = self.script[self.next % self.script.len()];
        self.next += 1;
        roll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_validation() {
        assert!(Roll::new(1, 6).is_ok());
        assert_eq!(Roll::new(0, 3), Err(GameError::InvalidDice(0, 3)));
        assert_eq!(Roll::new(4, 7), Err(GameError::InvalidDice(4, 7)));
    }

    #[test]
    fn test_roll_total_and_double() {
        let roll = Roll::new(3, 3).unwrap();
        assert_eq!(roll.total(), 6);
        assert!(roll.is_double());
        assert!(!Roll::new(2, 5).unwrap().is_double());
    }

    #[test]
    fn test_scripted_dice_cycle() {
        let mut dice = ScriptedDice::new([(1, 2), (6, 6)]);

        assert_eq!(dice.roll(), (1, 2));
        assert_eq!(dice.roll(), (6, 6));
        assert_eq!(dice.roll(), (1, 2));
        assert_eq!(dice.rolls_drawn(), 3);
    }

    #[test]
    #[should_panic(expected = "dice script must not be empty")]
    fn test_scripted_dice_empty() {
        let _ = ScriptedDice::new([]);
    }

    #[test]
    fn test_rng_dice_in_range() {
        let mut rng = GameRng::new(3);
        for _ in 0..200 {
            assert!(Roll::draw(&mut rng).is_ok());
        }
    }

    #[test]
    fn test_boxed_source() {
        let mut dice: Box<dyn DiceSource> = Box::new(ScriptedDice::new([(2, 4)]));
        assert_eq!(Roll::draw(&mut dice).unwrap().total(), 6);
    }
}
