use crate::common::*;
use std::fmt;

/// A parsed roll: the addends in the order they were written.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct RollNotation {
    pub(crate) addends: Vec<Addend>,
}

impl RollNotation {
    pub(crate) fn new(addends: Vec<Addend>) -> Self {
        Self { addends }
    }

    pub fn addends(&self) -> &[Addend] {
        &self.addends
    }

    pub fn is_empty(&self) -> bool {
        self.addends.is_empty()
    }
}

impl fmt::Display for RollNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, addend) in self.addends.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            fmt::Display::fmt(addend, f)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Addend {
    Constant(Int),
    Dice(DiceGroup),
}

impl fmt::Display for Addend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(x) => fmt::Display::fmt(x, f),
            Self::Dice(dice) => fmt::Display::fmt(dice, f),
        }
    }
}

/// `num` sets of dice, one die per entry in `sides`. Only the best single
/// die of the whole group counts.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DiceGroup {
    pub num: Num,
    pub sides: NonEmpty<NonZeroUInt>,
}

impl DiceGroup {
    pub fn new(num: Num, sides: NonEmpty<NonZeroUInt>) -> Self {
        Self { num, sides }
    }

    /// Number of dice rolled for the group, not counting aces.
    pub fn dice_count(&self) -> usize {
        self.num.get() * self.sides.len()
    }
}

impl fmt::Display for DiceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.num.get() != 1 {
            fmt::Display::fmt(&self.num, f)?;
        }
        for sides in &self.sides {
            write!(f, "d{}", sides)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(num: usize, sides: &[u32]) -> DiceGroup {
        let sides: Vec<_> = sides.iter().map(|&s| NonZeroUInt::new(s).unwrap()).collect();
        DiceGroup::new(Num::new(num).unwrap(), NonEmpty::try_from_vec(sides).unwrap())
    }

    #[test]
    fn test_display_dice_group() {
        assert_eq!(group(1, &[6]).to_string(), "d6");
        assert_eq!(group(3, &[8, 10]).to_string(), "3d8d10");
    }

    #[test]
    fn test_display_notation() {
        let notation = RollNotation::new(vec![
            Addend::Dice(group(2, &[6, 4])),
            Addend::Constant(-1),
            Addend::Constant(3),
        ]);
        assert_eq!(notation.to_string(), "2d6d4 + -1 + 3");
        assert_eq!(RollNotation::default().to_string(), "");
    }

    #[test]
    fn test_dice_count() {
        assert_eq!(group(1, &[6]).dice_count(), 1);
        assert_eq!(group(2, &[6, 4]).dice_count(), 4);
    }
}
