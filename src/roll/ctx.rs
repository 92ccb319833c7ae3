use super::{error::RollError, roller::*, tree::*, RResult};
use crate::common::*;
use crate::parse::{
    ast,
    visit::{AstVisitor, Accept},
};

pub const DEFAULT_MAX_ACES: usize = 1000;

/// Rolls notations with a [Roller], counting every die drawn.
///
/// Only the extra dice drawn after an ace count against the limit of a
/// bounded context, which fails with [RollError::TooManyAces] once it is
/// exceeded. Both counts are kept across calls to [RollContext::eval].
pub struct RollContext<R = DefaultRoller> {
    max_aces: Option<usize>,
    rolls: usize,
    aces: usize,
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(max_aces: Option<usize>, roller: R) -> Self {
        Self {
            max_aces,
            rolls: 0,
            aces: 0,
            roller,
        }
    }

    pub fn new_bounded(max_aces: usize, roller: R) -> Self {
        Self::new(Some(max_aces), roller)
    }

    pub fn new_unbounded(roller: R) -> Self {
        Self::new(None, roller)
    }

    /// Dice drawn so far.
    pub fn rolls(&self) -> usize {
        self.rolls
    }

    /// Dice drawn so far because of an ace.
    pub fn aces(&self) -> usize {
        self.aces
    }

    pub fn into_roller(self) -> R {
        self.roller
    }

    pub fn roll_one(&mut self, sides: NonZeroUInt) -> UInt {
        self.rolls += 1;
        self.roller.roll(sides)
    }

    /// Draws the extra die earned by an ace.
    pub fn roll_ace(&mut self, sides: NonZeroUInt) -> RResult<UInt> {
        self.aces += 1;
        match self.max_aces {
            Some(max) if self.aces > max => Err(RollError::TooManyAces(max)),
            _ => Ok(self.roll_one(sides)),
        }
    }

    pub fn eval(&mut self, notation: &ast::RollNotation) -> RResult<RollResult> {
        let before = self.rolls;
        let result = notation.accept(self)?;
        log::debug!(
            "rolled `{}` with {} dice: {}",
            notation,
            self.rolls - before,
            result
        );
        Ok(result)
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new_bounded(DEFAULT_MAX_ACES, default_roller())
    }
}

impl<R: Roller> AstVisitor for RollContext<R> {
    type Output = RResult<RollResult>;

    fn visit_notation(&mut self, notation: &ast::RollNotation) -> Self::Output {
        let results = notation
            .addends()
            .iter()
            .map(|addend| self.visit(addend))
            .collect::<RResult<Vec<_>>>()?;
        Ok(Sum::new(results).into())
    }

    fn visit_constant(&mut self, x: &Int) -> Self::Output {
        Ok(Die(*x).into())
    }

    fn visit_dice_group(&mut self, dice: &ast::DiceGroup) -> Self::Output {
        let mut results = Vec::with_capacity(dice.dice_count());
        for _ in 0..dice.num.get() {
            for &sides in &dice.sides {
                results.push(Aced::roll_new(self, sides)?.into());
            }
        }
        Ok(Best::new(results).into())
    }
}

impl ast::RollNotation {
    pub fn roll<R: Roller>(&self, ctx: &mut RollContext<R>) -> RResult<RollResult> {
        ctx.eval(self)
    }

    /// Rolls with a fresh context limited to [DEFAULT_MAX_ACES] aces.
    pub fn roll_with<R: Roller>(&self, roller: R) -> RResult<RollResult> {
        RollContext::new_bounded(DEFAULT_MAX_ACES, roller).eval(self)
    }
}
