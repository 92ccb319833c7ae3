use super::stringify::Detailed;
use super::{roller::Roller, RResult, RollContext};
use crate::common::*;
use std::fmt;

#[enum_dispatch::enum_dispatch]
pub trait Eval {
    fn value(&self) -> Int;
}

/// A node of a rolled result.
#[derive(Debug, Clone, Eq, PartialEq)]
#[enum_dispatch::enum_dispatch(Eval, Detailed)]
pub enum RollResult {
    Die(Die),
    Aced(Aced),
    Best(Best),
    Sum(Sum),
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.detailed(false))
    }
}

/// A single face, or a constant addend.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Die(pub Int);

impl Eval for Die {
    fn value(&self) -> Int {
        self.0
    }
}

/// The faces of one die, including every ace it chained into.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Aced {
    pub rolls: Vec<Die>,
}

impl Aced {
    pub fn new(rolls: Vec<Die>) -> Self {
        Self { rolls }
    }

    /// Rolls a die with `sides` faces, rolling again for as long as the
    /// highest face comes up.
    pub fn roll_new<R: Roller>(ctx: &mut RollContext<R>, sides: NonZeroUInt) -> RResult<Self> {
        let mut face = ctx.roll_one(sides);
        let mut rolls = vec![Die(Int::from(face))];
        while face == sides.get() {
            face = ctx.roll_ace(sides)?;
            rolls.push(Die(Int::from(face)));
        }
        Ok(Self::new(rolls))
    }
}

impl Eval for Aced {
    fn value(&self) -> Int {
        if self.rolls.is_empty() {
            log::error!("aced die has no rolls");
        }
        self.rolls
            .iter()
            .fold(0, |acc, die| acc.saturating_add(die.value()))
    }
}

/// Keeps the highest of its results.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Best {
    pub results: Vec<RollResult>,
}

impl Best {
    pub fn new(results: Vec<RollResult>) -> Self {
        Self { results }
    }
}

impl Eval for Best {
    /// An empty set is worth 1, the lowest face a die can show.
    fn value(&self) -> Int {
        match self.results.iter().map(Eval::value).max() {
            Some(best) => best,
            None => {
                log::error!("best-of result has no dice");
                1
            }
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Sum {
    pub results: Vec<RollResult>,
}

impl Sum {
    pub fn new(results: Vec<RollResult>) -> Self {
        Self { results }
    }
}

impl Eval for Sum {
    fn value(&self) -> Int {
        if self.results.is_empty() {
            log::error!("sum result has no addends");
        }
        self.results
            .iter()
            .fold(0, |acc, r| acc.saturating_add(r.value()))
    }
}

macro_rules! display_detailed {
    ($($Name:ident),*) => {
        $(
            impl fmt::Display for $Name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.detailed(false))
                }
            }
        )*
    };
}

display_detailed!(Die, Aced, Best, Sum);
