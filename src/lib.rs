//! Dice rolling for Savage Worlds: every die aces on its highest face, and
//! a group of dice keeps only its best die.
//!
//! ```
//! use swade_dice::{parse::parse, Eval, RollContext};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let notation = parse("2d6 + d4").unwrap();
//! let mut ctx = RollContext::new_bounded(100, StdRng::seed_from_u64(1));
//! let result = notation.roll(&mut ctx).unwrap();
//! println!("{} = {}", result, result.value());
//! ```

pub mod command;
mod common;
mod error;
pub mod parse;
pub mod roll;

pub use common::{Int, UInt};
pub use error::Error;
pub use parse::ast::RollNotation;
pub use roll::{Detailed, Eval, RollContext, RollResult, Roller};

/// Parses and rolls `notation` with a time-seeded roller.
pub fn roll(notation: &str) -> Result<RollResult, Error> {
    let notation = parse::parse(notation)?;
    Ok(notation.roll(&mut RollContext::default())?)
}
