mod ctx;
mod error;
mod roller;
mod stringify;
mod tree;

type RResult<T> = Result<T, RollError>;

pub use ctx::{RollContext, DEFAULT_MAX_ACES};
pub use error::RollError;
pub use roller::{default_roller, seeded_roller, DefaultRoller, Roller};
pub use stringify::Detailed;
pub use tree::{Aced, Best, Die, Eval, RollResult, Sum};

#[cfg(test)]
pub(crate) use roller::SequenceRoller;
