use crate::common::{NonZeroUInt, UInt};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of die faces.
pub trait Roller {
    /// Returns a face in `1..=sides`.
    fn roll(&mut self, sides: NonZeroUInt) -> UInt;
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.gen_range(1..=sides.get())
    }
}

pub type DefaultRoller = StdRng;

/// A roller seeded from the current time.
pub fn default_roller() -> DefaultRoller {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    seeded_roller(nanos)
}

pub fn seeded_roller(seed: u64) -> DefaultRoller {
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
pub(crate) use sequence::SequenceRoller;
