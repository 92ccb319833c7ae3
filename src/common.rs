use std::num::{NonZeroU32, NonZeroUsize};

pub type Int = i64;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

/// Repeat count of a dice group.
pub type Num = NonZeroUsize;

pub type NonEmpty<T> = vec1::Vec1<T>;
