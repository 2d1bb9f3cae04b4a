//! Index and amount arguments.
//!
//! Positional queries such as [`at`](super::Collection::at) and
//! [`first_many`](super::Collection::first_many) accept any primitive number.
//! Every argument is brought down to a signed offset before use:
//!
//! - integers convert exactly, saturating at the `isize` bounds
//! - floats are floored (`2.7` becomes `2`, `-0.5` becomes `-1`)
//! - `NaN` becomes `0`
//!
//! # Examples
//!
//! ```rust
//! use orderly::collection::Position;
//!
//! assert_eq!(3_u8.to_offset(), 3);
//! assert_eq!((-2_i64).to_offset(), -2);
//! assert_eq!(2.9_f64.to_offset(), 2);
//! assert_eq!((-0.5_f32).to_offset(), -1);
//! assert_eq!(f64::NAN.to_offset(), 0);
//! ```

use std::iter::{Skip, Take};

/// A numeric argument that can be read as a signed position or amount.
pub trait Position: Copy {
    /// Converts this value into a signed offset, flooring fractions.
    fn to_offset(self) -> isize;
}

macro_rules! impl_position_for_signed {
    ($($signed:ty),*) => {
        $(
            impl Position for $signed {
                #[inline]
                fn to_offset(self) -> isize {
                    isize::try_from(self).unwrap_or(if self < 0 { isize::MIN } else { isize::MAX })
                }
            }
        )*
    };
}

macro_rules! impl_position_for_unsigned {
    ($($unsigned:ty),*) => {
        $(
            impl Position for $unsigned {
                #[inline]
                fn to_offset(self) -> isize {
                    isize::try_from(self).unwrap_or(isize::MAX)
                }
            }
        )*
    };
}

macro_rules! impl_position_for_float {
    ($($float:ty),*) => {
        $(
            impl Position for $float {
                #[inline]
                #[allow(clippy::cast_possible_truncation)]
                fn to_offset(self) -> isize {
                    // `as` saturates on overflow and maps NaN to zero.
                    self.floor() as isize
                }
            }
        )*
    };
}

impl_position_for_signed!(i8, i16, i32, i64, i128, isize);
impl_position_for_unsigned!(u8, u16, u32, u64, u128, usize);
impl_position_for_float!(f32, f64);

/// Resolves a signed offset against a length.
///
/// Non-negative offsets count from the front, negative ones from the back
/// (`-1` is the last slot). Offsets outside `-len..len` resolve to `None`.
#[inline]
pub const fn resolve_index(offset: isize, length: usize) -> Option<usize> {
    let magnitude = offset.unsigned_abs();
    if offset >= 0 {
        if magnitude < length {
            Some(magnitude)
        } else {
            None
        }
    } else {
        length.checked_sub(magnitude)
    }
}

/// Reads an offset as a count, treating negative values as zero.
#[inline]
pub fn sample_size(offset: isize) -> usize {
    usize::try_from(offset).unwrap_or(0)
}

/// A contiguous run of entries taken from one end of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Leading(usize),
    Trailing(usize),
}

impl Span {
    /// The span selected by `first_many(amount)`.
    ///
    /// A negative amount selects from the other end instead.
    #[inline]
    pub const fn leading(amount: isize) -> Self {
        if amount < 0 {
            Self::Trailing(amount.unsigned_abs())
        } else {
            Self::Leading(amount.unsigned_abs())
        }
    }

    /// The span selected by `last_many(amount)`.
    #[inline]
    pub const fn trailing(amount: isize) -> Self {
        if amount < 0 {
            Self::Leading(amount.unsigned_abs())
        } else {
            Self::Trailing(amount.unsigned_abs())
        }
    }

    /// Restricts `iterator` to this span, keeping its order.
    pub fn apply<I>(self, iterator: I) -> Take<Skip<I>>
    where
        I: ExactSizeIterator,
    {
        let (start, count) = match self {
            Self::Leading(count) => (0, count),
            Self::Trailing(count) => (iterator.len().saturating_sub(count), count),
        };
        iterator.skip(start).take(count)
    }
}
