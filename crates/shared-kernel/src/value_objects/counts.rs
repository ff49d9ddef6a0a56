// crates/shared-kernel/src/value_objects/counts.rs
use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Declares a `usize` newtype counter with the arithmetic the scanners rely on.
///
/// All arithmetic saturates at `usize::MAX`, whether a scanner bumps by one
/// or adds a whole chunk.
macro_rules! count_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            pub const ZERO: Self = Self(0);

            #[inline]
            pub const fn new(value: usize) -> Self {
                Self(value)
            }

            /// Bumps the counter by one, saturating at `usize::MAX`.
            #[inline]
            pub fn increment(&mut self) {
                self.0 = self.0.saturating_add(1);
            }
        }

        impl Zero for $name {
            fn zero() -> Self {
                Self::ZERO
            }

            fn is_zero(&self) -> bool {
                self.0 == 0
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0.saturating_add(rhs.0))
            }
        }

        impl Add<usize> for $name {
            type Output = Self;

            fn add(self, rhs: usize) -> Self::Output {
                Self(self.0.saturating_add(rhs))
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                self.0 = self.0.saturating_add(rhs.0);
            }
        }

        impl AddAssign<usize> for $name {
            fn add_assign(&mut self, rhs: usize) {
                self.0 = self.0.saturating_add(rhs);
            }
        }

        impl Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, Add::add)
            }
        }

        impl<'a> Sum<&'a $name> for $name {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.copied().sum()
            }
        }

        impl From<usize> for $name {
            fn from(value: usize) -> Self {
                Self::new(value)
            }
        }

        impl From<$name> for usize {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<usize> for $name {
            fn eq(&self, other: &usize) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for usize {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

count_type!(
    /// Number of `\n` bytes seen.
    LineCount
);

count_type!(
    /// Number of words seen, under whichever word rule the scanner applies.
    WordCount
);

count_type!(
    /// Number of bytes seen. The counters work on raw bytes, so this is a byte count.
    CharCount
);
