// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flag and flag set types for identifying units of derived state.

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use crate::error::GraphError;

/// Maximum number of flags supported per graph (32).
pub const MAX_FLAGS: u8 = 32;

/// Identifies one kind of derived, cacheable state (styles, layout, etc.).
///
/// A flag is a lightweight handle for a single bit in a 32-bit flag space.
/// Each [`ValidationNode`](crate::ValidationNode) in a graph owns exactly one
/// flag, and dependency relationships between nodes are expressed as
/// [`FlagSet`] bitmasks over these bits.
///
/// # Example
///
/// ```
/// use canopy_validation::Flag;
///
/// // Define your own flags as constants
/// const STYLES: Flag = Flag::new(0);
/// const LAYOUT: Flag = Flag::new(1);
/// const TRANSFORM: Flag = Flag::new(2);
///
/// assert_eq!(LAYOUT.bits(), 0b10);
/// ```
///
/// # See Also
///
/// - [`FlagSet`]: A compact set of flags.
/// - [`ValidationNode`](crate::ValidationNode): Declares one unit of computation per flag.
/// - [`ValidationGraph`](crate::ValidationGraph): Schedules flags in dependency order.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Flag(u8);

impl Flag {
    /// Creates a new flag with the given bit index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 32`, as the flag space is a single `u32`.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < MAX_FLAGS, "Flag index must be less than 32");
        Self(index)
    }

    /// Creates a flag from a raw bit value.
    ///
    /// `bits` must have exactly one bit set, matching the flag invariant
    /// `bits > 0 && (bits & (bits - 1)) == 0`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidFlag`] if `bits` is zero or has more
    /// than one bit set.
    ///
    /// # Example
    ///
    /// ```
    /// use canopy_validation::{Flag, GraphError};
    ///
    /// assert_eq!(Flag::from_bits(4), Ok(Flag::new(2)));
    /// assert_eq!(Flag::from_bits(3), Err(GraphError::InvalidFlag { bits: 3 }));
    /// assert_eq!(Flag::from_bits(0), Err(GraphError::InvalidFlag { bits: 0 }));
    /// ```
    pub const fn from_bits(bits: u32) -> Result<Self, GraphError> {
        if bits == 0 || bits & (bits - 1) != 0 {
            return Err(GraphError::InvalidFlag { bits });
        }
        #[expect(clippy::cast_possible_truncation, reason = "trailing_zeros <= 31")]
        let index = bits.trailing_zeros() as u8;
        Ok(Self(index))
    }

    /// Returns the bit index of this flag.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the raw bit value of this flag (a single power of two).
    #[must_use]
    pub const fn bits(self) -> u32 {
        1_u32 << self.0
    }

    /// Converts this flag into a single-element [`FlagSet`].
    #[must_use]
    pub const fn into_set(self) -> FlagSet {
        FlagSet(1_u32 << self.0)
    }
}

impl fmt::Debug for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Flag").field(&self.0).finish()
    }
}

impl BitOr for Flag {
    type Output = FlagSet;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.into_set() | rhs.into_set()
    }
}

impl BitOr<FlagSet> for Flag {
    type Output = FlagSet;

    fn bitor(self, rhs: FlagSet) -> Self::Output {
        self.into_set() | rhs
    }
}

/// A compact bitfield representing a set of up to 32 flags.
///
/// `FlagSet` is the currency of the validation graph: dependency and
/// dependent edges, the invalid mask, and the return values of
/// [`invalidate`](crate::ValidationGraph::invalidate) and
/// [`validate`](crate::ValidationGraph::validate) are all flag sets.
///
/// # Example
///
/// ```
/// use canopy_validation::{Flag, FlagSet};
///
/// const STYLES: Flag = Flag::new(0);
/// const LAYOUT: Flag = Flag::new(1);
/// const TRANSFORM: Flag = Flag::new(2);
///
/// let set = STYLES | LAYOUT;
/// assert!(set.contains(STYLES));
/// assert!(set.contains(LAYOUT));
/// assert!(!set.contains(TRANSFORM));
/// assert_eq!(set.len(), 2);
/// ```
///
/// # See Also
///
/// - [`Flag`]: The single-flag identifier stored in this set.
/// - [`ValidationGraph`](crate::ValidationGraph): Operates on flag sets.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct FlagSet(u32);

impl FlagSet {
    /// An empty flag set.
    pub const EMPTY: Self = Self(0);

    /// A flag set containing all 32 possible flags.
    pub const ALL: Self = Self(u32::MAX);

    /// Creates an empty flag set.
    #[must_use]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Creates a flag set containing all 32 possible flags.
    #[must_use]
    pub const fn all() -> Self {
        Self::ALL
    }

    /// Creates a flag set from a raw bitmask.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bitmask of this set.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if this set contains no flags.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if this set contains the given flag.
    #[must_use]
    pub const fn contains(self, flag: Flag) -> bool {
        (self.0 & (1_u32 << flag.0)) != 0
    }

    /// Returns `true` if this set contains every flag in `other`.
    #[must_use]
    pub const fn contains_all(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if this set shares at least one flag with `other`.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns the union of this set and `other`.
    ///
    /// Equivalent to `|`, but usable in `const` contexts.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the intersection of this set and `other`.
    ///
    /// Equivalent to `&`, but usable in `const` contexts.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the flags in this set that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Inserts a flag into the set.
    pub fn insert(&mut self, flag: Flag) {
        self.0 |= 1_u32 << flag.0;
    }

    /// Removes a flag from the set.
    pub fn remove(&mut self, flag: Flag) {
        self.0 &= !(1_u32 << flag.0);
    }

    /// Returns the number of flags in the set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns an iterator over the flags in this set, in bit-index order.
    #[must_use]
    pub const fn iter(self) -> FlagSetIter {
        FlagSetIter { bits: self.0 }
    }
}

impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for FlagSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<Flag> for FlagSet {
    type Output = Self;

    fn bitor(self, rhs: Flag) -> Self::Output {
        Self(self.0 | rhs.bits())
    }
}

impl BitOrAssign for FlagSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitOrAssign<Flag> for FlagSet {
    fn bitor_assign(&mut self, rhs: Flag) {
        self.0 |= rhs.bits();
    }
}

impl BitAnd for FlagSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for FlagSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for FlagSet {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

impl From<Flag> for FlagSet {
    fn from(flag: Flag) -> Self {
        flag.into_set()
    }
}

impl IntoIterator for FlagSet {
    type Item = Flag;
    type IntoIter = FlagSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the flags in a [`FlagSet`], lowest bit first.
#[derive(Clone, Debug)]
pub struct FlagSetIter {
    bits: u32,
}

impl Iterator for FlagSetIter {
    type Item = Flag;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation, reason = "trailing_zeros <= 31")]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1; // Clear the lowest set bit
        Some(Flag(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.bits.count_ones() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for FlagSetIter {}
