//! Candidate digit sets packed into 9-bit masks.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::digit::Digit;

/// The 9 significant bits of a candidate mask.
const MASK: u16 = 0x1FF;

/// A set of candidate digits (1-9) for a single cell.
///
/// Bit `k` of the underlying `u16` is set if and only if digit `k + 1` is
/// still possible in the cell. The upper 7 bits are always zero. This packing
/// makes elimination a single AND instead of a 9-element scan.
///
/// Three states matter to the solver:
///
/// - [`DigitSet::EMPTY`] (no bits set) marks a contradiction: a cell with no
///   possible digit.
/// - A single set bit means the cell's value is determined; see
///   [`as_single`](DigitSet::as_single).
/// - [`DigitSet::FULL`] (all nine bits set) means nothing has been
///   eliminated yet.
///
/// # Examples
///
/// ```
/// use bitdoku_core::{Digit, DigitSet};
///
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
///
/// // Intersection with a complement eliminates in one operation.
/// let eliminated = DigitSet::from_digit(Digit::D1).complement();
/// assert!(!(candidates & eliminated).contains(Digit::D1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The set with no candidates. A cell holding this mask is contradictory.
    pub const EMPTY: Self = Self(0);

    /// The set with all nine candidates; the universal mask.
    pub const FULL: Self = Self(MASK);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a singleton set containing exactly one digit.
    #[must_use]
    pub const fn from_digit(digit: Digit) -> Self {
        Self(1 << digit.bit_index())
    }

    /// Creates a set from a raw bit pattern, rejecting patterns with bits
    /// outside the 9-bit range.
    #[must_use]
    pub const fn try_from_bits(bits: u16) -> Option<Self> {
        if bits & !MASK == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Returns the raw bit pattern (bits 0-8).
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Adds a digit to the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= 1 << digit.bit_index();
    }

    /// Removes a digit from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.0 &= !(1 << digit.bit_index());
    }

    /// Returns `true` if the digit is in the set.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & (1 << digit.bit_index()) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns `true` if no digit is in the set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the digit if the set contains exactly one, `None` otherwise.
    #[must_use]
    pub const fn as_single(self) -> Option<Digit> {
        if self.0.count_ones() == 1 {
            #[expect(clippy::cast_possible_truncation)]
            let value = self.0.trailing_zeros() as u8 + 1;
            Some(Digit::from_value(value))
        } else {
            None
        }
    }

    /// Returns a singleton set holding the smallest digit in the set, or the
    /// empty set if there is none.
    #[must_use]
    pub const fn lowest_single(self) -> Self {
        Self(self.0 & self.0.wrapping_neg())
    }

    /// Returns the set of digits *not* in this set, restricted to the 9
    /// significant bits.
    #[must_use]
    pub const fn complement(self) -> Self {
        Self(!self.0 & MASK)
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the intersection of two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the digits in this set that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns `true` if every digit in this set is also in `other`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Returns an iterator over the digits in the set, in ascending order.
    #[must_use]
    pub const fn iter(self) -> Digits {
        Digits { bits: self.0 }
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<T: IntoIterator<Item = Digit>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Digits;

    fn into_iter(self) -> Digits {
        self.iter()
    }
}

impl Display for DigitSet {
    /// Formats the set as its digits in ascending order, or `-` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for digit in self.iter() {
            Display::fmt(&digit, f)?;
        }
        Ok(())
    }
}

/// Iterator over the digits of a [`DigitSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct Digits {
    bits: u16,
}

impl Iterator for Digits {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.bits.trailing_zeros() as u8 + 1;
        self.bits &= self.bits - 1;
        Some(Digit::from_value(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Digits {}
impl ExactSizeIterator for Digits {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::digit::Digit::*;

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_singleton_detection() {
        assert_eq!(DigitSet::from_digit(D5).as_single(), Some(D5));
        assert_eq!(DigitSet::FULL.as_single(), None);
        assert_eq!(DigitSet::EMPTY.as_single(), None);
    }

    #[test]
    fn test_lowest_single() {
        let set = DigitSet::from_iter([D3, D7, D9]);
        assert_eq!(set.lowest_single().as_single(), Some(D3));
        assert_eq!(DigitSet::EMPTY.lowest_single(), DigitSet::EMPTY);
    }

    #[test]
    fn test_iteration_order() {
        let set = DigitSet::from_iter([D9, D1, D5, D3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![D1, D3, D5, D9]);
    }

    #[test]
    fn test_try_from_bits() {
        assert_eq!(DigitSet::try_from_bits(0x1FF), Some(DigitSet::FULL));
        assert_eq!(DigitSet::try_from_bits(0x200), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(DigitSet::from_iter([D2, D4]).to_string(), "24");
        assert_eq!(DigitSet::EMPTY.to_string(), "-");
    }

    proptest! {
        #[test]
        fn complement_is_involutive(bits in 0u16..=0x1FF) {
            let set = DigitSet::try_from_bits(bits).unwrap();
            prop_assert_eq!(set.complement().complement(), set);
        }

        #[test]
        fn union_and_intersection_follow_de_morgan(a in 0u16..=0x1FF, b in 0u16..=0x1FF) {
            let a = DigitSet::try_from_bits(a).unwrap();
            let b = DigitSet::try_from_bits(b).unwrap();
            prop_assert_eq!((a | b).complement(), a.complement() & b.complement());
        }

        #[test]
        fn intersection_is_subset_of_operands(a in 0u16..=0x1FF, b in 0u16..=0x1FF) {
            let a = DigitSet::try_from_bits(a).unwrap();
            let b = DigitSet::try_from_bits(b).unwrap();
            prop_assert!((a & b).is_subset(a));
            prop_assert!((a & b).is_subset(b));
        }
    }
}
