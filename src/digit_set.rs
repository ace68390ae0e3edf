use bitvec::prelude::*;
use std::num::NonZeroU8;

pub const MAX_DIGIT: u8 = 9;

/// A set of sudoku digits 1..=9, stored as 9 bits in a u16.
/// Used for player notes on a cell and for the solver's row/column/box
/// membership sets.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct DigitSet {
    bits: BitArr!(for 9, in u16),
}

impl DigitSet {
    #[inline]
    pub const fn new_empty() -> Self {
        Self {
            bits: bitarr![const u16, Lsb0; 0; 9],
        }
    }

    fn index(digit: NonZeroU8) -> usize {
        assert!(digit.get() <= MAX_DIGIT);
        usize::from(digit.get()) - 1
    }

    #[inline]
    pub fn insert(&mut self, digit: NonZeroU8) {
        self.bits.set(Self::index(digit), true);
    }

    #[inline]
    pub fn remove(&mut self, digit: NonZeroU8) {
        self.bits.set(Self::index(digit), false);
    }

    /// Inserts the digit if absent, removes it if present. Returns whether
    /// the digit is in the set afterwards.
    pub fn toggle(&mut self, digit: NonZeroU8) -> bool {
        let index = Self::index(digit);
        let new_state = !self.bits[index];
        self.bits.set(index, new_state);
        new_state
    }

    #[inline]
    pub fn contains(&self, digit: NonZeroU8) -> bool {
        self.bits[Self::index(digit)]
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    pub fn clear(&mut self) {
        *self = Self::new_empty();
    }

    /// Iterates the contained digits in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NonZeroU8> + '_ {
        (1u8..=MAX_DIGIT)
            .map(|digit| NonZeroU8::new(digit).unwrap())
            .filter(move |digit| self.contains(*digit))
    }
}

impl FromIterator<NonZeroU8> for DigitSet {
    fn from_iter<T: IntoIterator<Item = NonZeroU8>>(digits: T) -> Self {
        let mut set = Self::new_empty();
        for digit in digits {
            set.insert(digit);
        }
        set
    }
}
