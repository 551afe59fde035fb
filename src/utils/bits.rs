//! Bit accumulator used to validate permutation tables.
//!
//! Each processed `(input, output)` entry sets the one-hot slot of the input
//! symbol in the high half of a 64-bit word and the slot of the output symbol
//! in the low half. A table is a permutation exactly when the population
//! count grows by two for every entry.

use crate::symbol::Symbol;

/// Number of bits the input column is shifted into the accumulator.
const INPUT_SHIFT: u32 = 32;

/// Running record of the symbols seen in the input and output columns.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MappingAccumulator {
    bits: u64,
    entries: u32,
}

impl MappingAccumulator {
    /// Creates an empty accumulator.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records one table entry.
    ///
    /// # Returns
    /// `false` if either symbol was already seen in its column (or is the
    /// invalid sentinel, which contributes no bit).
    pub(crate) fn insert(&mut self, input: Symbol, output: Symbol) -> bool {
        self.bits |= (input.bit() as u64) << INPUT_SHIFT;
        self.bits |= output.bit() as u64;
        self.entries += 1;
        self.bits.count_ones() == 2 * self.entries
    }

    /// Returns `true` once all 26 symbols were seen in both columns.
    pub(crate) fn is_complete(&self) -> bool {
        let full = (1u64 << crate::symbol::ALPHABET_SIZE) - 1;
        self.bits == (full << INPUT_SHIFT) | full
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_fills_accumulator() {
        let mut acc = MappingAccumulator::new();
        for s in Symbol::ALL {
            assert!(acc.insert(s, s));
        }
        assert!(acc.is_complete());
    }

    #[test]
    fn test_duplicate_output_detected() {
        let mut acc = MappingAccumulator::new();
        assert!(acc.insert(Symbol::A, Symbol::B));
        assert!(!acc.insert(Symbol::C, Symbol::B));
    }

    #[test]
    fn test_duplicate_input_detected() {
        let mut acc = MappingAccumulator::new();
        assert!(acc.insert(Symbol::A, Symbol::B));
        assert!(!acc.insert(Symbol::A, Symbol::C));
    }

    #[test]
    fn test_duplicate_on_last_entry_detected() {
        let mut acc = MappingAccumulator::new();
        for s in &Symbol::ALL[..25] {
            assert!(acc.insert(*s, *s));
        }
        assert!(!acc.insert(Symbol::Z, Symbol::Y));
        assert!(!acc.is_complete());
    }

    #[test]
    fn test_invalid_symbol_rejected() {
        let mut acc = MappingAccumulator::new();
        assert!(!acc.insert(Symbol::INVALID, Symbol::A));
    }
}
