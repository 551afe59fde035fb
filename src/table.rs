//! PermutationTable: a validated bijection over the 26 symbols.
//!
//! Tables are built once and never mutated. Both directions are stored so
//! the return path of the signal is a single lookup.

use crate::error::{Result, RotorCryptError};
use crate::symbol::{Symbol, ALPHABET_SIZE};
use crate::utils::bits::MappingAccumulator;

/// Immutable bijection from [`Symbol`] to [`Symbol`].
///
/// Invariant: the input column and the output column are each a permutation
/// of the 26 valid symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PermutationTable {
    forward: [Symbol; ALPHABET_SIZE],
    inverse: [Symbol; ALPHABET_SIZE],
}

impl PermutationTable {
    /// Every symbol maps to itself.
    pub const IDENTITY: PermutationTable = {
        let mut forward = [Symbol::INVALID; ALPHABET_SIZE];
        let mut i = 0;
        while i < ALPHABET_SIZE {
            forward[i] = Symbol::from_index(i);
            i += 1;
        }
        PermutationTable {
            forward,
            inverse: forward,
        }
    };

    /// The symbol at index `i` maps to the symbol at index `25 - i`.
    pub const INVERSE: PermutationTable = {
        let mut forward = [Symbol::INVALID; ALPHABET_SIZE];
        let mut i = 0;
        while i < ALPHABET_SIZE {
            forward[i] = Symbol::from_index(ALPHABET_SIZE - 1 - i);
            i += 1;
        }
        PermutationTable {
            forward,
            inverse: forward,
        }
    };

    /// Builds a table from explicit `(input, output)` pairs in any order.
    ///
    /// # Errors
    /// - [`RotorCryptError::TableLength`] unless exactly 26 pairs are given.
    /// - [`RotorCryptError::InvalidTableSymbol`] if a pair holds the sentinel.
    /// - [`RotorCryptError::DuplicateMapping`] if a symbol repeats in a column.
    pub fn from_pairs(pairs: &[(Symbol, Symbol)]) -> Result<Self> {
        if pairs.len() != ALPHABET_SIZE {
            return Err(RotorCryptError::TableLength(pairs.len()));
        }

        let mut acc = MappingAccumulator::new();
        let mut forward = [Symbol::INVALID; ALPHABET_SIZE];
        let mut inverse = [Symbol::INVALID; ALPHABET_SIZE];
        for (i, &(input, output)) in pairs.iter().enumerate() {
            let (Some(from), Some(to)) = (input.index(), output.index()) else {
                return Err(RotorCryptError::InvalidTableSymbol(i));
            };
            if !acc.insert(input, output) {
                return Err(RotorCryptError::DuplicateMapping(i));
            }
            forward[from] = output;
            inverse[to] = input;
        }
        debug_assert!(acc.is_complete());

        Ok(PermutationTable { forward, inverse })
    }

    /// Builds a positional table: the symbol at index `i` maps to `outputs[i]`.
    ///
    /// # Errors
    /// Same as [`from_pairs`](Self::from_pairs).
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{PermutationTable, Symbol};
    ///
    /// let mut outputs = Symbol::ALL;
    /// outputs.rotate_left(1);
    /// let table = PermutationTable::from_outputs(&outputs).unwrap();
    /// assert_eq!(table.map(Symbol::A), Symbol::B);
    /// assert_eq!(table.unmap(Symbol::A), Symbol::Z);
    ///
    /// outputs[3] = Symbol::B;
    /// assert!(PermutationTable::from_outputs(&outputs).is_err());
    /// ```
    pub fn from_outputs(outputs: &[Symbol]) -> Result<Self> {
        let pairs: Vec<(Symbol, Symbol)> = outputs
            .iter()
            .enumerate()
            .map(|(i, &out)| (Symbol::from_index(i), out))
            .collect();
        Self::from_pairs(&pairs)
    }

    /// Forward lookup. The sentinel maps to itself.
    pub fn map(&self, symbol: Symbol) -> Symbol {
        match symbol.index() {
            Some(i) => self.forward[i],
            None => Symbol::INVALID,
        }
    }

    /// Inverse lookup: the input that maps to `symbol`.
    pub fn unmap(&self, symbol: Symbol) -> Symbol {
        match symbol.index() {
            Some(i) => self.inverse[i],
            None => Symbol::INVALID,
        }
    }

    /// Output column in canonical input order.
    pub fn outputs(&self) -> &[Symbol; ALPHABET_SIZE] {
        &self.forward
    }

    /// Output stored at table position `position` (taken modulo 26).
    pub fn output_at(&self, position: usize) -> Symbol {
        self.forward[position % ALPHABET_SIZE]
    }

    /// Returns `true` if applying the table twice is the identity.
    pub fn is_involution(&self) -> bool {
        self.forward == self.inverse
    }
}

impl Default for PermutationTable {
    fn default() -> Self {
        PermutationTable::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shifted_outputs(by: usize) -> Vec<Symbol> {
        Symbol::ALL.iter().map(|s| s.rotate(by)).collect()
    }

    #[test]
    fn test_canonical_tables() {
        for (i, s) in Symbol::ALL.into_iter().enumerate() {
            assert_eq!(PermutationTable::IDENTITY.map(s), s);
            assert_eq!(
                PermutationTable::INVERSE.map(s),
                Symbol::from_index(ALPHABET_SIZE - 1 - i)
            );
        }
        assert!(PermutationTable::IDENTITY.is_involution());
        assert!(PermutationTable::INVERSE.is_involution());
    }

    #[test]
    fn test_outputs_are_a_permutation() {
        let table = PermutationTable::from_outputs(&shifted_outputs(7)).unwrap();
        let mut seen = table.outputs().to_vec();
        seen.sort();
        assert_eq!(seen, Symbol::ALL.to_vec());
        assert!(!table.is_involution());
    }

    #[test]
    fn test_unmap_inverts_map() {
        let table = PermutationTable::from_outputs(&shifted_outputs(11)).unwrap();
        for s in Symbol::ALL {
            assert_eq!(table.unmap(table.map(s)), s);
            assert_eq!(table.map(table.unmap(s)), s);
        }
    }

    #[test]
    fn test_repeated_output_rejected() {
        let mut outputs = shifted_outputs(0);
        outputs[25] = Symbol::A;
        assert_eq!(
            PermutationTable::from_outputs(&outputs),
            Err(RotorCryptError::DuplicateMapping(25))
        );
    }

    #[test]
    fn test_repeated_input_rejected() {
        let mut pairs: Vec<(Symbol, Symbol)> = Symbol::ALL.iter().map(|&s| (s, s)).collect();
        pairs[4] = (Symbol::A, Symbol::E);
        assert_eq!(
            PermutationTable::from_pairs(&pairs),
            Err(RotorCryptError::DuplicateMapping(4))
        );
    }

    #[test]
    fn test_invalid_symbol_rejected() {
        let mut outputs = shifted_outputs(0);
        outputs[9] = Symbol::INVALID;
        assert_eq!(
            PermutationTable::from_outputs(&outputs),
            Err(RotorCryptError::InvalidTableSymbol(9))
        );
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert_eq!(
            PermutationTable::from_outputs(&Symbol::ALL[..25]),
            Err(RotorCryptError::TableLength(25))
        );
        assert_eq!(
            PermutationTable::from_pairs(&[]),
            Err(RotorCryptError::TableLength(0))
        );
    }

    #[test]
    fn test_pairs_in_any_order() {
        let pairs: Vec<(Symbol, Symbol)> = Symbol::ALL
            .iter()
            .rev()
            .map(|&s| (s, s.rotate(3)))
            .collect();
        let table = PermutationTable::from_pairs(&pairs).unwrap();
        assert_eq!(table.map(Symbol::X), Symbol::A);
        assert_eq!(table.output_at(0), Symbol::D);
    }
}
