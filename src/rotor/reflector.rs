//! Reflector: a stationary wiring table.
//!
//! The same shape serves as the entry wheel at the keyboard end of the
//! rotor stack and as the turnaround wheel at the far end.

use crate::error::{Result, RotorCryptError};
use crate::symbol::{Symbol, ALPHABET_SIZE};
use crate::table::PermutationTable;
use crate::wire::Wire;

/// A [`PermutationTable`] that never moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reflector {
    table: PermutationTable,
}

impl Reflector {
    /// Wheel that leaves every symbol unchanged.
    pub const IDENTITY: Reflector = Reflector {
        table: PermutationTable::IDENTITY,
    };

    /// Wheel that maps each symbol to its alphabetical mirror (`A <-> Z`).
    pub const INVERSE: Reflector = Reflector {
        table: PermutationTable::INVERSE,
    };

    /// Wraps an already validated table.
    pub fn new(table: PermutationTable) -> Self {
        Reflector { table }
    }

    /// Creates a wheel from a positional output column.
    ///
    /// # Errors
    /// Any error of [`PermutationTable::from_outputs`].
    pub fn from_outputs(outputs: &[Symbol]) -> Result<Self> {
        Ok(Reflector::new(PermutationTable::from_outputs(outputs)?))
    }

    /// Creates an involutive reflector from 13 disjoint wires covering the
    /// whole alphabet.
    ///
    /// # Errors
    /// - [`RotorCryptError::TableLength`] unless exactly 13 wires are given.
    /// - [`RotorCryptError::InvalidTableSymbol`] if a wire is unplugged.
    /// - [`RotorCryptError::DuplicateMapping`] if two wires share an end.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Reflector, Symbol, Wire};
    ///
    /// let wires: Vec<Wire> = (0..13)
    ///     .map(|i| Wire::new(Symbol::from_index(2 * i), Symbol::from_index(2 * i + 1)).unwrap())
    ///     .collect();
    /// let reflector = Reflector::from_wires(&wires).unwrap();
    /// assert_eq!(reflector.process(Symbol::C).unwrap(), Symbol::D);
    /// assert!(reflector.is_involution());
    /// ```
    pub fn from_wires(wires: &[Wire]) -> Result<Self> {
        let pairs: Vec<(Symbol, Symbol)> = wires
            .iter()
            .flat_map(|w| {
                let (a, b) = w.ends();
                [(a, b), (b, a)]
            })
            .collect();
        if pairs.len() != ALPHABET_SIZE {
            return Err(RotorCryptError::TableLength(pairs.len()));
        }
        Ok(Reflector::new(PermutationTable::from_pairs(&pairs)?))
    }

    /// Wiring table.
    pub fn table(&self) -> &PermutationTable {
        &self.table
    }

    /// Returns `true` if the wheel is its own inverse.
    pub fn is_involution(&self) -> bool {
        self.table.is_involution()
    }

    /// Maps `symbol` forward through the wheel.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::ReflectorMiss`] if `symbol` is not in the
    /// table, which only the sentinel can cause.
    pub fn process(&self, symbol: Symbol) -> Result<Symbol> {
        match self.table.map(symbol) {
            out if out.is_valid() => Ok(out),
            _ => Err(RotorCryptError::ReflectorMiss),
        }
    }

    /// Maps `symbol` backward through the wheel.
    pub fn process_inverse(&self, symbol: Symbol) -> Result<Symbol> {
        match self.table.unmap(symbol) {
            out if out.is_valid() => Ok(out),
            _ => Err(RotorCryptError::ReflectorMiss),
        }
    }
}
