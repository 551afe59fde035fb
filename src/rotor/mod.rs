//! Rotor: a rotating permutation with one notch.
//!
//! A rotor at offset `o` shifts the incoming contact forward by `o`, maps it
//! through the fixed internal wiring and shifts the result back by `o`. The
//! return path uses the inverse wiring the same way, so a signal that goes
//! in and comes back out through the same rotor position is restored.

pub mod assembly;
pub mod reflector;

use crate::error::{Result, RotorCryptError};
use crate::symbol::{Symbol, ALPHABET_SIZE};
use crate::table::PermutationTable;

/// A rotating wiring table with a current offset and a single notch.
///
/// Owned by exactly one slot of a [`RotorAssembly`](assembly::RotorAssembly).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotor {
    table: PermutationTable,
    notch: Symbol,
    offset: usize,
    start: usize,
}

impl Default for Rotor {
    /// Identity wiring, notch at `A`, offset 0.
    fn default() -> Self {
        Rotor {
            table: PermutationTable::IDENTITY,
            notch: Symbol::A,
            offset: 0,
            start: 0,
        }
    }
}

impl Rotor {
    /// Creates a rotor at starting offset `offset`.
    ///
    /// `notch` may be [`Symbol::INVALID`] for a rotor that never carries.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::OffsetOutOfRange`] if `offset >= 26`.
    pub fn new(table: PermutationTable, notch: Symbol, offset: usize) -> Result<Self> {
        if offset >= ALPHABET_SIZE {
            return Err(RotorCryptError::OffsetOutOfRange(offset));
        }
        Ok(Rotor {
            table,
            notch,
            offset,
            start: offset,
        })
    }

    /// Creates a rotor from a positional output column.
    ///
    /// # Errors
    /// Any error of [`PermutationTable::from_outputs`] or [`Rotor::new`].
    pub fn from_outputs(outputs: &[Symbol], notch: Symbol, offset: usize) -> Result<Self> {
        Self::new(PermutationTable::from_outputs(outputs)?, notch, offset)
    }

    /// Internal wiring.
    pub fn table(&self) -> &PermutationTable {
        &self.table
    }

    /// Notch symbol.
    pub fn notch(&self) -> Symbol {
        self.notch
    }

    /// Current offset in `0..26`.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Offset the rotor was built with; [`reset`](Self::reset) returns here.
    pub fn start_position(&self) -> usize {
        self.start
    }

    /// Turns the rotor to `offset` without touching the starting offset.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::OffsetOutOfRange`] if `offset >= 26`.
    pub fn set_position(&mut self, offset: usize) -> Result<()> {
        if offset >= ALPHABET_SIZE {
            return Err(RotorCryptError::OffsetOutOfRange(offset));
        }
        self.offset = offset;
        Ok(())
    }

    /// Returns the rotor to its starting offset.
    pub fn reset(&mut self) {
        self.offset = self.start;
    }

    /// Maps `symbol` on the way towards the reflector.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidSymbol`] for the sentinel.
    pub fn process(&self, symbol: Symbol) -> Result<Symbol> {
        if !symbol.is_valid() {
            return Err(RotorCryptError::InvalidSymbol);
        }
        let contact = symbol.rotate(self.offset);
        Ok(self.table.map(contact).unrotate(self.offset))
    }

    /// Maps `symbol` on the way back from the reflector.
    ///
    /// Inverse of [`process`](Self::process) at the same offset.
    pub fn process_inverse(&self, symbol: Symbol) -> Result<Symbol> {
        if !symbol.is_valid() {
            return Err(RotorCryptError::InvalidSymbol);
        }
        let contact = symbol.rotate(self.offset);
        Ok(self.table.unmap(contact).unrotate(self.offset))
    }

    /// Steps the rotor one position.
    ///
    /// # Returns
    /// `true` if the table entry at the offset *before* stepping is the
    /// notch, meaning the next rotor in the chain should also step.
    pub fn advance(&mut self) -> bool {
        let crossed = self.table.output_at(self.offset) == self.notch;
        self.offset = (self.offset + 1) % ALPHABET_SIZE;
        crossed
    }
}
