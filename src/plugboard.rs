//! Plugboard: up to [`PLUGBOARD_CAPACITY`] disjoint wires.
//!
//! The plugboard is applied once on the way into the rotor assembly and once
//! on the way out. Because wires never share an end, at most one wire can
//! match any symbol.

use tracing::debug;

use crate::error::{Result, RotorCryptError};
use crate::symbol::Symbol;
use crate::wire::Wire;

/// Maximum number of wires the plugboard accepts.
pub const PLUGBOARD_CAPACITY: usize = 10;

/// Ordered collection of disjoint [`Wire`]s.
///
/// Slots `0..wire_count()` hold live wires; the rest are unplugged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Plugboard {
    wires: [Wire; PLUGBOARD_CAPACITY],
    wire_count: usize,
}

impl Plugboard {
    /// Creates an empty plugboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live wires.
    pub fn wire_count(&self) -> usize {
        self.wire_count
    }

    /// Live wires in slot order.
    pub fn wires(&self) -> &[Wire] {
        &self.wires[..self.wire_count]
    }

    /// Returns `true` if `symbol` is an end of a live wire.
    pub fn is_connected(&self, symbol: Symbol) -> bool {
        self.wires().iter().any(|w| w.touches(symbol))
    }

    /// Plugs a new wire between `a` and `b`.
    ///
    /// # Errors
    /// - [`RotorCryptError::PlugboardFull`] if all slots are taken.
    /// - [`RotorCryptError::SlotOccupied`] if `a` or `b` is already connected.
    /// - Any error of [`Wire::new`] (half-plugged or self-plugged wire).
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Plugboard, Symbol};
    ///
    /// let mut board = Plugboard::new();
    /// board.connect(Symbol::A, Symbol::N).unwrap();
    /// assert_eq!(board.process(Symbol::N).unwrap(), (Symbol::A, true));
    /// assert!(board.connect(Symbol::A, Symbol::C).is_err());
    /// ```
    pub fn connect(&mut self, a: Symbol, b: Symbol) -> Result<()> {
        if self.wire_count >= PLUGBOARD_CAPACITY {
            return Err(RotorCryptError::PlugboardFull(PLUGBOARD_CAPACITY));
        }

        for end in [a, b] {
            if self.is_connected(end) {
                return Err(RotorCryptError::SlotOccupied(end.upper().unwrap_or('?')));
            }
        }

        let wire = Wire::new(a, b)?;
        if wire.is_unplugged() {
            // Two invalid ends: nothing to plug.
            return Err(RotorCryptError::HalfPluggedWire);
        }

        self.wires[self.wire_count] = wire;
        self.wire_count += 1;
        debug!(%wire, wire_count = self.wire_count, "plugboard wire connected");
        Ok(())
    }

    /// Removes the wire attached to `a`.
    ///
    /// No-op if `a` is invalid, the board is empty, or `a` is not connected.
    /// The last live wire is moved into the freed slot, so slot order is not
    /// preserved.
    pub fn disconnect(&mut self, a: Symbol) {
        if !a.is_valid() || self.wire_count == 0 {
            return;
        }

        if let Some(i) = self.wires().iter().position(|w| w.touches(a)) {
            let removed = self.wires[i];
            let last = self.wire_count - 1;
            self.wires.swap(i, last);
            self.wires[last] = Wire::UNPLUGGED;
            self.wire_count = last;
            debug!(wire = %removed, wire_count = self.wire_count, "plugboard wire disconnected");
        }
    }

    /// Unplugs every wire.
    pub fn disconnect_all(&mut self) {
        self.wires = [Wire::UNPLUGGED; PLUGBOARD_CAPACITY];
        self.wire_count = 0;
    }

    /// Passes `symbol` through the live wires in slot order.
    ///
    /// # Returns
    /// The swapped symbol and `true` on the first match, otherwise `symbol`
    /// unchanged and `false`.
    pub fn process(&self, symbol: Symbol) -> Result<(Symbol, bool)> {
        for wire in self.wires() {
            let (out, matched) = wire.process(symbol)?;
            if matched {
                return Ok((out, true));
            }
        }
        Ok((symbol, false))
    }
}
