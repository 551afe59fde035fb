//! Keyboard adapter between text characters and [`Symbol`]s.

use crate::symbol::Symbol;

/// Converts characters to symbols on the way in and back on the way out.
///
/// Output is always upper case, like the lamps of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Keyboard;

impl Keyboard {
    /// Creates a keyboard.
    pub fn new() -> Self {
        Keyboard
    }

    /// Symbol for `key`, or [`Symbol::INVALID`] if the key does not exist.
    pub fn press(&self, key: char) -> Symbol {
        Symbol::from_char(key)
    }

    /// Lamp character for `symbol`; `None` for the sentinel.
    pub fn show(&self, symbol: Symbol) -> Option<char> {
        symbol.upper()
    }
}
