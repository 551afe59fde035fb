//! Symbol: one position of the fixed 26-letter alphabet.
//!
//! Every valid symbol is a compile-time constant. The [`Symbol::INVALID`]
//! sentinel stands in for "no letter" (an unplugged wire end, an unmapped
//! keyboard character) and compares unequal to every valid symbol.

use std::fmt;

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Canonical index reserved for the invalid sentinel.
const INVALID_INDEX: u8 = u8::MAX;

/// One letter position of the alphabet, or the invalid sentinel.
///
/// Equality is structural on the canonical index. Display forms
/// (upper/lower case) only matter for text I/O.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u8);

impl Symbol {
    /// Sentinel that maps to no alphabet position.
    pub const INVALID: Symbol = Symbol(INVALID_INDEX);

    pub const A: Symbol = Symbol(0);
    pub const B: Symbol = Symbol(1);
    pub const C: Symbol = Symbol(2);
    pub const D: Symbol = Symbol(3);
    pub const E: Symbol = Symbol(4);
    pub const F: Symbol = Symbol(5);
    pub const G: Symbol = Symbol(6);
    pub const H: Symbol = Symbol(7);
    pub const I: Symbol = Symbol(8);
    pub const J: Symbol = Symbol(9);
    pub const K: Symbol = Symbol(10);
    pub const L: Symbol = Symbol(11);
    pub const M: Symbol = Symbol(12);
    pub const N: Symbol = Symbol(13);
    pub const O: Symbol = Symbol(14);
    pub const P: Symbol = Symbol(15);
    pub const Q: Symbol = Symbol(16);
    pub const R: Symbol = Symbol(17);
    pub const S: Symbol = Symbol(18);
    pub const T: Symbol = Symbol(19);
    pub const U: Symbol = Symbol(20);
    pub const V: Symbol = Symbol(21);
    pub const W: Symbol = Symbol(22);
    pub const X: Symbol = Symbol(23);
    pub const Y: Symbol = Symbol(24);
    pub const Z: Symbol = Symbol(25);

    /// All 26 valid symbols in canonical order.
    pub const ALL: [Symbol; ALPHABET_SIZE] = {
        let mut all = [Symbol(0); ALPHABET_SIZE];
        let mut i = 0;
        while i < ALPHABET_SIZE {
            all[i] = Symbol(i as u8);
            i += 1;
        }
        all
    };

    /// Returns the symbol at canonical index `index`, or [`Symbol::INVALID`]
    /// when `index >= 26`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Symbol;
    ///
    /// assert_eq!(Symbol::from_index(2), Symbol::C);
    /// assert_eq!(Symbol::from_index(26), Symbol::INVALID);
    /// ```
    pub const fn from_index(index: usize) -> Symbol {
        if index < ALPHABET_SIZE {
            Symbol(index as u8)
        } else {
            Symbol::INVALID
        }
    }

    /// Returns the symbol whose upper- or lower-case form is `c`, or
    /// [`Symbol::INVALID`] for any other character.
    pub const fn from_char(c: char) -> Symbol {
        match c {
            'A'..='Z' => Symbol(c as u8 - b'A'),
            'a'..='z' => Symbol(c as u8 - b'a'),
            _ => Symbol::INVALID,
        }
    }

    /// Returns `true` for the 26 alphabet symbols.
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < ALPHABET_SIZE
    }

    /// Canonical index in `0..26`, or `None` for the sentinel.
    pub const fn index(self) -> Option<usize> {
        if self.is_valid() {
            Some(self.0 as usize)
        } else {
            None
        }
    }

    /// Upper-case display form.
    pub const fn upper(self) -> Option<char> {
        if self.is_valid() {
            Some((b'A' + self.0) as char)
        } else {
            None
        }
    }

    /// Lower-case display form.
    pub const fn lower(self) -> Option<char> {
        if self.is_valid() {
            Some((b'a' + self.0) as char)
        } else {
            None
        }
    }

    /// One-hot slot of this symbol in a 26-bit set; zero for the sentinel.
    pub(crate) const fn bit(self) -> u32 {
        if self.is_valid() {
            1 << self.0
        } else {
            0
        }
    }

    /// Moves `steps` positions forward around the alphabet.
    /// The sentinel stays invalid.
    pub(crate) const fn rotate(self, steps: usize) -> Symbol {
        if self.is_valid() {
            Symbol(((self.0 as usize + steps) % ALPHABET_SIZE) as u8)
        } else {
            self
        }
    }

    /// Moves `steps` positions backward around the alphabet.
    pub(crate) const fn unrotate(self, steps: usize) -> Symbol {
        self.rotate(ALPHABET_SIZE - steps % ALPHABET_SIZE)
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Symbol::INVALID
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upper() {
            Some(c) => write!(f, "Symbol({})", c),
            None => write!(f, "Symbol(Invalid)"),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upper() {
            Some(c) => write!(f, "{}", c),
            None => write!(f, "?"),
        }
    }
}
