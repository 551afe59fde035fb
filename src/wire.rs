//! Wire: a single two-way swap between two symbols.
//!
//! Wires make up the plugboard and can also describe a reflector as a list
//! of pairs (see [`Reflector::from_wires`](crate::Reflector::from_wires)).

use std::fmt;

use crate::error::{Result, RotorCryptError};
use crate::symbol::Symbol;

/// A 2-cycle between two distinct valid symbols, or unplugged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wire {
    end_a: Symbol,
    end_b: Symbol,
}

impl Wire {
    /// A wire with both ends unplugged. Never swaps anything.
    pub const UNPLUGGED: Wire = Wire {
        end_a: Symbol::INVALID,
        end_b: Symbol::INVALID,
    };

    /// Creates a wire connecting `end_a` and `end_b`.
    ///
    /// Passing two invalid ends yields [`Wire::UNPLUGGED`].
    ///
    /// # Errors
    /// - [`RotorCryptError::HalfPluggedWire`] if exactly one end is invalid.
    /// - [`RotorCryptError::SelfPluggedWire`] if both ends are the same symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Symbol, Wire};
    ///
    /// let wire = Wire::new(Symbol::A, Symbol::Q).unwrap();
    /// assert_eq!(wire.process(Symbol::Q).unwrap(), (Symbol::A, true));
    /// assert!(Wire::new(Symbol::A, Symbol::A).is_err());
    /// ```
    pub fn new(end_a: Symbol, end_b: Symbol) -> Result<Self> {
        match (end_a.is_valid(), end_b.is_valid()) {
            (false, false) => Ok(Wire::UNPLUGGED),
            (true, true) if end_a == end_b => Err(RotorCryptError::SelfPluggedWire(
                end_a.upper().unwrap_or('?'),
            )),
            (true, true) => Ok(Wire { end_a, end_b }),
            _ => Err(RotorCryptError::HalfPluggedWire),
        }
    }

    /// Both ends of the wire.
    pub fn ends(&self) -> (Symbol, Symbol) {
        (self.end_a, self.end_b)
    }

    /// Returns `true` when neither end is plugged.
    pub fn is_unplugged(&self) -> bool {
        !self.end_a.is_valid() && !self.end_b.is_valid()
    }

    /// Returns `true` if `symbol` is one of the plugged ends.
    pub fn touches(&self, symbol: Symbol) -> bool {
        symbol.is_valid() && (self.end_a == symbol || self.end_b == symbol)
    }

    /// Swaps `symbol` with the opposite end if it sits on this wire.
    ///
    /// # Returns
    /// The (possibly swapped) symbol and whether the wire matched.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::CorruptWire`] if exactly one end is plugged.
    /// Construction rules out that state.
    pub fn process(&self, symbol: Symbol) -> Result<(Symbol, bool)> {
        if self.end_a.is_valid() != self.end_b.is_valid() {
            return Err(RotorCryptError::CorruptWire);
        }
        if self.is_unplugged() || !symbol.is_valid() {
            return Ok((symbol, false));
        }
        if symbol == self.end_a {
            Ok((self.end_b, true))
        } else if symbol == self.end_b {
            Ok((self.end_a, true))
        } else {
            Ok((symbol, false))
        }
    }
}

impl Default for Wire {
    fn default() -> Self {
        Wire::UNPLUGGED
    }
}

impl fmt::Display for Wire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unplugged() {
            write!(f, "Unplugged")
        } else {
            write!(f, "{} <-> {}", self.end_a, self.end_b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unplugged() {
        assert_eq!(Wire::default(), Wire::UNPLUGGED);
        assert_eq!(Wire::new(Symbol::INVALID, Symbol::INVALID), Ok(Wire::UNPLUGGED));
    }

    #[test]
    fn test_unplugged_passes_through() {
        for s in Symbol::ALL {
            assert_eq!(Wire::UNPLUGGED.process(s), Ok((s, false)));
        }
    }

    #[test]
    fn test_half_plugged_rejected() {
        assert_eq!(
            Wire::new(Symbol::INVALID, Symbol::A),
            Err(RotorCryptError::HalfPluggedWire)
        );
        assert_eq!(
            Wire::new(Symbol::B, Symbol::INVALID),
            Err(RotorCryptError::HalfPluggedWire)
        );
    }

    #[test]
    fn test_self_plugged_rejected() {
        assert_eq!(
            Wire::new(Symbol::K, Symbol::K),
            Err(RotorCryptError::SelfPluggedWire('K'))
        );
    }

    #[test]
    fn test_corrupt_wire_process_fails() {
        let wire = Wire {
            end_a: Symbol::A,
            end_b: Symbol::INVALID,
        };
        assert_eq!(wire.process(Symbol::A), Err(RotorCryptError::CorruptWire));
    }

    #[test]
    fn test_every_wire_swaps_only_its_ends() {
        for a in Symbol::ALL {
            for b in Symbol::ALL.into_iter().filter(|&b| b != a) {
                let wire = Wire::new(a, b).unwrap();
                for s in Symbol::ALL {
                    let expected = if s == a {
                        (b, true)
                    } else if s == b {
                        (a, true)
                    } else {
                        (s, false)
                    };
                    assert_eq!(wire.process(s), Ok(expected));
                }
            }
        }
    }

    #[test]
    fn test_display() {
        let wire = Wire::new(Symbol::D, Symbol::U).unwrap();
        assert_eq!(format!("{}", wire), "D <-> U");
        assert_eq!(format!("{}", Wire::UNPLUGGED), "Unplugged");
    }
}
