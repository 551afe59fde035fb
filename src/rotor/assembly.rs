//! RotorAssembly: entry wheel, three rotors and a reflector.
//!
//! ```text
//! entry → rotor[0] → rotor[1] → rotor[2] → reflector
//!                                              ↓
//! entry ← rotor[0] ← rotor[1] ← rotor[2] ←─────┘
//! ```
//!
//! `rotor[0]` is the fastest rotor and steps on every symbol. The carry
//! reaches `rotor[2]` only when `rotor[0]` and `rotor[1]` both cross their
//! notch in the same step; there is no double-stepping.

use tracing::trace;

use super::reflector::Reflector;
use super::Rotor;
use crate::error::Result;
use crate::symbol::Symbol;

/// Number of rotating rotors in an assembly.
pub const ROTOR_COUNT: usize = 3;

/// Fixed chain of an entry wheel, [`ROTOR_COUNT`] rotors and a reflector.
///
/// Slot order never changes; to swap rotors, build a new assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotorAssembly {
    entry: Reflector,
    rotors: [Rotor; ROTOR_COUNT],
    reflector: Reflector,
}

impl Default for RotorAssembly {
    /// Pass-through entry wheel, three default rotors, inverse reflector.
    fn default() -> Self {
        RotorAssembly::new(
            Reflector::IDENTITY,
            [Rotor::default(); ROTOR_COUNT],
            Reflector::INVERSE,
        )
    }
}

impl RotorAssembly {
    /// Builds an assembly; `rotors[0]` is the fastest rotor.
    pub fn new(entry: Reflector, rotors: [Rotor; ROTOR_COUNT], reflector: Reflector) -> Self {
        RotorAssembly {
            entry,
            rotors,
            reflector,
        }
    }

    /// Stationary wheel at the keyboard end.
    pub fn entry_wheel(&self) -> &Reflector {
        &self.entry
    }

    /// Rotors, fastest first.
    pub fn rotors(&self) -> &[Rotor; ROTOR_COUNT] {
        &self.rotors
    }

    /// Turnaround wheel.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// Current offsets, fastest rotor first.
    pub fn positions(&self) -> [usize; ROTOR_COUNT] {
        [
            self.rotors[0].position(),
            self.rotors[1].position(),
            self.rotors[2].position(),
        ]
    }

    /// Steps the rotor stack once.
    ///
    /// The first rotor always steps. Each following rotor steps only while
    /// every rotor before it reported a notch crossing in this call.
    ///
    /// # Returns
    /// How many rotors stepped (1 to 3).
    pub fn advance(&mut self) -> usize {
        let mut stepped = 0;
        for rotor in self.rotors.iter_mut() {
            stepped += 1;
            if !rotor.advance() {
                break;
            }
        }
        trace!(stepped, positions = ?self.positions(), "rotor assembly advanced");
        stepped
    }

    /// Sends `symbol` through the whole current loop at the current offsets.
    ///
    /// Every stage is always applied; the return path runs through the
    /// inverse of each rotor and of the entry wheel.
    pub fn process(&self, symbol: Symbol) -> Result<Symbol> {
        let mut signal = self.entry.process(symbol)?;
        for rotor in &self.rotors {
            signal = rotor.process(signal)?;
        }
        signal = self.reflector.process(signal)?;
        for rotor in self.rotors.iter().rev() {
            signal = rotor.process_inverse(signal)?;
        }
        self.entry.process_inverse(signal)
    }

    /// Returns every rotor to its starting offset.
    pub fn reset(&mut self) {
        for rotor in self.rotors.iter_mut() {
            rotor.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RotorCryptError;
    use crate::symbol::ALPHABET_SIZE;
    use crate::table::PermutationTable;

    fn identity_rotor(notch: Symbol, offset: usize) -> Rotor {
        Rotor::new(PermutationTable::IDENTITY, notch, offset).unwrap()
    }

    fn shifted_rotor(by: usize, notch: Symbol, offset: usize) -> Rotor {
        let outputs: Vec<Symbol> = Symbol::ALL.iter().map(|s| s.rotate(by)).collect();
        Rotor::from_outputs(&outputs, notch, offset).unwrap()
    }

    #[test]
    fn test_first_rotor_always_steps() {
        let mut assembly = RotorAssembly::new(
            Reflector::IDENTITY,
            [
                identity_rotor(Symbol::Q, 0),
                identity_rotor(Symbol::E, 0),
                identity_rotor(Symbol::V, 0),
            ],
            Reflector::INVERSE,
        );
        assert_eq!(assembly.advance(), 1);
        assert_eq!(assembly.positions(), [1, 0, 0]);
    }

    #[test]
    fn test_notch_cascade_reaches_third_rotor() {
        // Identity wiring: the table entry at offset n is the n-th letter.
        let mut assembly = RotorAssembly::new(
            Reflector::IDENTITY,
            [
                identity_rotor(Symbol::Q, 16),
                identity_rotor(Symbol::E, 4),
                identity_rotor(Symbol::V, 9),
            ],
            Reflector::INVERSE,
        );
        assert_eq!(assembly.advance(), 3);
        assert_eq!(assembly.positions(), [17, 5, 10]);
    }

    #[test]
    fn test_carry_stops_at_second_rotor() {
        let mut assembly = RotorAssembly::new(
            Reflector::IDENTITY,
            [
                identity_rotor(Symbol::Q, 16),
                identity_rotor(Symbol::E, 3),
                identity_rotor(Symbol::V, 9),
            ],
            Reflector::INVERSE,
        );
        assert_eq!(assembly.advance(), 2);
        assert_eq!(assembly.positions(), [17, 4, 9]);
    }

    #[test]
    fn test_odometer_period() {
        let mut assembly = RotorAssembly::new(
            Reflector::IDENTITY,
            [
                identity_rotor(Symbol::Z, 0),
                identity_rotor(Symbol::Z, 0),
                identity_rotor(Symbol::Z, 0),
            ],
            Reflector::INVERSE,
        );
        for _ in 0..ALPHABET_SIZE {
            assembly.advance();
        }
        assert_eq!(assembly.positions(), [0, 1, 0]);
        for _ in 0..ALPHABET_SIZE * (ALPHABET_SIZE - 1) {
            assembly.advance();
        }
        assert_eq!(assembly.positions(), [0, 0, 1]);
    }

    #[test]
    fn test_identity_stack_with_inverse_reflector() {
        let mut assembly = RotorAssembly::new(
            Reflector::IDENTITY,
            [
                identity_rotor(Symbol::Q, 0),
                identity_rotor(Symbol::Q, 0),
                identity_rotor(Symbol::Q, 0),
            ],
            Reflector::INVERSE,
        );
        assembly.advance();
        assert_eq!(assembly.process(Symbol::A), Ok(Symbol::Z));
        assert_eq!(assembly.process(Symbol::Z), Ok(Symbol::A));
    }

    #[test]
    fn test_process_is_involution_at_every_position() {
        let mut outputs = Symbol::ALL;
        outputs.swap(0, 7);
        outputs.swap(3, 19);
        let mut assembly = RotorAssembly::new(
            Reflector::from_outputs(&outputs).unwrap(),
            [
                shifted_rotor(3, Symbol::C, 2),
                shifted_rotor(11, Symbol::K, 20),
                shifted_rotor(5, Symbol::X, 7),
            ],
            Reflector::INVERSE,
        );
        for _ in 0..60 {
            assembly.advance();
            for s in Symbol::ALL {
                let out = assembly.process(s).unwrap();
                assert_ne!(out, s, "no symbol may encipher to itself");
                assert_eq!(assembly.process(out), Ok(s));
            }
        }
    }

    #[test]
    fn test_invalid_symbol_misses_entry_wheel() {
        let assembly = RotorAssembly::default();
        assert_eq!(
            assembly.process(Symbol::INVALID),
            Err(RotorCryptError::ReflectorMiss)
        );
    }

    #[test]
    fn test_reset() {
        let mut assembly = RotorAssembly::new(
            Reflector::IDENTITY,
            [
                identity_rotor(Symbol::B, 1),
                identity_rotor(Symbol::C, 2),
                identity_rotor(Symbol::D, 3),
            ],
            Reflector::INVERSE,
        );
        for _ in 0..100 {
            assembly.advance();
        }
        assert_ne!(assembly.positions(), [1, 2, 3]);
        assembly.reset();
        assert_eq!(assembly.positions(), [1, 2, 3]);
    }
}
