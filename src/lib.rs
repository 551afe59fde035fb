//! rotorcrypt: electromechanical rotor cipher machine simulator.
//!
//! Simulates the signal path of a three-rotor reflecting cipher machine over
//! a fixed 26-letter alphabet. Not a cryptographically strong cipher.
//!
//! # Architecture
//!
//! ```text
//! Symbol            (one of 26 letters, or the invalid sentinel)
//!     ↓
//! Wire / PermutationTable   (2-cycle swap / validated bijection)
//!     ↓
//! Plugboard         (up to 10 disjoint wires)
//! Rotor, Reflector  (rotating / stationary tables)
//!     ↓
//! RotorAssembly     (entry wheel → 3 rotors → reflector → 3 rotors → entry wheel)
//!     ↓
//! CipherEngine      (plugboard → step → assembly → plugboard)
//! ```
//!
//! # Examples
//!
//! Encipher and decipher a message:
//!
//! ```
//! use rotorcrypt::config::MachineConfig;
//!
//! let config = MachineConfig::new([
//!     "EKMFLGDQVZNTOWYHXUSPAIBRCJQ1",
//!     "AJDKSIRUXBLHWTMCQGZNPYFVOEE2",
//!     "BDFHJLCPRTXVZNYEIWGAKMUSQOV3",
//! ])
//! .with_reflector("YRUHQSLDPXNGOKMIEBFZCWVJAT")
//! .with_plugboard("ANDUFQ");
//!
//! let mut machine = config.build().unwrap();
//! let ciphertext = machine.process_text("ATTACKATDAWN").unwrap();
//! assert_ne!(ciphertext, "ATTACKATDAWN");
//!
//! machine.reset();
//! assert_eq!(machine.process_text(&ciphertext).unwrap(), "ATTACKATDAWN");
//! ```
//!
//! Build the pieces by hand:
//!
//! ```
//! use rotorcrypt::{CipherEngine, Plugboard, PermutationTable, Reflector, Rotor, RotorAssembly, Symbol};
//!
//! let rotor = Rotor::new(PermutationTable::IDENTITY, Symbol::Q, 0).unwrap();
//! let assembly = RotorAssembly::new(Reflector::IDENTITY, [rotor; 3], Reflector::INVERSE);
//! let mut machine = CipherEngine::new(Plugboard::new(), assembly);
//!
//! assert_eq!(machine.process_text("A").unwrap(), "Z");
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod error;

mod keyboard;
mod machine;
mod plugboard;
pub mod rotor;
mod symbol;
mod table;
pub(crate) mod utils;
mod wire;

pub use error::{ErrorKind, RotorCryptError};
pub use keyboard::Keyboard;
pub use machine::CipherEngine;
pub use plugboard::{Plugboard, PLUGBOARD_CAPACITY};
pub use rotor::assembly::{RotorAssembly, ROTOR_COUNT};
pub use rotor::reflector::Reflector;
pub use rotor::Rotor;
pub use symbol::{Symbol, ALPHABET_SIZE};
pub use table::PermutationTable;
pub use wire::Wire;
