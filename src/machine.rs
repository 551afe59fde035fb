//! CipherEngine: the complete machine.
//!
//! Per symbol: plugboard, rotor step, rotor assembly round trip, plugboard.
//! The rotors step *before* the signal passes, so the first symbol of a
//! message is enciphered one position past the starting offsets.

use tracing::{debug, trace};

use crate::error::{Result, RotorCryptError};
use crate::keyboard::Keyboard;
use crate::plugboard::Plugboard;
use crate::rotor::assembly::RotorAssembly;
use crate::symbol::Symbol;

/// Plugboard plus rotor assembly, driven one symbol at a time.
///
/// Enciphering and deciphering are the same operation: reset the machine to
/// the starting offsets and feed the ciphertext back in. This holds as long
/// as the reflector is an involution.
///
/// Each instance owns its state exclusively; separate messages can run on
/// separate instances in parallel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CipherEngine {
    keyboard: Keyboard,
    plugboard: Plugboard,
    rotors: RotorAssembly,
}

impl CipherEngine {
    /// Creates a machine from a plugboard and a rotor assembly.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{CipherEngine, Plugboard, RotorAssembly};
    ///
    /// let mut machine = CipherEngine::new(Plugboard::new(), RotorAssembly::default());
    /// let ciphertext = machine.process_text("HELLO").unwrap();
    ///
    /// machine.reset();
    /// assert_eq!(machine.process_text(&ciphertext).unwrap(), "HELLO");
    /// ```
    pub fn new(plugboard: Plugboard, rotors: RotorAssembly) -> Self {
        debug!(
            wires = plugboard.wire_count(),
            positions = ?rotors.positions(),
            "cipher engine created"
        );
        CipherEngine {
            keyboard: Keyboard::new(),
            plugboard,
            rotors,
        }
    }

    /// Plugboard in use.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Mutable access to the plugboard, for rewiring between messages.
    pub fn plugboard_mut(&mut self) -> &mut Plugboard {
        &mut self.plugboard
    }

    /// Rotor assembly in use.
    pub fn rotor_assembly(&self) -> &RotorAssembly {
        &self.rotors
    }

    /// Returns every rotor to its starting offset.
    pub fn reset(&mut self) {
        self.rotors.reset();
        debug!(positions = ?self.rotors.positions(), "cipher engine reset");
    }

    /// Enciphers one symbol and advances the machine.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidSymbol`] for the sentinel; the rotors
    /// do not move in that case.
    pub fn process_symbol(&mut self, symbol: Symbol) -> Result<Symbol> {
        if !symbol.is_valid() {
            return Err(RotorCryptError::InvalidSymbol);
        }

        let (signal, _) = self.plugboard.process(symbol)?;
        self.rotors.advance();
        let signal = self.rotors.process(signal)?;
        let (output, _) = self.plugboard.process(signal)?;

        trace!(%symbol, %output, "symbol enciphered");
        Ok(output)
    }

    /// Enciphers every character of `text`.
    ///
    /// Output letters are upper case. The whole text is checked before the
    /// first rotor step, so a rejected message leaves the machine untouched.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::UnmappedCharacter`] for the first character
    /// outside `A-Z`/`a-z`.
    pub fn process_text(&mut self, text: &str) -> Result<String> {
        let symbols = text
            .chars()
            .map(|c| match self.keyboard.press(c) {
                s if s.is_valid() => Ok(s),
                _ => Err(RotorCryptError::UnmappedCharacter(c)),
            })
            .collect::<Result<Vec<Symbol>>>()?;

        let mut output = String::with_capacity(symbols.len());
        for symbol in symbols {
            let lamp = self.process_symbol(symbol)?;
            output.extend(self.keyboard.show(lamp));
        }
        Ok(output)
    }
}
