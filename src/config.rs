//! Parsing of machine configuration strings.
//!
//! Formats:
//!
//! - **Rotor**: 26 letters (the output for each alphabet position), one notch
//!   letter and a one or two digit starting offset, e.g.
//!   `"EKMFLGDQVZNTOWYHXUSPAIBRCJQ7"`.
//! - **Wheel** (entry wheel or reflector): 26 letters.
//! - **Plugboard**: pairs of letters, one pair per wire, e.g. `"ANDUFQ"`.
//!
//! Letters may be upper or lower case. A string that fails to parse never
//! yields a partially configured component.

use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::{Result, RotorCryptError};
use crate::machine::CipherEngine;
use crate::plugboard::{Plugboard, PLUGBOARD_CAPACITY};
use crate::rotor::assembly::{RotorAssembly, ROTOR_COUNT};
use crate::rotor::reflector::Reflector;
use crate::rotor::Rotor;
use crate::symbol::ALPHABET_SIZE;
use crate::utils::converter::{config_symbol, config_symbols, offset_digits};

/// Length of a rotor string with a one digit offset.
const ROTOR_STRING_MIN: usize = ALPHABET_SIZE + 2;

/// Length of a rotor string with a two digit offset.
const ROTOR_STRING_MAX: usize = ALPHABET_SIZE + 3;

/// Parses a rotor string.
///
/// # Errors
/// - [`RotorCryptError::RotorStringLength`] unless 28 or 29 characters long.
/// - [`RotorCryptError::InvalidConfigChar`] for a non-letter in the wiring or notch.
/// - [`RotorCryptError::InvalidOffsetDigits`] / [`RotorCryptError::OffsetOutOfRange`]
///   for a bad offset.
/// - Any table validation error (repeated letter).
///
/// # Examples
///
/// ```
/// use rotorcrypt::config::parse_rotor;
/// use rotorcrypt::Symbol;
///
/// let rotor = parse_rotor("ABCDEFGHIJKLMNOPQRSTUVWXYZG13").unwrap();
/// assert_eq!(rotor.notch(), Symbol::G);
/// assert_eq!(rotor.position(), 13);
/// ```
pub fn parse_rotor(input: &str) -> Result<Rotor> {
    let chars: Vec<char> = input.chars().collect();
    if !(ROTOR_STRING_MIN..=ROTOR_STRING_MAX).contains(&chars.len()) {
        return Err(RotorCryptError::RotorStringLength(chars.len()));
    }

    let wiring: String = chars[..ALPHABET_SIZE].iter().collect();
    let outputs = config_symbols(&wiring)?;
    let notch = config_symbol(chars[ALPHABET_SIZE])?;
    let digits: String = chars[ALPHABET_SIZE + 1..].iter().collect();
    let offset = offset_digits(&digits)?;

    Rotor::from_outputs(&outputs, notch, offset)
}

/// Parses a 26 letter wheel string into a stationary wheel.
///
/// # Errors
/// - [`RotorCryptError::WheelStringLength`] unless 26 characters long.
/// - [`RotorCryptError::InvalidConfigChar`] for a non-letter.
/// - Any table validation error (repeated letter).
pub fn parse_wheel(input: &str) -> Result<Reflector> {
    let count = input.chars().count();
    if count != ALPHABET_SIZE {
        return Err(RotorCryptError::WheelStringLength(count));
    }
    Reflector::from_outputs(&config_symbols(input)?)
}

/// Parses a plugboard string.
///
/// # Errors
/// - [`RotorCryptError::PlugboardStringLength`] for odd length or more than
///   [`PLUGBOARD_CAPACITY`] pairs.
/// - [`RotorCryptError::InvalidConfigChar`] for a non-letter.
/// - Any [`Plugboard::connect`] error (letter used twice, self-pair).
pub fn parse_plugboard(input: &str) -> Result<Plugboard> {
    let max = 2 * PLUGBOARD_CAPACITY;
    let len = input.chars().count();
    if !len.is_multiple_of(2) || len > max {
        return Err(RotorCryptError::PlugboardStringLength { len, max });
    }

    let symbols = config_symbols(input)?;
    let mut plugboard = Plugboard::new();
    for pair in symbols.chunks_exact(2) {
        plugboard.connect(pair[0], pair[1])?;
    }
    Ok(plugboard)
}

impl FromStr for Rotor {
    type Err = RotorCryptError;

    fn from_str(s: &str) -> Result<Self> {
        parse_rotor(s)
    }
}

impl FromStr for Reflector {
    type Err = RotorCryptError;

    fn from_str(s: &str) -> Result<Self> {
        parse_wheel(s)
    }
}

impl FromStr for Plugboard {
    type Err = RotorCryptError;

    fn from_str(s: &str) -> Result<Self> {
        parse_plugboard(s)
    }
}

/// Complete machine setup in string form.
///
/// Missing wheels fall back to the pass-through entry wheel and the inverse
/// reflector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MachineConfig {
    /// Entry wheel string (26 letters).
    pub entry_wheel: Option<String>,
    /// Rotor strings, fastest rotor first.
    pub rotors: [String; ROTOR_COUNT],
    /// Reflector string (26 letters).
    pub reflector: Option<String>,
    /// Plugboard string (letter pairs, may be empty).
    pub plugboard: String,
}

impl MachineConfig {
    /// Creates a configuration with the given rotors, default wheels and an
    /// empty plugboard.
    pub fn new(rotors: [&str; ROTOR_COUNT]) -> Self {
        MachineConfig {
            entry_wheel: None,
            rotors: rotors.map(str::to_string),
            reflector: None,
            plugboard: String::new(),
        }
    }

    /// Sets the entry wheel string.
    pub fn with_entry_wheel(mut self, wheel: &str) -> Self {
        self.entry_wheel = Some(wheel.to_string());
        self
    }

    /// Sets the reflector string.
    pub fn with_reflector(mut self, wheel: &str) -> Self {
        self.reflector = Some(wheel.to_string());
        self
    }

    /// Sets the plugboard string.
    pub fn with_plugboard(mut self, plugboard: &str) -> Self {
        self.plugboard = plugboard.to_string();
        self
    }

    /// Parses every component and assembles a machine.
    ///
    /// # Errors
    /// The first parse error of any component.
    pub fn build(&self) -> Result<CipherEngine> {
        let entry = match &self.entry_wheel {
            Some(s) => parse_wheel(s)?,
            None => Reflector::IDENTITY,
        };
        let reflector = match &self.reflector {
            Some(s) => parse_wheel(s)?,
            None => Reflector::INVERSE,
        };
        if !reflector.is_involution() {
            warn!("reflector is not an involution; deciphering will not restore plaintext");
        }

        let mut rotors = [Rotor::default(); ROTOR_COUNT];
        for (slot, s) in rotors.iter_mut().zip(&self.rotors) {
            *slot = parse_rotor(s)?;
        }
        let plugboard = parse_plugboard(&self.plugboard)?;

        debug!(
            wires = plugboard.wire_count(),
            positions = ?rotors.map(|r| r.position()),
            "machine configuration parsed"
        );
        Ok(CipherEngine::new(
            plugboard,
            RotorAssembly::new(entry, rotors, reflector),
        ))
    }
}
