//! Error types for the rotorcrypt library.

use thiserror::Error;

/// Broad classification of a [`RotorCryptError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed wiring, duplicate plugboard slot or bad configuration string.
    /// Raised at construction time; nothing is partially applied.
    InvalidConfiguration,
    /// A character or symbol with no place in the alphabet reached the machine.
    InvalidInput,
    /// A broken internal invariant. Not reachable through the public API.
    InvalidState,
}

/// Errors produced by the rotorcrypt library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotorCryptError {
    /// A wiring table did not contain exactly 26 entries.
    #[error("Wiring table must contain exactly 26 entries, got {0}")]
    TableLength(usize),
    /// A wiring table maps to or from the invalid symbol.
    #[error("Wiring table may not map to or from an invalid symbol (entry {0})")]
    InvalidTableSymbol(usize),
    /// A symbol occurs more than once in the input or output column of a table.
    #[error("Symbol may only occur once per column of a wiring table (entry {0})")]
    DuplicateMapping(usize),
    /// A wire was built with exactly one invalid end.
    #[error("Wire ends must be both valid or both unplugged")]
    HalfPluggedWire,
    /// A wire was built with both ends on the same symbol.
    #[error("Cannot plug both ends of a wire into {0}")]
    SelfPluggedWire(char),
    /// The plugboard already holds its maximum number of wires.
    #[error("Cannot plug more than {0} wires into the plugboard")]
    PlugboardFull(usize),
    /// One end of a new wire is already connected.
    #[error("Plugboard slot {0} is already occupied")]
    SlotOccupied(char),
    /// A rotor offset is outside `0..26`.
    #[error("Rotor offset {0} is outside the range 0..26")]
    OffsetOutOfRange(usize),
    /// A rotor configuration string is not 28 or 29 characters long.
    #[error("Rotor string must be 28 or 29 characters long, got {0}")]
    RotorStringLength(usize),
    /// A wheel configuration string is not 26 characters long.
    #[error("Wheel string must be 26 characters long, got {0}")]
    WheelStringLength(usize),
    /// A plugboard configuration string has odd length or is too long.
    #[error("Plugboard string must have even length of at most {max}, got {len}")]
    PlugboardStringLength {
        /// Length of the rejected string.
        len: usize,
        /// Largest accepted length.
        max: usize,
    },
    /// A configuration string contains something other than an ASCII letter.
    #[error("Invalid configuration character {0:?}, expected A-Z or a-z")]
    InvalidConfigChar(char),
    /// The starting offset of a rotor string is not a 1-2 digit number.
    #[error("Invalid rotor offset digits {0:?}")]
    InvalidOffsetDigits(String),
    /// A text character has no symbol on the keyboard.
    #[error("Character {0:?} has no corresponding symbol")]
    UnmappedCharacter(char),
    /// The invalid sentinel symbol was fed into the machine.
    #[error("Cannot encipher the invalid symbol")]
    InvalidSymbol,
    /// A stationary wheel was asked to map a symbol it does not contain.
    #[error("Reflector encountered an invalid symbol when processing")]
    ReflectorMiss,
    /// A wire with exactly one plugged end was processed.
    #[error("Cannot process a wire with exactly one plugged end")]
    CorruptWire,
}

impl RotorCryptError {
    /// Returns the broad class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RotorCryptError::TableLength(_)
            | RotorCryptError::InvalidTableSymbol(_)
            | RotorCryptError::DuplicateMapping(_)
            | RotorCryptError::HalfPluggedWire
            | RotorCryptError::SelfPluggedWire(_)
            | RotorCryptError::PlugboardFull(_)
            | RotorCryptError::SlotOccupied(_)
            | RotorCryptError::OffsetOutOfRange(_)
            | RotorCryptError::RotorStringLength(_)
            | RotorCryptError::WheelStringLength(_)
            | RotorCryptError::PlugboardStringLength { .. }
            | RotorCryptError::InvalidConfigChar(_)
            | RotorCryptError::InvalidOffsetDigits(_) => ErrorKind::InvalidConfiguration,
            RotorCryptError::UnmappedCharacter(_) | RotorCryptError::InvalidSymbol => {
                ErrorKind::InvalidInput
            }
            RotorCryptError::ReflectorMiss | RotorCryptError::CorruptWire => {
                ErrorKind::InvalidState
            }
        }
    }
}

/// Shorthand for results carrying a [`RotorCryptError`].
pub type Result<T> = std::result::Result<T, RotorCryptError>;
