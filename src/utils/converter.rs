//! Character conversions for configuration strings.
//!
//! Configuration strings accept only ASCII letters; the keyboard accepts the
//! same set, but the error raised differs (configuration vs. input).

use crate::error::{Result, RotorCryptError};
use crate::symbol::{Symbol, ALPHABET_SIZE};

/// Converts a configuration character to its symbol.
///
/// # Errors
/// Returns [`RotorCryptError::InvalidConfigChar`] if `c` is not in `A-Z`/`a-z`.
pub(crate) fn config_symbol(c: char) -> Result<Symbol> {
    if !c.is_ascii_alphabetic() {
        return Err(RotorCryptError::InvalidConfigChar(c));
    }
    Ok(Symbol::from_char(c))
}

/// Converts a string of letters into symbols, rejecting anything else.
pub(crate) fn config_symbols(input: &str) -> Result<Vec<Symbol>> {
    input.chars().map(config_symbol).collect()
}

/// Parses the one or two digit starting offset of a rotor string.
///
/// # Errors
/// - [`RotorCryptError::InvalidOffsetDigits`] if `digits` is not 1-2 ASCII digits.
/// - [`RotorCryptError::OffsetOutOfRange`] if the value is 26 or more.
pub(crate) fn offset_digits(digits: &str) -> Result<usize> {
    if digits.is_empty() || digits.len() > 2 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(RotorCryptError::InvalidOffsetDigits(digits.to_string()));
    }
    let offset: usize = digits
        .parse()
        .map_err(|_| RotorCryptError::InvalidOffsetDigits(digits.to_string()))?;
    if offset >= ALPHABET_SIZE {
        return Err(RotorCryptError::OffsetOutOfRange(offset));
    }
    Ok(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_symbol_letters() {
        assert_eq!(config_symbol('a'), Ok(Symbol::A));
        assert_eq!(config_symbol('Z'), Ok(Symbol::Z));
    }

    #[test]
    fn test_config_symbol_rejects_non_letters() {
        assert_eq!(config_symbol('1'), Err(RotorCryptError::InvalidConfigChar('1')));
        assert_eq!(config_symbol('-'), Err(RotorCryptError::InvalidConfigChar('-')));
    }

    #[test]
    fn test_offset_digits() {
        assert_eq!(offset_digits("0"), Ok(0));
        assert_eq!(offset_digits("7"), Ok(7));
        assert_eq!(offset_digits("25"), Ok(25));
        assert_eq!(offset_digits("26"), Err(RotorCryptError::OffsetOutOfRange(26)));
        assert!(matches!(
            offset_digits("1a"),
            Err(RotorCryptError::InvalidOffsetDigits(_))
        ));
        assert!(matches!(
            offset_digits("+5"),
            Err(RotorCryptError::InvalidOffsetDigits(_))
        ));
    }
}
