//! Decoding of UTF-8 input for `char` automatons.

use std::str;

use crate::{Error, Result};

/// Decodes the pattern with the given index into `char`s.
pub fn decode_pattern(index: usize, pattern: &[u8]) -> Result<Vec<char>> {
    match str::from_utf8(pattern) {
        Ok(s) => Ok(s.chars().collect()),
        Err(err) => Err(Error::invalid_pattern(index, pattern, err)),
    }
}

/// Validates that the haystack is UTF-8.
pub fn decode_text(text: &[u8]) -> Result<&str> {
    str::from_utf8(text).map_err(|err| Error::invalid_text(text, err))
}
