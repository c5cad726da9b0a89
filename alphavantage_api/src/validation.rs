//! Checks applied to free-text arguments before a request is built.

use crate::Error;

pub const MAX_SYMBOL_LENGTH: usize = 20;
pub const MAX_KEYWORDS_LENGTH: usize = 100;

/// The API treats symbols and keywords as opaque text, so the checks stop
/// at transport hygiene: non-empty after trimming, within the byte-length
/// cap, no ASCII control characters. Input is rejected, never rewritten.
fn check_text(input: &str, what: &str, max_len: usize) -> Result<(), Error> {
    if input.trim().is_empty() {
        return Err(Error::InvalidInput(format!("{what} must not be empty")));
    }
    if input.len() > max_len {
        return Err(Error::InvalidInput(format!(
            "{what} exceeds maximum length of {max_len} bytes"
        )));
    }
    if input.chars().any(|c| c.is_ascii_control()) {
        return Err(Error::InvalidInput(format!(
            "{what} contains control characters"
        )));
    }
    Ok(())
}

pub fn validate_symbol(symbol: &str) -> Result<(), Error> {
    check_text(symbol, "symbol", MAX_SYMBOL_LENGTH)
}

pub fn validate_keywords(keywords: &str) -> Result<(), Error> {
    check_text(keywords, "keywords", MAX_KEYWORDS_LENGTH)
}
