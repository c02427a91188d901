//! Strict base-10 operand parsing.
//!
//! Accepted grammar is `[+-]?[0-9]+`. Everything else is rejected before
//! the text reaches `num-bigint`, whose own parser is more lenient (it
//! skips `_` separators, for instance).

use log::{trace, warn};
use num_bigint::BigInt;
use num_traits::Num;

use crate::error::AddError;

pub const RADIX: u32 = 10;

/// Returns the offset of the first byte that breaks the decimal grammar,
/// or `None` if the whole slice is a well-formed integer.
fn first_invalid_byte(text: &[u8]) -> Option<usize> {
    let digits_start = match text.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let digits = &text[digits_start..];
    if digits.is_empty() {
        return Some(text.len());
    }
    digits
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map(|p| digits_start + p)
}

/// Parses operand number `index` of a request.
///
/// `index` only feeds the error so callers can tell which input was bad.
pub fn parse_operand(index: usize, text: &[u8]) -> Result<BigInt, AddError> {
    if let Some(position) = first_invalid_byte(text) {
        warn!(
            "rejecting operand {} ({} bytes): bad byte at offset {}",
            index,
            text.len(),
            position
        );
        return Err(AddError::InvalidOperand { index, position });
    }

    // Validated as ASCII above, so neither step can fail in practice.
    let invalid = AddError::InvalidOperand { index, position: 0 };
    let text = std::str::from_utf8(text).map_err(|_| invalid.clone())?;
    let value = BigInt::from_str_radix(text, RADIX).map_err(|_| invalid)?;

    trace!("parsed operand {} ({} digits)", index, text.len());
    Ok(value)
}

/// Parses a single decimal integer.
pub fn parse_decimal(text: &[u8]) -> Result<BigInt, AddError> {
    parse_operand(0, text)
}
