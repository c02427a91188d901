//! Rendering a sum into a caller-supplied byte buffer.

use log::{debug, trace};
use num_bigint::BigInt;

use super::decimal::RADIX;
use crate::error::AddError;

/// Byte written after the last digit.
pub const TERMINATOR: u8 = 0;

/// Writes `value` in base 10 followed by [`TERMINATOR`] into `out`.
///
/// The length is checked before anything is copied, so on
/// `BufferTooSmall` the buffer is untouched.
///
/// # Returns
/// Number of digit bytes written, not counting the terminator.
pub fn write_decimal(value: &BigInt, out: &mut [u8]) -> Result<usize, AddError> {
    let rendered = value.to_str_radix(RADIX);
    let digits = rendered.as_bytes();
    let required = digits.len() + 1;

    if out.len() < required {
        debug!(
            "result needs {} bytes, buffer holds {}",
            required,
            out.len()
        );
        return Err(AddError::BufferTooSmall {
            required,
            capacity: out.len(),
        });
    }

    out[..digits.len()].copy_from_slice(digits);
    out[digits.len()] = TERMINATOR;
    trace!("wrote {} digit bytes", digits.len());
    Ok(digits.len())
}

/// Leaves `out` holding an empty string, if it has room for one.
pub fn clear(out: &mut [u8]) {
    if let Some(first) = out.first_mut() {
        *first = TERMINATOR;
    }
}
