//! Summation of an array of operands.

use std::ffi::c_char;

use super::{finish, operand_bytes, result_slice};
use crate::bignum;
use crate::error::{AddError, Status};

/// Sums `count` decimal strings and writes the NUL-terminated decimal total to `result`.
///
/// An empty array (`count == 0`, `operands` may then be null) sums to `"0"`.
///
/// # Safety
/// - `operands` must be null or point to `count` pointers, each null or
///   pointing to a NUL-terminated string
/// - `result` must be null or point to a buffer with at least `result_size` bytes
///
/// # Returns
/// A status code as for `add_big_numbers`. A null entry in `operands`
/// yields 3.
#[no_mangle]
pub unsafe extern "C" fn add_big_numbers_many(
    operands: *const *const c_char,
    count: usize,
    result: *mut c_char,
    result_size: usize,
) -> i32 {
    let out = match result_slice(result, result_size) {
        Some(out) => out,
        None => return Status::NullPointer.code(),
    };

    let res = sum_into(operands, count, out);
    finish(res, out)
}

unsafe fn sum_into(
    operands: *const *const c_char,
    count: usize,
    out: &mut [u8],
) -> Result<usize, AddError> {
    let mut texts: Vec<&[u8]> = Vec::with_capacity(count);
    if count > 0 {
        if operands.is_null() {
            return Err(AddError::NullPointer);
        }
        for &ptr in std::slice::from_raw_parts(operands, count) {
            texts.push(operand_bytes(ptr)?);
        }
    }

    let total = bignum::sum(&texts)?;
    bignum::write_decimal(&total, out)
}
