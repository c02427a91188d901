//! Two-operand addition.

use std::ffi::c_char;

use super::{finish, operand_bytes, result_slice};
use crate::bignum;
use crate::error::{AddError, Status};

/// Adds two decimal strings and writes the NUL-terminated decimal sum to `result`.
///
/// # Safety
/// - `num1` and `num2` must be null or point to NUL-terminated strings
/// - `result` must be null or point to a buffer with at least `result_size` bytes
///
/// # Returns
/// A status code: 0 on success, 1 if an operand is not a base-10 integer,
/// 2 if `result_size` cannot hold the sum and its terminator, 3 if a
/// pointer is null. On any failure other than a null `result`, the buffer
/// holds an empty string (when `result_size > 0`).
#[no_mangle]
pub unsafe extern "C" fn add_big_numbers(
    num1: *const c_char,
    num2: *const c_char,
    result: *mut c_char,
    result_size: usize,
) -> i32 {
    let out = match result_slice(result, result_size) {
        Some(out) => out,
        None => return Status::NullPointer.code(),
    };

    let res = add_into(num1, num2, out);
    finish(res, out)
}

unsafe fn add_into(
    num1: *const c_char,
    num2: *const c_char,
    out: &mut [u8],
) -> Result<usize, AddError> {
    let a = operand_bytes(num1)?;
    let b = operand_bytes(num2)?;
    let total = bignum::add_decimal(a, b)?;
    bignum::write_decimal(&total, out)
}

/// Reports how many bytes `add_big_numbers` needs for the same operands,
/// terminator included.
///
/// # Safety
/// - `num1` and `num2` must be null or point to NUL-terminated strings
/// - `out_len` must be null or point to a writable `size_t`
///
/// # Returns
/// A status code as for `add_big_numbers`. `*out_len` is set to 0 on failure.
#[no_mangle]
pub unsafe extern "C" fn add_big_numbers_len(
    num1: *const c_char,
    num2: *const c_char,
    out_len: *mut usize,
) -> i32 {
    if out_len.is_null() {
        return Status::NullPointer.code();
    }

    let res = len_of(num1, num2);
    *out_len = *res.as_ref().unwrap_or(&0);
    Status::from(res).code()
}

unsafe fn len_of(num1: *const c_char, num2: *const c_char) -> Result<usize, AddError> {
    let a = operand_bytes(num1)?;
    let b = operand_bytes(num2)?;
    bignum::required_capacity(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::{CStr, CString};
    use std::ptr;

    fn call(a: &str, b: &str, capacity: usize) -> (i32, Vec<u8>) {
        let a = CString::new(a).unwrap();
        let b = CString::new(b).unwrap();
        let mut buf = vec![0xAAu8; capacity];
        let status = unsafe {
            add_big_numbers(
                a.as_ptr(),
                b.as_ptr(),
                buf.as_mut_ptr().cast(),
                buf.len(),
            )
        };
        (status, buf)
    }

    fn text(buf: &[u8]) -> &str {
        CStr::from_bytes_until_nul(buf).unwrap().to_str().unwrap()
    }

    #[test]
    fn test_add_big_numbers() {
        let (status, buf) = call("123456789012345678901234567890", "1", 64);
        assert_eq!(status, 0);
        assert_eq!(text(&buf), "123456789012345678901234567891");

        let (status, buf) = call("-5", "5", 8);
        assert_eq!(status, 0);
        assert_eq!(text(&buf), "0");
    }

    #[test]
    fn test_invalid_operand_leaves_empty_string() {
        let (status, buf) = call("12a3", "1", 8);
        assert_eq!(status, Status::InvalidOperand.code());
        assert_eq!(buf[0], 0);
        assert!(buf[1..].iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn test_buffer_too_small() {
        let (status, buf) = call("999", "1", 4);
        assert_eq!(status, Status::BufferTooSmall.code());
        assert_eq!(buf, vec![0, 0xAA, 0xAA, 0xAA]);

        let (status, buf) = call("999", "1", 5);
        assert_eq!(status, 0);
        assert_eq!(&buf, b"1000\0");
    }

    #[test]
    fn test_zero_capacity() {
        let (status, buf) = call("1", "1", 0);
        assert_eq!(status, Status::BufferTooSmall.code());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_null_pointer_handling() {
        let one = CString::new("1").unwrap();
        let mut buf = [0xAAu8; 8];
        unsafe {
            assert_eq!(
                add_big_numbers(ptr::null(), one.as_ptr(), buf.as_mut_ptr().cast(), buf.len()),
                Status::NullPointer.code()
            );
            assert_eq!(buf[0], 0);

            assert_eq!(
                add_big_numbers(one.as_ptr(), one.as_ptr(), ptr::null_mut(), 8),
                Status::NullPointer.code()
            );
        }
    }

    #[test]
    fn test_len_matches_write() {
        let a = CString::new("-99999999999999999999").unwrap();
        let b = CString::new("-1").unwrap();
        let mut needed = 0usize;
        let status = unsafe { add_big_numbers_len(a.as_ptr(), b.as_ptr(), &mut needed) };
        assert_eq!(status, 0);
        assert_eq!(needed, "-100000000000000000000".len() + 1);

        let (status, _) = call("-99999999999999999999", "-1", needed - 1);
        assert_eq!(status, Status::BufferTooSmall.code());
        let (status, buf) = call("-99999999999999999999", "-1", needed);
        assert_eq!(status, 0);
        assert_eq!(text(&buf), "-100000000000000000000");
    }

    #[test]
    fn test_len_errors() {
        let bad = CString::new("--5").unwrap();
        let one = CString::new("1").unwrap();
        let mut needed = 77usize;
        unsafe {
            assert_eq!(
                add_big_numbers_len(bad.as_ptr(), one.as_ptr(), &mut needed),
                Status::InvalidOperand.code()
            );
            assert_eq!(needed, 0);
            assert_eq!(
                add_big_numbers_len(one.as_ptr(), ptr::null(), &mut needed),
                Status::NullPointer.code()
            );
            assert_eq!(
                add_big_numbers_len(one.as_ptr(), one.as_ptr(), ptr::null_mut()),
                Status::NullPointer.code()
            );
        }
    }
}
