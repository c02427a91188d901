//! C ABI layer.
//!
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `bignum` module. These functions are thin wrappers
//! that handle null checks, pointer safety, and C-to-Rust conversions, and
//! turn every outcome into a [`Status`](crate::error::Status) code.

pub mod add;
pub mod batch;
pub mod logging;
pub mod status;

pub use add::{add_big_numbers, add_big_numbers_len};
pub use batch::add_big_numbers_many;
pub use logging::bn_init_logging;
pub use status::bn_status_message;

use std::ffi::{c_char, CStr};

use log::debug;

use crate::bignum;
use crate::error::{AddError, Status};

/// Borrows the bytes of a NUL-terminated operand.
///
/// # Safety
/// - `ptr` must be null or point to a NUL-terminated string that outlives `'a`
unsafe fn operand_bytes<'a>(ptr: *const c_char) -> Result<&'a [u8], AddError> {
    if ptr.is_null() {
        return Err(AddError::NullPointer);
    }
    Ok(CStr::from_ptr(ptr).to_bytes())
}

/// Views the caller's result buffer as a byte slice.
///
/// # Safety
/// - `ptr` must be null or valid for writes of `capacity` bytes
unsafe fn result_slice<'a>(ptr: *mut c_char, capacity: usize) -> Option<&'a mut [u8]> {
    if ptr.is_null() {
        return None;
    }
    Some(std::slice::from_raw_parts_mut(ptr.cast::<u8>(), capacity))
}

/// Converts a write outcome into a status code, leaving `out` empty on error.
fn finish(res: Result<usize, AddError>, out: &mut [u8]) -> i32 {
    if let Err(e) = &res {
        debug!("request failed: {}", e);
        bignum::clear(out);
    }
    Status::from(res).code()
}
