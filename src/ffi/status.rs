//! Human-readable status descriptions.

use std::ffi::c_char;

use crate::error::Status;

/// Returns a static NUL-terminated description of a status code.
///
/// The pointer stays valid for the life of the process and must not be freed.
#[no_mangle]
pub extern "C" fn bn_status_message(status: i32) -> *const c_char {
    match Status::from_code(status) {
        Some(s) => s.message().as_ptr(),
        None => c"unknown status".as_ptr(),
    }
}
