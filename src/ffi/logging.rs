//! Host logging hookup.

use crate::error::Status;
use crate::logging::{init_logging, LogCallback};

/// Routes this library's log records to `callback`, filtered at `max_level`
/// (0 off, 1 error, 2 warn, 3 info, 4 debug, 5 trace).
///
/// May be called again to swap the callback or change the level.
///
/// # Returns
/// 0 on success, 3 if `callback` is null, 4 if another logger already
/// owns the process-wide `log` slot.
#[no_mangle]
pub extern "C" fn bn_init_logging(callback: Option<LogCallback>, max_level: i32) -> i32 {
    let callback = match callback {
        Some(cb) => cb,
        None => return Status::NullPointer.code(),
    };

    match init_logging(callback, max_level) {
        Ok(()) => Status::Ok.code(),
        Err(_) => Status::LoggerUnavailable.code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_callback() {
        assert_eq!(bn_init_logging(None, 5), Status::NullPointer.code());
    }
}
