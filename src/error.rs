//! Error taxonomy and the integer status codes returned across the C ABI.

use std::ffi::CStr;

/// Failure of an addition request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddError {
    /// Operand `index` is not a well-formed base-10 integer. `position` is
    /// the byte offset of the first offending byte (equal to the length for
    /// truncated input such as `""` or `"-"`).
    InvalidOperand { index: usize, position: usize },
    /// The rendered sum plus its terminator needs `required` bytes.
    BufferTooSmall { required: usize, capacity: usize },
    /// A pointer argument was null.
    NullPointer,
}

impl std::fmt::Display for AddError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddError::InvalidOperand { index, position } => write!(
                f,
                "operand {} is not a decimal integer (bad byte at offset {})",
                index, position
            ),
            AddError::BufferTooSmall { required, capacity } => write!(
                f,
                "result needs {} bytes but buffer holds {}",
                required, capacity
            ),
            AddError::NullPointer => write!(f, "null pointer argument"),
        }
    }
}

impl std::error::Error for AddError {}

/// Status codes shared with C callers. Values are part of the ABI.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok = 0,
    InvalidOperand = 1,
    BufferTooSmall = 2,
    NullPointer = 3,
    LoggerUnavailable = 4,
}

impl Status {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Status> {
        match code {
            0 => Some(Status::Ok),
            1 => Some(Status::InvalidOperand),
            2 => Some(Status::BufferTooSmall),
            3 => Some(Status::NullPointer),
            4 => Some(Status::LoggerUnavailable),
            _ => None,
        }
    }

    /// Static, NUL-terminated description of the status.
    pub fn message(self) -> &'static CStr {
        match self {
            Status::Ok => c"ok",
            Status::InvalidOperand => c"operand is not a base-10 integer",
            Status::BufferTooSmall => c"result buffer is too small",
            Status::NullPointer => c"null pointer argument",
            Status::LoggerUnavailable => c"another logger is already installed",
        }
    }
}

impl From<&AddError> for Status {
    fn from(err: &AddError) -> Self {
        match err {
            AddError::InvalidOperand { .. } => Status::InvalidOperand,
            AddError::BufferTooSmall { .. } => Status::BufferTooSmall,
            AddError::NullPointer => Status::NullPointer,
        }
    }
}

impl<T> From<Result<T, AddError>> for Status {
    fn from(res: Result<T, AddError>) -> Self {
        match res {
            Ok(_) => Status::Ok,
            Err(e) => Status::from(&e),
        }
    }
}
