//! Decimal Adder - arbitrary-precision integer addition over a C ABI.
//!
//! This library takes base-10 integer strings of any length, adds them
//! exactly with `num-bigint`, and writes the decimal result into a buffer
//! owned by the caller. The `ffi` module is the C surface; `bignum` is the
//! same functionality as a safe Rust API.

pub mod bignum;
pub mod error;
pub mod ffi;
pub mod logging;

pub use error::{AddError, Status};
pub use ffi::{
    add_big_numbers, add_big_numbers_len, add_big_numbers_many, bn_init_logging,
    bn_status_message,
};
