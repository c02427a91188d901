//! Core decimal big-integer logic.
//!
//! This module holds the safe Rust side of the adder: strict decimal
//! parsing, exact addition and summation, and rendering into a bounded
//! byte buffer. The FFI layer in `ffi/` calls these functions.

pub mod arith;
pub mod decimal;
pub mod output;

pub use arith::{add, add_decimal, required_capacity, sum};
pub use decimal::{parse_decimal, parse_operand, RADIX};
pub use output::{clear, write_decimal, TERMINATOR};
