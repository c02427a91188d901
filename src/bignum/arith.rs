//! Exact addition over parsed operands.

use log::debug;
use num_bigint::BigInt;
use num_traits::Zero;
use rayon::prelude::*;

use super::decimal::{parse_operand, RADIX};
use crate::error::AddError;

/// Exact sum of two integers.
pub fn add(a: &BigInt, b: &BigInt) -> BigInt {
    a + b
}

/// Parses two decimal operands and returns their exact sum.
pub fn add_decimal(a: &[u8], b: &[u8]) -> Result<BigInt, AddError> {
    let lhs = parse_operand(0, a)?;
    let rhs = parse_operand(1, b)?;
    let total = add(&lhs, &rhs);
    debug!(
        "added operands of {} and {} bytes, sum has {} bits",
        a.len(),
        b.len(),
        total.bits()
    );
    Ok(total)
}

/// Bytes needed to hold the decimal sum of `a` and `b` plus its terminator.
pub fn required_capacity(a: &[u8], b: &[u8]) -> Result<usize, AddError> {
    let total = add_decimal(a, b)?;
    let rendered = total.to_str_radix(RADIX);
    Ok(rendered.len() + 1)
}

/// Exact sum of any number of decimal operands. An empty slice sums to zero.
///
/// Operands are parsed in parallel on the global rayon pool. When several
/// are malformed, the error names the one with the lowest index.
pub fn sum(operands: &[&[u8]]) -> Result<BigInt, AddError> {
    let parsed: Vec<Result<BigInt, AddError>> = operands
        .par_iter()
        .enumerate()
        .map(|(index, text)| parse_operand(index, text))
        .collect();
    let values = parsed.into_iter().collect::<Result<Vec<_>, _>>()?;

    let total = values.into_par_iter().reduce(BigInt::zero, |a, b| a + b);
    debug!(
        "summed {} operands, total has {} bits",
        operands.len(),
        total.bits()
    );
    Ok(total)
}
