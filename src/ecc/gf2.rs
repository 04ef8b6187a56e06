//! Modulo-2 polynomial division.
//!
//! Bit vectors are read as polynomials over GF(2) with index 0 holding the
//! highest-degree coefficient, so `1011` is x^3 + x + 1. Addition and
//! subtraction are both XOR, which turns long division into a single
//! left-to-right pass that XORs the divisor in wherever the leading bit is 1.

use crate::bits::BitVector;
use crate::error::{Error, Result};
use log::trace;

/// Divides `dividend` by `divisor` under XOR arithmetic and returns the remainder.
///
/// The remainder is the final `len(divisor) - 1` bits of the working copy.
/// When the dividend is shorter than the divisor no division step runs and
/// the result is the trailing `min(len(dividend), len(divisor) - 1)` bits of
/// the dividend as given.
///
/// # Arguments
///
/// * `dividend` - Bits to divide, highest degree first
/// * `divisor` - Generator pattern, highest degree first
///
/// # Returns
///
/// The remainder, or `Error::EmptyDivisor` if the divisor has no bits
///
/// # Examples
///
/// ```
/// use bchviz::ecc::divide_mod2;
/// use bchviz::BitVector;
///
/// let dividend: BitVector = "1101000".parse().unwrap();
/// let divisor: BitVector = "1011".parse().unwrap();
/// let remainder = divide_mod2(&dividend, &divisor).unwrap();
/// assert_eq!(remainder.to_bit_string(), "001");
/// ```
pub fn divide_mod2(dividend: &BitVector, divisor: &BitVector) -> Result<BitVector> {
    if divisor.is_empty() {
        return Err(Error::EmptyDivisor);
    }

    let g = divisor.as_bitslice();
    let mut work = dividend.as_bitslice().to_bitvec();

    if work.len() >= g.len() {
        for i in 0..=(work.len() - g.len()) {
            if !work[i] {
                continue;
            }
            for (j, g_bit) in g.iter().by_vals().enumerate() {
                let current = work[i + j];
                work.set(i + j, current ^ g_bit);
            }
        }
    }

    let remainder_len = (g.len() - 1).min(work.len());
    let remainder = BitVector::from(&work[work.len() - remainder_len..]);

    trace!(
        "{} mod {} = {}",
        dividend.to_bit_string(),
        divisor.to_bit_string(),
        remainder.to_bit_string()
    );

    Ok(remainder)
}

/// Computes the syndrome of `received` with respect to `generator`.
///
/// The syndrome is the modulo-2 remainder of the received vector divided by
/// the generator; an all-zero syndrome means no error was detected.
pub fn compute_syndrome(received: &BitVector, generator: &BitVector) -> Result<BitVector> {
    divide_mod2(received, generator)
}
