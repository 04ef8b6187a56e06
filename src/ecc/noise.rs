//! Random error injection for demonstrations.

use crate::bits::BitVector;
use crate::error::{Error, Result};
use log::debug;
use rand::seq::index;
use rand::Rng;

/// Flips `count` distinct, uniformly chosen bits of `codeword`.
///
/// # Arguments
///
/// * `codeword` - Vector to corrupt; left untouched
/// * `count` - Number of bits to flip
/// * `rng` - Source of randomness; seed it for reproducible runs
///
/// # Returns
///
/// The corrupted copy and the flipped positions in ascending order
pub fn inject_errors<R: Rng + ?Sized>(
    codeword: &BitVector,
    count: usize,
    rng: &mut R,
) -> Result<(BitVector, Vec<usize>)> {
    if count > codeword.len() {
        return Err(Error::InputTooLarge {
            length: count,
            max_length: codeword.len(),
        });
    }

    let mut positions = index::sample(rng, codeword.len(), count).into_vec();
    positions.sort_unstable();

    let mut noisy = codeword.clone();
    for &position in &positions {
        noisy.flip(position)?;
    }

    debug!(
        "Injected {} error(s) at {:?}: {} -> {}",
        count,
        positions,
        codeword.to_bit_string(),
        noisy.to_bit_string()
    );

    Ok((noisy, positions))
}
