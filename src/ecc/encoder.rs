//! Systematic encoding: message bits followed by check bits.

use crate::bits::BitVector;
use crate::ecc::gf2::divide_mod2;
use crate::error::{Error, Result};
use log::debug;

/// Encodes `message` so that the resulting codeword has a zero syndrome.
///
/// The message is shifted up by `len(generator) - 1` positions (zeros
/// appended), divided by the generator, and the remainder is appended to the
/// message as the check bits.
///
/// # Arguments
///
/// * `message` - Data bits, kept verbatim as the codeword prefix
/// * `generator` - Generator pattern; its first bit must be 1
///
/// # Returns
///
/// The codeword of length `len(message) + len(generator) - 1`
///
/// # Examples
///
/// ```
/// use bchviz::ecc::encode_systematic;
/// use bchviz::BitVector;
///
/// let message: BitVector = "1101".parse().unwrap();
/// let generator: BitVector = "1011".parse().unwrap();
/// let codeword = encode_systematic(&message, &generator).unwrap();
/// assert_eq!(codeword.to_bit_string(), "1101001");
/// ```
pub fn encode_systematic(message: &BitVector, generator: &BitVector) -> Result<BitVector> {
    if message.is_empty() {
        return Err(Error::EmptyInput);
    }
    match generator.get(0) {
        None => return Err(Error::EmptyDivisor),
        Some(false) => {
            return Err(Error::InvalidInput(
                "Generator must start with a 1 coefficient".to_string(),
            ))
        }
        Some(true) => {}
    }

    let check_len = generator.len() - 1;
    let mut shifted = message.clone();
    shifted.extend_from(&BitVector::zeros(check_len));

    let check_bits = divide_mod2(&shifted, generator)?;

    let mut codeword = message.clone();
    codeword.extend_from(&check_bits);

    debug!(
        "Encoded {} with g = {} as {}",
        message.to_bit_string(),
        generator.to_bit_string(),
        codeword.to_bit_string()
    );

    Ok(codeword)
}
