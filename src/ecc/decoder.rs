//! Single-error decoder.
//!
//! The decoder is a brute-force stand-in for a Berlekamp-style error
//! locator: if the syndrome is non-zero it tries every single-bit flip of
//! the received vector, lowest index first, and accepts the first one whose
//! syndrome is zero. Two or more errors are either reported as
//! uncorrectable or, when some unrelated flip happens to zero the syndrome,
//! silently miscorrected.

use crate::bits::BitVector;
use crate::ecc::encoder::encode_systematic;
use crate::ecc::gf2::compute_syndrome;
use crate::ecc::ErrorCorrection;
use crate::error::{Error, Result};
use log::{debug, trace};
use std::fmt::{Display, Formatter};

/// Outcome of one decode attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStatus {
    /// Syndrome was already zero
    NoError,
    /// Flipping the bit at `position` zeroed the syndrome
    Corrected { position: usize },
    /// No single flip zeroes the syndrome
    Uncorrectable,
}

impl Display for DecodeStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeStatus::NoError => write!(f, "No error detected"),
            DecodeStatus::Corrected { position } => {
                write!(f, "Single-bit error corrected at position {}", position)
            }
            DecodeStatus::Uncorrectable => write!(f, "Unable to correct (multiple errors)"),
        }
    }
}

/// Corrected codeword together with how it was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult {
    /// The repaired vector, or the received vector unchanged
    pub corrected: BitVector,
    /// What the decoder concluded
    pub status: DecodeStatus,
}

impl DecodeResult {
    /// Index of the flipped bit, if a correction was made
    pub fn corrected_position(&self) -> Option<usize> {
        match self.status {
            DecodeStatus::Corrected { position } => Some(position),
            _ => None,
        }
    }

    /// Whether the decoder accepted the output as a valid codeword
    pub fn is_valid(&self) -> bool {
        self.status != DecodeStatus::Uncorrectable
    }
}

/// Decodes `received` given its precomputed `syndrome`.
///
/// # Arguments
///
/// * `received` - Received codeword
/// * `syndrome` - Syndrome of `received` against `generator`
/// * `generator` - Generator pattern used to re-check every trial flip
///
/// # Returns
///
/// A [`DecodeResult`]; uncorrectable input is an `Ok` outcome, only an empty
/// generator is an error
pub fn decode(
    received: &BitVector,
    syndrome: &BitVector,
    generator: &BitVector,
) -> Result<DecodeResult> {
    if syndrome.is_zero() {
        debug!("Syndrome {} is zero, nothing to correct", syndrome);
        return Ok(DecodeResult {
            corrected: received.clone(),
            status: DecodeStatus::NoError,
        });
    }

    for position in 0..received.len() {
        let trial = received.flipped(position)?;
        let trial_syndrome = compute_syndrome(&trial, generator)?;
        trace!(
            "Flip {}: {} -> syndrome {}",
            position,
            trial.to_bit_string(),
            trial_syndrome.to_bit_string()
        );

        if trial_syndrome.is_zero() {
            debug!("Corrected single-bit error at position {}", position);
            return Ok(DecodeResult {
                corrected: trial,
                status: DecodeStatus::Corrected { position },
            });
        }
    }

    debug!(
        "No single flip of {} zeroes syndrome {}",
        received.to_bit_string(),
        syndrome.to_bit_string()
    );
    Ok(DecodeResult {
        corrected: received.clone(),
        status: DecodeStatus::Uncorrectable,
    })
}

/// A generator pattern bound to the syndrome/decode operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyndromeDecoder {
    generator: BitVector,
}

impl SyndromeDecoder {
    /// Creates a decoder for the given generator pattern
    ///
    /// # Returns
    ///
    /// A new `SyndromeDecoder` or `Error::EmptyDivisor` for an empty generator
    pub fn new(generator: BitVector) -> Result<Self> {
        if generator.is_empty() {
            return Err(Error::EmptyDivisor);
        }
        Ok(Self { generator })
    }

    /// The generator pattern
    pub fn generator(&self) -> &BitVector {
        &self.generator
    }

    /// Number of syndrome bits produced for inputs at least as long as the generator
    pub fn syndrome_len(&self) -> usize {
        self.generator.len() - 1
    }
}

impl ErrorCorrection for SyndromeDecoder {
    fn syndrome(&self, received: &BitVector) -> Result<BitVector> {
        compute_syndrome(received, &self.generator)
    }

    fn encode(&self, message: &BitVector) -> Result<BitVector> {
        encode_systematic(message, &self.generator)
    }

    /// Computes the syndrome and decodes in one step
    fn decode(&self, received: &BitVector) -> Result<DecodeResult> {
        let syndrome = self.syndrome(received)?;
        decode(received, &syndrome, &self.generator)
    }
}

impl Display for SyndromeDecoder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SyndromeDecoder(g = {})", self.generator.to_bit_string())
    }
}
