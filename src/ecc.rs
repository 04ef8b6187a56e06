//! Syndrome-based error correction for short binary codewords.
//!
//! This module provides the computational kernel of the demonstrator:
//! - Modulo-2 (XOR) long division of one bit vector by another
//! - Syndrome computation against a generator pattern
//! - A single-error decoder that searches every one-bit flip
//! - Systematic encoding, random error injection and an exhaustive
//!   error-pattern survey built on the same primitives
//!
//! # How it works
//!
//! A received vector is treated as the coefficients of a binary polynomial,
//! highest degree first. Dividing it by the generator with XOR in place of
//! subtraction leaves a remainder, the syndrome. A zero syndrome means the
//! vector is (probably) a valid codeword. Otherwise the decoder flips each
//! bit in turn, lowest index first, and accepts the first flip whose
//! syndrome vanishes.
//!
//! This is not a Berlekamp–Massey decoder and corrects at most one error.
//!
//! # Examples
//!
//! ```rust
//! use bchviz::ecc::{compute_syndrome, decode, DecodeStatus};
//! use bchviz::BitVector;
//!
//! let generator: BitVector = "1011".parse().unwrap();
//! let received: BitVector = "1111001".parse().unwrap();
//!
//! let syndrome = compute_syndrome(&received, &generator).unwrap();
//! let result = decode(&received, &syndrome, &generator).unwrap();
//!
//! assert_eq!(result.status, DecodeStatus::Corrected { position: 2 });
//! assert_eq!(result.corrected.to_bit_string(), "1101001");
//! ```

pub use crate::error::{Error, Result};
use crate::bits::BitVector;

/// Trait for error correction code implementations
pub trait ErrorCorrection {
    /// Compute the syndrome of a received vector
    fn syndrome(&self, received: &BitVector) -> Result<BitVector>;

    /// Append check bits to a message so its syndrome is zero
    fn encode(&self, message: &BitVector) -> Result<BitVector>;

    /// Decode a received vector and correct a single error if possible
    fn decode(&self, received: &BitVector) -> Result<DecodeResult>;
}

/// Modulo-2 division and syndrome computation
pub mod gf2;
pub use gf2::{compute_syndrome, divide_mod2};

/// Exhaustive single-bit-flip decoder
pub mod decoder;
pub use decoder::{decode, DecodeResult, DecodeStatus, SyndromeDecoder};

/// Systematic codeword construction
pub mod encoder;
pub use encoder::encode_systematic;

/// Random bit-flip injection
pub mod noise;
pub use noise::inject_errors;

/// Decoder behaviour over every low-weight error pattern
pub mod survey;
pub use survey::{survey_error_patterns, WeightSummary, MAX_SURVEY_PATTERNS};
