//! Bit vectors entered by a user or produced by the decoder.
//!
//! A [`BitVector`] is an ordered run of bits indexed from 0, stored as a
//! `bitvec` vector with most-significant-first ordering so that index 0 is
//! the leftmost character of the string it was parsed from. Generators,
//! received codewords and syndromes all use this one type.
//!
//! Parsing is the validation boundary: anything other than `'0'` and `'1'`
//! is rejected with a structured [`Error`] instead of surfacing later as an
//! out-of-range access.
//!
//! # Examples
//!
//! ```
//! use bchviz::BitVector;
//!
//! let received: BitVector = "1101001".parse().unwrap();
//! assert_eq!(received.len(), 7);
//! assert_eq!(received.to_string(), "[1, 1, 0, 1, 0, 0, 1]");
//! assert_eq!(received.to_bit_string(), "1101001");
//! ```

use crate::error::{Error, Result};
use bitvec::prelude::*;
use std::fmt::{Display, Formatter};
use std::ops::Index;
use std::str::FromStr;

/// Ordered sequence of bits, every element exactly 0 or 1
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitVector(BitVec<u8, Msb0>);

impl BitVector {
    /// Creates an empty bit vector
    pub fn new() -> Self {
        Self(BitVec::new())
    }

    /// Creates a vector of `len` zero bits
    pub fn zeros(len: usize) -> Self {
        Self(BitVec::repeat(false, len))
    }

    /// Builds a vector from integer bits, rejecting anything but 0 and 1
    pub fn from_bits(bits: &[u8]) -> Result<Self> {
        let mut out = BitVec::with_capacity(bits.len());
        for (position, &bit) in bits.iter().enumerate() {
            match bit {
                0 => out.push(false),
                1 => out.push(true),
                other => {
                    return Err(Error::InvalidInput(format!(
                        "Bit at position {} has value {}, expected 0 or 1",
                        position, other
                    )))
                }
            }
        }
        Ok(Self(out))
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector holds no bits
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bit at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<bool> {
        self.0.get(index).map(|bit| *bit)
    }

    /// True when no bit is set. An empty vector counts as zero.
    pub fn is_zero(&self) -> bool {
        self.0.not_any()
    }

    /// Hamming weight
    pub fn weight(&self) -> usize {
        self.0.count_ones()
    }

    /// Indices of the set bits in ascending order
    pub fn ones(&self) -> Vec<usize> {
        self.0.iter_ones().collect()
    }

    /// Toggles the bit at `index` in place
    pub fn flip(&mut self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(Error::InvalidInput(format!(
                "Bit index {} out of range for a {}-bit vector",
                index,
                self.len()
            )));
        }
        let bit = self.0[index];
        self.0.set(index, !bit);
        Ok(())
    }

    /// Copy of `self` with the bit at `index` toggled
    pub fn flipped(&self, index: usize) -> Result<Self> {
        let mut copy = self.clone();
        copy.flip(index)?;
        Ok(copy)
    }

    /// Element-wise XOR of two vectors of equal length
    pub fn xor(&self, other: &BitVector) -> Result<Self> {
        if self.len() != other.len() {
            return Err(Error::InvalidInput(format!(
                "Cannot XOR a {}-bit vector with a {}-bit vector",
                self.len(),
                other.len()
            )));
        }
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| a ^ b)
            .collect())
    }

    /// Appends the bits of `other` to the end of `self`
    pub fn extend_from(&mut self, other: &BitVector) {
        self.0.extend_from_bitslice(&other.0);
    }

    /// Iterates over the bits as `bool`s
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().by_vals()
    }

    /// Borrows the underlying bit slice
    pub fn as_bitslice(&self) -> &BitSlice<u8, Msb0> {
        self.0.as_bitslice()
    }

    /// Bits as integers, the way a user would write them down
    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().map(u8::from).collect()
    }

    /// Compact form, e.g. `1101001`
    pub fn to_bit_string(&self) -> String {
        self.iter().map(|bit| if bit { '1' } else { '0' }).collect()
    }
}

impl FromStr for BitVector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut bits = BitVec::with_capacity(trimmed.len());
        for (position, found) in trimmed.chars().enumerate() {
            match found {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(Error::InvalidBit { position, found }),
            }
        }
        Ok(Self(bits))
    }
}

impl Display for BitVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, bit) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", u8::from(bit))?;
        }
        write!(f, "]")
    }
}

impl Index<usize> for BitVector {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.0[index]
    }
}

impl From<BitVec<u8, Msb0>> for BitVector {
    fn from(bits: BitVec<u8, Msb0>) -> Self {
        Self(bits)
    }
}

impl From<&BitSlice<u8, Msb0>> for BitVector {
    fn from(bits: &BitSlice<u8, Msb0>) -> Self {
        Self(bits.to_bitvec())
    }
}

impl FromIterator<bool> for BitVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
