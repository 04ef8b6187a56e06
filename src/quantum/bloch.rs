//! Single-qubit Bloch vectors.

use crate::bits::BitVector;
use crate::error::{Error, Result};
use std::fmt::{Display, Formatter};

/// Point on (or inside) the Bloch sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlochVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl BlochVector {
    /// North pole, the |0⟩ state
    pub const ZERO_STATE: BlochVector = BlochVector {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// South pole, the |1⟩ state
    pub const ONE_STATE: BlochVector = BlochVector {
        x: 0.0,
        y: 0.0,
        z: -1.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Pole for a classical bit value
    pub fn for_bit(bit: bool) -> Self {
        if bit {
            Self::ONE_STATE
        } else {
            Self::ZERO_STATE
        }
    }

    /// Euclidean length; 1 for pure states
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// `|0⟩` or `|1⟩` when the vector sits exactly on a pole
    pub fn pole_label(&self) -> Option<&'static str> {
        if *self == Self::ZERO_STATE {
            Some("|0⟩")
        } else if *self == Self::ONE_STATE {
            Some("|1⟩")
        } else {
            None
        }
    }
}

impl Display for BlochVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

/// Bloch vector shown for the received codeword.
///
/// Only the first bit is consulted: 0 gives the north pole, 1 the south
/// pole. The circuit built from the codeword is not looked at.
pub fn display_bloch_vector(received: &BitVector) -> Result<BlochVector> {
    received
        .get(0)
        .map(BlochVector::for_bit)
        .ok_or(Error::EmptyInput)
}
