//! Demo inputs and their defaults.

use crate::bits::BitVector;
use crate::error::{Error, Result};

/// Generator pattern used when none is given: x^3 + x + 1
pub const DEFAULT_GENERATOR: &str = "1011";

/// Received codeword used when none is given; a valid (7,4) codeword
pub const DEFAULT_RECEIVED: &str = "1101001";

/// The two user-facing inputs of the demo, as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub generator: String,
    pub received: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            generator: DEFAULT_GENERATOR.to_string(),
            received: DEFAULT_RECEIVED.to_string(),
        }
    }
}

impl DemoConfig {
    pub fn new(generator: impl Into<String>, received: impl Into<String>) -> Self {
        Self {
            generator: generator.into(),
            received: received.into(),
        }
    }

    /// Validates both strings and returns `(generator, received)`
    pub fn parse(&self) -> Result<(BitVector, BitVector)> {
        let generator = self
            .generator
            .parse::<BitVector>()
            .map_err(|e| Error::InvalidInput(format!("Generator: {}", e)))?;
        let received = self
            .received
            .parse::<BitVector>()
            .map_err(|e| Error::InvalidInput(format!("Received codeword: {}", e)))?;
        Ok((generator, received))
    }
}
