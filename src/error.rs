//! Error types shared by every module of the crate.

use thiserror::Error;

/// Errors raised when inputs to the decoding pipeline are malformed.
///
/// Decoder outcomes such as "uncorrectable" are not errors; they are
/// reported through [`crate::ecc::DecodeStatus`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Generic validation failure with a human-readable reason
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Input exceeds a fixed capacity
    #[error("Input too large: length {length} exceeds maximum {max_length}")]
    InputTooLarge { length: usize, max_length: usize },

    /// A character other than '0' or '1' in a bit string
    #[error("Invalid bit '{found}' at position {position}: expected '0' or '1'")]
    InvalidBit { position: usize, found: char },

    /// An empty bit string where at least one bit is required
    #[error("Bit string must contain at least one bit")]
    EmptyInput,

    /// Modulo-2 division by an empty divisor
    #[error("Divisor must contain at least one bit")]
    EmptyDivisor,

    /// Gate applied to a qubit the circuit does not have
    #[error("Qubit {qubit} is out of range for a {num_qubits}-qubit circuit")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
