//! Mapping of classical bits onto qubits.
//!
//! Each bit of a codeword becomes one qubit prepared in |0⟩, with an X gate
//! on every qubit whose bit is 1. The resulting circuit only ever produces
//! computational basis states; nothing here simulates an error-correcting
//! code.
//!
//! Two Bloch vectors are available and deliberately kept apart:
//! - [`display_bloch_vector`] looks at the first received bit directly and
//!   returns one of the two poles. This is what the demo shows.
//! - [`Statevector::bloch_vector`] derives the vector of any qubit from the
//!   simulated state of the constructed circuit.

/// Gate list and text diagram
pub mod circuit;
pub use circuit::{Gate, QuantumCircuit};

/// Dense state simulation of X-only circuits
pub mod statevector;
pub use statevector::{Statevector, MAX_SIMULATED_QUBITS};

/// Single-qubit Bloch vectors
pub mod bloch;
pub use bloch::{display_bloch_vector, BlochVector};
