//! End-to-end demo pipeline and its text rendering.
//!
//! [`DemoReport::build`] runs syndrome computation, decoding and the qubit
//! mapping in order and keeps every intermediate value, so a caller can
//! render the panels however it likes. The `Display` impl renders them as
//! plain text sections.

use crate::bits::BitVector;
use crate::ecc::{decode, DecodeResult, ErrorCorrection, SyndromeDecoder};
use crate::error::Result;
use crate::quantum::{
    display_bloch_vector, BlochVector, QuantumCircuit, Statevector, MAX_SIMULATED_QUBITS,
};
use log::{debug, warn};
use std::fmt::{Display, Formatter};

const NOTE: &str = "\
Note:
- BCH encoding and Berlekamp decoding are classical.
- Quantum circuit demonstrates how classical bits are mapped to qubits.
- Bloch sphere is shown for a single qubit since multi-qubit states
  cannot be represented on a single Bloch sphere.";

/// Every stage's output for one generator/received pair
#[derive(Debug, Clone)]
pub struct DemoReport {
    pub generator: BitVector,
    pub received: BitVector,
    /// Positions flipped on purpose before decoding, if any
    pub injected: Vec<usize>,
    pub syndrome: BitVector,
    pub decoded: DecodeResult,
    pub circuit: QuantumCircuit,
    /// `None` when the codeword has more than `MAX_SIMULATED_QUBITS` bits
    pub statevector: Option<Statevector>,
    /// Pole chosen from the first received bit
    pub bloch: BlochVector,
}

impl DemoReport {
    /// Runs the pipeline for `received` against `generator`
    pub fn build(generator: &BitVector, received: &BitVector) -> Result<Self> {
        let code = SyndromeDecoder::new(generator.clone())?;
        let syndrome = code.syndrome(received)?;
        let decoded = decode(received, &syndrome, code.generator())?;
        debug!("Decoder: {}", decoded.status);

        let circuit = QuantumCircuit::from_bits(received);
        let statevector = if circuit.num_qubits() <= MAX_SIMULATED_QUBITS {
            Some(Statevector::from_circuit(&circuit)?)
        } else {
            warn!(
                "Skipping statevector for {} qubits (limit {})",
                circuit.num_qubits(),
                MAX_SIMULATED_QUBITS
            );
            None
        };
        let bloch = display_bloch_vector(received)?;

        Ok(Self {
            generator: generator.clone(),
            received: received.clone(),
            injected: Vec::new(),
            syndrome,
            decoded,
            circuit,
            statevector,
            bloch,
        })
    }

    /// Records which positions were corrupted before decoding
    pub fn with_injected(mut self, positions: Vec<usize>) -> Self {
        self.injected = positions;
        self
    }
}

impl Display for DemoReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Syndrome Calculation ===")?;
        writeln!(f, "Generator:          {}", self.generator)?;
        writeln!(f, "Received Vector:    {}", self.received)?;
        if !self.injected.is_empty() {
            writeln!(f, "Injected Errors:    {:?}", self.injected)?;
        }
        writeln!(f, "Syndrome:           {}", self.syndrome)?;
        writeln!(f)?;

        writeln!(f, "=== Berlekamp-Style Decoding (Educational) ===")?;
        writeln!(f, "{}", self.decoded.status)?;
        writeln!(f, "Corrected Codeword: {}", self.decoded.corrected)?;
        writeln!(f)?;

        writeln!(f, "=== Quantum Representation of Received Codeword ===")?;
        writeln!(f, "Quantum Circuit:")?;
        writeln!(f, "{}", self.circuit)?;
        if let Some(state) = &self.statevector {
            writeln!(f, "Statevector:        {}", state)?;
        }
        write!(f, "Bloch Sphere (Single Qubit Demonstration): {}", self.bloch)?;
        if let Some(label) = self.bloch.pole_label() {
            write!(f, " {}", label)?;
        }
        writeln!(f)?;
        writeln!(f)?;

        write!(f, "{}", NOTE)
    }
}
