//! Quantum circuits made of basis-state flips.

use crate::bits::BitVector;
use crate::error::{Error, Result};
use std::fmt::{Display, Formatter};

/// A gate in the circuit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Pauli-X (bit flip) on the given qubit
    X(usize),
}

impl Gate {
    /// Qubit the gate acts on
    pub fn qubit(&self) -> usize {
        match *self {
            Gate::X(qubit) => qubit,
        }
    }

    fn symbol(&self) -> char {
        match self {
            Gate::X(_) => 'X',
        }
    }
}

/// Ordered list of gates over a fixed register of qubits, all starting in |0⟩
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantumCircuit {
    num_qubits: usize,
    gates: Vec<Gate>,
}

impl QuantumCircuit {
    /// Creates an empty circuit over `num_qubits` qubits
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
        }
    }

    /// One qubit per bit, with an X on every qubit whose bit is 1
    pub fn from_bits(bits: &BitVector) -> Self {
        let gates = bits.ones().into_iter().map(Gate::X).collect();
        Self {
            num_qubits: bits.len(),
            gates,
        }
    }

    /// Appends an X gate on `qubit`
    pub fn x(&mut self, qubit: usize) -> Result<&mut Self> {
        if qubit >= self.num_qubits {
            return Err(Error::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        self.gates.push(Gate::X(qubit));
        Ok(self)
    }

    /// Number of qubits in the register
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Gates in application order
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Number of layers when every gate is placed as early as possible
    pub fn depth(&self) -> usize {
        self.layers().len()
    }

    fn layers(&self) -> Vec<Vec<Gate>> {
        let mut next_free = vec![0usize; self.num_qubits];
        let mut layers: Vec<Vec<Gate>> = Vec::new();

        for &gate in &self.gates {
            let column = next_free[gate.qubit()];
            if column == layers.len() {
                layers.push(Vec::new());
            }
            layers[column].push(gate);
            next_free[gate.qubit()] = column + 1;
        }

        layers
    }

    /// Renders the circuit as text, one wire per qubit
    ///
    /// ```
    /// use bchviz::quantum::QuantumCircuit;
    /// use bchviz::BitVector;
    ///
    /// let bits: BitVector = "10".parse().unwrap();
    /// let circuit = QuantumCircuit::from_bits(&bits);
    /// assert_eq!(circuit.draw(), "q_0: ──X──\nq_1: ─────");
    /// ```
    pub fn draw(&self) -> String {
        let layers = self.layers();
        let label_width = format!("q_{}: ", self.num_qubits.saturating_sub(1)).chars().count();

        let mut rows = Vec::with_capacity(self.num_qubits);
        for qubit in 0..self.num_qubits {
            let mut row = format!("{:<width$}", format!("q_{}: ", qubit), width = label_width);
            row.push('─');
            for layer in &layers {
                match layer.iter().find(|gate| gate.qubit() == qubit) {
                    Some(gate) => {
                        row.push('─');
                        row.push(gate.symbol());
                        row.push('─');
                    }
                    None => row.push_str("───"),
                }
            }
            row.push('─');
            rows.push(row);
        }

        rows.join("\n")
    }
}

impl Display for QuantumCircuit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.draw())
    }
}
