//! Dense statevector simulation for circuits of X gates.
//!
//! Amplitudes are stored in an `ndarray` vector of length 2^n, indexed with
//! qubit 0 as the least significant bit. X gates only permute amplitudes,
//! so every amplitude stays real.

use crate::error::{Error, Result};
use crate::quantum::bloch::BlochVector;
use crate::quantum::circuit::{Gate, QuantumCircuit};
use ndarray::Array1;
use std::fmt::{Display, Formatter};

/// Largest register simulated densely (2^16 amplitudes)
pub const MAX_SIMULATED_QUBITS: usize = 16;

const TOLERANCE: f64 = 1e-12;

/// State of an n-qubit register after running a circuit
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    num_qubits: usize,
    amplitudes: Array1<f64>,
}

impl Statevector {
    /// The all-zero state |0…0⟩
    pub fn zero_state(num_qubits: usize) -> Result<Self> {
        if num_qubits > MAX_SIMULATED_QUBITS {
            return Err(Error::InputTooLarge {
                length: num_qubits,
                max_length: MAX_SIMULATED_QUBITS,
            });
        }

        let mut amplitudes = Array1::zeros(1usize << num_qubits);
        amplitudes[0] = 1.0;
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Runs `circuit` starting from |0…0⟩
    pub fn from_circuit(circuit: &QuantumCircuit) -> Result<Self> {
        let mut state = Self::zero_state(circuit.num_qubits())?;
        for gate in circuit.gates() {
            state.apply(gate)?;
        }
        Ok(state)
    }

    /// Applies one gate in place
    pub fn apply(&mut self, gate: &Gate) -> Result<()> {
        match *gate {
            Gate::X(qubit) => {
                let mask = self.mask(qubit)?;
                for index in 0..self.amplitudes.len() {
                    if index & mask == 0 {
                        self.amplitudes.swap(index, index | mask);
                    }
                }
            }
        }
        Ok(())
    }

    /// Number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Amplitudes indexed by basis state
    pub fn amplitudes(&self) -> &Array1<f64> {
        &self.amplitudes
    }

    /// Measurement probability of every basis state
    pub fn probabilities(&self) -> Array1<f64> {
        self.amplitudes.mapv(|a| a * a)
    }

    /// Index of the basis state if the register is in one
    pub fn basis_state(&self) -> Option<usize> {
        self.amplitudes
            .iter()
            .position(|a| (a.abs() - 1.0).abs() < TOLERANCE)
    }

    /// Ket label of the basis state, highest qubit first, e.g. `|1001011⟩`
    pub fn ket(&self) -> Option<String> {
        let index = self.basis_state()?;
        let digits: String = (0..self.num_qubits)
            .rev()
            .map(|qubit| if (index >> qubit) & 1 == 1 { '1' } else { '0' })
            .collect();
        Some(format!("|{}⟩", digits))
    }

    /// Bloch vector of one qubit, from its reduced state
    pub fn bloch_vector(&self, qubit: usize) -> Result<BlochVector> {
        let mask = self.mask(qubit)?;
        let mut x = 0.0;
        let mut z = 0.0;

        for index in 0..self.amplitudes.len() {
            if index & mask != 0 {
                continue;
            }
            let a0 = self.amplitudes[index];
            let a1 = self.amplitudes[index | mask];
            x += 2.0 * a0 * a1;
            z += a0 * a0 - a1 * a1;
        }

        // Real amplitudes leave no Y component
        Ok(BlochVector::new(x, 0.0, z))
    }

    fn mask(&self, qubit: usize) -> Result<usize> {
        if qubit >= self.num_qubits {
            return Err(Error::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(1 << qubit)
    }
}

impl Display for Statevector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.ket() {
            Some(ket) => write!(f, "{}", ket),
            None => write!(f, "{}", self.amplitudes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::BitVector;
    use approx::assert_abs_diff_eq;

    fn state_of(bits: &str) -> Statevector {
        let bits: BitVector = bits.parse().unwrap();
        Statevector::from_circuit(&QuantumCircuit::from_bits(&bits)).unwrap()
    }

    #[test]
    fn test_zero_state() {
        let state = Statevector::zero_state(3).unwrap();
        assert_eq!(state.amplitudes().len(), 8);
        assert_eq!(state.basis_state(), Some(0));
        assert_eq!(state.ket().unwrap(), "|000⟩");
    }

    #[test]
    fn test_bits_map_to_basis_state() {
        // Qubit 0 is the least significant bit of the basis index
        let state = state_of("1101001");
        assert_eq!(state.basis_state(), Some(0b1001011));
        assert_eq!(state.ket().unwrap(), "|1001011⟩");
        assert_eq!(state.to_string(), "|1001011⟩");

        let probabilities = state.probabilities();
        assert_abs_diff_eq!(probabilities.sum(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(probabilities[0b1001011], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_double_flip_restores() {
        let mut circuit = QuantumCircuit::new(2);
        circuit.x(1).unwrap().x(1).unwrap();
        let state = Statevector::from_circuit(&circuit).unwrap();
        assert_eq!(state.basis_state(), Some(0));
    }

    #[test]
    fn test_bloch_vector_per_qubit() {
        let state = state_of("10");

        let q0 = state.bloch_vector(0).unwrap();
        assert_abs_diff_eq!(q0.x, 0.0);
        assert_abs_diff_eq!(q0.y, 0.0);
        assert_abs_diff_eq!(q0.z, -1.0);

        let q1 = state.bloch_vector(1).unwrap();
        assert_abs_diff_eq!(q1.z, 1.0);

        assert!(state.bloch_vector(2).is_err());
    }

    #[test]
    fn test_too_many_qubits() {
        let bits = BitVector::zeros(MAX_SIMULATED_QUBITS + 1);
        let result = Statevector::from_circuit(&QuantumCircuit::from_bits(&bits));
        assert_eq!(
            result.unwrap_err(),
            Error::InputTooLarge {
                length: MAX_SIMULATED_QUBITS + 1,
                max_length: MAX_SIMULATED_QUBITS
            }
        );
    }
}
