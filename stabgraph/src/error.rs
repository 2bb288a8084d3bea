use derive_more::{Display, Error};

use crate::circuit::GateKind;

/// Fatal simulation errors.
///
/// There is no partial recovery: a circuit that trips any of these is
/// malformed and the run aborts before or during decomposition. Paulis are
/// the only gates ever skipped, and those are semantic no-ops on the graph.
#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum GraphSimError {
    /// A gate name outside the supported vocabulary.
    #[display("unknown gate name `{name}`")]
    UnknownGate { name: String },

    /// A gate addressed a qubit at or beyond the circuit's qubit count.
    #[display("qubit {qubit} out of range for a circuit on {qubit_count} qubits")]
    QubitOutOfRange { qubit: usize, qubit_count: usize },

    /// A gate carried the wrong number of qubit operands.
    #[display("gate {kind} expects {expected} qubit operand(s), got {actual}")]
    ArityMismatch {
        kind: GateKind,
        expected: usize,
        actual: usize,
    },

    /// A two-qubit gate addressed the same qubit twice.
    #[display("gate {kind} applied to duplicate qubit operands")]
    DuplicateQubits { kind: GateKind },
}
