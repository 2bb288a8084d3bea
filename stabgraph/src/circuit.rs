//! Gate vocabulary and circuit container.
//!
//! This is the boundary the simulator presents to circuit producers: a flat
//! list of [`Gate`] records over a fixed 17-name vocabulary, 0-based qubit
//! indices throughout. Reset is a first-class [`GateKind`] rather than a
//! stringly-typed sentinel on the gate object.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::GraphSimError;

/// Index of a qubit / graph vertex.
pub type QubitId = usize;

/// The supported gate vocabulary.
///
/// `Display` and `FromStr` round-trip the canonical names
/// (`"S_Dagger"`, `"CNOT"`, `"SX_Dagger"`, ...); parsing anything else is the
/// fatal unknown-gate error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GateKind {
    I,
    X,
    Y,
    Z,
    H,
    S,
    SDagger,
    Cz,
    Cnot,
    T,
    TDagger,
    Rx,
    Ry,
    Rz,
    Sx,
    SxDagger,
    Reset,
}

impl GateKind {
    /// Every kind, in vocabulary order.
    pub const ALL: [GateKind; 17] = [
        GateKind::I,
        GateKind::X,
        GateKind::Y,
        GateKind::Z,
        GateKind::H,
        GateKind::S,
        GateKind::SDagger,
        GateKind::Cz,
        GateKind::Cnot,
        GateKind::T,
        GateKind::TDagger,
        GateKind::Rx,
        GateKind::Ry,
        GateKind::Rz,
        GateKind::Sx,
        GateKind::SxDagger,
        GateKind::Reset,
    ];

    /// Canonical name in the external vocabulary.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GateKind::I => "I",
            GateKind::X => "X",
            GateKind::Y => "Y",
            GateKind::Z => "Z",
            GateKind::H => "H",
            GateKind::S => "S",
            GateKind::SDagger => "S_Dagger",
            GateKind::Cz => "CZ",
            GateKind::Cnot => "CNOT",
            GateKind::T => "T",
            GateKind::TDagger => "T_Dagger",
            GateKind::Rx => "RX",
            GateKind::Ry => "RY",
            GateKind::Rz => "RZ",
            GateKind::Sx => "SX",
            GateKind::SxDagger => "SX_Dagger",
            GateKind::Reset => "RESET",
        }
    }

    /// Number of qubit operands the gate takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            GateKind::Cz | GateKind::Cnot => 2,
            _ => 1,
        }
    }

    /// True for I, X, Y, Z. Paulis never change the graph and are dropped
    /// during decomposition.
    #[must_use]
    pub const fn is_pauli(self) -> bool {
        matches!(self, GateKind::I | GateKind::X | GateKind::Y | GateKind::Z)
    }

    /// True for the Clifford gates the engine applies directly:
    /// H, S, S†, CZ and CNOT.
    #[must_use]
    pub const fn is_clifford(self) -> bool {
        matches!(
            self,
            GateKind::H | GateKind::S | GateKind::SDagger | GateKind::Cz | GateKind::Cnot
        )
    }

    /// True for the gates realized by teleportation onto a fresh ancilla:
    /// T, T†, the axis rotations, and √X.
    #[must_use]
    pub const fn is_injected(self) -> bool {
        matches!(
            self,
            GateKind::T
                | GateKind::TDagger
                | GateKind::Rx
                | GateKind::Ry
                | GateKind::Rz
                | GateKind::Sx
                | GateKind::SxDagger
        )
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GateKind {
    type Err = GraphSimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GateKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| GraphSimError::UnknownGate { name: s.to_owned() })
    }
}

/// One gate application: a kind plus its qubit operands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gate {
    pub kind: GateKind,
    pub qubits: SmallVec<[QubitId; 2]>,
}

impl Gate {
    /// A single-qubit gate record.
    #[must_use]
    pub fn single(kind: GateKind, qubit: QubitId) -> Self {
        Gate {
            kind,
            qubits: SmallVec::from_slice(&[qubit]),
        }
    }

    /// A two-qubit gate record.
    #[must_use]
    pub fn two(kind: GateKind, first: QubitId, second: QubitId) -> Self {
        Gate {
            kind,
            qubits: SmallVec::from_slice(&[first, second]),
        }
    }

    #[must_use]
    pub fn i(qubit: QubitId) -> Self {
        Gate::single(GateKind::I, qubit)
    }

    #[must_use]
    pub fn x(qubit: QubitId) -> Self {
        Gate::single(GateKind::X, qubit)
    }

    #[must_use]
    pub fn y(qubit: QubitId) -> Self {
        Gate::single(GateKind::Y, qubit)
    }

    #[must_use]
    pub fn z(qubit: QubitId) -> Self {
        Gate::single(GateKind::Z, qubit)
    }

    #[must_use]
    pub fn h(qubit: QubitId) -> Self {
        Gate::single(GateKind::H, qubit)
    }

    #[must_use]
    pub fn s(qubit: QubitId) -> Self {
        Gate::single(GateKind::S, qubit)
    }

    #[must_use]
    pub fn s_dagger(qubit: QubitId) -> Self {
        Gate::single(GateKind::SDagger, qubit)
    }

    #[must_use]
    pub fn cz(first: QubitId, second: QubitId) -> Self {
        Gate::two(GateKind::Cz, first, second)
    }

    #[must_use]
    pub fn cnot(control: QubitId, target: QubitId) -> Self {
        Gate::two(GateKind::Cnot, control, target)
    }

    #[must_use]
    pub fn t(qubit: QubitId) -> Self {
        Gate::single(GateKind::T, qubit)
    }

    #[must_use]
    pub fn t_dagger(qubit: QubitId) -> Self {
        Gate::single(GateKind::TDagger, qubit)
    }

    #[must_use]
    pub fn rx(qubit: QubitId) -> Self {
        Gate::single(GateKind::Rx, qubit)
    }

    #[must_use]
    pub fn ry(qubit: QubitId) -> Self {
        Gate::single(GateKind::Ry, qubit)
    }

    #[must_use]
    pub fn rz(qubit: QubitId) -> Self {
        Gate::single(GateKind::Rz, qubit)
    }

    #[must_use]
    pub fn sx(qubit: QubitId) -> Self {
        Gate::single(GateKind::Sx, qubit)
    }

    #[must_use]
    pub fn sx_dagger(qubit: QubitId) -> Self {
        Gate::single(GateKind::SxDagger, qubit)
    }

    #[must_use]
    pub fn reset(qubit: QubitId) -> Self {
        Gate::single(GateKind::Reset, qubit)
    }

    /// Check operand arity, distinctness and range against a qubit count.
    ///
    /// # Errors
    ///
    /// [`GraphSimError::ArityMismatch`], [`GraphSimError::DuplicateQubits`]
    /// or [`GraphSimError::QubitOutOfRange`] for malformed records.
    pub fn validate(&self, qubit_count: usize) -> Result<(), GraphSimError> {
        let expected = self.kind.arity();
        if self.qubits.len() != expected {
            return Err(GraphSimError::ArityMismatch {
                kind: self.kind,
                expected,
                actual: self.qubits.len(),
            });
        }
        if expected == 2 && self.qubits[0] == self.qubits[1] {
            return Err(GraphSimError::DuplicateQubits { kind: self.kind });
        }
        for &qubit in &self.qubits {
            if qubit >= qubit_count {
                return Err(GraphSimError::QubitOutOfRange { qubit, qubit_count });
            }
        }
        Ok(())
    }
}

/// An ordered gate list over a fixed number of qubits.
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct Circuit {
    qubit_count: usize,
    gates: Vec<Gate>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(qubit_count: usize) -> Self {
        Circuit {
            qubit_count,
            gates: Vec::new(),
        }
    }

    /// Create a new circuit with pre-allocated gate capacity.
    pub fn with_capacity(qubit_count: usize, capacity: usize) -> Self {
        Circuit {
            qubit_count,
            gates: Vec::with_capacity(capacity),
        }
    }

    /// Push a gate to the circuit.
    pub fn push(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    #[must_use]
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    pub fn iter(&self) -> impl Iterator<Item = &Gate> {
        self.gates.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Validate every gate record against this circuit's qubit count.
    ///
    /// # Errors
    ///
    /// The first malformed gate's error, if any.
    pub fn validate(&self) -> Result<(), GraphSimError> {
        self.gates.iter().try_for_each(|gate| gate.validate(self.qubit_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in GateKind::ALL {
            assert_eq!(kind.name().parse::<GateKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "CCZ".parse::<GateKind>(),
            Err(GraphSimError::UnknownGate { name: "CCZ".into() })
        );
    }

    #[test]
    fn vocabulary_classes_partition() {
        let paulis: Vec<_> = GateKind::ALL.into_iter().filter(|k| k.is_pauli()).collect();
        assert_eq!(paulis, [GateKind::I, GateKind::X, GateKind::Y, GateKind::Z]);
        let cliffords: Vec<_> = GateKind::ALL.into_iter().filter(|k| k.is_clifford()).collect();
        assert_eq!(
            cliffords,
            [GateKind::H, GateKind::S, GateKind::SDagger, GateKind::Cz, GateKind::Cnot]
        );
        let injected = GateKind::ALL.into_iter().filter(|k| k.is_injected()).count();
        assert_eq!(injected, 7);
        let two_qubit: Vec<_> = GateKind::ALL.into_iter().filter(|k| k.arity() == 2).collect();
        assert_eq!(two_qubit, [GateKind::Cz, GateKind::Cnot]);
        // every kind falls in exactly one class
        for kind in GateKind::ALL {
            let classes = usize::from(kind.is_pauli())
                + usize::from(kind.is_clifford())
                + usize::from(kind.is_injected())
                + usize::from(kind == GateKind::Reset);
            assert_eq!(classes, 1, "{kind} is in {classes} classes");
        }
    }

    #[test]
    fn validation_rejects_malformed_gates() {
        let circuit_qubits = 3;
        assert_eq!(Gate::h(1).validate(circuit_qubits), Ok(()));
        assert_eq!(
            Gate::h(3).validate(circuit_qubits),
            Err(GraphSimError::QubitOutOfRange { qubit: 3, qubit_count: 3 })
        );
        assert_eq!(
            Gate::cz(1, 1).validate(circuit_qubits),
            Err(GraphSimError::DuplicateQubits { kind: GateKind::Cz })
        );
        let malformed = Gate {
            kind: GateKind::Cnot,
            qubits: SmallVec::from_slice(&[0]),
        };
        assert_eq!(
            malformed.validate(circuit_qubits),
            Err(GraphSimError::ArityMismatch {
                kind: GateKind::Cnot,
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn circuit_push_and_iter() {
        let mut circuit = Circuit::with_capacity(2, 3);
        assert!(circuit.is_empty());
        circuit.push(Gate::h(0));
        circuit.push(Gate::cnot(0, 1));
        assert_eq!(circuit.len(), 2);
        assert_eq!(circuit.iter().count(), 2);
        assert!(circuit.validate().is_ok());
    }
}
