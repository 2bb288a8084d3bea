//! Decomposition into the ICM normal form.
//!
//! The rewrite keeps only single-qubit Cliffords, CZ and CNOT. Every
//! non-Clifford gate is replaced by a CNOT onto a freshly allocated ancilla
//! vertex; the logical qubit moves to the ancilla and the rotation itself is
//! deferred to a later injection stage (teleportation). RESET likewise moves
//! the logical qubit to a fresh vertex, with no gate emitted: fresh vertices
//! start in |0⟩.

use crate::circuit::{Circuit, GateKind, QubitId};
use crate::error::GraphSimError;

/// A gate in the ICM normal form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IcmOp {
    Hadamard { qubit: QubitId },
    SqrtZ { qubit: QubitId },
    SqrtZInv { qubit: QubitId },
    ControlledZ { first: QubitId, second: QubitId },
    ControlledX { control: QubitId, target: QubitId },
}

/// Record of a non-Clifford gate deferred to teleportation injection:
/// the rotation `kind` is to be consumed on `source` after the entangling
/// CNOT onto `ancilla`, where the logical qubit now lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Injection {
    pub kind: GateKind,
    pub source: QubitId,
    pub ancilla: QubitId,
}

/// A circuit rewritten into ICM form.
///
/// `qubit_count` covers the original qubits plus one ancilla per injected
/// gate and per reset.
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct IcmCircuit {
    pub qubit_count: usize,
    pub ops: Vec<IcmOp>,
    pub injections: Vec<Injection>,
}

/// Rewrite `circuit` into ICM form.
///
/// Paulis are dropped (they never change the graph), Cliffords are re-indexed
/// through the live-qubit map, and non-Clifford gates allocate ancillas as
/// described in the module docs. Injection records are collected only when
/// `track_injections` is set.
///
/// # Errors
///
/// Any [`Circuit::validate`] failure; the whole circuit is validated before
/// any rewriting happens.
pub fn decompose(circuit: &Circuit, track_injections: bool) -> Result<IcmCircuit, GraphSimError> {
    circuit.validate()?;

    let mut qubit_map: Vec<QubitId> = (0..circuit.qubit_count()).collect();
    let mut qubit_count = circuit.qubit_count();
    let mut ops = Vec::with_capacity(circuit.len());
    let mut injections = Vec::new();

    for gate in circuit.iter() {
        match gate.kind {
            kind if kind.is_pauli() => {}
            GateKind::H => ops.push(IcmOp::Hadamard {
                qubit: qubit_map[gate.qubits[0]],
            }),
            GateKind::S => ops.push(IcmOp::SqrtZ {
                qubit: qubit_map[gate.qubits[0]],
            }),
            GateKind::SDagger => ops.push(IcmOp::SqrtZInv {
                qubit: qubit_map[gate.qubits[0]],
            }),
            GateKind::Cz => ops.push(IcmOp::ControlledZ {
                first: qubit_map[gate.qubits[0]],
                second: qubit_map[gate.qubits[1]],
            }),
            GateKind::Cnot => ops.push(IcmOp::ControlledX {
                control: qubit_map[gate.qubits[0]],
                target: qubit_map[gate.qubits[1]],
            }),
            kind if kind.is_injected() => {
                let source = qubit_map[gate.qubits[0]];
                let ancilla = qubit_count;
                qubit_count += 1;
                ops.push(IcmOp::ControlledX {
                    control: source,
                    target: ancilla,
                });
                if track_injections {
                    injections.push(Injection { kind, source, ancilla });
                }
                qubit_map[gate.qubits[0]] = ancilla;
            }
            GateKind::Reset => {
                qubit_map[gate.qubits[0]] = qubit_count;
                qubit_count += 1;
            }
            // is_pauli / is_injected guards above are exhaustive over the rest
            _ => unreachable!("gate kind not covered: {}", gate.kind),
        }
    }

    Ok(IcmCircuit {
        qubit_count,
        ops,
        injections,
    })
}
