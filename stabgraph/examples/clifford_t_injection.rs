//! Extract the graph state of a small Clifford+T circuit, tracking where
//! each T was teleported, with progress reporting enabled.

use stabgraph::{extract_graph_state, Circuit, Gate, SimOptions};

fn main() {
    env_logger::init();

    let qubit_count = 4;
    let mut circuit = Circuit::new(qubit_count);
    for q in 0..qubit_count {
        circuit.push(Gate::h(q));
    }
    for layer in 0..3 {
        for q in 0..qubit_count {
            circuit.push(Gate::t(q));
        }
        for q in 0..qubit_count - 1 {
            circuit.push(Gate::cnot(q, q + 1));
        }
        circuit.push(Gate::s(layer % qubit_count));
    }

    let options = SimOptions {
        track_injections: true,
        progress: true,
    };
    let state = extract_graph_state(&circuit, &options).unwrap();

    println!(
        "{} original qubits expanded to {} vertices",
        qubit_count,
        state.lco.len()
    );
    println!("injected rotations:");
    for injection in &state.injections {
        println!(
            "  {} teleported from vertex {} onto ancilla {}",
            injection.kind, injection.source, injection.ancilla
        );
    }
    let edge_count = state.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2;
    println!("final graph: {edge_count} edges");
}
