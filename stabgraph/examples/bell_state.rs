use stabgraph::{extract_graph_state, Circuit, Gate, SimOptions};

fn main() {
    let mut circuit = Circuit::new(2);
    circuit.push(Gate::h(0));
    circuit.push(Gate::cnot(0, 1));

    let state = extract_graph_state(&circuit, &SimOptions::default()).unwrap();

    println!("Bell pair as a graph state:");
    for (vertex, neighbors) in state.adjacency.iter().enumerate() {
        println!(
            "  vertex {vertex}: lco = {}, neighbors = {:?}",
            state.lco[vertex],
            neighbors.as_slice()
        );
    }
}
