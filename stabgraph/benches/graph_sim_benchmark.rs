//! Criterion benchmarks for graph-state extraction.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use stabgraph::{extract_graph_state, Circuit, Gate, SimOptions};

const SEED: u64 = 42;

fn ghz_circuit(qubit_count: usize) -> Circuit {
    let mut circuit = Circuit::with_capacity(qubit_count, qubit_count);
    circuit.push(Gate::h(0));
    for q in 0..qubit_count - 1 {
        circuit.push(Gate::cnot(q, q + 1));
    }
    circuit
}

fn random_clifford_circuit(qubit_count: usize, length: usize, rng: &mut SmallRng) -> Circuit {
    let mut circuit = Circuit::with_capacity(qubit_count, length);
    for _ in 0..length {
        match rng.gen_range(0..4) {
            0 => circuit.push(Gate::h(rng.gen_range(0..qubit_count))),
            1 => circuit.push(Gate::s(rng.gen_range(0..qubit_count))),
            _ => {
                let first = rng.gen_range(0..qubit_count);
                let mut second = rng.gen_range(0..qubit_count);
                while second == first {
                    second = rng.gen_range(0..qubit_count);
                }
                circuit.push(if rng.gen_bool(0.5) {
                    Gate::cz(first, second)
                } else {
                    Gate::cnot(first, second)
                });
            }
        }
    }
    circuit
}

fn rotation_chain_circuit(qubit_count: usize, layers: usize) -> Circuit {
    let mut circuit = Circuit::with_capacity(qubit_count, layers * qubit_count * 2);
    for q in 0..qubit_count {
        circuit.push(Gate::h(q));
    }
    for _ in 0..layers {
        for q in 0..qubit_count {
            circuit.push(Gate::t(q));
        }
        for q in 0..qubit_count - 1 {
            circuit.push(Gate::cnot(q, q + 1));
        }
    }
    circuit
}

fn ghz_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ghz");
    for qubit_count in [16, 256, 4096] {
        let circuit = ghz_circuit(qubit_count);
        group.bench_with_input(BenchmarkId::from_parameter(qubit_count), &circuit, |bencher, circuit| {
            bencher.iter(|| extract_graph_state(circuit, &SimOptions::default()));
        });
    }
    group.finish();
}

fn random_clifford_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("random_clifford");
    group.sample_size(20);
    for (qubit_count, length) in [(32, 2_000), (128, 20_000)] {
        let mut rng = SmallRng::seed_from_u64(SEED);
        let circuit = random_clifford_circuit(qubit_count, length, &mut rng);
        let param = format!("q{qubit_count}_g{length}");
        group.bench_with_input(BenchmarkId::from_parameter(param), &circuit, |bencher, circuit| {
            bencher.iter(|| extract_graph_state(circuit, &SimOptions::default()));
        });
    }
    group.finish();
}

fn rotation_chain_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("rotation_chain");
    group.sample_size(20);
    for (qubit_count, layers) in [(8, 50), (32, 100)] {
        let circuit = rotation_chain_circuit(qubit_count, layers);
        let param = format!("q{qubit_count}_l{layers}");
        group.bench_with_input(BenchmarkId::from_parameter(param), &circuit, |bencher, circuit| {
            bencher.iter(|| extract_graph_state(circuit, &SimOptions::default()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    ghz_benchmark,
    random_clifford_benchmark,
    rotation_chain_benchmark,
);
criterion_main!(benches);
