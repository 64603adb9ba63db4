use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use logicsketch::{
    circuit_builder::{CircuitBuilder, GateCounts},
    Circuit, DeclarationOrder, Evaluator, NodeId, SketchConfig, Topological,
};

/// A full-size layout with wires pulled between random node pairs until
/// `attempts` connection requests have been made.
fn random_circuit(rng: &mut StdRng, attempts: usize) -> Circuit {
    let config = SketchConfig::default();
    let (mut circuit, terminals) = CircuitBuilder::new(&config, GateCounts([3, 3, 3])).build();
    let ids: Vec<NodeId> = circuit.node_ids().collect();
    for _ in 0..attempts {
        let consumer = ids[rng.gen_range(0..ids.len())];
        let producer = ids[rng.gen_range(0..ids.len())];
        circuit.add_connection(consumer, producer);
    }
    circuit.set_input(terminals.input_a, true);
    circuit
}

fn evaluator_bench<E: Evaluator + Default>(c: &mut Criterion, name: &str) {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut circuit = random_circuit(&mut rng, 64);
    let mut evaluator = E::default();
    c.bench_function(name, |b| b.iter(|| evaluator.evaluate(&mut circuit)));
    println!("connections: {}", circuit.num_connections());
}

fn pass_benches(c: &mut Criterion) {
    evaluator_bench::<DeclarationOrder>(c, "declaration-order pass");
    evaluator_bench::<Topological>(c, "topological pass");
}

fn toggle_benches(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x7066_1E);
    let mut circuit = random_circuit(&mut rng, 64);
    let input = circuit.node_ids().next().unwrap();

    c.bench_function("toggle and settle", |b| {
        b.iter(|| {
            circuit.toggle_input(input);
            DeclarationOrder.settle(&mut circuit, 32)
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = pass_benches, toggle_benches
}
criterion_main!(benches);
