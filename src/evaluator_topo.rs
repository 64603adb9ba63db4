use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::trace;

use crate::circuit::{Circuit, NodeId};
use crate::evaluator::Evaluator;

/// Refreshes producers before their consumers, so a change at an input
/// reaches the sink within a single pass.
///
/// Ties are broken by creation order. Nodes on or downstream of a cycle are
/// refreshed after everything else, in creation order, and keep lagging on
/// their back edges.
#[derive(Debug, Default)]
pub struct Topological {
    order: Vec<NodeId>,
    pending: Vec<usize>,
    consumers: Vec<Vec<NodeId>>,
}

impl Topological {
    fn sort(&mut self, circuit: &Circuit) {
        let num_nodes = circuit.num_nodes();
        self.order.clear();
        self.pending.clear();
        self.pending.resize(num_nodes, 0);
        self.consumers.iter_mut().for_each(Vec::clear);
        self.consumers.resize(num_nodes, Vec::new());

        for (producer, consumer) in circuit.wires() {
            self.pending[consumer.index()] += 1;
            self.consumers[producer.index()].push(consumer);
        }

        let mut ready: BinaryHeap<Reverse<NodeId>> = circuit
            .node_ids()
            .filter(|node_id| self.pending[node_id.index()] == 0)
            .map(Reverse)
            .collect();
        let mut placed = vec![false; num_nodes];
        while let Some(Reverse(node_id)) = ready.pop() {
            self.order.push(node_id);
            placed[node_id.index()] = true;
            for consumer in &self.consumers[node_id.index()] {
                let pending = &mut self.pending[consumer.index()];
                *pending -= 1;
                if *pending == 0 {
                    ready.push(Reverse(*consumer));
                }
            }
        }

        let cyclic = circuit.node_ids().filter(|node_id| !placed[node_id.index()]);
        self.order.extend(cyclic);
    }
}

impl Evaluator for Topological {
    fn name(&self) -> &'static str {
        "topological"
    }

    fn evaluate(&mut self, circuit: &mut Circuit) {
        // The wiring may change between any two frames.
        self.sort(circuit);
        for node_id in self.order.iter().copied() {
            circuit.refresh(node_id);
        }
        trace!("Topological pass done over {} nodes", self.order.len());
    }
}
