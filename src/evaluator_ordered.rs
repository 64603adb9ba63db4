use log::trace;

use crate::circuit::{Circuit, NodeId};
use crate::evaluator::Evaluator;

/// Walks nodes in creation order and refreshes the sink last, so the sink
/// sees the freshest values of the pass.
///
/// Nothing else is reordered: a gate wired to a producer created after it
/// reads that producer's output from the previous pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeclarationOrder;

impl Evaluator for DeclarationOrder {
    fn name(&self) -> &'static str {
        "declaration"
    }

    fn evaluate(&mut self, circuit: &mut Circuit) {
        let sink = circuit.sink();
        let order: Vec<NodeId> = circuit
            .node_ids()
            .filter(|node_id| Some(*node_id) != sink)
            .collect();
        for node_id in order {
            circuit.refresh(node_id);
        }
        if let Some(sink) = sink {
            let output = circuit.refresh(sink);
            trace!("Declaration-order pass done, sink {sink} = {}", output as u8);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::circuit::GateKind;
    use crate::evaluator::SettleResult;
    use crate::geometry::Point;

    #[test]
    fn sink_created_first_still_sees_fresh_values() {
        let mut circuit = Circuit::new();
        let out = circuit.add_gate(GateKind::Output, Point::default());
        let a = circuit.add_input("A", Point::default());
        let not = circuit.add_gate(GateKind::Not, Point::default());
        circuit.add_connection(not, a);
        circuit.add_connection(out, not);

        DeclarationOrder.evaluate(&mut circuit);
        assert!(circuit.output(not));
        assert!(circuit.output(out));
    }

    #[test]
    fn backward_edge_lags_one_pass() {
        let mut circuit = Circuit::new();
        let a = circuit.add_input("A", Point::default());
        let late_reader = circuit.add_gate(GateKind::Or, Point::default());
        let b = circuit.add_input("B", Point::default());
        let early = circuit.add_gate(GateKind::And, Point::default());
        circuit.add_connection(early, a);
        circuit.add_connection(early, b);
        circuit.add_connection(late_reader, early);
        circuit.add_connection(late_reader, b);
        circuit.set_input(a, true);
        circuit.set_input(b, true);

        let mut evaluator = DeclarationOrder;
        evaluator.evaluate(&mut circuit);
        // OR reads B fresh, so it is already high; flip B to see the lag.
        assert!(circuit.output(late_reader));
        circuit.set_input(b, false);
        evaluator.evaluate(&mut circuit);
        assert!(circuit.output(late_reader), "AND was still high last pass");
        assert!(!circuit.output(early));
        evaluator.evaluate(&mut circuit);
        assert!(!circuit.output(late_reader));
    }

    #[test]
    fn ring_of_three_nots_never_settles() {
        let mut circuit = Circuit::new();
        let n1 = circuit.add_gate(GateKind::Not, Point::default());
        let n2 = circuit.add_gate(GateKind::Not, Point::default());
        let n3 = circuit.add_gate(GateKind::Not, Point::default());
        circuit.add_connection(n2, n1);
        circuit.add_connection(n3, n2);
        circuit.add_connection(n1, n3);
        assert_eq!(
            DeclarationOrder.settle(&mut circuit, 50),
            SettleResult::ReachedMaxPasses { max_passes: 50 }
        );
    }
}
