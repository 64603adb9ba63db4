use crate::circuit::{Circuit, NodeId};
use crate::geometry::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fill {
    InputHigh,
    InputLow,
    Gate,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeShape {
    pub id: NodeId,
    pub bounds: Rect,
    pub fill: Fill,
    pub caption: String,
    pub connector: Point,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WireShape {
    pub from: Point,
    pub to: Point,
}

/// Everything a host needs to draw one frame, in canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub banner: String,
    pub nodes: Vec<NodeShape>,
    pub wires: Vec<WireShape>,
    /// The wire still attached to the cursor, if one is being pulled.
    pub pending: Option<WireShape>,
}

impl Scene {
    pub fn capture(
        circuit: &Circuit,
        banner: String,
        pending: Option<NodeId>,
        cursor: Point,
    ) -> Self {
        let nodes = circuit
            .nodes()
            .map(|node| {
                let bounds = node.bounds();
                let fill = match (node.is_input(), node.output()) {
                    (true, true) => Fill::InputHigh,
                    (true, false) => Fill::InputLow,
                    (false, _) => Fill::Gate,
                };
                NodeShape {
                    id: node.id(),
                    bounds,
                    fill,
                    caption: node.caption(),
                    connector: bounds.output_anchor(),
                }
            })
            .collect();
        let wires = circuit
            .wires()
            .map(|(producer, consumer)| WireShape {
                from: circuit[producer].bounds().output_anchor(),
                to: circuit[consumer].bounds().input_anchor(),
            })
            .collect();
        let pending = pending
            .and_then(|source| circuit.get(source))
            .map(|source| WireShape {
                from: source.bounds().output_anchor(),
                to: cursor,
            });
        Scene {
            banner,
            nodes,
            wires,
            pending,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::circuit::GateKind;

    #[test]
    fn captures_nodes_wires_and_pending() {
        let mut circuit = Circuit::new();
        let a = circuit.add_input("A", Point::new(50.0, 50.0));
        let not = circuit.add_gate(GateKind::Not, Point::new(100.0, 440.0));
        circuit.add_connection(not, a);
        circuit.toggle_input(a);

        let cursor = Point::new(300.0, 300.0);
        let scene = Scene::capture(&circuit, "Final Output: 0".into(), Some(not), cursor);
        assert_eq!(scene.nodes.len(), 2);
        assert_eq!(scene.nodes[0].fill, Fill::InputHigh);
        assert_eq!(scene.nodes[0].caption, "A: 1");
        assert_eq!(scene.nodes[1].fill, Fill::Gate);
        assert_eq!(scene.nodes[1].caption, "NOT\n0");
        assert_eq!(
            scene.wires,
            vec![WireShape {
                from: Point::new(110.0, 65.0),
                to: Point::new(100.0, 460.0),
            }]
        );
        assert_eq!(
            scene.pending,
            Some(WireShape {
                from: Point::new(170.0, 460.0),
                to: cursor,
            })
        );
    }
}
