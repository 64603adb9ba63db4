use std::time::Duration;

use log::debug;

use crate::circuit::{Circuit, NodeId};
use crate::geometry::Point;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Drag {
    #[default]
    Idle,
    Moving { node: NodeId, grab_offset: Point },
    Connecting { source: NodeId },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Ignored,
    ConnectionStarted { source: NodeId },
    Connected { consumer: NodeId, producer: NodeId },
    ConnectionDropped { source: NodeId },
    MoveStarted { node: NodeId },
    Moved { node: NodeId },
    MoveEnded { node: NodeId },
    Toggled { node: NodeId, value: bool },
    Cleared { node: NodeId },
}

#[derive(Clone, Debug)]
pub struct Session {
    drag: Drag,
    last_tap: Option<Duration>,
    double_tap_window: Duration,
}

impl Session {
    pub fn new(double_tap_window: Duration) -> Self {
        Session {
            drag: Drag::Idle,
            last_tap: None,
            double_tap_window,
        }
    }

    pub fn drag(&self) -> Drag {
        self.drag
    }

    pub fn pending_connection(&self) -> Option<NodeId> {
        match self.drag {
            Drag::Connecting { source } => Some(source),
            _ => None,
        }
    }

    pub fn moving(&self) -> Option<NodeId> {
        match self.drag {
            Drag::Moving { node, .. } => Some(node),
            _ => None,
        }
    }

    /// Output connectors win over bodies. A body press that follows the
    /// previous body press, on any node, within the double tap window clears
    /// the pressed node instead of toggling or moving it.
    pub fn press(&mut self, circuit: &mut Circuit, cursor: Point, now: Duration) -> Gesture {
        if let Some(source) = circuit
            .nodes()
            .find(|node| node.bounds().connector_contains(cursor))
            .map(|node| node.id())
        {
            self.drag = Drag::Connecting { source };
            debug!("Pulling a wire out of {source}");
            return Gesture::ConnectionStarted { source };
        }

        let Some((node, origin, is_input)) = circuit
            .nodes()
            .find(|node| node.bounds().contains(cursor))
            .map(|node| (node.id(), node.position(), node.is_input()))
        else {
            return Gesture::Ignored;
        };

        let double_tap = self
            .last_tap
            .map_or(false, |last| now.saturating_sub(last) < self.double_tap_window);
        if double_tap {
            circuit.clear_node(node);
            self.last_tap = None;
            return Gesture::Cleared { node };
        }
        self.last_tap = Some(now);

        if is_input {
            return match circuit.toggle_input(node) {
                Some(value) => Gesture::Toggled { node, value },
                None => Gesture::Ignored,
            };
        }

        self.drag = Drag::Moving {
            node,
            grab_offset: cursor - origin,
        };
        debug!("Moving {node}");
        Gesture::MoveStarted { node }
    }

    pub fn drag_to(&mut self, circuit: &mut Circuit, cursor: Point) -> Gesture {
        match self.drag {
            Drag::Moving { node, grab_offset } => {
                circuit.move_node(node, cursor - grab_offset);
                Gesture::Moved { node }
            }
            _ => Gesture::Ignored,
        }
    }

    /// Finishes whatever gesture is in flight. A pending wire lands on the
    /// first node under the cursor that accepts it and is dropped otherwise.
    pub fn release(&mut self, circuit: &mut Circuit, cursor: Point) -> Gesture {
        match std::mem::take(&mut self.drag) {
            Drag::Idle => Gesture::Ignored,
            Drag::Moving { node, .. } => Gesture::MoveEnded { node },
            Drag::Connecting { source } => {
                let target = circuit
                    .nodes()
                    .filter(|node| node.id() != source && node.bounds().contains(cursor))
                    .map(|node| node.id())
                    .find(|target| circuit.can_accept_input_from(*target, source));
                match target {
                    Some(consumer) => {
                        circuit.add_connection(consumer, source);
                        Gesture::Connected {
                            consumer,
                            producer: source,
                        }
                    }
                    None => {
                        debug!("Dropped wire from {source}");
                        Gesture::ConnectionDropped { source }
                    }
                }
            }
        }
    }
}
