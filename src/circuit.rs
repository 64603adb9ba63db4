use std::fmt;
use std::ops::Index;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, GATE_SIZE, INPUT_SIZE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    And,
    Or,
    Not,
    Output,
}

impl GateKind {
    pub const fn capacity(self) -> usize {
        match self {
            GateKind::And | GateKind::Or => 2,
            GateKind::Not | GateKind::Output => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Not => "NOT",
            GateKind::Output => "OUTPUT",
        }
    }

    pub fn evaluate(self, inputs: &[bool]) -> bool {
        match (self, inputs) {
            (GateKind::And, [a, b]) => *a && *b,
            (GateKind::Or, [a, b]) => *a || *b,
            (GateKind::Not, [a, ..]) => !*a,
            (GateKind::Output, [a, ..]) => *a,
            _ => false,
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Input {
        label: String,
        value: bool,
    },
    Gate {
        kind: GateKind,
        inputs: Vec<NodeId>,
        output: bool,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    position: Point,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn gate_kind(&self) -> Option<GateKind> {
        match self.kind {
            NodeKind::Input { .. } => None,
            NodeKind::Gate { kind, .. } => Some(kind),
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self.kind, NodeKind::Input { .. })
    }

    pub fn output(&self) -> bool {
        match self.kind {
            NodeKind::Input { value, .. } => value,
            NodeKind::Gate { output, .. } => output,
        }
    }

    pub fn inputs(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Input { .. } => &[],
            NodeKind::Gate { inputs, .. } => inputs,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn bounds(&self) -> Rect {
        let size = match self.kind {
            NodeKind::Input { .. } => INPUT_SIZE,
            NodeKind::Gate { .. } => GATE_SIZE,
        };
        Rect::new(self.position, size)
    }

    pub fn caption(&self) -> String {
        match &self.kind {
            NodeKind::Input { label, value } => format!("{label}: {}", *value as u8),
            NodeKind::Gate { kind, output, .. } => format!("{kind}\n{}", *output as u8),
        }
    }
}

// Edges point from consumer to producer.
#[derive(Clone, Debug, Default)]
pub struct Circuit {
    nodes: Vec<Node>,
    sink: Option<NodeId>,
}

impl Index<NodeId> for Circuit {
    type Output = Node;

    fn index(&self, index: NodeId) -> &Self::Output {
        &self.nodes[index.index()]
    }
}

impl Circuit {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: NodeKind, position: Point) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node { id, kind, position });
        id
    }

    pub fn add_input(&mut self, label: impl Into<String>, position: Point) -> NodeId {
        self.push(
            NodeKind::Input {
                label: label.into(),
                value: false,
            },
            position,
        )
    }

    pub fn add_gate(&mut self, kind: GateKind, position: Point) -> NodeId {
        let id = self.push(
            NodeKind::Gate {
                kind,
                inputs: Vec::new(),
                output: false,
            },
            position,
        );
        if kind == GateKind::Output {
            self.sink = Some(id);
        }
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    pub fn nodes(&self) -> impl DoubleEndedIterator<Item = &Node> + ExactSizeIterator {
        self.nodes.iter()
    }

    pub fn node_ids(&self) -> impl DoubleEndedIterator<Item = NodeId> + ExactSizeIterator + '_ {
        self.nodes.iter().map(Node::id)
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_connections(&self) -> usize {
        self.nodes.iter().map(|node| node.inputs().len()).sum()
    }

    pub fn sink(&self) -> Option<NodeId> {
        self.sink
    }

    pub fn output(&self, id: NodeId) -> bool {
        self.get(id).map_or(false, Node::output)
    }

    pub fn wires(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.iter().flat_map(|consumer| {
            consumer
                .inputs()
                .iter()
                .map(move |producer| (*producer, consumer.id))
        })
    }

    pub fn can_accept_input_from(&self, consumer: NodeId, producer: NodeId) -> bool {
        if consumer == producer || self.get(producer).is_none() {
            return false;
        }
        match self.get(consumer).map(|node| &node.kind) {
            Some(NodeKind::Gate { kind, inputs, .. }) => {
                !inputs.contains(&producer) && inputs.len() < kind.capacity()
            }
            Some(NodeKind::Input { .. }) | None => false,
        }
    }

    pub fn add_connection(&mut self, consumer: NodeId, producer: NodeId) -> bool {
        if !self.can_accept_input_from(consumer, producer) {
            debug!("Refused connection {producer} -> {consumer}");
            return false;
        }
        if let Some(NodeKind::Gate { inputs, .. }) = self.get_mut(consumer).map(|n| &mut n.kind) {
            inputs.push(producer);
        }
        debug!("Connected {producer} -> {consumer}");
        true
    }

    pub fn clear_node(&mut self, id: NodeId) {
        for node in self.nodes.iter_mut() {
            if let NodeKind::Gate { inputs, .. } = &mut node.kind {
                if node.id == id {
                    inputs.clear();
                } else {
                    inputs.retain(|producer| *producer != id);
                }
            }
        }
        debug!("Cleared connections of {id}");
    }

    pub fn toggle_input(&mut self, id: NodeId) -> Option<bool> {
        match self.get_mut(id).map(|n| &mut n.kind) {
            Some(NodeKind::Input { label, value }) => {
                *value = !*value;
                debug!("Toggled input {label} to {}", *value as u8);
                Some(*value)
            }
            _ => None,
        }
    }

    pub fn set_input(&mut self, id: NodeId, val: bool) {
        if let Some(NodeKind::Input { value, .. }) = self.get_mut(id).map(|n| &mut n.kind) {
            *value = val;
        }
    }

    pub fn move_node(&mut self, id: NodeId, position: Point) {
        if let Some(node) = self.get_mut(id) {
            node.position = position;
        }
    }

    /// Recomputes a gate from the cached outputs its producers currently
    /// hold, stores and returns the result. Inputs just report their value.
    pub(crate) fn refresh(&mut self, id: NodeId) -> bool {
        let Some(node) = self.get(id) else {
            return false;
        };
        let (kind, values) = match &node.kind {
            NodeKind::Input { value, .. } => return *value,
            NodeKind::Gate { kind, inputs, .. } => (
                *kind,
                inputs
                    .iter()
                    .map(|producer| self.output(*producer))
                    .collect::<Vec<_>>(),
            ),
        };
        let new_output = kind.evaluate(&values);
        if let Some(NodeKind::Gate { output, .. }) = self.get_mut(id).map(|n| &mut n.kind) {
            *output = new_output;
        }
        new_output
    }
}
