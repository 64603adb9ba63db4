pub mod circuit_builder;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod geometry;
pub mod scene;
pub mod session;
pub mod sketch;

mod circuit;
mod evaluator_ordered;
mod evaluator_topo;

pub use circuit::{Circuit, GateKind, Node, NodeId, NodeKind};
pub use config::SketchConfig;
pub use error::{Error, Result};
pub use evaluator::{EvaluationOrder, Evaluator, SettleResult};
pub use evaluator_ordered::DeclarationOrder;
pub use evaluator_topo::Topological;
pub use sketch::{FrameStatus, Sketch};
