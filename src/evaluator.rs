use serde::{Deserialize, Serialize};

use crate::circuit::Circuit;
use crate::evaluator_ordered::DeclarationOrder;
use crate::evaluator_topo::Topological;

pub type Passes = u64;

#[derive(Debug, PartialEq, Eq)]
pub enum SettleResult {
    Settled { after_passes: Passes },
    ReachedMaxPasses { max_passes: Passes },
}

/// One strategy for refreshing every node's cached output.
///
/// A pass never fails: under-connected gates are simply held low.
pub trait Evaluator {
    fn name(&self) -> &'static str;

    fn evaluate(&mut self, circuit: &mut Circuit);

    fn run(&mut self, circuit: &mut Circuit, passes: Passes) {
        for _ in 0..passes {
            self.evaluate(circuit);
        }
    }

    /// Repeats passes until a pass leaves every output unchanged. Cycles
    /// through an odd number of NOTs oscillate and never settle.
    fn settle(&mut self, circuit: &mut Circuit, max_passes: Passes) -> SettleResult {
        for passes in 0..max_passes {
            let before = snapshot(circuit);
            self.evaluate(circuit);
            if snapshot(circuit) == before {
                return SettleResult::Settled {
                    after_passes: passes + 1,
                };
            }
        }
        SettleResult::ReachedMaxPasses { max_passes }
    }
}

fn snapshot(circuit: &Circuit) -> Vec<bool> {
    circuit.nodes().map(|node| node.output()).collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationOrder {
    /// Creation order with the sink last. Gates reading from gates created
    /// after them lag one pass behind.
    #[default]
    Declaration,
    /// Producers before consumers wherever the wiring is acyclic.
    Topological,
}

impl EvaluationOrder {
    pub fn evaluator(self) -> Box<dyn Evaluator + Send + Sync> {
        match self {
            EvaluationOrder::Declaration => Box::new(DeclarationOrder),
            EvaluationOrder::Topological => Box::new(Topological::default()),
        }
    }
}
