use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::circuit::{Circuit, GateKind, NodeId};
use crate::config::SketchConfig;
use crate::geometry::Point;

const INPUT_A_AT: Point = Point::new(50.0, 50.0);
const INPUT_B_AT: Point = Point::new(50.0, 120.0);
const GATE_ROW_FIRST_X: f32 = 100.0;
const GATE_ROW_BOTTOM_MARGIN: f32 = 60.0;
const SINK_RIGHT_MARGIN: f32 = 100.0;

/// Gate kinds placed on the bottom row, left to right.
pub const ROW_KINDS: [GateKind; 3] = [GateKind::And, GateKind::Or, GateKind::Not];

/// How many gates of each row kind to lay out, in [`ROW_KINDS`] order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateCounts(pub [usize; 3]);

impl GateCounts {
    // An inverted range collapses to the minimum.
    pub fn random<R: Rng>(config: &SketchConfig, rng: &mut R) -> Self {
        let min = config.min_gates_per_kind;
        let range = min..=config.max_gates_per_kind.max(min);
        GateCounts([
            rng.gen_range(range.clone()),
            rng.gen_range(range.clone()),
            rng.gen_range(range),
        ])
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}

/// Handles to the nodes every layout has.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Terminals {
    pub input_a: NodeId,
    pub input_b: NodeId,
    pub sink: NodeId,
}

/// Lays out the startup topology: inputs `A` and `B` on the left, a bottom
/// row of gates and the `OUTPUT` sink at the bottom right. Nodes are created
/// in that order, which is also the evaluation order.
pub struct CircuitBuilder<'a> {
    config: &'a SketchConfig,
    counts: GateCounts,
}

impl<'a> CircuitBuilder<'a> {
    pub fn new(config: &'a SketchConfig, counts: GateCounts) -> Self {
        CircuitBuilder { config, counts }
    }

    pub fn randomized<R: Rng>(config: &'a SketchConfig, rng: &mut R) -> Self {
        Self::new(config, GateCounts::random(config, rng))
    }

    pub fn seeded(config: &'a SketchConfig) -> crate::Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self::randomized(config, &mut rng))
    }

    pub fn build(&self) -> (Circuit, Terminals) {
        let mut circuit = Circuit::new();
        let input_a = circuit.add_input("A", INPUT_A_AT);
        let input_b = circuit.add_input("B", INPUT_B_AT);

        let row_y = self.config.canvas_height - GATE_ROW_BOTTOM_MARGIN;
        let mut x = GATE_ROW_FIRST_X;
        for (kind, count) in ROW_KINDS.iter().zip(self.counts.0) {
            for _ in 0..count {
                circuit.add_gate(*kind, Point::new(x, row_y));
                x += self.config.gate_spacing;
            }
        }

        let sink = circuit.add_gate(
            GateKind::Output,
            Point::new(self.config.canvas_width - SINK_RIGHT_MARGIN, row_y),
        );
        info!(
            "Laid out {} AND, {} OR, {} NOT gates",
            self.counts.0[0], self.counts.0[1], self.counts.0[2]
        );
        (
            circuit,
            Terminals {
                input_a,
                input_b,
                sink,
            },
        )
    }
}
