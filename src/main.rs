use std::process::ExitCode;
use std::time::Duration;

use log::{error, info};

use logicsketch::{
    circuit_builder::{CircuitBuilder, Terminals},
    geometry::Point,
    session::Gesture,
    Circuit, FrameStatus, GateKind, NodeId, Sketch, SketchConfig,
};

// Far enough apart that no two scripted taps read as a double tap.
const TAP_SPACING: Duration = Duration::from_secs(1);

/// Replays pointer gestures against a sketch the way a windowed host would,
/// one frame after each gesture.
struct Script {
    sketch: Sketch,
    now: Duration,
}

impl Script {
    fn step(&mut self) -> FrameStatus {
        self.now += TAP_SPACING;
        self.sketch.frame(self.now)
    }

    fn connector(&self, node: NodeId) -> Point {
        self.sketch.circuit()[node].bounds().output_anchor()
    }

    fn body(&self, node: NodeId) -> Point {
        self.sketch.circuit()[node].bounds().center()
    }

    fn wire(&mut self, producer: NodeId, consumer: NodeId) -> Gesture {
        let from = self.connector(producer);
        let to = self.body(consumer);
        self.sketch.press(from, self.now);
        self.sketch.drag_to(to);
        let gesture = self.sketch.release(to);
        self.step();
        gesture
    }

    fn tap(&mut self, node: NodeId) -> Gesture {
        let at = self.body(node);
        let gesture = self.sketch.press(at, self.now);
        self.sketch.release(at);
        self.step();
        gesture
    }
}

fn first_gate(circuit: &Circuit, kind: GateKind) -> Option<NodeId> {
    circuit
        .nodes()
        .find(|node| node.gate_kind() == Some(kind))
        .map(|node| node.id())
}

fn load_config() -> logicsketch::Result<SketchConfig> {
    match std::env::args().nth(1) {
        Some(path) => SketchConfig::from_path(path),
        None => Ok(SketchConfig::default()),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let (circuit, Terminals { input_a, input_b, sink }) = match CircuitBuilder::seeded(&config) {
        Ok(builder) => builder.build(),
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let Some(and) = first_gate(&circuit, GateKind::And) else {
        error!("Layout has no AND gate");
        return ExitCode::FAILURE;
    };

    let intro = config.intro_duration();
    let mut script = Script {
        sketch: Sketch::from_circuit(config, circuit),
        now: intro,
    };
    info!(
        "{} nodes, {} evaluation",
        script.sketch.circuit().num_nodes(),
        script.sketch.evaluator_name()
    );

    for (producer, consumer) in [(input_a, and), (input_b, and), (and, sink)] {
        info!("{:?}", script.wire(producer, consumer));
    }

    println!(" A B | OUT");
    let mut levels = (false, false);
    for (a, b) in [(false, false), (false, true), (true, false), (true, true)] {
        if levels.0 != a {
            script.tap(input_a);
        }
        if levels.1 != b {
            script.tap(input_b);
        }
        levels = (a, b);
        if let FrameStatus::Running { output } = script.step() {
            println!(" {} {} |  {}", a as u8, b as u8, output as u8);
        }
    }
    println!("{}", script.sketch.banner());
    ExitCode::SUCCESS
}
