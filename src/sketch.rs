use std::time::Duration;

use rand::Rng;

use crate::circuit::Circuit;
use crate::circuit_builder::CircuitBuilder;
use crate::config::SketchConfig;
use crate::evaluator::Evaluator;
use crate::geometry::Point;
use crate::scene::Scene;
use crate::session::{Gesture, Session};

pub const CONTROLS: &str = "Drag gates to move | Click & drag from gate output to connect | \
                            Click inputs to toggle | Double-tap gates to clear connections";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    Intro,
    Running { output: bool },
}

pub struct Sketch {
    config: SketchConfig,
    circuit: Circuit,
    session: Session,
    evaluator: Box<dyn Evaluator + Send + Sync>,
    status: FrameStatus,
    frames: u64,
}

impl Sketch {
    /// Lays out a fresh circuit, seeded from the config when it carries a
    /// seed and from system entropy otherwise.
    pub fn new(config: SketchConfig) -> crate::Result<Self> {
        let (circuit, _) = CircuitBuilder::seeded(&config)?.build();
        Ok(Self::from_circuit(config, circuit))
    }

    pub fn with_rng<R: Rng>(config: SketchConfig, rng: &mut R) -> crate::Result<Self> {
        config.validate()?;
        let (circuit, _) = CircuitBuilder::randomized(&config, rng).build();
        Ok(Self::from_circuit(config, circuit))
    }

    pub fn from_circuit(config: SketchConfig, circuit: Circuit) -> Self {
        Sketch {
            session: Session::new(config.double_tap_window()),
            evaluator: config.evaluation.evaluator(),
            config,
            circuit,
            status: FrameStatus::Intro,
            frames: 0,
        }
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    pub fn circuit_mut(&mut self) -> &mut Circuit {
        &mut self.circuit
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn evaluator_name(&self) -> &'static str {
        self.evaluator.name()
    }

    pub fn status(&self) -> FrameStatus {
        self.status
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn press(&mut self, cursor: Point, now: Duration) -> Gesture {
        self.session.press(&mut self.circuit, cursor, now)
    }

    pub fn drag_to(&mut self, cursor: Point) -> Gesture {
        self.session.drag_to(&mut self.circuit, cursor)
    }

    pub fn release(&mut self, cursor: Point) -> Gesture {
        self.session.release(&mut self.circuit, cursor)
    }

    /// Runs one evaluation pass unless the intro is still showing. `now` is
    /// the time since the sketch was started.
    pub fn frame(&mut self, now: Duration) -> FrameStatus {
        self.status = if now < self.config.intro_duration() {
            FrameStatus::Intro
        } else {
            self.evaluator.evaluate(&mut self.circuit);
            self.frames += 1;
            let output = self
                .circuit
                .sink()
                .map_or(false, |sink| self.circuit.output(sink));
            FrameStatus::Running { output }
        };
        self.status
    }

    pub fn banner(&self) -> String {
        match self.status {
            FrameStatus::Intro => CONTROLS.to_string(),
            FrameStatus::Running { output } => format!("Final Output: {}", output as u8),
        }
    }

    pub fn scene(&self, cursor: Point) -> Scene {
        Scene::capture(
            &self.circuit,
            self.banner(),
            self.session.pending_connection(),
            cursor,
        )
    }
}
