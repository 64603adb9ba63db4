use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::evaluator::EvaluationOrder;

// Leftmost gate column plus the sink column need at least this much room.
const MIN_CANVAS_WIDTH: f32 = 200.0;
const MIN_CANVAS_HEIGHT: f32 = 200.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Two body presses closer than this count as a double tap.
    pub double_tap_window_ms: u64,
    /// How long the controls banner is shown before evaluation starts.
    pub intro_ms: u64,
    pub min_gates_per_kind: usize,
    pub max_gates_per_kind: usize,
    pub gate_spacing: f32,
    pub evaluation: EvaluationOrder,
    pub seed: Option<u64>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        SketchConfig {
            canvas_width: 900.0,
            canvas_height: 500.0,
            double_tap_window_ms: 400,
            intro_ms: 3000,
            min_gates_per_kind: 1,
            max_gates_per_kind: 3,
            gate_spacing: 80.0,
            evaluation: EvaluationOrder::default(),
            seed: None,
        }
    }
}

impl SketchConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SketchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_gates_per_kind == 0 || self.min_gates_per_kind > self.max_gates_per_kind {
            return Err(Error::InvalidGateRange {
                min: self.min_gates_per_kind,
                max: self.max_gates_per_kind,
            });
        }
        if !(self.canvas_width >= MIN_CANVAS_WIDTH && self.canvas_height >= MIN_CANVAS_HEIGHT) {
            return Err(Error::InvalidCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if self.double_tap_window_ms == 0 {
            return Err(Error::InvalidDoubleTapWindow);
        }
        Ok(())
    }

    pub fn double_tap_window(&self) -> Duration {
        Duration::from_millis(self.double_tap_window_ms)
    }

    pub fn intro_duration(&self) -> Duration {
        Duration::from_millis(self.intro_ms)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config = SketchConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SketchConfig::default());
        assert_eq!(config.double_tap_window(), Duration::from_millis(400));
        assert_eq!(config.intro_duration(), Duration::from_secs(3));
    }

    #[test]
    fn partial_override() {
        let config = SketchConfig::from_json_str(
            r#"{ "evaluation": "topological", "seed": 7, "intro_ms": 0 }"#,
        )
        .unwrap();
        assert_eq!(config.evaluation, EvaluationOrder::Topological);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.intro_ms, 0);
        assert_eq!(config.canvas_width, 900.0);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            SketchConfig::from_json_str(r#"{ "min_gates_per_kind": 4 }"#),
            Err(Error::InvalidGateRange { min: 4, max: 3 })
        ));
        assert!(matches!(
            SketchConfig::from_json_str(r#"{ "min_gates_per_kind": 0 }"#),
            Err(Error::InvalidGateRange { .. })
        ));
        assert!(matches!(
            SketchConfig::from_json_str(r#"{ "canvas_height": 10.0 }"#),
            Err(Error::InvalidCanvas { .. })
        ));
        assert!(matches!(
            SketchConfig::from_json_str(r#"{ "double_tap_window_ms": 0 }"#),
            Err(Error::InvalidDoubleTapWindow)
        ));
        assert!(matches!(
            SketchConfig::from_json_str(r#"{ "evaluation": "sideways" }"#),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SketchConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().starts_with("could not read config"));
    }
}
