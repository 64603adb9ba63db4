use std::fmt;

/// Failures while loading a [`SketchConfig`](crate::config::SketchConfig).
///
/// Circuit and gesture operations never fail; invalid requests there are
/// silently ignored.
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Parse(serde_json::Error),

    InvalidGateRange { min: usize, max: usize },
    InvalidCanvas { width: f32, height: f32 },
    InvalidDoubleTapWindow,
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "could not read config: {err}"),
            Error::Parse(err) => write!(f, "could not parse config: {err}"),
            Error::InvalidGateRange { min, max } => {
                write!(f, "gate count range {min}..={max} is empty or starts at zero")
            }
            Error::InvalidCanvas { width, height } => {
                write!(f, "canvas {width}x{height} is too small for the layout")
            }
            Error::InvalidDoubleTapWindow => write!(f, "double tap window must be non-zero"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err)
    }
}
