//! Seek direction, hold state and per-seek outcomes.

use serde::Serialize;

use super::clamp::Boundary;

/// Direction of a seek step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Sign applied to the step size: +1 forward, -1 backward.
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// Whether a press is currently being held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "direction", rename_all = "lowercase")]
pub enum HoldState {
    #[default]
    Idle,
    Held(Direction),
}

impl HoldState {
    pub fn is_held(&self) -> bool {
        matches!(self, Self::Held(_))
    }
}

/// What a single applied seek did to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeekOutcome {
    /// Position the surface was asked to seek to
    pub target: f64,
    /// Edge hit while clamping
    pub boundary: Option<Boundary>,
    /// Whether the surface was paused (end of media only)
    pub paused: bool,
    /// Whether a hold was cancelled by this seek
    pub hold_stopped: bool,
}

/// A gesture routed from the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Short tap on a forward/rewind control
    Tap(Direction),
    /// Press-and-hold started
    Press(Direction),
    /// Press released
    Release,
}
