//! Seek transport for a media surface
//!
//! Turns discrete gestures into clamped position changes:
//!
//! - a tap moves one step forward or backward
//! - a press-and-hold moves one step, then one more per repeat tick until
//!   released or until a boundary is hit
//!
//! # State machine
//!
//! ```text
//! Idle    --seek_once-->       Idle
//! Idle    --begin_hold(d)-->   Held(d)
//! Held(_) --begin_hold(d)-->   Held(d)   (timer restarted)
//! Held(_) --end_hold-->        Idle
//! Held(_) --detach/attach-->   Idle
//! Held(_) --boundary hit-->    Idle
//! ```
//!
//! # Boundaries
//!
//! Seeking to or past the duration pauses the surface before seeking to
//! exactly the duration. Seeking below zero lands on zero without pausing.
//!
//! # Architecture
//!
//! - `controller`: `SeekController`, the state machine
//! - `clamp`: target clamping and duration validation
//! - `timer`: the owned repeat timer
//! - `state`: direction, hold state, outcomes and gestures
//! - `error`: `TransportError`

mod clamp;
mod controller;
mod error;
mod state;
mod timer;

pub use clamp::{clamp_target, validate_duration, Boundary, Clamped};
pub use controller::{SeekController, MAX_CATCH_UP_TICKS};
pub use error::TransportError;
pub use state::{Direction, Gesture, HoldState, SeekOutcome};
pub use timer::RepeatTimer;
