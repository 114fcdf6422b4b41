//! Scripted gesture simulation.
//!
//! Drives a [`SeekController`](crate::transport::SeekController) over a
//! [`SimulatedSurface`](crate::surface::SimulatedSurface) from a small step
//! language, delivering "ended" to the ended handler after every step.

mod runner;
mod script;

pub use runner::{Simulation, StepReport};
pub use script::{parse_script, ScriptError, Step};
