//! seekctl - media transport controller
//!
//! Turns tap, press-and-hold and release gestures into safe position changes
//! on a media surface, and decides where playback resumes when an item is
//! selected again.
//!
//! - [`transport`]: the seek controller state machine
//! - [`resume`]: the resume position policy
//! - [`playback`]: applying the resume position, handling "ended"
//! - [`surface`]: the media surface trait and an in-memory surface
//! - [`simulate`]: scripted gesture runs
//! - [`config`]: TOML configuration

pub mod cli;
pub mod config;
pub mod playback;
pub mod resume;
pub mod simulate;
pub mod surface;
pub mod transport;

pub use config::{Config, SeekConfig};
pub use resume::{resume_position, ResumeRecord};
pub use surface::{MediaSurface, SimulatedSurface};
pub use transport::{Direction, HoldState, SeekController, TransportError};
