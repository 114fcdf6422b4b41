//! Playback setup and end-of-stream handling.
//!
//! This module handles what happens around the transport: choosing the start
//! position when an item is selected, and reacting to "ended".

mod ended;
mod setup;

pub use ended::{handle_ended, EndedAction};
pub use setup::prepare;
