//! Resume position policy.
//!
//! Decides where playback starts when a previously viewed item is selected
//! again. The decision is pure; applying it to a surface is the caller's job
//! (see [`crate::playback::prepare`]).

use serde::{Deserialize, Serialize};

/// Saved playback state for one media item, as read from its metadata.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResumeRecord {
    /// Position saved when the item was last left, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored_position: Option<f64>,
    /// Total length of the item
    pub duration: f64,
}

impl ResumeRecord {
    pub fn new(stored_position: Option<f64>, duration: f64) -> Self {
        Self {
            stored_position,
            duration,
        }
    }

    /// Position to start playback at.
    pub fn resume_position(&self) -> f64 {
        resume_position(self.stored_position, self.duration)
    }
}

/// Position at which playback of an item should start.
///
/// - nothing stored: start from zero
/// - duration unknown: start from zero, since nothing can be validated
/// - stored at or past the end: start from zero, a finished item restarts
/// - otherwise: resume at the stored position
///
/// Stored positions that are negative or NaN count as nothing stored.
pub fn resume_position(stored: Option<f64>, duration: f64) -> f64 {
    let Some(stored) = stored.filter(|s| s.is_finite() && *s >= 0.0) else {
        return 0.0;
    };
    if !duration.is_finite() || stored >= duration {
        return 0.0;
    }
    stored
}
