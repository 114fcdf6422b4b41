//! The "ended" notification handler.

use serde::Serialize;

use crate::surface::MediaSurface;

/// What the ended handler did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EndedAction {
    /// Surface was paused; left at the end
    Ignored,
    /// Playback ran off the end; paused and rewound to zero
    Rewound,
}

/// React to an "ended" notification from `surface`.
///
/// Playback that reaches the end on its own is paused and rewound to the
/// start. A surface that is already paused was sent to the end on purpose
/// (a seek past the end pauses first) and stays where it is.
pub fn handle_ended<S: MediaSurface + ?Sized>(surface: &mut S) -> EndedAction {
    if surface.is_paused() {
        tracing::debug!(position = surface.position(), "ended while paused, staying put");
        return EndedAction::Ignored;
    }
    tracing::debug!("playback ended, rewinding");
    surface.pause();
    surface.seek_to(0.0);
    EndedAction::Rewound
}
