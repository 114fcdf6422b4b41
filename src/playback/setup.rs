//! Applying the resume position before playback starts.

use crate::resume::ResumeRecord;
use crate::surface::MediaSurface;

/// Seek `surface` to the resume position for `record`.
///
/// Computes the position once and applies it with a single seek. Returns the
/// position applied.
pub fn prepare<S: MediaSurface + ?Sized>(surface: &mut S, record: &ResumeRecord) -> f64 {
    let position = record.resume_position();
    tracing::debug!(
        stored = ?record.stored_position,
        duration = record.duration,
        position,
        "applying resume position"
    );
    surface.seek_to(position);
    position
}
