//! Transport control errors.

/// Errors reported by the seek controller.
///
/// Neither variant aborts the caller: `NotAttached` leaves controller state
/// untouched, and `InvalidDuration` is recovered by clamping only the lower
/// bound.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("No media surface attached")]
    NotAttached,

    #[error("Media duration is unknown or invalid: {duration}")]
    InvalidDuration { duration: f64 },
}
