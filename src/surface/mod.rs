//! Media surface abstraction.
//!
//! A media surface is the playback object the transport drives: it has a
//! position and a duration, accepts absolute seeks and pause requests, and
//! raises "ended" whenever its position reaches the duration.
//!
//! - `MediaSurface`: the trait the controller and playback setup depend on
//! - `SimulatedSurface`: in-memory surface used by the CLI and tests

mod simulated;

pub use simulated::SimulatedSurface;

/// A playback object that can be seeked and paused.
///
/// Seeks and pauses are fire-and-forget: callers never wait for them to
/// complete and never inspect a result.
pub trait MediaSurface {
    /// Current elapsed time in seconds.
    fn position(&self) -> f64;

    /// Total length in seconds. NaN until metadata has loaded.
    fn duration(&self) -> f64;

    /// Best-effort absolute seek.
    fn seek_to(&mut self, time: f64);

    /// Pause playback.
    fn pause(&mut self);

    /// Whether playback is paused.
    fn is_paused(&self) -> bool;
}

impl<S: MediaSurface + ?Sized> MediaSurface for Box<S> {
    fn position(&self) -> f64 {
        (**self).position()
    }

    fn duration(&self) -> f64 {
        (**self).duration()
    }

    fn seek_to(&mut self, time: f64) {
        (**self).seek_to(time)
    }

    fn pause(&mut self) {
        (**self).pause()
    }

    fn is_paused(&self) -> bool {
        (**self).is_paused()
    }
}
