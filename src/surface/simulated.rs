//! In-memory media surface.

use super::MediaSurface;

/// A media surface with no decoder behind it.
///
/// Records every seek and pause so callers can assert on exactly what a
/// controller asked for. Like a real media element, it raises "ended" when
/// the position reaches the duration, whether or not it is paused; the
/// pending notification is collected with [`take_ended`](Self::take_ended).
#[derive(Debug, Clone)]
pub struct SimulatedSurface {
    position: f64,
    duration: f64,
    paused: bool,
    ended_pending: bool,
    seeks: Vec<f64>,
    pause_calls: usize,
}

impl SimulatedSurface {
    /// A paused surface at position zero.
    pub fn new(duration: f64) -> Self {
        Self {
            position: 0.0,
            duration,
            paused: true,
            ended_pending: false,
            seeks: Vec::new(),
            pause_calls: 0,
        }
    }

    /// Start at `position` without recording a seek.
    pub fn with_position(mut self, position: f64) -> Self {
        self.position = position;
        self
    }

    /// Start playing.
    pub fn play(&mut self) {
        self.paused = false;
    }

    /// Flip between playing and paused. Returns the new paused state.
    pub fn toggle_pause(&mut self) -> bool {
        if self.paused {
            self.play();
        } else {
            self.pause();
        }
        self.paused
    }

    /// Set the duration, e.g. once metadata has "loaded".
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = duration;
    }

    /// Advance normal playback by `secs` of media time.
    ///
    /// Does nothing while paused. Stops at the duration and raises "ended".
    pub fn advance(&mut self, secs: f64) {
        if self.paused || secs <= 0.0 {
            return;
        }
        self.position += secs;
        if self.duration.is_finite() && self.position >= self.duration {
            self.position = self.duration;
            self.ended_pending = true;
        }
    }

    /// Collect a pending "ended" notification.
    pub fn take_ended(&mut self) -> bool {
        std::mem::take(&mut self.ended_pending)
    }

    /// Every seek target received, in order.
    pub fn seeks(&self) -> &[f64] {
        &self.seeks
    }

    /// Number of times `pause` was called.
    pub fn pause_calls(&self) -> usize {
        self.pause_calls
    }
}

impl MediaSurface for SimulatedSurface {
    fn position(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn seek_to(&mut self, time: f64) {
        self.seeks.push(time);
        self.position = time;
        // Reaching the end raises "ended" regardless of pause state
        if self.duration.is_finite() && time >= self.duration {
            self.ended_pending = true;
        }
    }

    fn pause(&mut self) {
        self.pause_calls += 1;
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}
