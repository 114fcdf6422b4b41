//! The seek controller.
//!
//! Turns taps and holds into clamped seeks on a single attached surface.
//! See the module docs in [`crate::transport`] for the state machine.

use std::time::{Duration, Instant};

use super::clamp::{clamp_target, validate_duration, Boundary};
use super::error::TransportError;
use super::state::{Direction, Gesture, HoldState, SeekOutcome};
use super::timer::RepeatTimer;
use crate::config::SeekConfig;
use crate::surface::MediaSurface;

/// Most overdue ticks a single poll will apply before skipping ahead.
pub const MAX_CATCH_UP_TICKS: usize = 64;

/// An active hold: its direction and the only repeat timer.
#[derive(Debug)]
struct SeekSession {
    direction: Direction,
    timer: RepeatTimer,
}

/// Drives one media surface from seek gestures.
///
/// The controller owns the attached surface, so there is no shared
/// "current player" and several controllers can run side by side.
#[derive(Debug)]
pub struct SeekController<S> {
    surface: Option<S>,
    step: f64,
    interval: Duration,
    immediate_step: bool,
    session: Option<SeekSession>,
    /// Set once an invalid duration has been reported for this surface
    invalid_duration_logged: bool,
}

impl<S: MediaSurface> Default for SeekController<S> {
    fn default() -> Self {
        Self::new(&SeekConfig::default())
    }
}

impl<S: MediaSurface> SeekController<S> {
    /// Create a detached controller.
    pub fn new(config: &SeekConfig) -> Self {
        Self {
            surface: None,
            step: config.step_secs,
            interval: config.repeat_interval(),
            immediate_step: config.immediate_step,
            session: None,
            invalid_duration_logged: false,
        }
    }

    /// Bind to `surface`, returning the previously attached one.
    ///
    /// Any hold is cancelled so its ticks cannot land on the new surface.
    pub fn attach(&mut self, surface: S) -> Option<S> {
        self.cancel_hold("attach");
        tracing::debug!(duration = surface.duration(), "surface attached");
        self.invalid_duration_logged = false;
        self.surface.replace(surface)
    }

    /// Unbind and return the surface, cancelling any hold first.
    pub fn detach(&mut self) -> Option<S> {
        self.cancel_hold("detach");
        self.invalid_duration_logged = false;
        let surface = self.surface.take();
        if surface.is_some() {
            tracing::debug!("surface detached");
        }
        surface
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn hold_state(&self) -> HoldState {
        match &self.session {
            Some(session) => HoldState::Held(session.direction),
            None => HoldState::Idle,
        }
    }

    /// When the next repeat tick is due, if a hold is active.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.session.as_ref().and_then(|s| s.timer.next_due())
    }

    /// Move one step in `direction`.
    ///
    /// Does not change the hold state unless the step hits a boundary.
    pub fn seek_once(&mut self, direction: Direction) -> Result<SeekOutcome, TransportError> {
        self.apply_step(direction)
    }

    /// Start holding in `direction`, using the current time.
    pub fn begin_hold(
        &mut self,
        direction: Direction,
    ) -> Result<Option<SeekOutcome>, TransportError> {
        self.begin_hold_at(direction, Instant::now())
    }

    /// Start holding in `direction` at `now`.
    ///
    /// Replaces any hold already in progress, whatever its direction. With
    /// `immediate_step` the first step is applied straight away, and the hold
    /// may end right here if that step hits a boundary.
    pub fn begin_hold_at(
        &mut self,
        direction: Direction,
        now: Instant,
    ) -> Result<Option<SeekOutcome>, TransportError> {
        if self.surface.is_none() {
            tracing::debug!(?direction, "begin_hold ignored: no surface attached");
            return Err(TransportError::NotAttached);
        }

        self.cancel_hold("restart");
        self.session = Some(SeekSession {
            direction,
            timer: RepeatTimer::start(self.interval, now),
        });
        tracing::debug!(?direction, interval_ms = self.interval.as_millis() as u64, "hold started");

        if self.immediate_step {
            self.apply_step(direction).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Release the hold. Returns whether one was active.
    pub fn end_hold(&mut self) -> bool {
        self.cancel_hold("release")
    }

    /// Run every repeat tick due at `now`.
    ///
    /// Ticks are applied one at a time; once a tick hits a boundary the hold
    /// is gone and no further ticks run, however late the poll was. At most
    /// [`MAX_CATCH_UP_TICKS`] run per poll; the rest are dropped and the next
    /// tick is due one interval after `now`.
    pub fn poll(&mut self, now: Instant) -> Vec<SeekOutcome> {
        let mut outcomes = Vec::new();
        while let Some(session) = self.session.as_mut() {
            if !session.timer.fire(now) {
                break;
            }
            if outcomes.len() == MAX_CATCH_UP_TICKS {
                tracing::debug!("poll fell behind, skipping overdue ticks");
                session.timer.resync(now);
                break;
            }
            let direction = session.direction;
            match self.apply_step(direction) {
                Ok(outcome) => outcomes.push(outcome),
                Err(err) => {
                    // Sessions only exist while attached
                    tracing::warn!(%err, "repeat tick without surface");
                    self.session = None;
                }
            }
        }
        outcomes
    }

    /// Route a UI gesture to the matching operation.
    pub fn dispatch(
        &mut self,
        gesture: Gesture,
        now: Instant,
    ) -> Result<Option<SeekOutcome>, TransportError> {
        match gesture {
            Gesture::Tap(direction) => self.seek_once(direction).map(Some),
            Gesture::Press(direction) => self.begin_hold_at(direction, now),
            Gesture::Release => {
                self.end_hold();
                Ok(None)
            }
        }
    }

    fn cancel_hold(&mut self, reason: &'static str) -> bool {
        match self.session.take() {
            Some(session) => {
                tracing::debug!(direction = ?session.direction, reason, "hold cancelled");
                true
            }
            None => false,
        }
    }

    fn apply_step(&mut self, direction: Direction) -> Result<SeekOutcome, TransportError> {
        let Some(surface) = self.surface.as_mut() else {
            tracing::debug!(?direction, "seek ignored: no surface attached");
            return Err(TransportError::NotAttached);
        };

        let target = surface.position() + direction.sign() * self.step;
        let duration = surface.duration();
        if let Err(err) = validate_duration(duration) {
            if !self.invalid_duration_logged {
                tracing::warn!(%err, "clamping against lower bound only");
                self.invalid_duration_logged = true;
            }
        }
        let clamped = clamp_target(target, duration);

        let hold_stopped = clamped.boundary.is_some() && self.session.take().is_some();

        // Pause before seeking to the end: the surface raises "ended" on
        // arrival even when paused, and the ended handler only rewinds a
        // surface that is still playing.
        let paused = clamped.boundary == Some(Boundary::End);
        if paused {
            surface.pause();
        }
        surface.seek_to(clamped.value);

        tracing::debug!(
            ?direction,
            position = clamped.value,
            boundary = ?clamped.boundary,
            hold_stopped,
            "seek applied"
        );

        Ok(SeekOutcome {
            target: clamped.value,
            boundary: clamped.boundary,
            paused,
            hold_stopped,
        })
    }
}
