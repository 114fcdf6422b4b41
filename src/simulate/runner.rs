//! Runs a gesture script against a simulated surface on a virtual clock.

use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;

use super::script::Step;
use crate::config::SeekConfig;
use crate::playback::{handle_ended, EndedAction};
use crate::surface::{MediaSurface, SimulatedSurface};
use crate::transport::{HoldState, SeekController, SeekOutcome};

/// State of the simulation after one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub step: String,
    /// Surface position, `None` while detached
    pub position: Option<f64>,
    pub paused: bool,
    pub hold: HoldState,
    /// Seeks the controller applied during the step
    pub seeks: Vec<SeekOutcome>,
    /// What the ended handler did, if "ended" fired during the step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended: Option<EndedAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<10}", self.step)?;
        match self.position {
            Some(position) => write!(f, " position={:>8.3}", position)?,
            None => write!(f, " position=  detach")?,
        }
        write!(f, " {}", if self.paused { "paused " } else { "playing" })?;
        match self.hold {
            HoldState::Idle => write!(f, " hold=idle")?,
            HoldState::Held(d) => write!(f, " hold={:?}", d)?,
        }
        if let Some(ended) = self.ended {
            write!(f, " ended={:?}", ended)?;
        }
        if let Some(error) = &self.error {
            write!(f, " error=\"{}\"", error)?;
        }
        Ok(())
    }
}

/// A controller, its surface and a virtual clock.
pub struct Simulation {
    controller: SeekController<SimulatedSurface>,
    /// Surface held aside while detached
    parked: Option<SimulatedSurface>,
    now: Instant,
    interval: Duration,
}

const CLOCK_OVERFLOW: &str = "Simulated clock overflow";

impl Simulation {
    pub fn new(config: &SeekConfig, surface: SimulatedSurface) -> Self {
        let mut controller = SeekController::new(config);
        controller.attach(surface);
        Self {
            controller,
            parked: None,
            now: Instant::now(),
            interval: config.repeat_interval(),
        }
    }

    pub fn controller(&self) -> &SeekController<SimulatedSurface> {
        &self.controller
    }

    /// The surface, attached or parked.
    pub fn surface(&self) -> Option<&SimulatedSurface> {
        self.controller.surface().or(self.parked.as_ref())
    }

    /// Move the virtual clock forward and run the ticks that fall due.
    ///
    /// Returns `None`, leaving the clock untouched, if `by` would overflow it.
    fn advance_clock(&mut self, by: Duration) -> Option<Vec<SeekOutcome>> {
        self.now = self.now.checked_add(by)?;
        Some(self.controller.poll(self.now))
    }

    /// Let `n` repeat intervals pass, polling after each one.
    fn tick(&mut self, n: u32) -> Result<Vec<SeekOutcome>, &'static str> {
        let total = self.interval.checked_mul(n).ok_or(CLOCK_OVERFLOW)?;
        self.now.checked_add(total).ok_or(CLOCK_OVERFLOW)?;

        let mut seeks = Vec::new();
        for _ in 0..n {
            seeks.extend(self.advance_clock(self.interval).ok_or(CLOCK_OVERFLOW)?);
        }
        Ok(seeks)
    }

    /// Apply one step and report the resulting state.
    pub fn step(&mut self, step: Step) -> StepReport {
        let mut seeks = Vec::new();
        let mut error = None;

        match step {
            Step::Tap(direction) => match self.controller.seek_once(direction) {
                Ok(outcome) => seeks.push(outcome),
                Err(err) => error = Some(err.to_string()),
            },
            Step::Hold(direction) => match self.controller.begin_hold_at(direction, self.now) {
                Ok(outcome) => seeks.extend(outcome),
                Err(err) => error = Some(err.to_string()),
            },
            Step::Release => {
                self.controller.end_hold();
            }
            Step::Tick(n) => match self.tick(n) {
                Ok(outcomes) => seeks = outcomes,
                Err(err) => error = Some(err.to_string()),
            },
            Step::Play(secs) => match Duration::try_from_secs_f64(secs) {
                Ok(by) if self.now.checked_add(by).is_some() => {
                    if let Some(surface) = self.controller.surface_mut() {
                        surface.play();
                        surface.advance(secs);
                    }
                    seeks = self.advance_clock(by).unwrap_or_default();
                }
                _ => error = Some(CLOCK_OVERFLOW.to_string()),
            },
            Step::Pause => {
                if let Some(surface) = self.controller.surface_mut() {
                    surface.pause();
                }
            }
            Step::Detach => {
                if let Some(surface) = self.controller.detach() {
                    self.parked = Some(surface);
                }
            }
            Step::Attach => {
                if let Some(surface) = self.parked.take() {
                    self.controller.attach(surface);
                }
            }
        }

        let mut ended = None;
        if let Some(surface) = self.controller.surface_mut() {
            if surface.take_ended() {
                ended = Some(handle_ended(surface));
            }
        }

        StepReport {
            step: step.to_string(),
            position: self.controller.surface().map(|s| s.position()),
            paused: self.surface().map_or(true, |s| s.is_paused()),
            hold: self.controller.hold_state(),
            seeks,
            ended,
            error,
        }
    }

    /// Run every step in order.
    pub fn run(&mut self, steps: &[Step]) -> Vec<StepReport> {
        steps.iter().map(|&step| self.step(step)).collect()
    }
}
