//! End-to-end transport scenarios through the public API

use std::time::{Duration, Instant};

use seekctl::playback::{handle_ended, EndedAction};
use seekctl::transport::{Boundary, Gesture};
use seekctl::{
    Direction, HoldState, MediaSurface, SeekConfig, SeekController, SimulatedSurface,
};

fn playing_at(position: f64, duration: f64) -> SimulatedSurface {
    let mut surface = SimulatedSurface::new(duration).with_position(position);
    surface.play();
    surface
}

#[test]
fn hold_to_end_then_ended_does_not_restart() {
    let mut controller = SeekController::new(&SeekConfig::default());
    controller.attach(playing_at(60.0, 100.0));
    let t0 = Instant::now();

    controller
        .dispatch(Gesture::Press(Direction::Forward), t0)
        .unwrap();
    controller.poll(t0 + Duration::from_secs(60));

    assert_eq!(controller.hold_state(), HoldState::Idle);
    let surface = controller.surface_mut().unwrap();
    assert_eq!(surface.position(), 100.0);
    assert!(surface.take_ended());
    assert_eq!(handle_ended(surface), EndedAction::Ignored);
    assert_eq!(surface.position(), 100.0);
    assert_eq!(surface.pause_calls(), 1);
}

#[test]
fn every_forward_tap_at_end_pauses_again() {
    let mut controller = SeekController::new(&SeekConfig::default());
    controller.attach(playing_at(95.0, 100.0));

    let first = controller.seek_once(Direction::Forward).unwrap();
    let second = controller.seek_once(Direction::Forward).unwrap();

    assert_eq!(first.boundary, Some(Boundary::End));
    assert_eq!(second.boundary, Some(Boundary::End));
    assert_eq!(controller.surface().unwrap().pause_calls(), 2);
    assert_eq!(controller.surface().unwrap().seeks(), &[100.0, 100.0]);
}

#[test]
fn rewind_hold_stops_at_zero_and_keeps_playing() {
    let mut controller = SeekController::new(&SeekConfig::default());
    controller.attach(playing_at(33.0, 100.0));
    let t0 = Instant::now();

    controller.begin_hold_at(Direction::Backward, t0).unwrap();
    let outcomes = controller.poll(t0 + Duration::from_secs(10));

    assert_eq!(outcomes.last().unwrap().boundary, Some(Boundary::Start));
    let surface = controller.surface().unwrap();
    assert_eq!(surface.position(), 0.0);
    assert!(!surface.is_paused());
    assert_eq!(surface.pause_calls(), 0);
}

#[test]
fn custom_step_and_interval_are_honored() {
    let config = SeekConfig {
        step_secs: 2.0,
        repeat_interval_ms: 250,
        immediate_step: true,
    };
    let mut controller = SeekController::new(&config);
    controller.attach(SimulatedSurface::new(100.0));
    let t0 = Instant::now();

    controller.begin_hold_at(Direction::Forward, t0).unwrap();
    controller.poll(t0 + Duration::from_secs(1));

    // immediate step + 4 ticks of 250ms
    assert_eq!(controller.surface().unwrap().position(), 10.0);
}

#[test]
fn boxed_surfaces_can_be_swapped() {
    let mut controller: SeekController<Box<dyn MediaSurface>> =
        SeekController::new(&SeekConfig::default());

    controller.attach(Box::new(SimulatedSurface::new(50.0).with_position(10.0)));
    controller.seek_once(Direction::Forward).unwrap();

    let previous = controller
        .attach(Box::new(SimulatedSurface::new(500.0).with_position(300.0)))
        .unwrap();
    assert_eq!(previous.position(), 20.0);

    controller.seek_once(Direction::Backward).unwrap();
    assert_eq!(controller.surface().unwrap().position(), 290.0);
}

#[test]
fn surface_loaded_later_bounds_subsequent_seeks() {
    let mut controller = SeekController::new(&SeekConfig::default());
    controller.attach(SimulatedSurface::new(f64::NAN).with_position(0.0));

    // No known end yet: only the lower bound applies
    controller.seek_once(Direction::Forward).unwrap();
    assert_eq!(controller.surface().unwrap().position(), 10.0);

    controller.surface_mut().unwrap().set_duration(15.0);
    let outcome = controller.seek_once(Direction::Forward).unwrap();
    assert_eq!(outcome.target, 15.0);
    assert!(outcome.paused);
}
