//! Interactive play command
//!
//! Drives a simulated surface from the keyboard. Terminals that report key
//! releases get real press-and-hold scanning; elsewhere each key press (and
//! each auto-repeat) is a tap.

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{cursor, execute, queue};
use std::io::{self, Write};
use std::time::{Duration, Instant};

use seekctl::playback::handle_ended;
use seekctl::transport::Gesture;
use seekctl::{Config, Direction, HoldState, MediaSurface, SeekController, SimulatedSurface};

/// Redraw at least this often while playing.
const FRAME: Duration = Duration::from_millis(100);

const BAR_WIDTH: usize = 40;

/// Restores the terminal when dropped, including on early return.
struct TerminalGuard {
    enhanced: bool,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
        let mut stdout = io::stdout();
        if enhanced {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        execute!(stdout, cursor::Hide)?;
        Ok(Self { enhanced })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.enhanced {
            let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(stdout, cursor::Show);
        let _ = terminal::disable_raw_mode();
        println!();
    }
}

/// Map a key event to a gesture, given whether releases are reported.
fn key_gesture(key: &KeyEvent, reports_release: bool) -> Option<Gesture> {
    let direction = match key.code {
        KeyCode::Left => Direction::Backward,
        KeyCode::Right => Direction::Forward,
        _ => return None,
    };
    match (key.kind, reports_release) {
        (KeyEventKind::Press, true) => Some(Gesture::Press(direction)),
        (KeyEventKind::Release, true) => Some(Gesture::Release),
        (KeyEventKind::Repeat, true) => None,
        (KeyEventKind::Press | KeyEventKind::Repeat, false) => Some(Gesture::Tap(direction)),
        (KeyEventKind::Release, false) => None,
    }
}

fn render(surface: &SimulatedSurface, hold: HoldState) -> io::Result<()> {
    let duration = surface.duration();
    let position = surface.position();
    let filled = if duration.is_finite() && duration > 0.0 {
        ((position / duration) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    }
    .min(BAR_WIDTH);

    let hold = match hold {
        HoldState::Idle => "",
        HoldState::Held(Direction::Forward) => " >>",
        HoldState::Held(Direction::Backward) => " <<",
    };

    let mut stdout = io::stdout();
    queue!(stdout, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    write!(
        stdout,
        "[{}{}] {:>7.1}/{:.1}s {}{}",
        "=".repeat(filled),
        " ".repeat(BAR_WIDTH - filled),
        position,
        duration,
        if surface.is_paused() { "paused" } else { "playing" },
        hold
    )?;
    stdout.flush()
}

/// Run the interactive session until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, duration: f64, start: f64) -> Result<()> {
    let mut controller = SeekController::new(&config.seek);
    controller.attach(SimulatedSurface::new(duration).with_position(start));

    let guard = TerminalGuard::enter()?;
    tracing::debug!(key_release = guard.enhanced, "interactive session started");
    let mut last = Instant::now();

    loop {
        let now = Instant::now();
        let timeout = controller
            .next_deadline()
            .map(|due| due.saturating_duration_since(now).min(FRAME))
            .unwrap_or(FRAME);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                let quit = matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                    || (key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL));
                if quit && key.kind != KeyEventKind::Release {
                    break;
                }
                if key.code == KeyCode::Char(' ') && key.kind == KeyEventKind::Press {
                    if let Some(surface) = controller.surface_mut() {
                        surface.toggle_pause();
                    }
                }
                if let Some(gesture) = key_gesture(&key, guard.enhanced) {
                    controller.dispatch(gesture, Instant::now())?;
                }
            }
        }

        let now = Instant::now();
        controller.poll(now);
        if let Some(surface) = controller.surface_mut() {
            surface.advance(now.duration_since(last).as_secs_f64());
            if surface.take_ended() {
                handle_ended(surface);
            }
        }
        last = now;

        if let Some(surface) = controller.surface() {
            render(surface, controller.hold_state())?;
        }
    }

    drop(guard);
    Ok(())
}
