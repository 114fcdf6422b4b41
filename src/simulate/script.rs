//! Gesture script parsing.
//!
//! A script is a list of steps, each written as `name` or `name:arg`:
//!
//! | Step          | Meaning                                        |
//! |---------------|------------------------------------------------|
//! | `tap:fwd`     | single seek forward (`back` for backward)      |
//! | `hold:back`   | press and hold                                 |
//! | `release`     | end the hold                                   |
//! | `tick`        | let one repeat interval pass (`tick:3` for 3)  |
//! | `play:2.5`    | play 2.5 seconds of media                      |
//! | `pause`       | pause the surface                              |
//! | `detach`      | detach the surface from the controller         |
//! | `attach`      | attach it again                                |

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::transport::Direction;

/// Largest `tick:N` a single step may request.
pub const MAX_TICKS: u32 = 10_000;

/// Errors from parsing a script step.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScriptError {
    #[error("Unknown step '{0}'")]
    UnknownStep(String),

    #[error("Step '{0}' needs a direction (fwd or back)")]
    MissingDirection(String),

    #[error("Invalid direction '{0}', expected fwd or back")]
    InvalidDirection(String),

    #[error("Invalid tick count '{0}', expected 1 to 10000")]
    InvalidCount(String),

    #[error("Invalid number of seconds '{0}'")]
    InvalidSeconds(String),

    #[error("Step '{0}' takes no argument")]
    UnexpectedArgument(String),
}

/// One scripted action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Tap(Direction),
    Hold(Direction),
    Release,
    Tick(u32),
    Play(f64),
    Pause,
    Detach,
    Attach,
}

fn parse_direction(step: &str, arg: Option<&str>) -> Result<Direction, ScriptError> {
    match arg {
        None => Err(ScriptError::MissingDirection(step.to_string())),
        Some("fwd" | "forward" | "ff") => Ok(Direction::Forward),
        Some("back" | "backward" | "rew" | "rewind") => Ok(Direction::Backward),
        Some(other) => Err(ScriptError::InvalidDirection(other.to_string())),
    }
}

fn no_argument(step: Step, name: &str, arg: Option<&str>) -> Result<Step, ScriptError> {
    match arg {
        None => Ok(step),
        Some(_) => Err(ScriptError::UnexpectedArgument(name.to_string())),
    }
}

impl FromStr for Step {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        match name {
            "tap" => parse_direction(name, arg).map(Step::Tap),
            "hold" => parse_direction(name, arg).map(Step::Hold),
            "release" => no_argument(Step::Release, name, arg),
            "pause" => no_argument(Step::Pause, name, arg),
            "detach" => no_argument(Step::Detach, name, arg),
            "attach" => no_argument(Step::Attach, name, arg),
            "tick" => match arg {
                None => Ok(Step::Tick(1)),
                Some(n) => match n.parse::<u32>() {
                    Ok(count) if (1..=MAX_TICKS).contains(&count) => Ok(Step::Tick(count)),
                    _ => Err(ScriptError::InvalidCount(n.to_string())),
                },
            },
            "play" => {
                let arg = arg.unwrap_or("1");
                match arg.parse::<f64>() {
                    Ok(secs) if Duration::try_from_secs_f64(secs).is_ok() => Ok(Step::Play(secs)),
                    _ => Err(ScriptError::InvalidSeconds(arg.to_string())),
                }
            }
            _ => Err(ScriptError::UnknownStep(s.to_string())),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = |d: &Direction| match d {
            Direction::Forward => "fwd",
            Direction::Backward => "back",
        };
        match self {
            Self::Tap(d) => write!(f, "tap:{}", dir(d)),
            Self::Hold(d) => write!(f, "hold:{}", dir(d)),
            Self::Release => write!(f, "release"),
            Self::Tick(1) => write!(f, "tick"),
            Self::Tick(n) => write!(f, "tick:{}", n),
            Self::Play(secs) => write!(f, "play:{}", secs),
            Self::Pause => write!(f, "pause"),
            Self::Detach => write!(f, "detach"),
            Self::Attach => write!(f, "attach"),
        }
    }
}

/// Parse a script from one or more strings.
///
/// Each input may hold several steps separated by whitespace or commas.
pub fn parse_script<I, T>(inputs: I) -> Result<Vec<Step>, ScriptError>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut steps = Vec::new();
    for input in inputs {
        for token in input
            .as_ref()
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            steps.push(token.parse()?);
        }
    }
    Ok(steps)
}
