//! Seek target clamping.
//!
//! Every target handed to a media surface goes through [`clamp_target`], which
//! keeps it inside `[0, duration]` and reports which edge (if any) was hit.

use super::error::TransportError;

/// Which edge of the media a seek target ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// Target was below zero
    Start,
    /// Target was at or past the duration
    End,
}

/// A seek target after clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamped {
    /// Position that is safe to hand to the surface
    pub value: f64,
    /// Edge that was hit, `None` when the target was already in range
    pub boundary: Option<Boundary>,
}

/// Check that a duration can act as an upper bound.
///
/// Durations are unknown (NaN) until metadata loads; live streams report
/// infinity. Neither can bound a seek.
pub fn validate_duration(duration: f64) -> Result<f64, TransportError> {
    if duration.is_finite() && duration >= 0.0 {
        Ok(duration)
    } else {
        Err(TransportError::InvalidDuration { duration })
    }
}

/// Clamp a seek target to `[0, duration]`.
///
/// A target equal to the duration counts as hitting the end, since the
/// surface raises "ended" on reaching it. A target of exactly zero does not
/// count as hitting the start.
///
/// When the duration is invalid only the lower bound applies.
pub fn clamp_target(target: f64, duration: f64) -> Clamped {
    // NaN targets come from NaN positions; treat them as the start
    let target = if target.is_nan() { 0.0 } else { target };

    match validate_duration(duration) {
        Ok(duration) if target >= duration => Clamped {
            value: duration,
            boundary: Some(Boundary::End),
        },
        _ if target < 0.0 => Clamped {
            value: 0.0,
            boundary: Some(Boundary::Start),
        },
        Ok(_) => Clamped {
            value: target,
            boundary: None,
        },
        Err(_) => Clamped {
            value: target,
            boundary: None,
        },
    }
}
