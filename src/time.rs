//! Time of day and its mapping onto path parameters.
//!
//! Everything here takes the time as an explicit argument. The only place a
//! wall clock is read is a [`DayClock`] implementation supplied by the caller.

use crate::path::Domain;
use core::fmt::Write;
use heapless::String;

/// Minutes in one day.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Minutes from midnight to noon.
pub const NOON: f64 = 720.0;

/// Trait for abstracting wall-clock sources.
pub trait DayClock {
    /// Minutes elapsed since local midnight, fractional seconds included.
    fn minutes_since_midnight(&self) -> f64;
}

/// Minutes since midnight for a clock reading.
#[inline]
pub fn minutes_from_hms(hours: u32, minutes: u32, seconds: f64) -> f64 {
    f64::from(hours) * 60.0 + f64::from(minutes) + seconds / 60.0
}

/// Folds any minute count into `[0, 1440]`. Values already in range,
/// including `1440` itself, are returned unchanged.
pub fn wrap_minutes(minutes: f64) -> f64 {
    if (0.0..=MINUTES_PER_DAY).contains(&minutes) {
        return minutes;
    }
    let folded = libm::fmod(minutes, MINUTES_PER_DAY);
    if folded < 0.0 {
        folded + MINUTES_PER_DAY
    } else {
        folded
    }
}

/// Maps minutes since midnight onto the round-trip helix domain `[0, 2]`.
///
/// Midnight is the turnaround (`s = 1`) and noon the endpoints (`s = 2`,
/// equivalent to `s = 0`):
///
/// | minutes | s   |
/// |---------|-----|
/// | 0       | 1.0 |
/// | 720     | 2.0 |
/// | 721     | ~0  |
/// | 1440    | 1.0 |
pub fn minutes_to_param(minutes: f64) -> f64 {
    let m = wrap_minutes(minutes);
    if m <= NOON {
        1.0 + m / NOON
    } else {
        (m - NOON) / NOON
    }
}

/// Inverse of [`minutes_to_param`] within each branch.
///
/// `s ∈ [1, 2]` maps to `0..=720` (midnight to noon) and `s ∈ [0, 1)` to
/// `720..1440` (noon to midnight). Returns `None` outside `[0, 2]`.
pub fn param_to_minutes(s: f64) -> Option<f64> {
    if !(0.0..=2.0).contains(&s) {
        return None;
    }
    if s >= 1.0 {
        Some((s - 1.0) * NOON)
    } else {
        Some(NOON + s * NOON)
    }
}

/// Formats minutes since midnight as `HH:MM`.
///
/// Rounds to the nearest minute and clamps to `00:00..=24:00`.
pub fn format_minutes(minutes: f64) -> String<5> {
    let rounded = if minutes.is_nan() {
        0.0
    } else {
        libm::round(minutes).clamp(0.0, MINUTES_PER_DAY)
    };
    let total = rounded as u32;

    let mut label = String::new();
    // "24:00" is the widest label and fits exactly.
    let _ = write!(label, "{:02}:{:02}", total / 60, total % 60);
    label
}

/// How a time of day is placed onto a path's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DayMapping {
    /// Midnight at the helix turnaround, noon at its endpoints.
    #[default]
    RoundTrip,

    /// Midnight at the domain start, the following midnight at its end.
    Linear,
}

impl DayMapping {
    /// Path parameter for `minutes` since midnight on a path over `domain`.
    pub fn param(&self, minutes: f64, domain: Domain) -> f64 {
        match self {
            DayMapping::RoundTrip => minutes_to_param(minutes),
            DayMapping::Linear => {
                domain.start + domain.span() * (wrap_minutes(minutes) / MINUTES_PER_DAY)
            }
        }
    }
}
