//! Live/manual time-of-day marker over a color path.
//!
//! Provides [`DayMarker`], which tracks the marker shown on a path for the
//! current time. In `Live` mode it follows a [`DayClock`]; once the user
//! scrubs to a time it switches to `Manual` and holds that time until told to
//! go live again. The path itself stays stateless; all mode state lives here.

use crate::colors::Color;
use crate::command::MarkerAction;
use crate::error::PathError;
use crate::path::ColorPath;
use crate::time::{DayClock, DayMapping, format_minutes, wrap_minutes};
use heapless::String;

/// Whether the marker follows the clock or a user-chosen time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MarkerMode {
    /// Follows the clock on every service.
    Live,
    /// Holds the last scrubbed time.
    Manual,
}

/// One evaluation of the marker.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MarkerReading {
    /// Minutes since midnight that were mapped.
    pub minutes: f64,
    /// Path parameter the minutes mapped to.
    pub param: f64,
    /// Color on the path at `param`.
    pub color: Color,
}

impl MarkerReading {
    /// `HH:MM` label for the reading's time.
    pub fn label(&self) -> String<5> {
        format_minutes(self.minutes)
    }

    /// The color rounded to 8-bit channels, for a swatch.
    pub fn rgb8(&self) -> [u8; 3] {
        self.color.to_rgb8()
    }
}

/// Tracks the time-of-day marker on a single path.
///
/// # Type Parameters
/// * `'c` - Lifetime of the clock reference
/// * `P` - Path the marker moves along
/// * `C` - Clock implementation
pub struct DayMarker<'c, P: ColorPath, C: DayClock> {
    path: P,
    clock: &'c C,
    mapping: DayMapping,
    mode: MarkerMode,
    manual_minutes: f64,
    last: Option<MarkerReading>,
}

impl<'c, P: ColorPath, C: DayClock> DayMarker<'c, P, C> {
    /// Creates a live marker.
    pub fn new(path: P, clock: &'c C, mapping: DayMapping) -> Self {
        Self {
            path,
            clock,
            mapping,
            mode: MarkerMode::Live,
            manual_minutes: 0.0,
            last: None,
        }
    }

    /// Handles an action by dispatching to the matching method.
    pub fn handle_action(&mut self, action: MarkerAction) -> Result<MarkerReading, PathError> {
        match action {
            MarkerAction::Scrub(minutes) => self.scrub(minutes),
            MarkerAction::GoLive => self.go_live(),
        }
    }

    /// Moves the marker to `minutes` and enters `Manual` mode.
    ///
    /// Can be called from either mode.
    pub fn scrub(&mut self, minutes: f64) -> Result<MarkerReading, PathError> {
        if !minutes.is_finite() {
            return Err(PathError::InvalidParameter);
        }
        if self.mode != MarkerMode::Manual {
            #[cfg(feature = "defmt")]
            defmt::debug!("marker: Live -> Manual at {=f64} min", minutes);
            self.mode = MarkerMode::Manual;
        }
        self.manual_minutes = wrap_minutes(minutes);
        self.service()
    }

    /// Returns to following the clock.
    pub fn go_live(&mut self) -> Result<MarkerReading, PathError> {
        if self.mode != MarkerMode::Live {
            #[cfg(feature = "defmt")]
            defmt::debug!("marker: Manual -> Live");
            self.mode = MarkerMode::Live;
        }
        self.service()
    }

    /// Evaluates the marker at the time the current mode dictates.
    ///
    /// Call this on every redraw tick.
    ///
    /// # Errors
    /// * `OutOfDomain` - the mapping sent the time outside the path domain
    ///   (e.g. `RoundTrip` on a path that is not defined over `[0, 2]`)
    pub fn service(&mut self) -> Result<MarkerReading, PathError> {
        let minutes = match self.mode {
            MarkerMode::Live => wrap_minutes(self.clock.minutes_since_midnight()),
            MarkerMode::Manual => self.manual_minutes,
        };

        let param = self.mapping.param(minutes, self.path.domain());
        let color = self.path.point_at(param)?;

        let reading = MarkerReading {
            minutes,
            param,
            color,
        };
        self.last = Some(reading);
        Ok(reading)
    }

    pub fn mode(&self) -> MarkerMode {
        self.mode
    }

    /// Returns true if the marker is following the clock.
    pub fn is_live(&self) -> bool {
        self.mode == MarkerMode::Live
    }

    /// The most recent successful reading, if any.
    pub fn last_reading(&self) -> Option<MarkerReading> {
        self.last
    }

    pub fn path(&self) -> &P {
        &self.path
    }

    pub fn mapping(&self) -> DayMapping {
        self.mapping
    }
}
