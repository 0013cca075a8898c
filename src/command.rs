//! Command-based control for day markers.

/// Actions a presentation layer can send to a [`DayMarker`](crate::DayMarker).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MarkerAction {
    /// Jump to this many minutes since midnight and hold (slider drag).
    Scrub(f64),
    /// Resume following the clock.
    GoLive,
}
