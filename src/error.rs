//! Validation errors for path construction and sampling.

/// Errors reported by path builders, samplers and time mapping.
///
/// Every variant is an input-validation failure. Nothing is retried or
/// recovered: a call either returns colors inside the cube or one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PathError {
    /// Helix `start` is below `end`, or either lies outside the cube bounds.
    InvalidRange,

    /// Safety factor outside `(0, 1]`.
    InvalidSafetyFactor,

    /// Fewer than two waypoints supplied.
    InsufficientWaypoints,

    /// Waypoint anchor parameters are not strictly increasing.
    InvalidWaypointOrder,

    /// Point query outside the path's domain.
    OutOfDomain,

    /// Zero samples requested.
    InvalidSampleCount,

    /// Inset leaves no room inside the cube.
    InvalidInset,

    /// Cube bounds are non-finite or `min >= max`.
    InvalidCubeBounds,

    /// A numeric parameter is non-finite or has the wrong sign.
    InvalidParameter,

    /// More samples requested than the output buffer can hold.
    CapacityExceeded,
}

impl core::fmt::Display for PathError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PathError::InvalidRange => {
                write!(f, "helix start must be >= end and both must lie inside the cube")
            }
            PathError::InvalidSafetyFactor => {
                write!(f, "safety factor must be in (0, 1]")
            }
            PathError::InsufficientWaypoints => {
                write!(f, "at least two waypoints are required")
            }
            PathError::InvalidWaypointOrder => {
                write!(f, "waypoint anchor parameters must be strictly increasing")
            }
            PathError::OutOfDomain => {
                write!(f, "parameter lies outside the path domain")
            }
            PathError::InvalidSampleCount => {
                write!(f, "sample count must be at least one")
            }
            PathError::InvalidInset => {
                write!(f, "inset must be in [0, half the cube width)")
            }
            PathError::InvalidCubeBounds => {
                write!(f, "cube bounds must be finite with min < max")
            }
            PathError::InvalidParameter => {
                write!(f, "path parameter is non-finite or out of range")
            }
            PathError::CapacityExceeded => {
                write!(f, "sample buffer capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PathError {}

/// Logs a rejected configuration and hands the error back for `?`/`Err`.
#[inline]
pub(crate) fn rejected(context: &'static str, err: PathError) -> PathError {
    #[cfg(feature = "defmt")]
    defmt::debug!("{=str} rejected: {}", context, err);
    #[cfg(not(feature = "defmt"))]
    let _ = context;
    err
}
