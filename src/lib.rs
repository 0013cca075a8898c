#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Color`**: A point in the RGB cube, channels in 0-255 units
//! - **`CubeBounds`**: The cube every generated color is kept inside
//! - **`ColorPath`**: Trait shared by path families: domain, point query and bulk samples
//! - **`WaypointPath`**: Monotone cubic path through labelled anchor colors, with optional `Wiggle`
//! - **`HelixPath`**: Round-trip spiral around the grey diagonal with a per-sample wall clamp
//! - **`minutes_to_param`**: Time of day to helix parameter (midnight at the turnaround)
//! - **`DayMarker`**: Live/manual marker that samples a path for a clock reading
//! - **`NamedColor`**: Externally supplied reference colors, with brightness and nearest lookups
//!
//! Every path is a pure function of its parameters. Sampling never reads a
//! clock; a "current time" only enters through an explicit argument or a
//! caller-supplied [`DayClock`].

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod colors;
pub mod command;
pub mod error;
pub mod helix;
pub mod marker;
pub mod named;
pub mod path;
pub mod presets;
pub mod time;
pub mod waypoint;
pub mod wiggle;

pub use colors::{CUBE_MAX, CUBE_MIN, Color, CubeBounds};
pub use command::MarkerAction;
pub use error::PathError;
pub use helix::{
    DiagonalProfile, HelixBuilder, HelixConfig, HelixPath, generate_helix_path, helix_point_at,
};
pub use marker::{DayMarker, MarkerMode, MarkerReading};
pub use named::{NamedColor, brightest, nearest};
pub use path::{ColorPath, Domain, Samples, collect_samples};
pub use time::{
    DayClock, DayMapping, MINUTES_PER_DAY, format_minutes, minutes_from_hms, minutes_to_param,
    param_to_minutes,
};
pub use waypoint::{
    InterpolationStyle, Waypoint, WaypointPath, WaypointPathBuilder, generate_waypoint_path,
};
pub use wiggle::{Oscillator, Wave, Wiggle};
