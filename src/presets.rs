//! Ready-made waypoint sets and helix configurations.
//!
//! Waypoint colors are nominal positions in the full cube; pass an inset to
//! the builder to pull them away from the walls.

use crate::colors::{Color, CubeBounds};
use crate::helix::{DiagonalProfile, HelixConfig};
use crate::waypoint::Waypoint;
use core::f64::consts::FRAC_PI_2;

/// A day in hours (`0..24`): midnight violet, cyan before dawn, green
/// morning, yellow noon, orange afternoon, red sunset, magenta evening.
pub const FULL_SPECTRUM: [Waypoint<'static>; 8] = [
    Waypoint::new("Midnight", 0.0, Color::new(20.0, 0.0, 235.0)),
    Waypoint::new("Pre-dawn", 4.0, Color::new(0.0, 235.0, 235.0)),
    Waypoint::new("Morning", 8.0, Color::new(20.0, 255.0, 20.0)),
    Waypoint::new("Noon", 12.0, Color::new(255.0, 255.0, 0.0)),
    Waypoint::new("Afternoon", 15.0, Color::new(255.0, 160.0, 0.0)),
    Waypoint::new("Sunset", 18.0, Color::new(255.0, 0.0, 0.0)),
    Waypoint::new("Evening", 21.0, Color::new(255.0, 0.0, 235.0)),
    Waypoint::new("Midnight", 24.0, Color::new(20.0, 0.0, 235.0)),
];

/// A tour of the cube corners on `0..1`, black to white, with an orange
/// stop between yellow and red.
pub const CORNER_TOUR: [Waypoint<'static>; 9] = [
    Waypoint::new("Blackish", 0.0, Color::new(0.0, 0.0, 0.0)),
    Waypoint::new("Blueish", 0.125, Color::new(0.0, 0.0, 255.0)),
    Waypoint::new("Cyanish", 0.25, Color::new(0.0, 255.0, 255.0)),
    Waypoint::new("Greenish", 0.375, Color::new(0.0, 255.0, 0.0)),
    Waypoint::new("Yellowish", 0.5, Color::new(255.0, 255.0, 0.0)),
    Waypoint::new("Orangeish", 0.625, Color::new(255.0, 165.0, 0.0)),
    Waypoint::new("Reddish", 0.75, Color::new(255.0, 0.0, 0.0)),
    Waypoint::new("Magentaish", 0.875, Color::new(255.0, 0.0, 255.0)),
    Waypoint::new("Whitish", 1.0, Color::new(255.0, 255.0, 255.0)),
];

/// Minute-anchored colors every four hours, meant for the linear style.
pub const TRAY_ANCHORS: [Waypoint<'static>; 7] = [
    Waypoint::new("Purple", 0.0, Color::new(128.0, 0.0, 128.0)),
    Waypoint::new("Red", 240.0, Color::new(255.0, 0.0, 0.0)),
    Waypoint::new("Orange", 480.0, Color::new(255.0, 165.0, 0.0)),
    Waypoint::new("Yellow", 720.0, Color::new(255.0, 255.0, 0.0)),
    Waypoint::new("Green", 960.0, Color::new(0.0, 128.0, 0.0)),
    Waypoint::new("Blue", 1200.0, Color::new(0.0, 0.0, 255.0)),
    Waypoint::new("Purple", 1440.0, Color::new(128.0, 0.0, 128.0)),
];

/// A helix kept away from pure white and black, that swings outward quickly
/// after each endpoint.
pub fn daylight_helix() -> HelixConfig {
    HelixConfig {
        start: 210.0,
        end: 45.0,
        turns_each: 12.0,
        r_max: 140.0,
        safety: 0.98,
        theta0: FRAC_PI_2,
        radius_power: 0.5,
        bounds: CubeBounds::default(),
        profile: DiagonalProfile::Linear,
    }
}
