//! Shared test infrastructure for rgb-orbit integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use rgb_orbit::{Color, CubeBounds, DayClock};

// ============================================================================
// Mock Clock
// ============================================================================

/// Mock wall clock with a settable time of day
pub struct MockClock {
    minutes: core::cell::Cell<f64>,
}

impl MockClock {
    pub fn new(minutes: f64) -> Self {
        Self {
            minutes: core::cell::Cell::new(minutes),
        }
    }

    /// Advance the clock by the given number of minutes
    pub fn advance(&self, minutes: f64) {
        self.minutes.set(self.minutes.get() + minutes);
    }

    pub fn set(&self, minutes: f64) {
        self.minutes.set(minutes);
    }
}

impl DayClock for MockClock {
    fn minutes_since_midnight(&self) -> f64 {
        self.minutes.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Color, b: Color) -> bool {
    colors_equal_epsilon(a, b, 1e-9)
}

/// Compare two colors with custom epsilon
pub fn colors_equal_epsilon(a: Color, b: Color, epsilon: f64) -> bool {
    (a.red - b.red).abs() < epsilon
        && (a.green - b.green).abs() < epsilon
        && (a.blue - b.blue).abs() < epsilon
}

/// True when every channel lies in the default 0-255 cube
pub fn in_cube(color: Color) -> bool {
    CubeBounds::default().contains(color)
}

/// Distance of a color from the grey diagonal
pub fn off_diagonal(color: Color) -> f64 {
    let mean = (color.red + color.green + color.blue) / 3.0;
    let dr = color.red - mean;
    let dg = color.green - mean;
    let db = color.blue - mean;
    (dr * dr + dg * dg + db * db).sqrt()
}
