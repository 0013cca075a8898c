//! Colors as points in the RGB cube.
//!
//! Path math works in 0-255 channel units with `f64` precision. Conversions
//! to `palette::Srgb` (0.0-1.0 range) are provided for display and LED output.

use palette::{Mix, Srgb};

/// Lower wall of the default RGB cube.
pub const CUBE_MIN: f64 = 0.0;

/// Upper wall of the default RGB cube.
pub const CUBE_MAX: f64 = 255.0;

/// A point in the RGB cube, each channel in 0-255 units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    /// Creates a color from its three channels.
    #[inline]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// A point on the grey diagonal (`R = G = B = value`).
    #[inline]
    pub const fn gray(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// Creates a color from 8-bit channels.
    #[inline]
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self::new(f64::from(rgb[0]), f64::from(rgb[1]), f64::from(rgb[2]))
    }

    /// Creates a color from a normalised `Srgb` (0.0-1.0 range).
    #[inline]
    pub fn from_srgb(srgb: Srgb) -> Self {
        Self::new(
            f64::from(srgb.red) * CUBE_MAX,
            f64::from(srgb.green) * CUBE_MAX,
            f64::from(srgb.blue) * CUBE_MAX,
        )
    }

    /// Converts to a normalised `Srgb` (0.0-1.0 range), ready for an LED or swatch.
    #[inline]
    pub fn to_srgb(self) -> Srgb {
        Srgb::new(
            (self.red / CUBE_MAX) as f32,
            (self.green / CUBE_MAX) as f32,
            (self.blue / CUBE_MAX) as f32,
        )
    }

    /// Rounds each channel to the nearest 8-bit value, saturating at the walls.
    pub fn to_rgb8(self) -> [u8; 3] {
        let rgb: Srgb<u8> = self.to_srgb().into_format();
        [rgb.red, rgb.green, rgb.blue]
    }

    /// Channels as an array, in `[red, green, blue]` order.
    #[inline]
    pub fn channels(self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }

    /// Builds a color from a `[red, green, blue]` array.
    #[inline]
    pub fn from_channels(channels: [f64; 3]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }

    /// Linear blend towards `other`; `factor` is clamped to 0.0-1.0.
    pub fn lerp(self, other: Color, factor: f64) -> Self {
        let a = Srgb::<f64>::new(self.red, self.green, self.blue);
        let b = Srgb::<f64>::new(other.red, other.green, other.blue);
        let mixed = a.mix(b, factor.clamp(0.0, 1.0));
        Self::new(mixed.red, mixed.green, mixed.blue)
    }

    /// Rec. 709 luma, in the same 0-255 units as the channels.
    #[inline]
    pub fn luma(self) -> f64 {
        0.2126 * self.red + 0.7152 * self.green + 0.0722 * self.blue
    }

    /// Squared Euclidean distance in the cube.
    #[inline]
    pub fn distance_squared(self, other: Color) -> f64 {
        let dr = self.red - other.red;
        let dg = self.green - other.green;
        let db = self.blue - other.blue;
        dr * dr + dg * dg + db * db
    }
}

/// The axis-aligned cube every generated color must stay inside.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CubeBounds {
    pub min: f64,
    pub max: f64,
}

impl CubeBounds {
    /// Creates bounds without validation; see [`CubeBounds::validate`].
    #[inline]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Checks that the bounds are finite and `min < max`.
    pub fn validate(&self) -> Result<(), crate::PathError> {
        if self.min.is_finite() && self.max.is_finite() && self.min < self.max {
            Ok(())
        } else {
            Err(crate::PathError::InvalidCubeBounds)
        }
    }

    /// Edge length of the cube.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// True when `value` lies in `[min, max]`.
    #[inline]
    pub fn contains_value(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// True when every channel lies in `[min, max]`.
    pub fn contains(&self, color: Color) -> bool {
        color.channels().iter().all(|&c| self.contains_value(c))
    }

    /// Clamps every channel onto the cube.
    pub fn clamp(&self, color: Color) -> Color {
        Color::from_channels(color.channels().map(|c| c.clamp(self.min, self.max)))
    }
}

impl Default for CubeBounds {
    fn default() -> Self {
        Self::new(CUBE_MIN, CUBE_MAX)
    }
}
