//! Bounded organic perturbation for waypoint paths.
//!
//! Each channel is offset by `amplitude * a(t) * b(t)` where `a` and `b` are
//! unit sine or cosine waves at different frequencies. A product of two waves
//! is a sum of two sinusoids at the sum and difference frequencies, so the
//! offset looks non-periodic over a day yet never exceeds `amplitude`.
//!
//! The offset depends only on the path parameter, never on sample density or
//! wall-clock time.

use crate::path::Domain;

/// A unit wave, `sin(f * t)` or `cos(f * t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Wave {
    Sin(f64),
    Cos(f64),
}

impl Wave {
    #[inline]
    pub fn at(self, t: f64) -> f64 {
        match self {
            Wave::Sin(freq) => libm::sin(freq * t),
            Wave::Cos(freq) => libm::cos(freq * t),
        }
    }
}

/// Product of two unit waves; always in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Oscillator {
    pub outer: Wave,
    pub inner: Wave,
}

impl Oscillator {
    #[inline]
    pub const fn new(outer: Wave, inner: Wave) -> Self {
        Self { outer, inner }
    }

    #[inline]
    pub fn at(self, t: f64) -> f64 {
        self.outer.at(t) * self.inner.at(t)
    }
}

/// Per-channel perturbation scaled by a common amplitude.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Wiggle {
    /// Largest offset any channel can receive, in 0-255 units.
    pub amplitude: f64,

    /// Oscillators for red, green and blue.
    pub channels: [Oscillator; 3],
}

impl Wiggle {
    /// No perturbation.
    pub const fn none() -> Self {
        Self::hourly(0.0)
    }

    /// Frequencies tuned for domains measured in hours (`0..24`).
    pub const fn hourly(amplitude: f64) -> Self {
        Self {
            amplitude,
            channels: [
                Oscillator::new(Wave::Sin(10.0), Wave::Cos(4.0)),
                Oscillator::new(Wave::Cos(8.0), Wave::Sin(3.0)),
                Oscillator::new(Wave::Sin(6.0), Wave::Sin(5.0)),
            ],
        }
    }

    /// Frequencies tuned for normalised domains (`0..1`).
    pub const fn normalized(amplitude: f64) -> Self {
        Self {
            amplitude,
            channels: [
                Oscillator::new(Wave::Sin(60.0), Wave::Cos(21.0)),
                Oscillator::new(Wave::Cos(44.0), Wave::Sin(13.0)),
                Oscillator::new(Wave::Sin(37.0), Wave::Sin(29.0)),
            ],
        }
    }

    /// Picks frequencies to suit `domain`: [`Wiggle::normalized`] for
    /// domains no wider than one unit, [`Wiggle::hourly`] otherwise.
    pub fn for_domain(domain: Domain, amplitude: f64) -> Self {
        if domain.span() <= 1.0 {
            Self::normalized(amplitude)
        } else {
            Self::hourly(amplitude)
        }
    }

    /// Returns a copy with a different amplitude.
    pub const fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn is_active(&self) -> bool {
        self.amplitude != 0.0
    }

    /// Offsets for `[red, green, blue]` at parameter `t`.
    pub fn offset(&self, t: f64) -> [f64; 3] {
        if !self.is_active() {
            return [0.0; 3];
        }
        self.channels.map(|osc| osc.at(t) * self.amplitude)
    }
}

impl Default for Wiggle {
    fn default() -> Self {
        Self::none()
    }
}
