//! Smooth paths through labelled anchor colors.
//!
//! A [`WaypointPath`] passes exactly through every waypoint color at its
//! anchor parameter. Between anchors each channel is interpolated with a
//! monotone cubic Hermite curve (PCHIP), which never rings past the values
//! of the neighbouring anchors the way a global cubic spline can. This keeps
//! the curve off the cube walls without flattening it against them.

use crate::colors::{Color, CubeBounds};
use crate::error::{PathError, rejected};
use crate::path::{ColorPath, Domain, collect_samples};
use crate::wiggle::Wiggle;
use heapless::Vec;

/// A labelled anchor color at a position on the path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Waypoint<'a> {
    /// Human-readable name, e.g. `"Noon"`.
    pub label: &'a str,

    /// Anchor parameter (hour of day, minute of day, or 0-1).
    pub anchor: f64,

    /// Color the path must pass through at `anchor`.
    pub color: Color,
}

impl<'a> Waypoint<'a> {
    #[inline]
    pub const fn new(label: &'a str, anchor: f64, color: Color) -> Self {
        Self {
            label,
            anchor,
            color,
        }
    }
}

/// How to interpolate between consecutive waypoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterpolationStyle {
    /// Shape-preserving piecewise cubic (PCHIP).
    #[default]
    Monotone,

    /// Straight-line blend between neighbours.
    Linear,
}

/// A validated path through a borrowed list of waypoints.
#[derive(Debug, Clone, Copy)]
pub struct WaypointPath<'w> {
    waypoints: &'w [Waypoint<'w>],
    bounds: CubeBounds,
    inset: f64,
    wiggle: Wiggle,
    style: InterpolationStyle,
}

impl<'w> WaypointPath<'w> {
    /// Starts building a path through `waypoints`.
    pub fn builder(waypoints: &'w [Waypoint<'w>]) -> WaypointPathBuilder<'w> {
        WaypointPathBuilder::new(waypoints)
    }

    pub fn waypoints(&self) -> &'w [Waypoint<'w>] {
        self.waypoints
    }

    pub fn bounds(&self) -> CubeBounds {
        self.bounds
    }

    pub fn inset(&self) -> f64 {
        self.inset
    }

    pub fn wiggle(&self) -> Wiggle {
        self.wiggle
    }

    pub fn style(&self) -> InterpolationStyle {
        self.style
    }

    /// Waypoint `index`'s color after the inset is applied.
    ///
    /// With no wiggle, this is the exact color the path passes through at
    /// that waypoint's anchor.
    pub fn anchor_color(&self, index: usize) -> Option<Color> {
        self.waypoints
            .get(index)
            .map(|w| Color::from_channels(self.inset_channels(w.color)))
    }

    /// Maps a color into the cube shrunk by `inset` on every side.
    fn inset_channels(&self, color: Color) -> [f64; 3] {
        let scale = (self.bounds.width() - 2.0 * self.inset) / self.bounds.width();
        let min = self.bounds.min;
        color
            .channels()
            .map(|c| min + self.inset + (c - min) * scale)
    }

    fn anchor(&self, k: usize) -> f64 {
        self.waypoints[k].anchor
    }

    fn value(&self, k: usize, channel: usize) -> f64 {
        self.inset_channels(self.waypoints[k].color)[channel]
    }

    /// Secant slope of `channel` over interval `k`.
    fn secant(&self, k: usize, channel: usize) -> f64 {
        (self.value(k + 1, channel) - self.value(k, channel)) / (self.anchor(k + 1) - self.anchor(k))
    }

    /// Index of the interval containing `t`; the last anchor belongs to the
    /// final interval.
    fn interval(&self, t: f64) -> usize {
        let upper = self.waypoints.partition_point(|w| w.anchor <= t);
        upper.saturating_sub(1).min(self.waypoints.len() - 2)
    }

    /// PCHIP derivative of `channel` at waypoint `k`.
    fn slope(&self, k: usize, channel: usize) -> f64 {
        let n = self.waypoints.len();
        if n == 2 {
            return self.secant(0, channel);
        }

        if k == 0 {
            let h0 = self.anchor(1) - self.anchor(0);
            let h1 = self.anchor(2) - self.anchor(1);
            return edge_slope(h0, h1, self.secant(0, channel), self.secant(1, channel));
        }
        if k == n - 1 {
            let h0 = self.anchor(n - 1) - self.anchor(n - 2);
            let h1 = self.anchor(n - 2) - self.anchor(n - 3);
            return edge_slope(
                h0,
                h1,
                self.secant(n - 2, channel),
                self.secant(n - 3, channel),
            );
        }

        let m0 = self.secant(k - 1, channel);
        let m1 = self.secant(k, channel);
        if m0 * m1 <= 0.0 {
            return 0.0;
        }

        // Weighted harmonic mean keeps the slope within 3x of both secants.
        let h0 = self.anchor(k) - self.anchor(k - 1);
        let h1 = self.anchor(k + 1) - self.anchor(k);
        let w1 = 2.0 * h1 + h0;
        let w2 = h1 + 2.0 * h0;
        (w1 + w2) / (w1 / m0 + w2 / m1)
    }

    /// Interpolated color at `t` before wiggle and clamping.
    fn interpolate(&self, t: f64) -> [f64; 3] {
        let k = self.interval(t);
        let x0 = self.anchor(k);
        let h = self.anchor(k + 1) - x0;
        let u = (t - x0) / h;

        match self.style {
            InterpolationStyle::Linear => {
                let a = Color::from_channels(self.inset_channels(self.waypoints[k].color));
                let b = Color::from_channels(self.inset_channels(self.waypoints[k + 1].color));
                a.lerp(b, u).channels()
            }
            InterpolationStyle::Monotone => {
                // Endpoints return the anchor value untouched so waypoints are hit exactly.
                if u <= 0.0 {
                    return self.inset_channels(self.waypoints[k].color);
                }
                if u >= 1.0 {
                    return self.inset_channels(self.waypoints[k + 1].color);
                }

                let u2 = u * u;
                let u3 = u2 * u;
                let h00 = 2.0 * u3 - 3.0 * u2 + 1.0;
                let h10 = u3 - 2.0 * u2 + u;
                let h01 = -2.0 * u3 + 3.0 * u2;
                let h11 = u3 - u2;

                core::array::from_fn(|c| {
                    h00 * self.value(k, c)
                        + h10 * h * self.slope(k, c)
                        + h01 * self.value(k + 1, c)
                        + h11 * h * self.slope(k + 1, c)
                })
            }
        }
    }
}

/// One-sided three-point slope at an end of the curve, limited so the end
/// interval stays monotone.
fn edge_slope(h0: f64, h1: f64, m0: f64, m1: f64) -> f64 {
    let d = ((2.0 * h0 + h1) * m0 - h0 * m1) / (h0 + h1);
    if sign(d) != sign(m0) {
        0.0
    } else if sign(m0) != sign(m1) && libm::fabs(d) > 3.0 * libm::fabs(m0) {
        3.0 * m0
    } else {
        d
    }
}

fn sign(x: f64) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

impl ColorPath for WaypointPath<'_> {
    fn domain(&self) -> Domain {
        Domain::new(self.anchor(0), self.anchor(self.waypoints.len() - 1))
    }

    fn evaluate(&self, param: f64) -> Color {
        let base = self.interpolate(param);
        let offset = self.wiggle.offset(param);
        let moved = core::array::from_fn(|c| base[c] + offset[c]);
        self.bounds.clamp(Color::from_channels(moved))
    }
}

/// Builder for validated waypoint paths.
#[derive(Debug, Clone, Copy)]
pub struct WaypointPathBuilder<'w> {
    waypoints: &'w [Waypoint<'w>],
    bounds: CubeBounds,
    inset: f64,
    wiggle: Wiggle,
    style: InterpolationStyle,
}

impl<'w> WaypointPathBuilder<'w> {
    pub fn new(waypoints: &'w [Waypoint<'w>]) -> Self {
        Self {
            waypoints,
            bounds: CubeBounds::default(),
            inset: 0.0,
            wiggle: Wiggle::none(),
            style: InterpolationStyle::default(),
        }
    }

    /// Keeps every waypoint at least `inset` away from each wall.
    ///
    /// Waypoint colors are scaled into the shrunken cube, so a waypoint on a
    /// wall lands exactly `inset` inside it. Default is `0.0`.
    pub fn inset(mut self, inset: f64) -> Self {
        self.inset = inset;
        self
    }

    /// Sets the organic perturbation. Default is [`Wiggle::none`].
    pub fn wiggle(mut self, wiggle: Wiggle) -> Self {
        self.wiggle = wiggle;
        self
    }

    /// Sets the interpolation style. Default is `Monotone`.
    pub fn style(mut self, style: InterpolationStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the cube the path is clamped to. Default is `[0, 255]`.
    pub fn bounds(mut self, bounds: CubeBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Validates and builds the path.
    ///
    /// # Errors
    /// * `InsufficientWaypoints` - fewer than two waypoints
    /// * `InvalidWaypointOrder` - anchors not strictly increasing
    /// * `InvalidCubeBounds` - bounds non-finite or empty
    /// * `InvalidInset` - inset negative or at least half the cube width
    /// * `InvalidParameter` - non-finite anchor or color, or a negative or
    ///   non-finite wiggle amplitude
    pub fn build(self) -> Result<WaypointPath<'w>, PathError> {
        self.validate()
            .map_err(|err| rejected("waypoint path", err))?;

        Ok(WaypointPath {
            waypoints: self.waypoints,
            bounds: self.bounds,
            inset: self.inset,
            wiggle: self.wiggle,
            style: self.style,
        })
    }

    fn validate(&self) -> Result<(), PathError> {
        if self.waypoints.len() < 2 {
            return Err(PathError::InsufficientWaypoints);
        }

        for w in self.waypoints {
            let finite = w.anchor.is_finite() && w.color.channels().iter().all(|c| c.is_finite());
            if !finite {
                return Err(PathError::InvalidParameter);
            }
        }

        if self
            .waypoints
            .windows(2)
            .any(|pair| pair[1].anchor <= pair[0].anchor)
        {
            return Err(PathError::InvalidWaypointOrder);
        }

        self.bounds.validate()?;

        if !(self.inset.is_finite() && self.inset >= 0.0 && 2.0 * self.inset < self.bounds.width()) {
            return Err(PathError::InvalidInset);
        }

        if !(self.wiggle.amplitude.is_finite() && self.wiggle.amplitude >= 0.0) {
            return Err(PathError::InvalidParameter);
        }

        Ok(())
    }
}

/// Samples a monotone path through `waypoints` into a buffer of `N` colors.
///
/// Waypoints are inset by `inset` and perturbed by a wiggle of
/// `wiggle_amplitude` using [`Wiggle::for_domain`].
///
/// # Errors
/// Any error from [`WaypointPathBuilder::build`], plus `InvalidSampleCount`
/// for zero samples and `CapacityExceeded` when `sample_count > N`.
pub fn generate_waypoint_path<const N: usize>(
    waypoints: &[Waypoint<'_>],
    sample_count: usize,
    inset: f64,
    wiggle_amplitude: f64,
) -> Result<Vec<Color, N>, PathError> {
    let wiggle = match (waypoints.first(), waypoints.last()) {
        (Some(first), Some(last)) => {
            Wiggle::for_domain(Domain::new(first.anchor, last.anchor), wiggle_amplitude)
        }
        _ => Wiggle::none().with_amplitude(wiggle_amplitude),
    };

    let path = WaypointPath::builder(waypoints)
        .inset(inset)
        .wiggle(wiggle)
        .build()?;
    collect_samples(&path, sample_count)
}
