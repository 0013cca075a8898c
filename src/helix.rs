//! Round-trip helix around the cube's grey diagonal.
//!
//! Over the domain `s ∈ [0, 2]` the diagonal value travels `start → end`
//! (leg 1, `s ∈ [0, 1]`) and back `end → start` (leg 2, `s ∈ [1, 2]`). A
//! rotating offset in the plane perpendicular to `(1, 1, 1)` spirals around
//! it. The offset radius follows a bump envelope that vanishes at both ends
//! and at the turnaround, and is clamped per sample so the point never
//! leaves the cube.

use crate::colors::{Color, CubeBounds};
use crate::error::{PathError, rejected};
use crate::path::{ColorPath, Domain, collect_samples};
use core::f64::consts::PI;
use heapless::Vec;
use nalgebra::Vector3;

/// Direction components smaller than this impose no radius bound.
const DIRECTION_EPSILON: f64 = 1e-12;

/// How the diagonal value moves between `start` and `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DiagonalProfile {
    /// Constant speed along the diagonal on each leg.
    #[default]
    Linear,

    /// `mid + delta * cos(π s)`: slows down near the ends and the turnaround.
    Cosine,
}

/// Parameters of a round-trip helix.
///
/// Every field is public so a presentation layer can hold one and pass it
/// to [`generate_helix_path`] and [`helix_point_at`] alike.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HelixConfig {
    /// Diagonal value at `s = 0` and `s = 2`.
    pub start: f64,

    /// Diagonal value at the turnaround `s = 1`. Must not exceed `start`.
    pub end: f64,

    /// Full rotations per leg.
    pub turns_each: f64,

    /// Peak of the radius envelope.
    pub r_max: f64,

    /// Fraction of the wall-limited radius actually used, in `(0, 1]`.
    pub safety: f64,

    /// Initial rotation angle in radians.
    pub theta0: f64,

    /// Envelope exponent; below 1 the radius ramps up faster near the ends.
    pub radius_power: f64,

    /// Cube the helix must stay inside.
    pub bounds: CubeBounds,

    pub profile: DiagonalProfile,
}

impl Default for HelixConfig {
    fn default() -> Self {
        Self {
            start: 225.0,
            end: 30.0,
            turns_each: 12.0,
            r_max: 135.0,
            safety: 0.98,
            theta0: 0.0,
            radius_power: 1.0,
            bounds: CubeBounds::default(),
            profile: DiagonalProfile::Linear,
        }
    }
}

impl HelixConfig {
    /// Checks every parameter.
    ///
    /// # Errors
    /// * `InvalidCubeBounds` - bounds non-finite or empty
    /// * `InvalidRange` - `start < end`, or either outside the bounds
    /// * `InvalidSafetyFactor` - `safety` outside `(0, 1]`
    /// * `InvalidParameter` - negative `r_max`, non-positive `radius_power`,
    ///   or any non-finite value
    pub fn validate(&self) -> Result<(), PathError> {
        self.bounds.validate()?;

        if !(self.start.is_finite() && self.end.is_finite()) {
            return Err(PathError::InvalidParameter);
        }
        if self.start < self.end
            || !self.bounds.contains_value(self.start)
            || !self.bounds.contains_value(self.end)
        {
            return Err(PathError::InvalidRange);
        }

        if !(self.safety > 0.0 && self.safety <= 1.0) {
            return Err(PathError::InvalidSafetyFactor);
        }

        let finite = self.turns_each.is_finite()
            && self.theta0.is_finite()
            && self.r_max.is_finite()
            && self.radius_power.is_finite();
        if !finite || self.r_max < 0.0 || self.radius_power <= 0.0 {
            return Err(PathError::InvalidParameter);
        }

        Ok(())
    }
}

/// A validated helix with its rotation basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixPath {
    config: HelixConfig,
    u: Vector3<f64>,
    w: Vector3<f64>,
}

impl HelixPath {
    /// Starts building a helix from the default configuration.
    pub fn builder() -> HelixBuilder {
        HelixBuilder::new()
    }

    /// Validates `config` and derives the rotation basis.
    pub fn new(config: HelixConfig) -> Result<Self, PathError> {
        config
            .validate()
            .map_err(|err| rejected("helix", err))?;

        let (u, w) = diagonal_basis();
        Ok(Self { config, u, w })
    }

    pub fn config(&self) -> &HelixConfig {
        &self.config
    }

    /// Unit vectors spanning the plane perpendicular to the grey diagonal.
    pub fn basis(&self) -> (Vector3<f64>, Vector3<f64>) {
        (self.u, self.w)
    }

    /// Diagonal value at `s`.
    pub fn base_at(&self, s: f64) -> f64 {
        let HelixConfig { start, end, .. } = self.config;
        match self.config.profile {
            DiagonalProfile::Linear => {
                if s <= 1.0 {
                    start + (end - start) * s
                } else {
                    end + (start - end) * (s - 1.0)
                }
            }
            DiagonalProfile::Cosine => {
                let mid = 0.5 * (start + end);
                let delta = 0.5 * (start - end);
                mid + delta * libm::cos(PI * s)
            }
        }
    }

    /// Radius envelope at `s` before wall clamping.
    pub fn envelope_at(&self, s: f64) -> f64 {
        let bump = libm::sin(PI * s);
        self.config.r_max * libm::pow(bump * bump, self.config.radius_power)
    }

    /// Unit offset direction at `s`, perpendicular to the diagonal.
    pub fn direction_at(&self, s: f64) -> Vector3<f64> {
        let theta = 2.0 * PI * self.config.turns_each * s + self.config.theta0;
        self.u * libm::cos(theta) + self.w * libm::sin(theta)
    }

    /// Largest radius that keeps `base + r * direction` inside the cube,
    /// scaled by the safety factor.
    fn allowed_radius(&self, base: f64, direction: &Vector3<f64>) -> f64 {
        let CubeBounds { min, max } = self.config.bounds;
        let limit = direction
            .iter()
            .filter_map(|&d| {
                if d > DIRECTION_EPSILON {
                    Some((max - base) / d)
                } else if d < -DIRECTION_EPSILON {
                    Some((base - min) / -d)
                } else {
                    None
                }
            })
            .fold(f64::INFINITY, f64::min);
        limit * self.config.safety
    }

    /// Radius actually used at `s`: the envelope, capped by the walls.
    pub fn radius_at(&self, s: f64) -> f64 {
        self.clamped_radius(s, self.base_at(s), &self.direction_at(s))
    }

    fn clamped_radius(&self, s: f64, base: f64, direction: &Vector3<f64>) -> f64 {
        self.envelope_at(s)
            .min(self.allowed_radius(base, direction))
            .max(0.0)
    }
}

impl ColorPath for HelixPath {
    fn domain(&self) -> Domain {
        Domain::new(0.0, 2.0)
    }

    fn evaluate(&self, s: f64) -> Color {
        let base = self.base_at(s);
        let direction = self.direction_at(s);
        let radius = self.clamped_radius(s, base, &direction);

        let point = Vector3::repeat(base) + direction * radius;
        self.config
            .bounds
            .clamp(Color::new(point.x, point.y, point.z))
    }
}

/// Orthonormal `(u, w)` perpendicular to `(1, 1, 1)`, with `u` the red axis
/// projected onto that plane and `w = axis × u`.
fn diagonal_basis() -> (Vector3<f64>, Vector3<f64>) {
    let axis = Vector3::new(1.0, 1.0, 1.0).normalize();
    let reference = Vector3::new(1.0, 0.0, 0.0);
    let u = (reference - axis * reference.dot(&axis)).normalize();
    let w = axis.cross(&u);
    (u, w)
}

/// Builder for validated helix paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelixBuilder {
    config: HelixConfig,
}

impl HelixBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing configuration.
    pub fn from_config(config: HelixConfig) -> Self {
        Self { config }
    }

    pub fn start(mut self, start: f64) -> Self {
        self.config.start = start;
        self
    }

    pub fn end(mut self, end: f64) -> Self {
        self.config.end = end;
        self
    }

    pub fn turns_each(mut self, turns: f64) -> Self {
        self.config.turns_each = turns;
        self
    }

    pub fn r_max(mut self, r_max: f64) -> Self {
        self.config.r_max = r_max;
        self
    }

    pub fn safety(mut self, safety: f64) -> Self {
        self.config.safety = safety;
        self
    }

    pub fn theta0(mut self, theta0: f64) -> Self {
        self.config.theta0 = theta0;
        self
    }

    pub fn radius_power(mut self, power: f64) -> Self {
        self.config.radius_power = power;
        self
    }

    pub fn bounds(mut self, bounds: CubeBounds) -> Self {
        self.config.bounds = bounds;
        self
    }

    pub fn profile(mut self, profile: DiagonalProfile) -> Self {
        self.config.profile = profile;
        self
    }

    /// The configuration as currently set.
    pub fn config(&self) -> HelixConfig {
        self.config
    }

    /// Validates and builds the helix. See [`HelixConfig::validate`].
    pub fn build(self) -> Result<HelixPath, PathError> {
        HelixPath::new(self.config)
    }
}

/// Samples the helix described by `config` into a buffer of `N` colors.
///
/// # Errors
/// Any error from [`HelixConfig::validate`], plus `InvalidSampleCount` for
/// zero samples and `CapacityExceeded` when `sample_count > N`.
pub fn generate_helix_path<const N: usize>(
    config: &HelixConfig,
    sample_count: usize,
) -> Result<Vec<Color, N>, PathError> {
    let path = HelixPath::new(*config)?;
    collect_samples(&path, sample_count)
}

/// The single color at `s` on the helix described by `config`.
///
/// Equal to the bulk sample at the same parameter.
///
/// # Errors
/// Any error from [`HelixConfig::validate`], plus `OutOfDomain` when `s` is
/// outside `[0, 2]`.
pub fn helix_point_at(s: f64, config: &HelixConfig) -> Result<Color, PathError> {
    HelixPath::new(*config)?.point_at(s)
}
