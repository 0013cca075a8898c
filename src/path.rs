//! The contract shared by every path family.
//!
//! A path maps a scalar parameter from a closed [`Domain`] to a [`Color`].
//! Bulk sampling ([`ColorPath::samples`]) and point sampling
//! ([`ColorPath::point_at`]) both go through [`ColorPath::evaluate`], so a
//! point query at a sample's parameter reproduces that sample exactly.

use crate::colors::Color;
use crate::error::PathError;
use heapless::Vec;

/// Closed parameter interval a path is defined over.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Domain {
    pub start: f64,
    pub end: f64,
}

impl Domain {
    #[inline]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// True when `param` lies in `[start, end]`.
    #[inline]
    pub fn contains(&self, param: f64) -> bool {
        param >= self.start && param <= self.end
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Parameter of sample `index` when `count` samples are spread evenly
    /// over the domain, both ends included.
    ///
    /// A single sample sits at `start`. The last sample is pinned to `end`
    /// exactly so round-off never pushes it out of the domain.
    pub fn param_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 || index == 0 {
            return self.start;
        }
        if index >= count - 1 {
            return self.end;
        }
        self.start + self.span() * (index as f64 / (count - 1) as f64)
    }
}

/// A pure mapping from a domain parameter to a point in the cube.
pub trait ColorPath {
    /// The closed interval this path is defined over.
    fn domain(&self) -> Domain;

    /// Evaluates the path at `param` without checking the domain.
    ///
    /// Implementations must return a color inside their cube for every
    /// parameter in [`ColorPath::domain`].
    fn evaluate(&self, param: f64) -> Color;

    /// Point query: the color at `param`.
    ///
    /// # Errors
    /// * `OutOfDomain` - `param` is outside the domain (or NaN)
    fn point_at(&self, param: f64) -> Result<Color, PathError> {
        if !self.domain().contains(param) {
            return Err(PathError::OutOfDomain);
        }
        Ok(self.evaluate(param))
    }

    /// Bulk sample: `count` colors spread evenly over the domain.
    ///
    /// # Errors
    /// * `InvalidSampleCount` - `count` is zero
    fn samples(&self, count: usize) -> Result<Samples<'_, Self>, PathError>
    where
        Self: Sized,
    {
        if count == 0 {
            return Err(PathError::InvalidSampleCount);
        }
        Ok(Samples {
            path: self,
            domain: self.domain(),
            index: 0,
            count,
        })
    }
}

/// Iterator over evenly spaced samples of a path.
#[derive(Debug, Clone)]
pub struct Samples<'p, P: ColorPath> {
    path: &'p P,
    domain: Domain,
    index: usize,
    count: usize,
}

impl<P: ColorPath> Samples<'_, P> {
    /// Parameter of sample `index` in this sequence.
    pub fn param(&self, index: usize) -> f64 {
        self.domain.param_at(index, self.count)
    }
}

impl<P: ColorPath> Iterator for Samples<'_, P> {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        if self.index >= self.count {
            return None;
        }
        let param = self.domain.param_at(self.index, self.count);
        self.index += 1;
        Some(self.path.evaluate(param))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl<P: ColorPath> ExactSizeIterator for Samples<'_, P> {}

/// Collects `count` samples of `path` into a fixed-capacity buffer.
///
/// # Errors
/// * `InvalidSampleCount` - `count` is zero
/// * `CapacityExceeded` - `count` is larger than `N`
pub fn collect_samples<P: ColorPath, const N: usize>(
    path: &P,
    count: usize,
) -> Result<Vec<Color, N>, PathError> {
    let samples = path.samples(count)?;
    if count > N {
        return Err(PathError::CapacityExceeded);
    }

    let mut out = Vec::new();
    for color in samples {
        out.push(color).map_err(|_| PathError::CapacityExceeded)?;
    }
    Ok(out)
}
