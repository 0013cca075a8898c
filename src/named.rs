//! Named reference colors supplied by another component.
//!
//! The list arrives already parsed as `(name, [r, g, b])` pairs; nothing here
//! reads or parses text.

use crate::colors::Color;
use heapless::Vec;

/// A labelled color from an external palette.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NamedColor<'a> {
    pub name: &'a str,
    pub color: Color,
}

impl<'a> NamedColor<'a> {
    #[inline]
    pub const fn new(name: &'a str, color: Color) -> Self {
        Self { name, color }
    }

    /// Creates an entry from an 8-bit triple.
    #[inline]
    pub fn from_rgb8(name: &'a str, rgb: [u8; 3]) -> Self {
        Self::new(name, Color::from_rgb8(rgb))
    }
}

/// The `K` brightest entries by luma, brightest first.
///
/// Entries with equal luma keep their input order.
pub fn brightest<'n, 'a, const K: usize>(colors: &'n [NamedColor<'a>]) -> Vec<&'n NamedColor<'a>, K> {
    let mut top: Vec<&NamedColor<'a>, K> = Vec::new();
    if K == 0 {
        return top;
    }

    for entry in colors {
        let luma = entry.color.luma();
        let pos = top.partition_point(|kept| kept.color.luma() >= luma);
        if pos >= K {
            continue;
        }
        if top.is_full() {
            top.pop();
        }
        // Room was made above, so this cannot fail.
        let _ = top.insert(pos, entry);
    }
    top
}

/// The entry closest to `color` by Euclidean RGB distance.
///
/// Ties resolve to the earliest entry. Returns `None` for an empty list.
pub fn nearest<'n, 'a>(colors: &'n [NamedColor<'a>], color: Color) -> Option<&'n NamedColor<'a>> {
    colors.iter().min_by(|a, b| {
        a.color
            .distance_squared(color)
            .total_cmp(&b.color.distance_squared(color))
    })
}
