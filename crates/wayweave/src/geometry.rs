//! Planar geometry helpers in game coordinates.
//!
//! Points are plain [`DVec2`] values. [`Rect`] is an axis-aligned rectangle used for
//! building bounds and candidate filtering.
use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with inclusive bounds.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y, "min must not exceed max");
        Self { min, max }
    }

    /// Smallest rectangle containing every point, or `None` for an empty input.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = DVec2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    /// Grows the rectangle by `amount` on all four sides.
    pub fn expand(&self, amount: f64) -> Self {
        let delta = DVec2::splat(amount);
        Self {
            min: self.min - delta,
            max: self.max + delta,
        }
    }

    #[inline]
    pub fn contains_point(&self, point: DVec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn union(&self, other: &Rect) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    pub fn diagonal(&self) -> f64 {
        self.size().length()
    }
}

/// Closest point to `p` on the segment `a`-`b`, together with its distance to `p`.
///
/// A zero-length segment yields `a`.
pub fn closest_point_on_segment(a: DVec2, b: DVec2, p: DVec2) -> (DVec2, f64) {
    let ab = b - a;
    let len_sq = ab.length_squared();
    let closest = if len_sq <= f64::EPSILON {
        a
    } else {
        let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
        a + ab * t
    };
    (closest, closest.distance(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_covers_all_points() {
        let rect = Rect::from_points([
            DVec2::new(3.0, -1.0),
            DVec2::new(-2.0, 4.0),
            DVec2::new(0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(rect.min, DVec2::new(-2.0, -1.0));
        assert_eq!(rect.max, DVec2::new(3.0, 4.0));
        assert!(Rect::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn containment_is_inclusive_after_expansion() {
        let rect = Rect::new(DVec2::ZERO, DVec2::new(20.0, 20.0)).expand(4.0);
        assert!(rect.contains_point(DVec2::new(24.0, 24.0)));
        assert!(rect.contains_point(DVec2::new(-4.0, 0.0)));
        assert!(!rect.contains_point(DVec2::new(24.01, 0.0)));
    }

    #[test]
    fn closest_point_clamps_to_segment_ends() {
        let end = DVec2::new(20.0, 0.0);
        let (p, d) = closest_point_on_segment(DVec2::ZERO, end, DVec2::new(30.0, 0.0));
        assert_eq!(p, DVec2::new(20.0, 0.0));
        assert_eq!(d, 10.0);

        let (p, d) = closest_point_on_segment(DVec2::ZERO, end, DVec2::new(5.0, 3.0));
        assert_eq!(p, DVec2::new(5.0, 0.0));
        assert_eq!(d, 3.0);
    }

    #[test]
    fn zero_length_segment_returns_start() {
        let a = DVec2::new(1.0, 1.0);
        let (p, d) = closest_point_on_segment(a, a, DVec2::new(4.0, 5.0));
        assert_eq!(p, a);
        assert_eq!(d, 5.0);
    }
}
