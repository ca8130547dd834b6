//! Closed scalar ranges used for bounds checks, clamping and random draws.

use crate::error::PhysicsError;

/// A closed interval `[min, max]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Range {
    min: f32,
    max: f32,
}

impl Range {
    /// Creates a range, rejecting inverted or non-finite bounds.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidRange`] when `min > max` or either bound is not finite.
    pub fn new(min: f32, max: f32) -> Result<Self, PhysicsError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(PhysicsError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Symmetric range `[-half_width, half_width]`.
    ///
    /// # Errors
    ///
    /// Same as [`Range::new`]; a negative `half_width` is rejected.
    pub fn symmetric(half_width: f32) -> Result<Self, PhysicsError> {
        Self::new(-half_width, half_width)
    }

    #[must_use]
    pub const fn min(&self) -> f32 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> f32 {
        self.max
    }

    #[must_use]
    pub fn length(&self) -> f32 {
        self.max - self.min
    }

    /// Clamp `value` into the range.
    #[must_use]
    pub fn bound(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// `true` when `min <= value <= max`. NaN is never inside.
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// `true` when the whole of `other` lies strictly inside this range.
    #[must_use]
    pub fn strictly_contains(&self, other: &Range) -> bool {
        other.min > self.min && other.max < self.max
    }

    /// Draw a value uniformly from the range.
    pub fn sample(&self, rng: &mut fastrand::Rng) -> f32 {
        let value = self.min + rng.f32() * self.length();
        // f32 rounding can land exactly on max; keep draws inside the range.
        value.min(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_bounds() {
        assert!(matches!(
            Range::new(1.0, -1.0),
            Err(PhysicsError::InvalidRange { .. })
        ));
        assert!(Range::new(f32::NAN, 1.0).is_err());
    }

    #[test]
    fn bound_clamps_both_sides() {
        let r = Range::new(-2.4, 2.4).unwrap();
        assert_eq!(r.bound(3.0), 2.4);
        assert_eq!(r.bound(-3.0), -2.4);
        assert_eq!(r.bound(1.0), 1.0);
    }

    #[test]
    fn contains_is_closed() {
        let r = Range::symmetric(1.0).unwrap();
        assert!(r.contains(1.0));
        assert!(r.contains(-1.0));
        assert!(!r.contains(1.0001));
        assert!(!r.contains(f32::NAN));
    }

    #[test]
    fn samples_stay_in_range() {
        let r = Range::symmetric(0.2).unwrap();
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..10_000 {
            assert!(r.contains(r.sample(&mut rng)));
        }
    }

    #[test]
    fn strict_containment() {
        let outer = Range::symmetric(2.4).unwrap();
        assert!(outer.strictly_contains(&Range::symmetric(0.2).unwrap()));
        assert!(!outer.strictly_contains(&outer));
    }
}
