use crate::{Interval, Vec3};

/// Distance kept clear at both ends of a ray.
///
/// Hits closer than this to the origin are self-intersections with the surface
/// the ray was spawned from; hits closer than this to the end of a bounded ray
/// belong to the target the ray was aimed at.
pub const RAY_BIAS: f32 = 0.001;

/// A ray in 3D space with origin, unit direction and length.
///
/// Rays are cheap value types: a camera ray, a shadow ray and every
/// reflected or refracted ray is a fresh `Ray`. A length of
/// `f32::INFINITY` means the ray is unbounded.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
    length: f32,
}

impl Ray {
    /// Create an unbounded ray. The direction is normalized.
    ///
    /// A zero direction stays zero, and such a ray intersects nothing.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self::bounded(origin, direction, f32::INFINITY)
    }

    /// Create a ray that only reaches `length` units from its origin.
    pub fn bounded(origin: Vec3, direction: Vec3, length: f32) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
            length,
        }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the unit direction of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the length of the ray (`f32::INFINITY` when unbounded).
    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.length != f32::INFINITY
    }

    /// Get the point along the ray at distance t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// The open range of distances at which this ray may report a hit.
    pub fn valid_range(&self) -> Interval {
        let max = if self.is_bounded() {
            self.length - RAY_BIAS
        } else {
            f32::INFINITY
        };
        Interval::new(RAY_BIAS, max)
    }

    /// Returns true if a hit at distance `t` counts for this ray.
    ///
    /// NaN distances are never accepted.
    #[inline]
    pub fn accepts(&self, t: f32) -> bool {
        self.valid_range().surrounds(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_direction_is_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 4.0));

        assert!((ray.direction().length() - 1.0).abs() < 1e-6);
        assert!((ray.direction() - Vec3::new(0.0, 0.6, 0.8)).length() < 1e-6);
        assert!(!ray.is_bounded());
    }

    #[test]
    fn test_zero_direction_stays_zero() {
        let ray = Ray::new(Vec3::ONE, Vec3::ZERO);
        assert_eq!(ray.direction(), Vec3::ZERO);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_unbounded_ray_accepts() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert!(!ray.accepts(0.0));
        assert!(!ray.accepts(RAY_BIAS));
        assert!(ray.accepts(0.01));
        assert!(ray.accepts(1e9));
        assert!(!ray.accepts(-1.0));
        assert!(!ray.accepts(f32::NAN));
    }

    #[test]
    fn test_bounded_ray_accepts() {
        let ray = Ray::bounded(Vec3::ZERO, Vec3::Z, 5.0);

        assert!(ray.is_bounded());
        assert!(ray.accepts(4.5));
        assert!(!ray.accepts(5.0 - RAY_BIAS / 2.0));
        assert!(!ray.accepts(6.0));
    }
}
