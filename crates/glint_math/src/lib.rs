//! Glint math: rays, bounds and intersection primitives.

// Re-export glam for convenience
pub use glam::*;

mod aabb;
mod interval;
mod plane;
mod ray;

pub mod intersect;

pub use aabb::Aabb;
pub use intersect::{intersect_plane, intersect_sphere, intersect_triangle, Intersection, TriangleHit};
pub use interval::Interval;
pub use plane::Plane;
pub use ray::{Ray, RAY_BIAS};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
    }
}
