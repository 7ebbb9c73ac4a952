//! Ray-plane, ray-triangle and ray-sphere intersection.
//!
//! Degenerate configurations (parallel rays, zero vectors, vanishing
//! determinants) are reported as misses, never as NaN or infinite hits.

use crate::{Plane, Ray, Vec3};

/// Rays closer to parallel than this (|direction · normal|) miss a plane.
pub const PARALLEL_EPSILON: f32 = 0.001;

/// Determinant magnitude under which a ray is treated as parallel to a triangle.
const DETERMINANT_EPSILON: f32 = 1e-8;

/// Where a ray meets a surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Intersection {
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal at the point
    pub normal: Vec3,
    /// Distance from the ray origin
    pub distance: f32,
}

impl Intersection {
    /// Create an intersection. The normal is normalized.
    pub fn new(point: Vec3, normal: Vec3, distance: f32) -> Self {
        Self {
            point,
            normal: normal.normalize_or_zero(),
            distance,
        }
    }

    /// Sentinel for nearest-hit searches: nothing found yet.
    pub const NONE: Intersection = Intersection {
        point: Vec3::ZERO,
        normal: Vec3::ZERO,
        distance: f32::INFINITY,
    };
}

/// Barycentric coordinates and ray distance of a ray-triangle hit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TriangleHit {
    pub u: f32,
    pub v: f32,
    pub t: f32,
}

/// Distance along the ray to the plane, if the ray accepts it.
pub fn plane_distance(ray: &Ray, plane: &Plane) -> Option<f32> {
    let normal = plane.normal();
    let dot = ray.direction().dot(normal);
    if dot.abs() < PARALLEL_EPSILON {
        return None;
    }

    let d = (plane.anchor() - ray.origin()).dot(normal) / dot;
    ray.accepts(d).then_some(d)
}

/// Solve `(p - p0) · n = 0` along the ray.
pub fn intersect_plane(ray: &Ray, plane: &Plane) -> Option<Vec3> {
    plane_distance(ray, plane).map(|d| ray.at(d))
}

/// Möller-Trumbore ray-triangle intersection.
///
/// The distance `t` is not checked against the ray's range; callers
/// decide which hits count.
pub fn intersect_triangle(ray: &Ray, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<TriangleHit> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let pvec = ray.direction().cross(edge2);
    let det = edge1.dot(pvec);

    // Ray is parallel to triangle
    if det.abs() < DETERMINANT_EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let tvec = ray.origin() - v0;
    let u = tvec.dot(pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(edge1);
    let v = ray.direction().dot(qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(qvec) * inv_det;
    Some(TriangleHit { u, v, t })
}

/// Ray-sphere intersection returning the nearest accepted root.
pub fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<Intersection> {
    if radius <= 0.0 || ray.direction() == Vec3::ZERO {
        return None;
    }

    // Direction is unit length, so the quadratic's `a` term is 1.
    let oc = ray.origin() - center;
    let b = 2.0 * ray.direction().dot(oc);
    let c = oc.length_squared() - radius * radius;

    let discriminant = b * b - 4.0 * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();
    let far = (-b + sqrtd) / 2.0;
    let near = (-b - sqrtd) / 2.0;

    let t = match (ray.accepts(near), ray.accepts(far)) {
        (true, true) => near.min(far),
        (true, false) => near,
        (false, true) => far,
        (false, false) => return None,
    };

    let point = ray.at(t);
    Some(Intersection::new(point, point - center, t))
}
