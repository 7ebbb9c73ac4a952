use crate::Vec3;

/// An infinite plane `p · normal = offset`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
    normal: Vec3,
    offset: f32,
}

impl Plane {
    /// Create a plane from a normal and its signed offset from the origin.
    ///
    /// The normal is normalized; a zero normal makes a plane nothing can hit.
    pub fn new(normal: Vec3, offset: f32) -> Self {
        Self {
            normal: normal.normalize_or_zero(),
            offset,
        }
    }

    /// Create the plane through `point` facing `normal`.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let normal = normal.normalize_or_zero();
        Self {
            normal,
            offset: point.dot(normal),
        }
    }

    /// Create the plane `axis = offset` (0=X, 1=Y, 2=Z).
    pub fn axis_aligned(axis: usize, offset: f32) -> Self {
        let normal = match axis {
            0 => Vec3::X,
            1 => Vec3::Y,
            _ => Vec3::Z,
        };
        Self { normal, offset }
    }

    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// The point of the plane closest to the origin.
    #[inline]
    pub fn anchor(&self) -> Vec3 {
        self.normal * self.offset
    }

    /// Signed distance from the plane to `p`, positive on the normal side.
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        p.dot(self.normal) - self.offset
    }
}
