use crate::{Interval, Vec3};

/// Axis-Aligned Bounding Box used by the mesh grid.
///
/// An AABB is defined by three intervals (one per axis) that bound a 3D volume.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// Create a new AABB from three intervals.
    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        let mut aabb = Self { x, y, z };
        aabb.pad_to_minimums();
        aabb
    }

    /// Create an AABB from two corner points.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        let x = Interval::new(a.x.min(b.x), a.x.max(b.x));
        let y = Interval::new(a.y.min(b.y), a.y.max(b.y));
        let z = Interval::new(a.z.min(b.z), a.z.max(b.z));
        Self::new(x, y, z)
    }

    /// Create the smallest AABB enclosing every point.
    ///
    /// Returns `Aabb::EMPTY` for an empty slice.
    pub fn enclosing(points: &[Vec3]) -> Self {
        if points.is_empty() {
            return Self::EMPTY;
        }

        let (x, y, z) = points.iter().fold(
            (Interval::EMPTY, Interval::EMPTY, Interval::EMPTY),
            |(x, y, z), p| (x.include(p.x), y.include(p.y), z.include(p.z)),
        );

        Self::new(x, y, z)
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Returns true if the point lies inside the box grown by `bias` on every side.
    pub fn contains_padded(&self, p: Vec3, bias: f32) -> bool {
        self.x.pad(bias).contains(p.x)
            && self.y.pad(bias).contains(p.y)
            && self.z.pad(bias).contains(p.z)
    }

    /// Returns true if the box holds no volume at all.
    pub fn is_empty(&self) -> bool {
        self.x.min > self.x.max || self.y.min > self.y.max || self.z.min > self.z.max
    }

    /// Pad intervals to avoid zero-width AABBs (degenerate cases).
    fn pad_to_minimums(&mut self) {
        let delta = 0.0001;
        if self.x.size() < delta {
            self.x = self.x.pad(delta / 2.0);
        }
        if self.y.size() < delta {
            self.y = self.y.pad(delta / 2.0);
        }
        if self.z.size() < delta {
            self.z = self.z.pad(delta / 2.0);
        }
    }

    /// Returns the center point of the bounding box.
    pub fn centroid(&self) -> Vec3 {
        Vec3::new(self.x.midpoint(), self.y.midpoint(), self.z.midpoint())
    }

    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };
}
