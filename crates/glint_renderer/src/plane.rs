//! Infinite plane object.

use glint_math::{intersect::plane_distance, Intersection, Plane, Ray, Vec3};

use crate::{Material, SceneObject};

/// An infinite plane. Its normal is the plane's own normal on both sides.
pub struct PlaneObject<M: Material> {
    plane: Plane,
    material: M,
}

impl<M: Material> PlaneObject<M> {
    /// Create the plane through `point` facing `normal`.
    pub fn new(point: Vec3, normal: Vec3, material: M) -> Self {
        Self {
            plane: Plane::from_point_normal(point, normal),
            material,
        }
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }
}

impl<M: Material> SceneObject for PlaneObject<M> {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let distance = plane_distance(ray, &self.plane)?;
        Some(Intersection::new(ray.at(distance), self.plane.normal(), distance))
    }

    fn material(&self) -> &dyn Material {
        &self.material
    }

    fn translate(&mut self, offset: Vec3) {
        self.plane = Plane::from_point_normal(self.plane.anchor() + offset, self.plane.normal());
    }
}
