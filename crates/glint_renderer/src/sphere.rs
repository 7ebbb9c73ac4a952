//! Analytic sphere object.

use glint_math::{intersect_sphere, Intersection, Ray, Vec3};

use crate::{Material, SceneObject};

/// A sphere primitive.
pub struct SphereObject<M: Material> {
    center: Vec3,
    radius: f32,
    material: M,
}

impl<M: Material> SphereObject<M> {
    /// Create a new sphere. Non-positive radii produce a sphere nothing hits.
    pub fn new(center: Vec3, radius: f32, material: M) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl<M: Material> SceneObject for SphereObject<M> {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        intersect_sphere(ray, self.center, self.radius)
    }

    fn material(&self) -> &dyn Material {
        &self.material
    }

    fn translate(&mut self, offset: Vec3) {
        self.center += offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, DiffuseSolidMaterial};

    #[test]
    fn test_sphere_hit() {
        let sphere = SphereObject::new(Vec3::new(0.0, 0.0, -1.0), 0.5, DiffuseSolidMaterial::new(Color::RED));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let hit = sphere.intersect(&ray).expect("ray aims at the sphere");
        assert!((hit.distance - 0.5).abs() < 1e-5);
        assert!((hit.normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_translate_moves_center() {
        let mut sphere = SphereObject::new(Vec3::ZERO, 1.0, DiffuseSolidMaterial::new(Color::RED));
        sphere.translate(Vec3::new(0.0, 0.0, 3.5));

        assert_eq!(sphere.center(), Vec3::new(0.0, 0.0, 3.5));
        assert!(sphere.intersect(&Ray::new(Vec3::ZERO, Vec3::X)).is_none());
        assert!(sphere.intersect(&Ray::new(Vec3::ZERO, Vec3::Z)).is_some());
    }

    #[test]
    fn test_negative_radius_never_hits() {
        let sphere = SphereObject::new(Vec3::ZERO, -2.0, DiffuseSolidMaterial::new(Color::RED));

        assert_eq!(sphere.radius(), 0.0);
        assert!(sphere.intersect(&Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z)).is_none());
    }
}
