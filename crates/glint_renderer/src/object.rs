//! SceneObject trait for ray-object intersection.

use glint_core::Mesh;
use glint_math::{Intersection, Ray, Vec3};

use crate::Material;

/// Trait for objects that can be placed in a [`Scene`](crate::Scene).
pub trait SceneObject: Send + Sync {
    /// Nearest intersection the ray accepts, if any.
    fn intersect(&self, ray: &Ray) -> Option<Intersection>;

    fn material(&self) -> &dyn Material;

    /// Move the object by `offset`.
    fn translate(&mut self, offset: Vec3);

    /// Mesh-backed objects expose their mesh for in-place transforms.
    fn mesh_mut(&mut self) -> Option<&mut Mesh> {
        None
    }
}
