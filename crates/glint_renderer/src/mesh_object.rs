//! Triangle mesh object.

use glint_core::Mesh;
use glint_math::{intersect_triangle, Intersection, Ray, Vec3};

use crate::{Material, SceneObject};

/// A mesh placed in the scene with a single material.
///
/// When the mesh carries a grid, only the triangles of the grid cell the
/// query selects are tested, and a ray that pierces no cell misses.
pub struct MeshObject<M: Material> {
    mesh: Mesh,
    material: M,
}

impl<M: Material> MeshObject<M> {
    pub fn new(mesh: Mesh, material: M) -> Self {
        Self { mesh, material }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Nearest accepted hit among `candidates`, reported with the triangle's normal.
    fn nearest_triangle(&self, ray: &Ray, candidates: impl Iterator<Item = usize>) -> Option<Intersection> {
        let mut nearest: Option<(f32, usize)> = None;

        for index in candidates {
            let [v0, v1, v2] = self.mesh.triangle_vertices(index);
            let Some(hit) = intersect_triangle(ray, v0, v1, v2) else {
                continue;
            };

            if ray.accepts(hit.t) && nearest.map_or(true, |(best, _)| hit.t < best) {
                nearest = Some((hit.t, index));
            }
        }

        nearest.map(|(t, index)| Intersection::new(ray.at(t), self.mesh.normals()[index], t))
    }
}

impl<M: Material> SceneObject for MeshObject<M> {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        match self.mesh.grid() {
            Some(grid) => self.nearest_triangle(ray, grid.query(ray)?.iter().copied()),
            None => self.nearest_triangle(ray, 0..self.mesh.triangle_count()),
        }
    }

    fn material(&self) -> &dyn Material {
        &self.material
    }

    fn translate(&mut self, offset: Vec3) {
        self.mesh.translate(offset);
    }

    fn mesh_mut(&mut self) -> Option<&mut Mesh> {
        Some(&mut self.mesh)
    }
}
