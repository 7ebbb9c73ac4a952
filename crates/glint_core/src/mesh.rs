//! Triangle mesh geometry for Glint scene objects.
//!
//! A mesh is the tuple a mesh source hands over (vertices, triangles, one
//! normal per triangle) plus an optional [`MeshGrid`] that accelerates ray
//! queries. Transforms mutate the mesh in place and drop the grid, since its
//! triangle-to-cell assignment no longer matches the geometry.

use glint_math::{Aabb, Mat3, Vec3};
use thiserror::Error;

use crate::grid::{MeshGrid, DEFAULT_GRID_BIAS};

/// Three vertex indices forming one triangle.
pub type Triangle = [usize; 3];

/// Errors raised when mesh data does not form a valid mesh.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    #[error("Triangle {triangle} references vertex {index}, but the mesh has {vertex_count} vertices")]
    VertexOutOfRange {
        triangle: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("Expected one normal per triangle ({expected}), got {actual}")]
    NormalCountMismatch { expected: usize, actual: usize },
}

/// Result type for mesh construction.
pub type MeshResult<T> = Result<T, MeshError>;

/// Rotation applying `x` radians about X, then `y` about Y, then `z` about Z.
pub fn euler_rotation(x: f32, y: f32, z: f32) -> Mat3 {
    Mat3::from_rotation_z(z) * Mat3::from_rotation_y(y) * Mat3::from_rotation_x(x)
}

/// Rotate a single vector the same way [`Mesh::rotate`] rotates vertices.
pub fn rotate_vector(v: Vec3, x: f32, y: f32, z: f32) -> Vec3 {
    euler_rotation(x, y, z) * v
}

/// A triangle mesh with per-triangle normals.
#[derive(Clone, Debug)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    triangles: Vec<Triangle>,
    normals: Vec<Vec3>,
    /// Accumulated translation, used by animations that orbit a mesh
    center: Vec3,
    grid: Option<MeshGrid>,
}

impl Mesh {
    /// Create a mesh, checking that every index addresses a vertex and that
    /// there is exactly one normal per triangle.
    pub fn new(vertices: Vec<Vec3>, triangles: Vec<Triangle>, normals: Vec<Vec3>) -> MeshResult<Self> {
        if normals.len() != triangles.len() {
            return Err(MeshError::NormalCountMismatch {
                expected: triangles.len(),
                actual: normals.len(),
            });
        }

        for (triangle, indices) in triangles.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i >= vertices.len()) {
                return Err(MeshError::VertexOutOfRange {
                    triangle,
                    index,
                    vertex_count: vertices.len(),
                });
            }
        }

        Ok(Self::from_parts(vertices, triangles, normals))
    }

    /// Assemble a mesh from data that is valid by construction.
    pub(crate) fn from_parts(vertices: Vec<Vec3>, triangles: Vec<Triangle>, normals: Vec<Vec3>) -> Self {
        Self {
            vertices,
            triangles,
            normals,
            center: Vec3::ZERO,
            grid: None,
        }
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Get the accumulated translation applied through [`Mesh::translate`].
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Compute the axis-aligned bounding box of the vertices.
    pub fn bounds(&self) -> Aabb {
        Aabb::enclosing(&self.vertices)
    }

    /// The three corner positions of triangle `index`.
    #[inline]
    pub fn triangle_vertices(&self, index: usize) -> [Vec3; 3] {
        let [a, b, c] = self.triangles[index];
        [self.vertices[a], self.vertices[b], self.vertices[c]]
    }

    /// The spatial index, if one has been built since the last transform.
    pub fn grid(&self) -> Option<&MeshGrid> {
        self.grid.as_ref()
    }

    /// Build the spatial index with `slices³` cells.
    ///
    /// `slices == 0` removes the index; ray queries then scan every triangle.
    pub fn build_grid(&mut self, slices: usize) {
        self.build_grid_with_bias(slices, DEFAULT_GRID_BIAS);
    }

    /// Build the spatial index, padding each cell by `bias` when bucketing vertices.
    pub fn build_grid_with_bias(&mut self, slices: usize, bias: f32) {
        self.grid = MeshGrid::build(&self.vertices, &self.triangles, slices, bias);
    }

    /// Drop the spatial index. Every transform calls this.
    pub fn invalidate(&mut self) {
        if self.grid.take().is_some() {
            log::debug!("Mesh grid invalidated ({} triangles)", self.triangles.len());
        }
    }

    /// Move every vertex by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        self.center += offset;

        for v in &mut self.vertices {
            *v += offset;
        }

        self.invalidate();
    }

    /// Rotate about X, then Y, then Z (radians). Normals rotate along.
    pub fn rotate(&mut self, x: f32, y: f32, z: f32) {
        let rotation = euler_rotation(x, y, z);

        for v in &mut self.vertices {
            *v = rotation * *v;
        }
        for n in &mut self.normals {
            *n = (rotation * *n).normalize_or_zero();
        }

        self.invalidate();
    }

    /// Scale each axis independently.
    ///
    /// Normals follow the inverse-transpose of the scale so they stay
    /// perpendicular to their triangles.
    pub fn scale(&mut self, factors: Vec3) {
        for v in &mut self.vertices {
            *v *= factors;
        }

        // Cofactor of diag(sx, sy, sz), signed so mirrored meshes keep outward normals
        let cofactor = Vec3::new(
            factors.y * factors.z,
            factors.x * factors.z,
            factors.x * factors.y,
        ) * (factors.x * factors.y * factors.z).signum();
        for n in &mut self.normals {
            *n = (*n * cofactor).normalize_or_zero();
        }

        self.invalidate();
    }

    /// Divide each axis by the largest vertex coordinate on that axis, so the
    /// mesh reaches 1.0 on every axis.
    ///
    /// Axes whose largest coordinate is zero are left alone.
    pub fn normalize(&mut self) {
        if self.vertices.is_empty() {
            return;
        }

        let max = self
            .vertices
            .iter()
            .fold(Vec3::splat(f32::NEG_INFINITY), |acc, v| acc.max(*v));
        let factor = |m: f32| if m.abs() > f32::EPSILON { 1.0 / m } else { 1.0 };

        self.scale(Vec3::new(factor(max.x), factor(max.y), factor(max.z)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn quad() -> Mesh {
        let vertices = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(2.0, 4.0, 0.0),
            Vec3::new(0.0, 4.0, 0.0),
        ];
        let triangles = vec![[0, 1, 2], [0, 2, 3]];
        let normals = vec![Vec3::Z, Vec3::Z];
        Mesh::new(vertices, triangles, normals).unwrap()
    }

    #[test]
    fn test_mesh_creation() {
        let mesh = quad();

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.grid().is_none());
        assert_eq!(mesh.triangle_vertices(1)[2], Vec3::new(0.0, 4.0, 0.0));
    }

    #[test]
    fn test_rejects_out_of_range_index() {
        let err = Mesh::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![[0, 1, 3]], vec![Vec3::Z]).unwrap_err();

        assert_eq!(
            err,
            MeshError::VertexOutOfRange {
                triangle: 0,
                index: 3,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn test_rejects_normal_count_mismatch() {
        let err = Mesh::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![[0, 1, 2]], vec![]).unwrap_err();

        assert_eq!(err, MeshError::NormalCountMismatch { expected: 1, actual: 0 });
    }

    #[test]
    fn test_transforms_invalidate_grid() {
        let mut mesh = quad();

        mesh.build_grid(2);
        assert!(mesh.grid().is_some());
        mesh.translate(Vec3::X);
        assert!(mesh.grid().is_none());

        mesh.build_grid(2);
        mesh.rotate(0.1, 0.2, 0.3);
        assert!(mesh.grid().is_none());

        mesh.build_grid(2);
        mesh.scale(Vec3::splat(2.0));
        assert!(mesh.grid().is_none());

        mesh.build_grid(2);
        mesh.normalize();
        assert!(mesh.grid().is_none());
    }

    #[test]
    fn test_zero_slices_disables_grid() {
        let mut mesh = quad();

        mesh.build_grid(3);
        mesh.build_grid(0);
        assert!(mesh.grid().is_none());
    }

    #[test]
    fn test_translate_tracks_center() {
        let mut mesh = quad();

        mesh.translate(Vec3::new(1.0, 2.0, 3.0));
        mesh.translate(Vec3::new(1.0, 0.0, 0.0));

        assert_eq!(mesh.center(), Vec3::new(2.0, 2.0, 3.0));
        assert_eq!(mesh.vertices()[0], Vec3::new(2.0, 2.0, 3.0));
    }

    #[test]
    fn test_rotate_applies_x_then_y() {
        let mut mesh = quad();

        // +Y rotated a quarter turn about X lands on +Z, then about Y on +X
        mesh.rotate(FRAC_PI_2, FRAC_PI_2, 0.0);
        let v = mesh.vertices()[3];

        assert!((v - Vec3::new(4.0, 0.0, 0.0)).length() < 1e-5);
        assert!((mesh.normals()[0].length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_rotate_vector_matches_mesh_rotation() {
        let v = rotate_vector(Vec3::new(0.0, 0.0, 3.5), 0.0, FRAC_PI_2, 0.0);
        assert!((v - Vec3::new(3.5, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_scale_keeps_normals_perpendicular() {
        let vertices = vec![Vec3::ZERO, Vec3::X, Vec3::Y];
        let normal = (Vec3::X - Vec3::ZERO).cross(Vec3::Y - Vec3::ZERO).normalize();
        let mut mesh = Mesh::new(vertices, vec![[0, 1, 2]], vec![normal]).unwrap();

        mesh.rotate(0.3, 0.5, 0.0);
        mesh.scale(Vec3::new(3.0, 1.0, 0.5));

        let [a, b, c] = mesh.triangle_vertices(0);
        let n = mesh.normals()[0];
        assert!(n.dot(b - a).abs() < 1e-4);
        assert!(n.dot(c - a).abs() < 1e-4);

        let expected = (b - a).cross(c - a).normalize();
        assert!(n.dot(expected) > 0.999);
    }

    #[test]
    fn test_normalize_divides_by_axis_max() {
        let mut mesh = quad();

        mesh.normalize();

        assert_eq!(mesh.vertices()[2], Vec3::new(1.0, 1.0, 0.0));
        // The z axis is flat at zero and stays untouched
        assert_eq!(mesh.normals()[0], Vec3::Z);
    }
}
