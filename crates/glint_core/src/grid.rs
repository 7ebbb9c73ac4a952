//! Uniform grid over a mesh's bounding box.
//!
//! The box is split into `slices` intervals per axis. Every triangle with a
//! vertex inside a cell (grown by a bias margin) is listed in that cell, so a
//! triangle can sit in several cells. A ray query returns the triangles of the
//! single pierced cell whose center lies nearest the ray origin. That cell is
//! not necessarily the one the ray enters first, so a triangle in a farther
//! cell can be missed; renderers accept this trade for speed.

use glint_math::{intersect_plane, Aabb, Interval, Plane, Ray, Vec3};
use rayon::prelude::*;

use crate::mesh::Triangle;

/// Padding applied to cell bounds when bucketing vertices.
pub const DEFAULT_GRID_BIAS: f32 = 0.5;

#[derive(Clone, Debug)]
struct GridCell {
    /// Cell bounds, exact (no bias)
    bounds: Aabb,
    center: Vec3,
    triangles: Vec<usize>,
}

impl GridCell {
    /// Returns true if the ray crosses one of the six bounding faces within
    /// the face's extent.
    fn is_pierced_by(&self, ray: &Ray) -> bool {
        (0..3).any(|axis| {
            let span = self.bounds.axis_interval(axis);
            [span.min, span.max].into_iter().any(|offset| {
                intersect_plane(ray, &Plane::axis_aligned(axis, offset)).is_some_and(|p| {
                    (0..3)
                        .filter(|&other| other != axis)
                        .all(|other| self.bounds.axis_interval(other).contains(p[other]))
                })
            })
        })
    }
}

/// Spatial index over a mesh's triangles.
#[derive(Clone, Debug)]
pub struct MeshGrid {
    slices: usize,
    bias: f32,
    /// Cells ordered by x index, then y, then z
    cells: Vec<GridCell>,
}

impl MeshGrid {
    /// Bucket `triangles` into `slices³` cells spanning the vertex bounds.
    ///
    /// Returns `None` when `slices` is zero or there are no vertices; callers
    /// fall back to testing every triangle.
    pub fn build(vertices: &[Vec3], triangles: &[Triangle], slices: usize, bias: f32) -> Option<Self> {
        let bounds = Aabb::enclosing(vertices);
        if slices == 0 || bounds.is_empty() {
            return None;
        }

        let planes: [Vec<f32>; 3] = [0, 1, 2].map(|axis| {
            let span = bounds.axis_interval(axis);
            (0..=slices)
                .map(|i| {
                    if i == slices {
                        span.max
                    } else {
                        span.lerp(i as f32 / slices as f32)
                    }
                })
                .collect()
        });

        let cells: Vec<GridCell> = (0..slices * slices * slices)
            .into_par_iter()
            .map(|index| {
                let ix = index / (slices * slices);
                let iy = (index / slices) % slices;
                let iz = index % slices;

                let bounds = Aabb {
                    x: Interval::new(planes[0][ix], planes[0][ix + 1]),
                    y: Interval::new(planes[1][iy], planes[1][iy + 1]),
                    z: Interval::new(planes[2][iz], planes[2][iz + 1]),
                };

                let triangles = triangles
                    .iter()
                    .enumerate()
                    .filter(|(_, tri)| tri.iter().any(|&v| bounds.contains_padded(vertices[v], bias)))
                    .map(|(i, _)| i)
                    .collect();

                GridCell {
                    bounds,
                    center: bounds.centroid(),
                    triangles,
                }
            })
            .collect();

        let occupied = cells.iter().filter(|c| !c.triangles.is_empty()).count();
        let references: usize = cells.iter().map(|c| c.triangles.len()).sum();
        log::debug!(
            "Built mesh grid: {} cells ({} occupied), {} triangle references for {} triangles",
            cells.len(),
            occupied,
            references,
            triangles.len()
        );

        Some(Self { slices, bias, cells })
    }

    /// Number of slices per axis.
    pub fn slices(&self) -> usize {
        self.slices
    }

    pub fn bias(&self) -> f32 {
        self.bias
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Triangle lists of every cell, in cell order.
    pub fn cell_triangles(&self) -> impl Iterator<Item = &[usize]> {
        self.cells.iter().map(|c| c.triangles.as_slice())
    }

    /// Candidate triangles for `ray`.
    ///
    /// Among the cells the ray pierces, picks the one whose center is closest
    /// to the ray origin. Returns `None` when the ray pierces no cell.
    pub fn query(&self, ray: &Ray) -> Option<&[usize]> {
        let mut nearest: Option<(f32, &GridCell)> = None;

        for cell in &self.cells {
            if !cell.is_pierced_by(ray) {
                continue;
            }

            let distance = cell.center.distance(ray.origin());
            if nearest.map_or(true, |(best, _)| distance < best) {
                nearest = Some((distance, cell));
            }
        }

        nearest.map(|(_, cell)| cell.triangles.as_slice())
    }
}
