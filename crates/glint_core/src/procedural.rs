//! Procedurally generated meshes.

use std::collections::HashMap;

use glint_math::Vec3;

use crate::mesh::{Mesh, Triangle};

/// Generate a sphere centered on the origin by subdividing an icosahedron.
///
/// Each subdivision level splits every face into four, so the mesh has
/// `20 * 4^subdivisions` triangles. Vertices sit on the sphere and triangle
/// normals face outward.
pub fn icosphere(radius: f32, subdivisions: u32) -> Mesh {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;

    let mut vertices: Vec<Vec3> = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
    .iter()
    .map(|v| v.normalize() * radius)
    .collect();

    let mut faces: Vec<Triangle> = vec![
        // around vertex 0
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        // upper belt
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        // around vertex 3
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        // lower belt
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    let mut midpoints: HashMap<(usize, usize), usize> = HashMap::new();
    for _ in 0..subdivisions {
        let mut refined = Vec::with_capacity(faces.len() * 4);

        for [v1, v2, v3] in faces {
            let a = midpoint(v1, v2, &mut vertices, &mut midpoints, radius);
            let b = midpoint(v2, v3, &mut vertices, &mut midpoints, radius);
            let c = midpoint(v3, v1, &mut vertices, &mut midpoints, radius);

            refined.push([v1, a, c]);
            refined.push([v2, b, a]);
            refined.push([v3, c, b]);
            refined.push([a, b, c]);
        }

        faces = refined;
    }

    let normals = faces
        .iter()
        .map(|&[a, b, c]| {
            let (v1, v2, v3) = (vertices[a], vertices[b], vertices[c]);
            (v2 - v1).cross(v3 - v1).normalize_or_zero()
        })
        .collect();

    log::debug!(
        "Generated icosphere: radius {}, {} subdivisions, {} vertices, {} triangles",
        radius,
        subdivisions,
        vertices.len(),
        faces.len()
    );

    Mesh::from_parts(vertices, faces, normals)
}

/// Generate an axis-aligned cube centered on the origin, two triangles per face.
pub fn cube(half_extent: f32) -> Mesh {
    let h = half_extent;
    let vertices: Vec<Vec3> = (0..8)
        .map(|i| {
            Vec3::new(
                if i & 1 == 0 { -h } else { h },
                if i & 2 == 0 { -h } else { h },
                if i & 4 == 0 { -h } else { h },
            )
        })
        .collect();

    // Corner indices per face, counter-clockwise seen from outside
    let quads: [([usize; 4], Vec3); 6] = [
        ([0, 4, 6, 2], -Vec3::X),
        ([1, 3, 7, 5], Vec3::X),
        ([0, 1, 5, 4], -Vec3::Y),
        ([2, 6, 7, 3], Vec3::Y),
        ([0, 2, 3, 1], -Vec3::Z),
        ([4, 5, 7, 6], Vec3::Z),
    ];

    let mut triangles = Vec::with_capacity(12);
    let mut normals = Vec::with_capacity(12);
    for ([a, b, c, d], normal) in quads {
        triangles.push([a, b, c]);
        triangles.push([a, c, d]);
        normals.push(normal);
        normals.push(normal);
    }

    Mesh::from_parts(vertices, triangles, normals)
}

/// Index of the vertex halfway along edge (p1, p2), pushed onto the sphere.
///
/// Shared edges reuse the same vertex through the cache.
fn midpoint(
    p1: usize,
    p2: usize,
    vertices: &mut Vec<Vec3>,
    cache: &mut HashMap<(usize, usize), usize>,
    radius: f32,
) -> usize {
    let key = (p1.min(p2), p1.max(p2));
    *cache.entry(key).or_insert_with(|| {
        let middle = (vertices[p1] + vertices[p2]) / 2.0;
        vertices.push(middle.normalize() * radius);
        vertices.len() - 1
    })
}
