//! Wavefront OBJ loading.

use std::path::Path;

use anyhow::{Context, Result};
use glint_core::{Mesh, Triangle};
use glint_math::Vec3;

/// Load every model in an OBJ file into a single mesh.
///
/// Triangle normals follow the face winding. When the file carries vertex
/// normals, a face normal pointing against their average is flipped.
pub fn load_obj(path: impl AsRef<Path>) -> Result<Mesh> {
    let path = path.as_ref();
    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            single_index: true,
            triangulate: true,
            ..Default::default()
        },
    )
    .with_context(|| format!("Failed to load OBJ {}", path.display()))?;

    if models.is_empty() {
        anyhow::bail!("No models found in OBJ file");
    }

    let mut vertices = Vec::new();
    let mut vertex_normals = Vec::new();
    let mut triangles: Vec<Triangle> = Vec::new();

    for model in &models {
        let mesh = &model.mesh;
        let offset = vertices.len();
        let count = mesh.positions.len() / 3;

        vertices.extend(mesh.positions.chunks_exact(3).map(Vec3::from_slice));
        if mesh.normals.len() == mesh.positions.len() {
            vertex_normals.extend(mesh.normals.chunks_exact(3).map(Vec3::from_slice));
        } else {
            vertex_normals.extend(std::iter::repeat(Vec3::ZERO).take(count));
        }
        triangles.extend(
            mesh.indices
                .chunks_exact(3)
                .map(|face| [face[0] as usize + offset, face[1] as usize + offset, face[2] as usize + offset]),
        );

        log::debug!("OBJ model '{}': {} vertices, {} faces", model.name, count, mesh.indices.len() / 3);
    }

    if triangles.is_empty() {
        anyhow::bail!("OBJ file {} contains no faces", path.display());
    }
    if let Some(index) = triangles.iter().flatten().find(|&&i| i >= vertices.len()) {
        anyhow::bail!("OBJ face references vertex {index} of {}", vertices.len());
    }

    let normals = triangles
        .iter()
        .map(|&[a, b, c]| {
            let face = (vertices[b] - vertices[a]).cross(vertices[c] - vertices[a]).normalize_or_zero();
            let shading = vertex_normals[a] + vertex_normals[b] + vertex_normals[c];
            if face.dot(shading) < 0.0 {
                -face
            } else {
                face
            }
        })
        .collect();

    let mesh = Mesh::new(vertices, triangles, normals)?;
    log::info!(
        "Loaded {}: {} vertices, {} triangles",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}
