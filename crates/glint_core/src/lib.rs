//! Glint Core - mesh geometry and spatial indexing.
//!
//! This crate provides:
//!
//! - **Meshes**: `Mesh` with per-triangle normals and in-place transforms
//! - **Spatial index**: `MeshGrid`, a uniform grid narrowing ray queries
//! - **Procedural geometry**: `icosphere`, `cube`
//!
//! # Example
//!
//! ```ignore
//! use glint_core::procedural::icosphere;
//!
//! let mut sphere = icosphere(1.0, 3);
//! sphere.translate(Vec3::new(0.0, 0.0, 3.5));
//! sphere.build_grid(4);
//! ```

pub mod grid;
pub mod mesh;
pub mod procedural;

// Re-export commonly used types
pub use grid::{MeshGrid, DEFAULT_GRID_BIAS};
pub use mesh::{rotate_vector, Mesh, MeshError, MeshResult, Triangle};
pub use procedural::{cube, icosphere};
