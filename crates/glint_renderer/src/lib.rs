//! Glint Renderer - recursive CPU ray tracing.
//!
//! Casts one ray per pixel from a [`RectCamera`], finds the nearest scene
//! object, lights it from the scene's light sources (with shadows) and lets
//! its material recurse into reflections and refractions up to a depth cap.
//! Pixels are traced row-parallel with rayon and written as packed ARGB.

mod camera;
mod color;
mod light;
mod material;
mod mesh_object;
mod object;
mod plane;
mod renderer;
mod scene;
mod shader;
mod sphere;

pub use camera::{RayFactory, RectCamera};
pub use color::Color;
pub use light::{DirectionalLight, LightSource, ShadowRay, SphericalLight};
pub use material::{
    reflect, BaseMaterial, DiffuseSolidMaterial, DiffuseSolidReflectiveMaterial, Light, Material, OpaqueMaterial,
    ReflectiveBase, RefractiveBase, SolidBase, TraceContext, Tracer,
};
pub use mesh_object::MeshObject;
pub use object::SceneObject;
pub use plane::PlaneObject;
pub use renderer::{render, CancelToken, RenderConfig, RenderOutcome};
pub use scene::Scene;
pub use shader::{DiffuseShader, SurfaceShader};
pub use sphere::SphereObject;

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Intersection, Ray, Vec3};
