//! Surface shaders turn light geometry into brightness and brightness into color.

use glint_math::{Intersection, Vec3};

use crate::{Color, Light};

/// Trait for shaders that convert incident light into surface brightness.
pub trait SurfaceShader: Send + Sync {
    /// Brightness the light contributes at `hit`.
    ///
    /// `incident` is the light's travel direction at the hit point. Returns
    /// `None` when the light does not reach the lit side of the surface.
    fn brightness(&self, light: Light, hit: &Intersection, incident: Vec3) -> Option<f32>;

    /// Apply a brightness to a material color.
    fn shade(&self, color: Color, brightness: f32) -> Color;
}

/// Lambert cosine shading.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiffuseShader;

impl SurfaceShader for DiffuseShader {
    fn brightness(&self, light: Light, hit: &Intersection, incident: Vec3) -> Option<f32> {
        let dot = -incident.dot(hit.normal);
        if dot <= 0.0 {
            return None;
        }

        Some(dot / (incident.length() * hit.normal.length()) * light.brightness)
    }

    fn shade(&self, color: Color, brightness: f32) -> Color {
        color.scale(brightness)
    }
}
