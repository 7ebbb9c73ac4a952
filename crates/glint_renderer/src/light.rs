//! Light sources and the shadow rays used to test them for occlusion.

use glint_math::{Ray, Vec3};

/// Occlusion query for one light and one surface point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShadowRay {
    /// Objects this ray hits stand between the light and the target
    pub ray: Ray,
    /// Direction the light travels when it arrives at the target
    pub incident: Vec3,
}

/// Trait for lights illuminating a scene.
pub trait LightSource: Send + Sync {
    fn brightness(&self) -> f32;

    /// Shadow ray connecting this light with `target`.
    fn shadow_ray(&self, target: Vec3) -> ShadowRay;
}

/// Light arriving from infinitely far away along a fixed direction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DirectionalLight {
    direction: Vec3,
    brightness: f32,
}

impl DirectionalLight {
    /// Create a light travelling along `direction`.
    pub fn new(direction: Vec3, brightness: f32) -> Self {
        Self {
            direction: direction.normalize_or_zero(),
            brightness,
        }
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }
}

impl LightSource for DirectionalLight {
    fn brightness(&self) -> f32 {
        self.brightness
    }

    /// The occlusion ray leaves the target toward the light and never ends.
    fn shadow_ray(&self, target: Vec3) -> ShadowRay {
        ShadowRay {
            ray: Ray::new(target, -self.direction),
            incident: self.direction,
        }
    }
}

/// Point light radiating from a center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SphericalLight {
    center: Vec3,
    brightness: f32,
}

impl SphericalLight {
    pub fn new(center: Vec3, brightness: f32) -> Self {
        Self { center, brightness }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Move the light to `center`.
    pub fn with_center(mut self, center: Vec3) -> Self {
        self.center = center;
        self
    }
}

impl LightSource for SphericalLight {
    fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Runs from the center to the target and stops there, so objects
    /// behind the target cast no shadow on it.
    fn shadow_ray(&self, target: Vec3) -> ShadowRay {
        let offset = target - self.center;
        let ray = Ray::bounded(self.center, offset, offset.length());

        ShadowRay {
            ray,
            incident: ray.direction(),
        }
    }
}
