//! Materials decide the color a ray picks up at a surface and how much light
//! passes through that surface toward shadowed points.
//!
//! Composite materials are assembled from base behaviors ([`SolidBase`],
//! [`ReflectiveBase`], [`RefractiveBase`]). Recursive behaviors trace new rays
//! through the [`Tracer`] carried in the [`TraceContext`].

use glint_math::{Intersection, Ray, Vec3};

use crate::shader::{DiffuseShader, SurfaceShader};
use crate::Color;

/// Light intensity travelling toward a surface point.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Light {
    pub brightness: f32,
}

impl Light {
    pub const DARK: Light = Light::new(0.0);

    pub const fn new(brightness: f32) -> Self {
        Self { brightness }
    }
}

/// Anything that can resolve the color seen along a ray.
pub trait Tracer {
    fn trace(&self, ray: &Ray, depth: u32) -> Color;
}

/// Everything a material needs to color one hit.
#[derive(Clone, Copy)]
pub struct TraceContext<'a> {
    /// The ray that produced the hit
    pub ray: Ray,
    pub hit: Intersection,
    /// True when the ray arrived against the surface normal
    pub front_facing: bool,
    /// Recursion depth of `ray`
    pub depth: u32,
    pub tracer: &'a dyn Tracer,
}

impl TraceContext<'_> {
    /// Trace a secondary ray one level deeper than the current hit.
    pub fn trace(&self, ray: &Ray) -> Color {
        self.tracer.trace(ray, self.depth + 1)
    }
}

/// A single surface behavior that composite materials are built from.
pub trait BaseMaterial: Send + Sync {
    fn color(&self, ctx: &TraceContext) -> Color;

    /// Light left after passing this surface. Defaults to no change.
    fn attenuate(&self, light: Light) -> Light {
        light
    }
}

/// Fixed color; blocks light entirely.
#[derive(Debug, Clone, Copy)]
pub struct SolidBase {
    pub color: Color,
}

impl SolidBase {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl BaseMaterial for SolidBase {
    fn color(&self, _ctx: &TraceContext) -> Color {
        self.color
    }

    fn attenuate(&self, _light: Light) -> Light {
        Light::DARK
    }
}

/// Mirror reflection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReflectiveBase;

impl BaseMaterial for ReflectiveBase {
    fn color(&self, ctx: &TraceContext) -> Color {
        let direction = reflect(ctx.ray.direction(), ctx.hit.normal);
        ctx.trace(&Ray::new(ctx.hit.point, direction))
    }
}

/// See-through medium with a refraction index, tinted by a base color.
#[derive(Debug, Clone, Copy)]
pub struct RefractiveBase {
    /// Index of refraction (1.0 = air)
    pub index: f32,
    pub color: Color,
    /// 0.0 shows only what lies behind the surface, 1.0 only the base color
    pub opacity: f32,
}

impl RefractiveBase {
    pub fn new(index: f32, color: Color, opacity: f32) -> Self {
        Self { index, color, opacity }
    }
}

impl BaseMaterial for RefractiveBase {
    fn color(&self, ctx: &TraceContext) -> Color {
        let direction = ctx.ray.direction();
        let mut normal = ctx.hit.normal;
        let mut cos_i = direction.dot(normal).clamp(-1.0, 1.0);
        let (mut eta_i, mut eta_t) = (1.0, self.index);

        if cos_i < 0.0 {
            cos_i = -cos_i;
        } else {
            // Leaving the medium
            normal = -normal;
            std::mem::swap(&mut eta_i, &mut eta_t);
        }

        let eta = eta_i / eta_t;
        let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
        if k < 0.0 {
            // Total internal reflection
            return self.color;
        }

        let refracted = eta * direction + (eta * cos_i - k.sqrt()) * normal;
        ctx.trace(&Ray::new(ctx.hit.point, refracted))
            .mix(self.color, 1.0 - self.opacity)
    }

    fn attenuate(&self, light: Light) -> Light {
        Light::new(light.brightness * self.opacity)
    }
}

/// Mirror `direction` about `normal`: `d - 2(d·n)n`.
#[inline]
pub fn reflect(direction: Vec3, normal: Vec3) -> Vec3 {
    direction - 2.0 * direction.dot(normal) * normal
}

/// Trait for materials attached to scene objects.
pub trait Material: Send + Sync {
    /// Color seen along `ctx.ray` at `ctx.hit`, before shading.
    fn color(&self, ctx: &TraceContext) -> Color;

    /// Light left after passing through this material toward a shadowed point.
    fn attenuate(&self, light: Light) -> Light;

    fn shader(&self) -> &dyn SurfaceShader {
        &DiffuseShader
    }
}

/// Plain diffuse surface.
#[derive(Debug, Clone, Copy)]
pub struct DiffuseSolidMaterial {
    solid: SolidBase,
}

impl DiffuseSolidMaterial {
    pub fn new(color: Color) -> Self {
        Self {
            solid: SolidBase::new(color),
        }
    }
}

impl Material for DiffuseSolidMaterial {
    fn color(&self, ctx: &TraceContext) -> Color {
        self.solid.color(ctx)
    }

    fn attenuate(&self, light: Light) -> Light {
        self.solid.attenuate(light)
    }
}

/// Diffuse surface that also mirrors its surroundings, half and half.
#[derive(Debug, Clone, Copy)]
pub struct DiffuseSolidReflectiveMaterial {
    solid: SolidBase,
    reflective: ReflectiveBase,
}

impl DiffuseSolidReflectiveMaterial {
    pub fn new(color: Color) -> Self {
        Self {
            solid: SolidBase::new(color),
            reflective: ReflectiveBase,
        }
    }
}

impl Material for DiffuseSolidReflectiveMaterial {
    fn color(&self, ctx: &TraceContext) -> Color {
        let solid = self.solid.color(ctx);
        if !ctx.front_facing {
            return solid;
        }

        self.reflective.color(ctx).mix(solid, 0.5)
    }

    fn attenuate(&self, _light: Light) -> Light {
        Light::DARK
    }
}

/// Partially transparent, refracting material, optionally with a mirror component.
#[derive(Debug, Clone, Copy)]
pub struct OpaqueMaterial {
    refractive: RefractiveBase,
    reflective: ReflectiveBase,
    /// Share of the reflected color mixed in on front faces, if any
    reflectivity: Option<f32>,
}

impl OpaqueMaterial {
    /// Create a non-reflective material with the given refraction index,
    /// tint and opacity.
    pub fn new(index: f32, color: Color, opacity: f32) -> Self {
        Self {
            refractive: RefractiveBase::new(index, color, opacity),
            reflective: ReflectiveBase,
            reflectivity: None,
        }
    }

    /// Mix reflections into front faces by `reflectivity` (0..=1).
    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.reflectivity = Some(reflectivity);
        self
    }

    /// Mix reflections into front faces half and half.
    pub fn reflective(self) -> Self {
        self.with_reflectivity(0.5)
    }

    pub fn reflectivity(&self) -> Option<f32> {
        self.reflectivity
    }
}

impl Material for OpaqueMaterial {
    fn color(&self, ctx: &TraceContext) -> Color {
        let color = self.refractive.color(ctx);

        match self.reflectivity {
            Some(reflectivity) if ctx.front_facing => color.mix(self.reflective.color(ctx), reflectivity),
            _ => color,
        }
    }

    fn attenuate(&self, light: Light) -> Light {
        self.refractive.attenuate(light)
    }
}
