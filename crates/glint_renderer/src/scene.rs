//! Scene container and the recursive trace.

use glint_math::{Intersection, Ray};

use crate::material::{Light, TraceContext, Tracer};
use crate::{Color, LightSource, RenderConfig, SceneObject};

/// Objects, lights and render settings for one scene.
///
/// Objects and lights keep their insertion order; on equal hit distances the
/// object added first wins.
pub struct Scene {
    objects: Vec<Box<dyn SceneObject>>,
    lights: Vec<Box<dyn LightSource>>,
    config: RenderConfig,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(config: RenderConfig) -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
            config,
        }
    }

    /// Add an object, returning its index.
    pub fn add_object(&mut self, object: impl SceneObject + 'static) -> usize {
        self.objects.push(Box::new(object));
        self.objects.len() - 1
    }

    pub fn add_light(&mut self, light: impl LightSource + 'static) {
        self.lights.push(Box::new(light));
    }

    pub fn objects(&self) -> &[Box<dyn SceneObject>] {
        &self.objects
    }

    pub fn lights(&self) -> &[Box<dyn LightSource>] {
        &self.lights
    }

    pub fn object_mut(&mut self, index: usize) -> Option<&mut Box<dyn SceneObject>> {
        self.objects.get_mut(index)
    }

    /// Swap the object at `index` for another, returning the old one.
    ///
    /// Returns `None` and leaves the scene untouched when `index` is out of range.
    pub fn replace_object(
        &mut self,
        index: usize,
        object: impl SceneObject + 'static,
    ) -> Option<Box<dyn SceneObject>> {
        let slot = self.objects.get_mut(index)?;
        Some(std::mem::replace(slot, Box::new(object)))
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
    }

    /// Nearest object the ray hits, with the hit.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<(&dyn SceneObject, Intersection)> {
        let mut nearest: Option<(&dyn SceneObject, Intersection)> = None;

        for object in &self.objects {
            let Some(hit) = object.intersect(ray) else {
                continue;
            };

            if nearest.map_or(true, |(_, best)| hit.distance < best.distance) {
                nearest = Some((object.as_ref(), hit));
            }
        }

        nearest
    }

    /// Color seen along `ray` at recursion level `depth`.
    pub fn trace(&self, ray: &Ray, depth: u32) -> Color {
        if depth >= self.config.max_depth {
            return self.config.background;
        }

        let Some((object, hit)) = self.nearest_hit(ray) else {
            return self.config.background;
        };

        let material = object.material();
        let front_facing = -ray.direction().dot(hit.normal) > 0.0;
        let color = material.color(&TraceContext {
            ray: *ray,
            hit,
            front_facing,
            depth,
            tracer: self,
        });

        if front_facing {
            let brightness = self.brightness_at(object, &hit);
            material.shader().shade(color, brightness.max(self.config.ambient))
        } else {
            color
        }
    }

    /// Brightness of the strongest light reaching the lit side of `hit`,
    /// never below the ambient level.
    ///
    /// Only lights on the normal's side of the surface count. Every object
    /// crossing a light's shadow ray attenuates that light, until it falls to
    /// the ambient level.
    fn brightness_at(&self, object: &dyn SceneObject, hit: &Intersection) -> f32 {
        let ambient = self.config.ambient;
        let shader = object.material().shader();
        let mut best = ambient;

        for source in &self.lights {
            let shadow = source.shadow_ray(hit.point);
            // Lights behind the surface never contribute
            if -shadow.incident.dot(hit.normal) <= 0.0 {
                continue;
            }

            let mut light = Light::new(source.brightness());

            for occluder in &self.objects {
                if light.brightness > ambient && occluder.intersect(&shadow.ray).is_some() {
                    light = occluder.material().attenuate(light);
                }
            }

            if let Some(brightness) = shader.brightness(light, hit, shadow.incident) {
                best = best.max(brightness);
            }
        }

        best
    }
}

impl Tracer for Scene {
    fn trace(&self, ray: &Ray, depth: u32) -> Color {
        Scene::trace(self, ray, depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        DiffuseSolidMaterial, DiffuseSolidReflectiveMaterial, DirectionalLight, Material, OpaqueMaterial, PlaneObject,
        SphereObject, SphericalLight, SurfaceShader,
    };
    use glint_math::Vec3;

    /// Shader that reports full light regardless of its direction.
    struct FloodShader;

    impl SurfaceShader for FloodShader {
        fn brightness(&self, light: Light, _hit: &Intersection, _incident: Vec3) -> Option<f32> {
            Some(light.brightness)
        }

        fn shade(&self, color: Color, brightness: f32) -> Color {
            color.scale(brightness)
        }
    }

    struct FloodMaterial;

    impl Material for FloodMaterial {
        fn color(&self, _ctx: &TraceContext) -> Color {
            Color::WHITE
        }

        fn attenuate(&self, _light: Light) -> Light {
            Light::DARK
        }

        fn shader(&self) -> &dyn SurfaceShader {
            &FloodShader
        }
    }

    const BACKGROUND: Color = Color::new(0, 0, 64);

    fn config() -> RenderConfig {
        RenderConfig::default().with_background(BACKGROUND).with_ambient(0.2)
    }

    fn lit_sphere() -> Scene {
        let mut scene = Scene::new(config());
        scene.add_object(SphereObject::new(Vec3::new(0.0, 0.0, 5.0), 1.0, DiffuseSolidMaterial::new(Color::WHITE)));
        scene.add_light(DirectionalLight::new(Vec3::Z, 1.0));
        scene
    }

    #[test]
    fn test_miss_returns_background() {
        let scene = lit_sphere();
        assert_eq!(scene.trace(&Ray::new(Vec3::ZERO, -Vec3::Z), 0), BACKGROUND);
    }

    #[test]
    fn test_depth_cap_returns_background() {
        let scene = lit_sphere();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let max_depth = scene.config().max_depth;

        assert_eq!(scene.trace(&ray, max_depth), BACKGROUND);
        assert_eq!(scene.trace(&ray, max_depth + 3), BACKGROUND);
        assert_ne!(scene.trace(&ray, max_depth - 1), BACKGROUND);
    }

    #[test]
    fn test_head_on_light_gives_full_color() {
        let scene = lit_sphere();
        assert_eq!(scene.trace(&Ray::new(Vec3::ZERO, Vec3::Z), 0), Color::WHITE);
    }

    #[test]
    fn test_unlit_side_gets_ambient() {
        let mut scene = Scene::new(config());
        scene.add_object(SphereObject::new(Vec3::new(0.0, 0.0, 5.0), 1.0, DiffuseSolidMaterial::new(Color::WHITE)));
        // Light travels toward the camera, so the visible side faces away from it
        scene.add_light(DirectionalLight::new(-Vec3::Z, 1.0));

        assert_eq!(scene.trace(&Ray::new(Vec3::ZERO, Vec3::Z), 0), Color::WHITE.scale(0.2));
    }

    #[test]
    fn test_light_behind_surface_ignored_by_any_shader() {
        let mut scene = Scene::new(config());
        scene.add_object(PlaneObject::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z, FloodMaterial));
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        scene.add_light(DirectionalLight::new(-Vec3::Z, 1.0));
        assert_eq!(scene.trace(&ray, 0), Color::WHITE.scale(0.2));

        scene.add_light(DirectionalLight::new(Vec3::Z, 0.6));
        assert_eq!(scene.trace(&ray, 0), Color::WHITE.scale(0.6));
    }

    #[test]
    fn test_object_beyond_target_does_not_shadow() {
        let mut scene = Scene::new(config());
        scene.add_object(PlaneObject::new(Vec3::ZERO, Vec3::Y, DiffuseSolidMaterial::new(Color::WHITE)));
        // Below the floor, so farther from the light than the lit point
        scene.add_object(SphereObject::new(Vec3::new(0.0, -5.0, 0.0), 1.0, DiffuseSolidMaterial::new(Color::RED)));
        scene.add_light(SphericalLight::new(Vec3::new(0.0, 10.0, 0.0), 1.0));

        let ray = Ray::new(Vec3::new(0.0, 5.0, -5.0), Vec3::new(0.0, -5.0, 5.0));
        assert_eq!(scene.trace(&ray, 0), Color::WHITE);
    }

    #[test]
    fn test_occluder_casts_shadow() {
        let mut scene = Scene::new(config());
        let floor = PlaneObject::new(Vec3::ZERO, Vec3::Y, DiffuseSolidMaterial::new(Color::WHITE));
        scene.add_object(floor);
        scene.add_light(SphericalLight::new(Vec3::new(0.0, 10.0, 0.0), 1.0));

        let ray = Ray::new(Vec3::new(0.0, 5.0, -5.0), Vec3::new(0.0, -5.0, 5.0));
        let lit = scene.trace(&ray, 0);

        scene.add_object(SphereObject::new(Vec3::new(0.0, 5.0, 0.0), 1.0, DiffuseSolidMaterial::new(Color::RED)));
        let shadowed = scene.trace(&ray, 0);

        assert_eq!(lit, Color::WHITE);
        assert_eq!(shadowed, Color::WHITE.scale(0.2));
    }

    #[test]
    fn test_translucent_occluder_attenuates() {
        let mut scene = Scene::new(config());
        scene.add_object(PlaneObject::new(Vec3::ZERO, Vec3::Y, DiffuseSolidMaterial::new(Color::WHITE)));
        scene.add_object(SphereObject::new(
            Vec3::new(0.0, 5.0, 0.0),
            1.0,
            OpaqueMaterial::new(1.0, Color::RED, 0.5),
        ));
        scene.add_light(SphericalLight::new(Vec3::new(0.0, 10.0, 0.0), 1.0));

        let ray = Ray::new(Vec3::new(0.0, 5.0, -5.0), Vec3::new(0.0, -5.0, 5.0));
        assert_eq!(scene.trace(&ray, 0), Color::WHITE.scale(0.5));
    }

    #[test]
    fn test_nearest_hit_prefers_first_on_ties() {
        let mut scene = Scene::new(config());
        scene.add_object(SphereObject::new(Vec3::new(0.0, 0.0, 5.0), 1.0, DiffuseSolidMaterial::new(Color::RED)));
        scene.add_object(SphereObject::new(Vec3::new(0.0, 0.0, 5.0), 1.0, DiffuseSolidMaterial::new(Color::BLUE)));
        scene.add_light(DirectionalLight::new(Vec3::Z, 1.0));

        assert_eq!(scene.trace(&Ray::new(Vec3::ZERO, Vec3::Z), 0), Color::RED);
    }

    #[test]
    fn test_back_face_is_unshaded() {
        let mut scene = Scene::new(config());
        scene.add_object(SphereObject::new(Vec3::ZERO, 2.0, DiffuseSolidMaterial::new(Color::new(100, 100, 100))));

        // From inside, the outward normal faces along the ray
        assert_eq!(scene.trace(&Ray::new(Vec3::ZERO, Vec3::X), 0), Color::new(100, 100, 100));
    }

    #[test]
    fn test_mirror_between_mirrors_stops_at_depth_cap() {
        let mut scene = Scene::new(config().with_max_depth(6));
        let mirror = || DiffuseSolidReflectiveMaterial::new(Color::WHITE);
        scene.add_object(PlaneObject::new(Vec3::new(0.0, 0.0, 1.0), -Vec3::Z, mirror()));
        scene.add_object(PlaneObject::new(Vec3::new(0.0, 0.0, -1.0), Vec3::Z, mirror()));

        // Terminates and produces a finite color
        let color = scene.trace(&Ray::new(Vec3::ZERO, Vec3::Z), 0);
        assert_ne!(color, Color::WHITE);
    }

    #[test]
    fn test_replace_object() {
        let mut scene = lit_sphere();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let old = scene.replace_object(0, SphereObject::new(Vec3::new(0.0, 9.0, 5.0), 1.0, DiffuseSolidMaterial::new(Color::RED)));
        assert!(old.is_some());
        assert_eq!(scene.trace(&ray, 0), BACKGROUND);

        assert!(scene
            .replace_object(7, SphereObject::new(Vec3::ZERO, 1.0, DiffuseSolidMaterial::new(Color::RED)))
            .is_none());
        assert_eq!(scene.objects().len(), 1);

        scene.object_mut(0).unwrap().translate(Vec3::new(0.0, -9.0, 0.0));
        assert_ne!(scene.trace(&ray, 0), BACKGROUND);
    }
}
