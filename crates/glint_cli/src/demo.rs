//! The animated demo: a tumbling main mesh and a sphere orbiting around it.

use std::f32::consts::PI;

use anyhow::{Context, Result};
use glint_core::{icosphere, rotate_vector, Mesh};
use glint_math::Vec3;
use glint_renderer::{Color, MeshObject, OpaqueMaterial, RectCamera, Scene, SphericalLight};

use crate::settings::RenderSettings;

const SPHERE_ORBIT: Vec3 = Vec3::new(0.0, 0.0, 3.5);
const ORBIT_STEP: f32 = -PI / 32.0;
const TUMBLE_STEP: f32 = -PI / 128.0;

pub struct DemoScene {
    pub scene: Scene,
    pub camera: RectCamera,
    mesh_index: usize,
    sphere_index: usize,
    sphere_center: Vec3,
    slices: usize,
}

impl DemoScene {
    pub fn new(mut main_mesh: Mesh, settings: &RenderSettings) -> Self {
        let mut scene = Scene::new(settings.render);

        main_mesh.normalize();
        main_mesh.rotate(PI / 4.0, PI / 4.0, 0.0);
        let mesh_index = scene.add_object(MeshObject::new(
            main_mesh,
            OpaqueMaterial::new(1.2, Color::RED, 0.8).reflective(),
        ));

        let mut sphere = icosphere(1.0, settings.sphere_subdivisions);
        sphere.normalize();
        sphere.translate(SPHERE_ORBIT);
        if settings.grid_slices > 0 {
            sphere.build_grid(settings.grid_slices);
        }
        let sphere_index = scene.add_object(MeshObject::new(
            sphere,
            OpaqueMaterial::new(1.2, Color::YELLOW, 0.8).reflective(),
        ));

        scene.add_light(SphericalLight::new(Vec3::new(5.0, -5.0, -5.0), 1.0));

        let camera = RectCamera::new(
            Vec3::new(-2.0, -1.0, -6.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(0.0, 2.25, 0.0),
            -4.0,
        );

        Self {
            scene,
            camera,
            mesh_index,
            sphere_index,
            sphere_center: SPHERE_ORBIT,
            slices: settings.grid_slices,
        }
    }

    pub fn sphere_center(&self) -> Vec3 {
        self.sphere_center
    }

    /// Step the animation by one frame.
    pub fn advance(&mut self) -> Result<()> {
        let previous = self.sphere_center;
        let center = rotate_vector(previous, 0.0, ORBIT_STEP, 0.0);
        let slices = self.slices;

        let sphere = mesh_at(&mut self.scene, self.sphere_index)?;
        sphere.translate(-previous);
        sphere.translate(center);
        if slices > 0 {
            sphere.build_grid(slices);
        }
        self.sphere_center = center;

        mesh_at(&mut self.scene, self.mesh_index)?.rotate(TUMBLE_STEP, TUMBLE_STEP, 0.0);
        Ok(())
    }
}

fn mesh_at(scene: &mut Scene, index: usize) -> Result<&mut Mesh> {
    scene
        .object_mut(index)
        .and_then(|object| object.mesh_mut())
        .with_context(|| format!("Scene object {index} is not a mesh"))
}
