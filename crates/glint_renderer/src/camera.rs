//! Rectangular pinhole camera.
//!
//! The image plane is the rectangle spanned by two edge vectors from a corner.
//! Rays start at a focal point on the plane's normal through its center and
//! pass through one point of the plane per pixel.

use glint_math::{Ray, Vec3};

/// Camera for generating rays into the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectCamera {
    origin: Vec3,
    x_edge: Vec3,
    y_edge: Vec3,
    focal_length: f32,

    // Derived from the fields above
    plane_center: Vec3,
    focal_point: Vec3,
}

impl RectCamera {
    /// Create a camera whose image plane starts at `origin` and spans
    /// `x_edge` horizontally and `y_edge` vertically.
    ///
    /// The focal point sits `focal_length` along `normalize(x_edge × y_edge)`
    /// from the plane center; a negative length puts it on the other side.
    pub fn new(origin: Vec3, x_edge: Vec3, y_edge: Vec3, focal_length: f32) -> Self {
        let plane_center = origin + (x_edge + y_edge) / 2.0;
        let normal = x_edge.cross(y_edge).normalize_or_zero();

        Self {
            origin,
            x_edge,
            y_edge,
            focal_length,
            plane_center,
            focal_point: plane_center + normal * focal_length,
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn plane_center(&self) -> Vec3 {
        self.plane_center
    }

    /// Point every camera ray starts from.
    pub fn focal_point(&self) -> Vec3 {
        self.focal_point
    }

    /// Same camera moved by `offset`.
    pub fn translated(&self, offset: Vec3) -> Self {
        Self::new(self.origin + offset, self.x_edge, self.y_edge, self.focal_length)
    }

    /// Precompute per-pixel steps for a `width` x `height` image.
    pub fn ray_factory(&self, width: usize, height: usize) -> RayFactory {
        let h_step = self.x_edge.normalize_or_zero() * (self.x_edge.length() / width.max(1) as f32);
        let v_step = self.y_edge.normalize_or_zero() * (self.y_edge.length() / height.max(1) as f32);
        let top_left = self.plane_center - (width as f32 / 2.0) * h_step - (height as f32 / 2.0) * v_step;

        RayFactory {
            width,
            height,
            h_step,
            v_step,
            top_left,
            focal_point: self.focal_point,
        }
    }

    /// Every camera ray of a `width` x `height` image, at index `y * width + x`.
    pub fn rays(&self, width: usize, height: usize) -> Vec<Ray> {
        let factory = self.ray_factory(width, height);
        (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| factory.ray(x, y))
            .collect()
    }
}

/// Maps pixel coordinates to camera rays for a fixed image size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayFactory {
    width: usize,
    height: usize,
    h_step: Vec3,
    v_step: Vec3,
    top_left: Vec3,
    focal_point: Vec3,
}

impl RayFactory {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Point on the image plane sampled for pixel (x, y).
    #[inline]
    pub fn plane_point(&self, x: usize, y: usize) -> Vec3 {
        self.top_left + x as f32 * self.h_step + y as f32 * self.v_step
    }

    /// Ray from the focal point through pixel (x, y).
    #[inline]
    pub fn ray(&self, x: usize, y: usize) -> Ray {
        Ray::new(self.focal_point, self.plane_point(x, y) - self.focal_point)
    }
}
