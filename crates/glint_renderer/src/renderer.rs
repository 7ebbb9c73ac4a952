//! Pixel loop: traces one camera ray per pixel into a packed ARGB buffer.
//!
//! Rendering runs either sequentially or row-parallel on the rayon pool.
//! Both produce identical pixels. A [`CancelToken`] is polled before every
//! pixel; pixels not reached before cancellation keep their old contents.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::camera::RayFactory;
use crate::{Color, RectCamera, Scene};

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Color of rays that hit nothing or exceed the depth cap
    pub background: Color,
    /// Brightness floor for every lit surface
    pub ambient: f32,
    /// Rays at this recursion depth or deeper return the background
    pub max_depth: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            ambient: 0.0,
            max_depth: 4,
        }
    }
}

impl RenderConfig {
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_ambient(mut self, ambient: f32) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Shared cancellation flag. Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// A token for callers that never cancel.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// How a render call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Every pixel was written
    Completed,
    /// The token was cancelled before every pixel was written
    Cancelled,
}

impl RenderOutcome {
    pub fn is_completed(self) -> bool {
        self == RenderOutcome::Completed
    }
}

/// Render `scene` through `camera` into `buffer` (`0xFFRRGGBB` at `y * width + x`).
///
/// A zero-sized image does nothing. A buffer shorter than `width * height`
/// only receives the pixels it has room for.
pub fn render(
    scene: &Scene,
    camera: &RectCamera,
    buffer: &mut [u32],
    width: usize,
    height: usize,
    parallel: bool,
    cancel: &CancelToken,
) -> RenderOutcome {
    if width == 0 || height == 0 {
        return RenderOutcome::Completed;
    }

    let pixel_count = width.saturating_mul(height);
    if buffer.len() < pixel_count {
        log::warn!(
            "Output buffer holds {} pixels, {}x{} needs {}; rendering what fits",
            buffer.len(),
            width,
            height,
            pixel_count
        );
    }

    let factory = camera.ray_factory(width, height);
    let len = pixel_count.min(buffer.len());
    let pixels = &mut buffer[..len];

    log::info!(
        "Rendering {}x{} ({} objects, {} lights, {})",
        width,
        height,
        scene.objects().len(),
        scene.lights().len(),
        if parallel { "parallel" } else { "sequential" }
    );
    let start = Instant::now();

    let outcome = if parallel {
        render_rows(scene, &factory, pixels, cancel)
    } else {
        render_columns(scene, &factory, pixels, cancel)
    };

    match outcome {
        RenderOutcome::Completed => log::info!("Render completed in {:.2?}", start.elapsed()),
        RenderOutcome::Cancelled => log::info!("Render cancelled after {:.2?}", start.elapsed()),
    }

    outcome
}

/// Color of pixel (x, y).
#[inline]
fn shade_pixel(scene: &Scene, factory: &RayFactory, x: usize, y: usize) -> u32 {
    scene.trace(&factory.ray(x, y), 0).to_argb()
}

/// One rayon task per row; each task owns its row slice.
fn render_rows(scene: &Scene, factory: &RayFactory, pixels: &mut [u32], cancel: &CancelToken) -> RenderOutcome {
    let result = pixels
        .par_chunks_mut(factory.width())
        .enumerate()
        .try_for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                if cancel.is_cancelled() {
                    return Err(RenderOutcome::Cancelled);
                }
                *pixel = shade_pixel(scene, factory, x, y);
            }
            Ok(())
        });

    match result {
        Ok(()) => RenderOutcome::Completed,
        Err(outcome) => outcome,
    }
}

/// Single-threaded, column by column.
fn render_columns(scene: &Scene, factory: &RayFactory, pixels: &mut [u32], cancel: &CancelToken) -> RenderOutcome {
    let width = factory.width();

    for x in 0..width.min(pixels.len()) {
        for y in 0..factory.height() {
            // Indices grow with y, so the first one past the buffer ends the column
            let Some(pixel) = y
                .checked_mul(width)
                .and_then(|row| row.checked_add(x))
                .and_then(|index| pixels.get_mut(index))
            else {
                break;
            };

            if cancel.is_cancelled() {
                return RenderOutcome::Cancelled;
            }
            *pixel = shade_pixel(scene, factory, x, y);
        }
    }

    RenderOutcome::Completed
}
