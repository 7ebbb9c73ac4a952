//! Render settings: defaults, overridden by a JSON file, overridden by flags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glint_renderer::{Color, RenderConfig};
use serde::{Deserialize, Serialize};

use crate::cli::Args;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: usize,
    pub height: usize,
    pub parallel: bool,
    /// Grid slices per axis for the sphere mesh
    pub grid_slices: usize,
    pub sphere_subdivisions: u32,
    pub frames: u32,
    /// Cancel the whole run after this many milliseconds
    pub deadline_ms: Option<u64>,
    pub render: RenderConfig,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 400,
            height: 225,
            parallel: true,
            grid_slices: 4,
            sphere_subdivisions: 3,
            frames: 1,
            deadline_ms: None,
            render: RenderConfig::default()
                .with_background(Color::DARK_CYAN)
                .with_ambient(0.3),
        }
    }
}

impl RenderSettings {
    /// Read settings from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let settings =
            serde_json::from_str(&text).with_context(|| format!("Failed to parse settings in {}", path.display()))?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Apply command line overrides.
    pub fn apply(&mut self, args: &Args) {
        if let Some(width) = args.width {
            self.width = width;
        }
        if let Some(height) = args.height {
            self.height = height;
        }
        if let Some(frames) = args.frames {
            self.frames = frames;
        }
        if let Some(slices) = args.slices {
            self.grid_slices = slices;
        }
        if let Some(subdivisions) = args.subdivisions {
            self.sphere_subdivisions = subdivisions;
        }
        if args.sequential {
            self.parallel = false;
        }
        if args.deadline_ms.is_some() {
            self.deadline_ms = args.deadline_ms;
        }
    }
}
