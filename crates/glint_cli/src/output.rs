use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glint_renderer::Color;

/// Write an ARGB pixel buffer to a PNG file, creating parent directories.
pub fn save_png(path: &Path, pixels: &[u32], width: usize, height: usize) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let mut image = image::RgbaImage::new(width as u32, height as u32);
    for (pixel, &argb) in image.pixels_mut().zip(pixels) {
        *pixel = image::Rgba(Color::from_argb(argb).to_rgba());
    }

    image
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::debug!("Saved {}", path.display());
    Ok(())
}

/// File name for a numbered animation frame.
pub fn frame_name(frame: u32) -> String {
    format!("frame_{frame:04}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_name_is_zero_padded() {
        assert_eq!(frame_name(7), "frame_0007.png");
        assert_eq!(frame_name(12345), "frame_12345.png");
    }

    #[test]
    fn test_save_png_round_trips_pixels() {
        let dir = std::env::temp_dir().join(format!("glint_png_{}", std::process::id()));
        let path = dir.join("nested").join("out.png");
        let pixels = [Color::RED.to_argb(), Color::DARK_CYAN.to_argb()];

        save_png(&path, &pixels, 2, 1).unwrap();
        let loaded = image::open(&path).unwrap().to_rgba8();
        fs::remove_dir_all(&dir).ok();

        assert_eq!(loaded.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(loaded.get_pixel(1, 0).0, [0, 139, 139, 255]);
    }
}
