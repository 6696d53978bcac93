//! ANSI half-block image rendering.
//!
//! Images print into the transcript as colored half-block cells: each
//! character cell shows two vertically stacked pixels, the upper one as
//! the foreground of `▀` and the lower one as the background.

use crossterm::style::{Color, ResetColor, SetBackgroundColor, SetForegroundColor};
use image::GenericImageView;
use std::path::Path;

/// Error from image decoding or rendering.
#[derive(Debug, Clone)]
pub struct ImageRenderError {
    pub message: String,
}

impl std::fmt::Display for ImageRenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "image render error: {}", self.message)
    }
}

impl std::error::Error for ImageRenderError {}

/// Fit `(width, height)` into `max_width` columns, preserving aspect
/// ratio. Returns pixel dimensions; the pixel height is later halved by
/// the half-block encoding.
pub fn fit_dimensions(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }
    if width <= max_width {
        return (width, height);
    }
    let scaled_height = ((height as u64 * max_width as u64) / width as u64).max(1) as u32;
    (max_width, scaled_height)
}

/// Render the image at `path` as ANSI half-block art, at most
/// `max_width` columns wide.
pub fn render_image(path: &Path, max_width: u16) -> Result<String, ImageRenderError> {
    let decoded = image::open(path).map_err(|e| ImageRenderError {
        message: format!("{}: {}", path.display(), e),
    })?;

    let (width, height) = decoded.dimensions();
    let (target_width, target_height) = fit_dimensions(width, height, max_width as u32);
    let small = decoded
        .thumbnail_exact(target_width.max(1), target_height.max(1))
        .to_rgba8();

    let mut out = String::new();
    let mut y = 0;
    while y < small.height() {
        for x in 0..small.width() {
            let upper = small.get_pixel(x, y).0;
            let lower = if y + 1 < small.height() {
                small.get_pixel(x, y + 1).0
            } else {
                [0, 0, 0, 0]
            };
            out.push_str(&format!(
                "{}{}▀",
                SetForegroundColor(Color::Rgb {
                    r: upper[0],
                    g: upper[1],
                    b: upper[2],
                }),
                SetBackgroundColor(Color::Rgb {
                    r: lower[0],
                    g: lower[1],
                    b: lower[2],
                }),
            ));
        }
        out.push_str(&format!("{}\n", ResetColor));
        y += 2;
    }
    Ok(out)
}

/// Textual fallback shown when an image cannot be decoded.
pub fn caption(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    format!("[image: {}]", name)
}
