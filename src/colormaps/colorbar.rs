//! Colorbar rasterization.
//!
//! Renders a gradient into an RGBA strip, e.g. to preview a recentered
//! gradient next to the unshifted one.

use image::{ImageBuffer, RgbaImage};
use serde::{Deserialize, Serialize};
use std::io::Cursor;

use super::gradient::ColorGradient;
use crate::error::{PestvizError, Result};

/// Direction in which the gradient runs from position 0 to 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Left (0) to right (1)
    #[default]
    Horizontal,
    /// Bottom (0) to top (1)
    Vertical,
}

/// Render `gradient` into a `width` x `height` image
pub fn render_colorbar(
    gradient: &ColorGradient,
    width: u32,
    height: u32,
    orientation: Orientation,
) -> Result<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(PestvizError::ImageGeneration {
            message: format!("Colorbar dimensions must be non-zero, got {}x{}", width, height),
        });
    }

    let extent = match orientation {
        Orientation::Horizontal => width,
        Orientation::Vertical => height,
    };
    let position = |i: u32| {
        if extent == 1 {
            0.5
        } else {
            i as f64 / (extent - 1) as f64
        }
    };

    // One color per row/column, reused across the strip
    let colors: Vec<[u8; 4]> = (0..extent)
        .map(|i| gradient.sample(position(i)).to_rgba8())
        .collect();

    let mut img = ImageBuffer::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let idx = match orientation {
            Orientation::Horizontal => x,
            Orientation::Vertical => height - 1 - y,
        };
        *pixel = image::Rgba(colors[idx as usize]);
    }

    Ok(img)
}

/// Encode an image as PNG bytes
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, image::ImageFormat::Png)?;
    Ok(buffer.into_inner())
}
