//! Diverging gradients (two hues meeting at a neutral center).
//!
//! These are the natural inputs to recentering: their neutral color sits at
//! position 0.5 before any shift is applied.

use super::gradient::{ColorGradient, Rgba};
use crate::error::Result;

/// Samples taken from colorgrad presets
const PRESET_SAMPLES: usize = 256;

/// Coolwarm - blue to red through light gray
pub fn coolwarm() -> Result<ColorGradient> {
    const COLORS: [[u8; 3]; 33] = [
        [59, 76, 192], // Dark blue
        [68, 90, 204],
        [77, 104, 215],
        [87, 117, 225],
        [98, 130, 234],
        [108, 142, 241],
        [119, 154, 247],
        [130, 165, 251],
        [141, 176, 254],
        [152, 185, 255],
        [163, 194, 255],
        [174, 201, 253],
        [184, 208, 249],
        [194, 213, 244],
        [204, 217, 238],
        [213, 219, 230],
        [221, 221, 221], // Neutral center
        [229, 216, 209],
        [236, 211, 197],
        [241, 204, 185],
        [245, 196, 173],
        [247, 187, 160],
        [247, 177, 148],
        [247, 166, 135],
        [244, 154, 123],
        [241, 141, 111],
        [236, 127, 99],
        [229, 112, 88],
        [222, 96, 77],
        [213, 80, 66],
        [203, 62, 56],
        [192, 40, 47],
        [180, 4, 38], // Dark red
    ];
    Ok(ColorGradient::from_rgb8_table(&COLORS)?.with_name("coolwarm"))
}

/// Seismic - dark blue through white to dark red
pub fn seismic() -> Result<ColorGradient> {
    const COLORS: [[u8; 3]; 15] = [
        [0, 0, 76],
        [0, 0, 140],
        [0, 0, 204],
        [0, 0, 255],
        [85, 85, 255],
        [170, 170, 255],
        [212, 212, 255],
        [255, 255, 255], // White center
        [255, 212, 212],
        [255, 170, 170],
        [255, 85, 85],
        [255, 0, 0],
        [223, 0, 0],
        [191, 0, 0],
        [128, 0, 0],
    ];
    Ok(ColorGradient::from_rgb8_table(&COLORS)?.with_name("seismic"))
}

/// Bwr - pure blue, white, pure red
pub fn bwr() -> Result<ColorGradient> {
    Ok(ColorGradient::from_colors(&[
        Rgba::new(0.0, 0.0, 1.0, 1.0),
        Rgba::new(1.0, 1.0, 1.0, 1.0),
        Rgba::new(1.0, 0.0, 0.0, 1.0),
    ])?
    .with_name("bwr"))
}

/// ColorBrewer RdBu - red to blue
pub fn rdbu() -> Result<ColorGradient> {
    Ok(ColorGradient::from_colorgrad(&colorgrad::rd_bu(), PRESET_SAMPLES)?.with_name("rdbu"))
}

/// ColorBrewer Spectral
pub fn spectral() -> Result<ColorGradient> {
    Ok(ColorGradient::from_colorgrad(&colorgrad::spectral(), PRESET_SAMPLES)?
        .with_name("spectral"))
}

/// ColorBrewer PuOr - orange to purple
pub fn puor() -> Result<ColorGradient> {
    Ok(ColorGradient::from_colorgrad(&colorgrad::pu_or(), PRESET_SAMPLES)?.with_name("puor"))
}

/// ColorBrewer BrBG - brown to blue-green
pub fn brbg() -> Result<ColorGradient> {
    Ok(ColorGradient::from_colorgrad(&colorgrad::br_bg(), PRESET_SAMPLES)?.with_name("brbg"))
}
