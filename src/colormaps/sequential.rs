//! Sequential gradients (single progression from low to high).

use super::gradient::ColorGradient;
use crate::error::Result;

const PRESET_SAMPLES: usize = 256;

/// Jet - the classic rainbow, defined by per-channel segments
pub fn jet() -> Result<ColorGradient> {
    Ok(ColorGradient::from_segments(
        &[(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)],
        &[
            (0.0, 0.0),
            (0.125, 0.0),
            (0.375, 1.0),
            (0.64, 1.0),
            (0.91, 0.0),
            (1.0, 0.0),
        ],
        &[(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)],
        None,
    )?
    .with_name("jet"))
}

/// Viridis - perceptually uniform, colorblind-friendly
pub fn viridis() -> Result<ColorGradient> {
    Ok(ColorGradient::from_colorgrad(&colorgrad::viridis(), PRESET_SAMPLES)?.with_name("viridis"))
}

pub fn plasma() -> Result<ColorGradient> {
    Ok(ColorGradient::from_colorgrad(&colorgrad::plasma(), PRESET_SAMPLES)?.with_name("plasma"))
}

pub fn inferno() -> Result<ColorGradient> {
    Ok(ColorGradient::from_colorgrad(&colorgrad::inferno(), PRESET_SAMPLES)?.with_name("inferno"))
}

pub fn magma() -> Result<ColorGradient> {
    Ok(ColorGradient::from_colorgrad(&colorgrad::magma(), PRESET_SAMPLES)?.with_name("magma"))
}

/// Cividis - colorblind-friendly alternative to viridis
pub fn cividis() -> Result<ColorGradient> {
    Ok(ColorGradient::from_colorgrad(&colorgrad::cividis(), PRESET_SAMPLES)?.with_name("cividis"))
}

pub fn turbo() -> Result<ColorGradient> {
    Ok(ColorGradient::from_colorgrad(&colorgrad::turbo(), PRESET_SAMPLES)?.with_name("turbo"))
}
