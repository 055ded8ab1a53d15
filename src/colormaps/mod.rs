//! Color gradients, the named registry and zero-centered recentering.

pub mod colorbar;
pub mod diverging;
pub mod gradient;
pub mod recenter;
pub mod registry;
pub mod sequential;

pub use colorbar::{encode_png, render_colorbar, Orientation};
pub use gradient::{ColorGradient, GradientStop, Rgba};
pub use recenter::{
    compute_bounds, compute_midpoint, recenter_or_identity, remap, BoundsMode,
    NormalizedColormap, DEFAULT_RESOLUTION, DEFAULT_SHIFTED_NAME,
};
pub use registry::GradientRegistry;
