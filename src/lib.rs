//! # pestviz
//!
//! Color handling for visualizing parameter-estimation (PEST) model output.
//!
//! Residual maps and similar charts color signed values with a diverging
//! gradient. When the data range is asymmetric, the gradient's neutral color
//! should still sit at zero; this crate builds such recentered gradients and
//! the marker/legend data that go with them. Drawing is left to whatever
//! rendering layer consumes the gradients.
//!
//! ## Key Features
//!
//! - **Gradients**: immutable piecewise-linear color gradients with built-in
//!   diverging and sequential presets
//! - **Recentering**: `values -> midpoint -> bounds -> remap`, placing the
//!   color for zero at position 0.5
//! - **Registry**: an injectable, thread-safe registry of named gradients
//! - **Legends**: marker scaling, legend values, labels and colors for
//!   spatial residual plots
//!
//! ## Example
//!
//! ```no_run
//! use pestviz::colormaps::{GradientRegistry, NormalizedColormap};
//!
//! let registry = GradientRegistry::with_builtins()?;
//! let base = registry.get_checked("coolwarm")?;
//! let normalized = NormalizedColormap::from_values(&base, &[-15.0, -2.0, 0.0, 3.0, 5.0])?;
//! assert_eq!(normalized.gradient().sample(0.5), base.sample(0.75));
//! # Ok::<(), pestviz::PestvizError>(())
//! ```

pub mod colormaps;
pub mod config;
pub mod error;
pub mod legend;
pub mod logging;

pub use colormaps::{
    compute_bounds, compute_midpoint, remap, BoundsMode, ColorGradient, GradientRegistry,
    GradientStop, NormalizedColormap, Rgba,
};
pub use config::{Config, RecenterConfig};
pub use error::{PestvizError, Result};
pub use legend::{build_legend, default_legend_values, ColorBy, LegendEntry, MarkerScale};
pub use logging::{init_tracing, log_error, log_timed_operation};
