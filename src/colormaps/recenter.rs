//! Recentering of diverging gradients around zero.
//!
//! For asymmetric data (say -15 to +5) a plain diverging gradient puts its
//! neutral color at the middle of the data span rather than at zero, so the
//! same color intensity stands for different magnitudes on either side. The
//! pipeline here is `values -> midpoint -> bounds -> remap`:
//!
//! 1. [`compute_midpoint`] finds the relative position of zero in the data
//!    range (`1 - vmax / (vmax + |vmin|)`).
//! 2. [`compute_bounds`] chooses which slice `[start, stop]` of the source
//!    gradient to use.
//! 3. [`remap`] resamples `[start, midpoint)` onto `[0, 0.5)` and
//!    `[midpoint, stop]` onto `[0.5, 1]`, so the new gradient's 0.5 is the
//!    source color at `midpoint`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::gradient::{ColorGradient, GradientStop};
use super::registry::GradientRegistry;
use crate::config::RecenterConfig;
use crate::error::{PestvizError, Result};
use crate::logging::{log_error, log_timed_operation};

/// Default number of samples in a remapped gradient
pub const DEFAULT_RESOLUTION: usize = 257;

/// Default registry name for recentered gradients
pub const DEFAULT_SHIFTED_NAME: &str = "shiftedcmap";

/// How [`compute_bounds`] picks the slice of the source gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsMode {
    /// Trim the side of the gradient opposite the larger data extreme
    #[default]
    Proportional,
    /// Always use the whole gradient (start = 0, stop = 1)
    Full,
}

impl std::str::FromStr for BoundsMode {
    type Err = PestvizError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "proportional" => Ok(BoundsMode::Proportional),
            "full" => Ok(BoundsMode::Full),
            _ => Err(PestvizError::InvalidParameter {
                param: "bounds_mode".to_string(),
                message: format!("Unknown bounds mode: {}. Must be one of: proportional, full", s),
            }),
        }
    }
}

/// Relative position of zero within the span of `values`.
///
/// Fails with [`PestvizError::Domain`] for empty input, non-finite values,
/// or when `vmax + |vmin|` is zero. Single-signed data is accepted; the
/// result is clamped into `[0, 1]` and simply lands on an edge.
pub fn compute_midpoint(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(PestvizError::Domain {
            message: "cannot compute a midpoint from an empty value set".to_string(),
        });
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(PestvizError::Domain {
            message: format!("values must be finite, found {}", bad),
        });
    }

    let vmax = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let vmin = values.iter().copied().fold(f64::INFINITY, f64::min);
    let span = vmax + vmin.abs();
    if span == 0.0 {
        return Err(PestvizError::Domain {
            message: format!(
                "vmax + |vmin| is zero (vmin={}, vmax={}); midpoint is undefined",
                vmin, vmax
            ),
        });
    }

    let midpoint = if span.is_finite() {
        1.0 - vmax / span
    } else {
        // vmax + |vmin| overflowed; divide both by the larger magnitude first
        let scale = vmax.abs().max(vmin.abs());
        let (vmax, vmin) = (vmax / scale, vmin / scale);
        1.0 - vmax / (vmax + vmin.abs())
    };
    if !(0.0..=1.0).contains(&midpoint) {
        debug!(vmin, vmax, midpoint, "Single-signed data, clamping midpoint");
    }
    Ok(midpoint.clamp(0.0, 1.0))
}

/// Slice `[start, stop]` of the source gradient for a given midpoint.
///
/// Proportional mode uses `(0, 1.5 - midpoint)` above 0.5 and
/// `(0.5 - midpoint, 1)` otherwise, clamped so that
/// `0 <= start <= midpoint <= stop <= 1` holds for every midpoint in `[0, 1]`.
pub fn compute_bounds(midpoint: f64, mode: BoundsMode) -> Result<(f64, f64)> {
    if !(0.0..=1.0).contains(&midpoint) {
        return Err(PestvizError::InvalidRange {
            start: 0.0,
            midpoint,
            stop: 1.0,
        });
    }

    let bounds = match mode {
        BoundsMode::Full => (0.0, 1.0),
        BoundsMode::Proportional if midpoint > 0.5 => {
            (0.0, (0.5 + (1.0 - midpoint)).max(midpoint))
        }
        BoundsMode::Proportional => ((0.5 - midpoint).min(midpoint), 1.0),
    };
    Ok(bounds)
}

/// Resample `gradient` so that its color at `midpoint` lands on position 0.5.
///
/// The first `resolution / 2` samples cover `[start, midpoint)` and are
/// placed evenly on `[0, 0.5)`; the rest cover `[midpoint, stop]` and are
/// placed evenly on `[0.5, 1]`. With `resolution == 2` only the two end
/// stops remain and the 0.5 anchor is dropped.
pub fn remap(
    gradient: &ColorGradient,
    start: f64,
    midpoint: f64,
    stop: f64,
    resolution: usize,
) -> Result<ColorGradient> {
    let in_unit = |v: f64| (0.0..=1.0).contains(&v);
    if !(in_unit(start) && in_unit(midpoint) && in_unit(stop))
        || start > midpoint
        || midpoint > stop
    {
        return Err(PestvizError::InvalidRange {
            start,
            midpoint,
            stop,
        });
    }
    if resolution < 2 {
        return Err(PestvizError::InvalidResolution { resolution });
    }

    let lower = resolution / 2;
    let upper = resolution - lower;

    let source = linspace(start, midpoint, lower, false)
        .chain(linspace(midpoint, stop, upper, true));
    let target = linspace(0.0, 0.5, lower, false).chain(linspace(0.5, 1.0, upper, true));

    let stops = source
        .zip(target)
        .map(|(s, t)| GradientStop::new(t, gradient.sample(s)))
        .collect();

    let remapped = ColorGradient::new(stops)?;
    Ok(match gradient.name() {
        Some(name) => remapped.with_name(format!("{}_shifted", name)),
        None => remapped,
    })
}

/// `n` evenly spaced values from `start` towards `stop`.
///
/// With `endpoint` the last value is exactly `stop`; a single endpoint
/// sample is `stop` itself.
fn linspace(start: f64, stop: f64, n: usize, endpoint: bool) -> impl Iterator<Item = f64> {
    let divisions = if endpoint { n.saturating_sub(1) } else { n };
    let step = if divisions == 0 {
        0.0
    } else {
        (stop - start) / divisions as f64
    };
    (0..n).map(move |i| {
        if endpoint && i + 1 == n {
            stop
        } else {
            start + i as f64 * step
        }
    })
}

/// A base gradient recentered on zero for a particular data set.
#[derive(Debug, Clone)]
pub struct NormalizedColormap {
    pub midpoint: f64,
    pub start: f64,
    pub stop: f64,
    pub mode: BoundsMode,
    gradient: ColorGradient,
}

impl NormalizedColormap {
    /// Run the full pipeline: midpoint, bounds, remap.
    pub fn new(
        base: &ColorGradient,
        values: &[f64],
        mode: BoundsMode,
        resolution: usize,
    ) -> Result<Self> {
        let midpoint = compute_midpoint(values)?;
        let (start, stop) = compute_bounds(midpoint, mode)?;
        debug!(
            gradient = base.name().unwrap_or("anonymous"),
            midpoint,
            start,
            stop,
            ?mode,
            "Computed recentering bounds"
        );

        let gradient = remap(base, start, midpoint, stop, resolution)?;
        Ok(Self {
            midpoint,
            start,
            stop,
            mode,
            gradient,
        })
    }

    /// Recentered gradient with default resolution and proportional bounds
    pub fn from_values(base: &ColorGradient, values: &[f64]) -> Result<Self> {
        Self::new(base, values, BoundsMode::default(), DEFAULT_RESOLUTION)
    }

    /// Resolve the configured base gradient in `registry`, recenter it, and
    /// register the result when the configuration names one.
    pub fn from_config(
        config: &RecenterConfig,
        registry: &GradientRegistry,
        values: &[f64],
    ) -> Result<Self> {
        let result = log_timed_operation("recenter_pipeline", || -> Result<Self> {
            let base = registry.get_checked(&config.colormap)?;
            let normalized = Self::new(&base, values, config.bounds_mode, config.resolution)?;
            if let Some(name) = &config.register_as {
                normalized.register(registry, name);
            }
            Ok(normalized)
        });

        if let Err(e) = &result {
            log_error(e, "recentering configured colormap");
        }
        result
    }

    pub fn gradient(&self) -> &ColorGradient {
        &self.gradient
    }

    /// Make the recentered gradient retrievable from `registry` under `name`
    pub fn register(&self, registry: &GradientRegistry, name: &str) {
        info!(
            gradient = name,
            midpoint = self.midpoint,
            "Registering recentered gradient"
        );
        registry.register(name, self.gradient.clone().with_name(name));
    }
}

/// Recenter `base` on `values`, falling back to `base` itself when the data
/// cannot be recentered.
pub fn recenter_or_identity(
    base: &ColorGradient,
    values: &[f64],
    mode: BoundsMode,
    resolution: usize,
) -> ColorGradient {
    match NormalizedColormap::new(base, values, mode, resolution) {
        Ok(normalized) => normalized.gradient().clone(),
        Err(e) => {
            warn!(
                error = %e,
                gradient = base.name().unwrap_or("anonymous"),
                "Recentering failed, using unshifted gradient"
            );
            base.clone()
        }
    }
}
