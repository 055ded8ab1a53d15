//! Legend shaping for spatial residual maps.
//!
//! Residuals are drawn as markers whose area grows with `|value|` and whose
//! color comes from a (usually recentered) diverging gradient. This module
//! computes everything a renderer needs for the markers and their legend;
//! it never draws.

use serde::{Deserialize, Serialize};

use crate::colormaps::{ColorGradient, Rgba};
use crate::error::{PestvizError, Result};

/// Quantiles shown between the rounded extremes in the default legend
pub const LEGEND_QUANTILES: [f64; 6] = [0.002, 0.023, 0.159, 0.841, 0.977, 0.998];

/// Marker area scaling: `|v| * scale * 200 / max|reference| + minimum_size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerScale {
    #[serde(default = "default_minimum_size")]
    pub minimum_size: f64,
    #[serde(default = "default_scale")]
    pub scale: f64,
}

impl Default for MarkerScale {
    fn default() -> Self {
        Self {
            minimum_size: default_minimum_size(),
            scale: default_scale(),
        }
    }
}

impl MarkerScale {
    /// Marker areas for `values`, relative to the largest magnitude in `reference`
    pub fn scale_markers(&self, values: &[f64], reference: &[f64]) -> Result<Vec<f64>> {
        let max = check_finite(reference, "reference")?
            .iter()
            .fold(0.0_f64, |acc, v| acc.max(v.abs()));
        if max == 0.0 {
            return Err(PestvizError::Domain {
                message: "marker reference values are all zero".to_string(),
            });
        }

        let factor = self.scale * 200.0 / max;
        Ok(values
            .iter()
            .map(|v| v.abs() * factor + self.minimum_size)
            .collect())
    }
}

/// How markers are colored
#[derive(Debug, Clone, PartialEq)]
pub enum ColorBy {
    /// Sample the gradient at the value's relative position in the range
    Graduated,
    /// Positive values get `over`, everything else `under`
    Binary { over: Rgba, under: Rgba },
    /// One color for every marker
    Fixed(Rgba),
    /// Markers graduated by percent difference; the legend shows only
    /// positive magnitudes, in black, prefixed with `+/-`
    PctDiff,
}

impl ColorBy {
    /// Binary coloring with the red-over/navy-under default
    pub fn over_under() -> Result<Self> {
        Ok(ColorBy::Binary {
            over: Rgba::parse("red")?,
            under: Rgba::parse("navy")?,
        })
    }

    /// Colorbar label implied by the coloring, if any
    pub fn colorbar_label(&self) -> Option<&'static str> {
        match self {
            ColorBy::PctDiff => Some("Percent Difference"),
            _ => None,
        }
    }

    /// Colors for `values`, normalized over their own span when graduated
    pub fn colors(&self, values: &[f64], gradient: &ColorGradient) -> Vec<Rgba> {
        let (lo, hi) = min_max(values);
        self.colors_over(values, lo, hi, gradient)
    }

    /// Colors for `values`, normalized over `[lo, hi]` when graduated
    pub fn colors_over(
        &self,
        values: &[f64],
        lo: f64,
        hi: f64,
        gradient: &ColorGradient,
    ) -> Vec<Rgba> {
        match self {
            ColorBy::Graduated | ColorBy::PctDiff => values
                .iter()
                .map(|v| gradient.sample(normalize(*v, lo, hi)))
                .collect(),
            ColorBy::Binary { over, under } => values
                .iter()
                .map(|v| if *v > 0.0 { *over } else { *under })
                .collect(),
            ColorBy::Fixed(color) => vec![*color; values.len()],
        }
    }
}

/// One row of the marker legend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub value: f64,
    pub label: String,
    /// Marker diameter; scatter sizes are areas, so this is their square root
    pub marker_size: f64,
    pub color: Rgba,
}

/// The truncated minimum, the tail quantiles, and the truncated maximum
pub fn default_legend_values(values: &[f64]) -> Result<Vec<f64>> {
    let mut sorted = check_finite(values, "values")?.to_vec();
    if sorted.is_empty() {
        return Err(PestvizError::Domain {
            message: "cannot build legend values from an empty value set".to_string(),
        });
    }
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mut legend = Vec::with_capacity(LEGEND_QUANTILES.len() + 2);
    legend.push(sorted[0].trunc());
    legend.extend(LEGEND_QUANTILES.iter().map(|q| quantile(&sorted, *q)));
    legend.push(sorted[sorted.len() - 1].trunc());
    Ok(legend)
}

/// Linear-interpolation quantile of already sorted data
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Build legend entries for `legend_values`.
///
/// Marker sizes are scaled against `reference` (the plotted data); the first
/// label carries the `units` suffix. For [`ColorBy::PctDiff`] only positive
/// legend values are kept, largest first.
pub fn build_legend(
    legend_values: &[f64],
    reference: &[f64],
    colorby: &ColorBy,
    gradient: &ColorGradient,
    scale: &MarkerScale,
    units: &str,
) -> Result<Vec<LegendEntry>> {
    let (values, prefix) = match colorby {
        ColorBy::PctDiff => {
            let mut positive: Vec<f64> =
                legend_values.iter().copied().filter(|v| *v > 0.0).collect();
            positive.sort_by(|a, b| b.total_cmp(a));
            (positive, "+/- ")
        }
        _ => (legend_values.to_vec(), ""),
    };
    let sizes = scale.scale_markers(&values, reference)?;

    // Graduated legend colors span from the first to the last legend value
    let (first, last) = match (values.first(), values.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Ok(Vec::new()),
    };
    let colors = match colorby {
        ColorBy::PctDiff => vec![Rgba::new(0.0, 0.0, 0.0, 1.0); values.len()],
        _ => colorby.colors_over(&values, first, last, gradient),
    };

    let entries = values
        .iter()
        .zip(sizes)
        .zip(colors)
        .enumerate()
        .map(|(i, ((value, size), color))| {
            let number = format!("{}{}", prefix, format_thousands(*value));
            let label = if i == 0 && !units.is_empty() {
                format!("{} {}", number, units)
            } else {
                number
            };
            LegendEntry {
                value: *value,
                label,
                marker_size: size.sqrt(),
                color,
            }
        })
        .collect();
    Ok(entries)
}

/// Round to an integer and group thousands with commas (`-12345.6` -> `-12,346`)
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    if rounded == 0.0 {
        return "0".to_string();
    }
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn check_finite<'a>(values: &'a [f64], what: &str) -> Result<&'a [f64]> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(bad) => Err(PestvizError::Domain {
            message: format!("{} must be finite, found {}", what, bad),
        }),
        None => Ok(values),
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        })
}

fn normalize(value: f64, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
    } else {
        0.5
    }
}

fn default_minimum_size() -> f64 {
    10.0
}

fn default_scale() -> f64 {
    1.0
}
