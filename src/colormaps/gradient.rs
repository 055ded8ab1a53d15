//! Color gradients built from ordered color stops.
//!
//! A [`ColorGradient`] is an immutable, piecewise-linear mapping from a
//! position in `[0, 1]` to an RGBA color. The first stop always sits at 0,
//! the last at 1, and positions strictly increase in between.

use serde::{Deserialize, Serialize};

use crate::error::{PestvizError, Result};

/// An RGBA color with every channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit components
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
            1.0,
        )
    }

    /// Parse a CSS color string such as `"Navy"`, `"#ff0000"` or `"rgb(0,0,255)"`.
    pub fn parse(s: &str) -> Result<Self> {
        s.parse::<colorgrad::Color>()
            .map(Self::from)
            .map_err(|e| PestvizError::InvalidParameter {
                param: "color".to_string(),
                message: format!("Cannot parse color '{}': {}", s, e),
            })
    }

    pub fn channels(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Quantize to 8-bit RGBA for rasterization
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Linear interpolation between `self` (t = 0) and `other` (t = 1)
    pub fn lerp(&self, other: &Rgba, t: f64) -> Rgba {
        let mix = |x: f64, y: f64| x + (y - x) * t;
        Rgba::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    /// Largest absolute per-channel difference
    pub fn max_channel_diff(&self, other: &Rgba) -> f64 {
        self.channels()
            .iter()
            .zip(other.channels().iter())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max)
    }

    fn is_valid(&self) -> bool {
        self.channels()
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }

    fn clamped(&self) -> Rgba {
        Rgba::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.a.clamp(0.0, 1.0),
        )
    }
}

impl From<colorgrad::Color> for Rgba {
    fn from(c: colorgrad::Color) -> Self {
        Rgba::new(c.r, c.g, c.b, c.a)
    }
}

/// One anchor of a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub position: f64,
    pub color: Rgba,
}

impl GradientStop {
    pub const fn new(position: f64, color: Rgba) -> Self {
        Self { position, color }
    }
}

/// An immutable piecewise-linear color gradient over `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorGradient {
    name: Option<String>,
    stops: Vec<GradientStop>,
}

impl ColorGradient {
    /// Build a gradient from explicit stops.
    ///
    /// Fails with [`PestvizError::InvalidGradient`] unless there are at least
    /// two stops, the first at 0 and the last at 1, positions strictly
    /// increase, and every channel is a finite value in `[0, 1]`.
    pub fn new(stops: Vec<GradientStop>) -> Result<Self> {
        if stops.len() < 2 {
            return Err(invalid(format!(
                "need at least 2 stops, got {}",
                stops.len()
            )));
        }
        if stops[0].position != 0.0 {
            return Err(invalid(format!(
                "first stop must be at 0, got {}",
                stops[0].position
            )));
        }
        let last = stops[stops.len() - 1].position;
        if last != 1.0 {
            return Err(invalid(format!("last stop must be at 1, got {}", last)));
        }
        for (i, pair) in stops.windows(2).enumerate() {
            if !(pair[1].position > pair[0].position) {
                return Err(invalid(format!(
                    "stop positions must strictly increase: {} then {} at index {}",
                    pair[0].position,
                    pair[1].position,
                    i + 1
                )));
            }
        }
        if let Some(bad) = stops.iter().find(|s| !s.color.is_valid()) {
            return Err(invalid(format!(
                "color channels must lie in [0, 1]: {:?} at {}",
                bad.color, bad.position
            )));
        }

        Ok(Self { name: None, stops })
    }

    /// Evenly spaced stops, one per color
    pub fn from_colors(colors: &[Rgba]) -> Result<Self> {
        if colors.len() < 2 {
            return Err(invalid(format!(
                "need at least 2 colors, got {}",
                colors.len()
            )));
        }
        let n = colors.len() - 1;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, c)| GradientStop::new(unit_position(i, n), *c))
            .collect();
        Self::new(stops)
    }

    /// Evenly spaced opaque stops from an 8-bit RGB table
    pub fn from_rgb8_table(table: &[[u8; 3]]) -> Result<Self> {
        let colors: Vec<Rgba> = table
            .iter()
            .map(|c| Rgba::from_rgb8(c[0], c[1], c[2]))
            .collect();
        Self::from_colors(&colors)
    }

    /// Build a gradient from per-channel `(x, value)` anchor lists.
    ///
    /// Each channel is piecewise linear over its own anchors; the resulting
    /// stops sit at the union of all anchor positions. A missing alpha
    /// channel means fully opaque.
    pub fn from_segments(
        red: &[(f64, f64)],
        green: &[(f64, f64)],
        blue: &[(f64, f64)],
        alpha: Option<&[(f64, f64)]>,
    ) -> Result<Self> {
        let opaque = [(0.0, 1.0), (1.0, 1.0)];
        let alpha = alpha.unwrap_or(&opaque);
        let channels = [red, green, blue, alpha];

        for (name, anchors) in ["red", "green", "blue", "alpha"].iter().zip(channels.iter()) {
            validate_segment(name, anchors)?;
        }

        let mut positions: Vec<f64> = channels
            .iter()
            .flat_map(|anchors| anchors.iter().map(|(x, _)| *x))
            .collect();
        positions.sort_by(|a, b| a.total_cmp(b));
        positions.dedup();

        let stops = positions
            .into_iter()
            .map(|x| {
                let color = Rgba::new(
                    segment_value(red, x),
                    segment_value(green, x),
                    segment_value(blue, x),
                    segment_value(alpha, x),
                );
                GradientStop::new(x, color)
            })
            .collect();
        Self::new(stops)
    }

    /// Sample a colorgrad gradient at `samples` evenly spaced points of its domain
    pub fn from_colorgrad(gradient: &colorgrad::Gradient, samples: usize) -> Result<Self> {
        if samples < 2 {
            return Err(PestvizError::InvalidResolution {
                resolution: samples,
            });
        }
        let (dmin, dmax) = gradient.domain();
        let n = samples - 1;
        let stops = (0..samples)
            .map(|i| {
                let position = unit_position(i, n);
                let color = Rgba::from(gradient.at(dmin + position * (dmax - dmin)));
                GradientStop::new(position, color.clamped())
            })
            .collect();
        Self::new(stops)
    }

    /// Attach a display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false; a valid gradient has at least two stops
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Sample the gradient at `position`, clamped into `[0, 1]`.
    pub fn sample(&self, position: f64) -> Rgba {
        let p = if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, 1.0)
        };

        // Number of stops at or before p; at least 1 because stop 0 is at 0.
        let idx = self.stops.partition_point(|s| s.position <= p);
        if idx >= self.stops.len() {
            return self.stops[self.stops.len() - 1].color;
        }

        let lo = &self.stops[idx - 1];
        let hi = &self.stops[idx];
        let t = (p - lo.position) / (hi.position - lo.position);
        lo.color.lerp(&hi.color, t)
    }

    /// `n` evenly spaced samples from 0 to 1
    pub fn colors(&self, n: usize) -> Vec<Rgba> {
        match n {
            0 => Vec::new(),
            1 => vec![self.sample(0.0)],
            _ => (0..n)
                .map(|i| self.sample(unit_position(i, n - 1)))
                .collect(),
        }
    }

    /// The same gradient running from 1 to 0
    pub fn reversed(&self) -> ColorGradient {
        let stops = self
            .stops
            .iter()
            .rev()
            .map(|s| GradientStop::new(1.0 - s.position, s.color))
            .collect();
        ColorGradient {
            name: self.name.as_ref().map(|n| reversed_name(n)),
            stops,
        }
    }
}

/// Name of the reversed variant of a named gradient (`coolwarm` <-> `coolwarm_r`)
pub fn reversed_name(name: &str) -> String {
    match name.strip_suffix("_r") {
        Some(base) => base.to_string(),
        None => format!("{}_r", name),
    }
}

/// `i / n` with the final position pinned to exactly 1
fn unit_position(i: usize, n: usize) -> f64 {
    if i == n {
        1.0
    } else {
        i as f64 / n as f64
    }
}

fn invalid(message: String) -> PestvizError {
    PestvizError::InvalidGradient { message }
}

fn validate_segment(channel: &str, anchors: &[(f64, f64)]) -> Result<()> {
    if anchors.len() < 2 {
        return Err(invalid(format!(
            "{} channel needs at least 2 anchors",
            channel
        )));
    }
    if anchors[0].0 != 0.0 || anchors[anchors.len() - 1].0 != 1.0 {
        return Err(invalid(format!(
            "{} channel anchors must start at 0 and end at 1",
            channel
        )));
    }
    if anchors.windows(2).any(|w| w[1].0 <= w[0].0) {
        return Err(invalid(format!(
            "{} channel anchor positions must strictly increase",
            channel
        )));
    }
    Ok(())
}

fn segment_value(anchors: &[(f64, f64)], x: f64) -> f64 {
    let idx = anchors.partition_point(|(ax, _)| *ax <= x);
    if idx >= anchors.len() {
        return anchors[anchors.len() - 1].1;
    }
    let (x0, y0) = anchors[idx - 1];
    let (x1, y1) = anchors[idx];
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}
