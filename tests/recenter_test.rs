//! End-to-end tests for recentering built-in gradients on residual data.

mod common;

use common::assertions::{
    assert_approx_eq, assert_color_approx_eq, assert_gradients_approx_eq, assert_in_range,
};
use pestviz::colormaps::{encode_png, recenter_or_identity, render_colorbar, Orientation};
use pestviz::{
    build_legend, compute_bounds, compute_midpoint, default_legend_values, remap, BoundsMode,
    ColorBy, Config, GradientRegistry, MarkerScale, NormalizedColormap, PestvizError,
};
use std::io::Write;

const BUILTINS: [&str; 8] = [
    "coolwarm", "seismic", "bwr", "rdbu", "spectral", "puor", "jet", "viridis",
];

fn residual_sets() -> Vec<Vec<f64>> {
    vec![
        vec![-15.0, -2.0, 0.0, 3.0, 5.0],
        vec![-5.0, 5.0],
        vec![-0.1, 40.0],
        vec![-250.0, 1.0, 2.0],
        vec![-3.25, -1.0, 0.5, 7.75, 12.0],
        vec![-1e-3, 1e-3, 2e-3],
    ]
}

#[test]
fn test_midpoint_strictly_inside_for_mixed_signs() {
    for values in residual_sets() {
        let m = compute_midpoint(&values).unwrap();
        assert!(m > 0.0 && m < 1.0, "midpoint {} for {:?}", m, values);
    }
}

#[test]
fn test_center_round_trip_for_builtins() {
    let registry = GradientRegistry::with_builtins().unwrap();

    for name in BUILTINS {
        let base = registry.get_checked(name).unwrap();
        for values in residual_sets() {
            for mode in [BoundsMode::Proportional, BoundsMode::Full] {
                let normalized = NormalizedColormap::new(&base, &values, mode, 257).unwrap();
                assert_color_approx_eq(
                    &normalized.gradient().sample(0.5),
                    &base.sample(normalized.midpoint),
                    None,
                );

                let stops = normalized.gradient().stops();
                assert!(stops.windows(2).all(|w| w[1].position > w[0].position));
                assert_eq!(stops.first().unwrap().position, 0.0);
                assert_eq!(stops.last().unwrap().position, 1.0);
            }
        }
    }
}

#[test]
fn test_asymmetric_example() {
    let registry = GradientRegistry::with_builtins().unwrap();
    let base = registry.get_checked("coolwarm").unwrap();

    let values = [-15.0, -2.0, 0.0, 3.0, 5.0];
    let midpoint = compute_midpoint(&values).unwrap();
    assert_approx_eq(midpoint, 0.75, None);

    let (start, stop) = compute_bounds(midpoint, BoundsMode::Proportional).unwrap();
    assert_eq!(start, 0.0);
    assert_approx_eq(stop, 0.75, None);

    let remapped = remap(&base, start, midpoint, stop, 257).unwrap();
    assert_color_approx_eq(&remapped.sample(0.5), &base.sample(0.75), None);
    assert_color_approx_eq(&remapped.sample(0.0), &base.sample(0.0), None);
}

#[test]
fn test_symmetric_data_leaves_gradient_unchanged() {
    let registry = GradientRegistry::with_builtins().unwrap();
    let base = registry.get_checked("seismic").unwrap();

    let normalized = NormalizedColormap::from_values(&base, &[-5.0, 5.0]).unwrap();
    assert_approx_eq(normalized.midpoint, 0.5, None);
    assert_eq!((normalized.start, normalized.stop), (0.0, 1.0));

    // seismic has 15 evenly spaced stops; 256 samples resolve them to ~1e-2
    assert_gradients_approx_eq(normalized.gradient(), &base, 101, Some(1e-2));
    assert_color_approx_eq(&normalized.gradient().sample(0.5), &base.sample(0.5), None);
}

#[test]
fn test_bounds_ordering_for_sampled_midpoints() {
    for i in 0..=200 {
        let m = i as f64 / 200.0;
        let (start, stop) = compute_bounds(m, BoundsMode::Proportional).unwrap();
        assert_in_range(start, 0.0, m);
        assert_in_range(stop, m, 1.0);
    }
}

#[test]
fn test_error_cases() {
    let registry = GradientRegistry::with_builtins().unwrap();
    let base = registry.get_checked("bwr").unwrap();

    assert!(matches!(
        compute_midpoint(&[0.0, 0.0, 0.0]),
        Err(PestvizError::Domain { .. })
    ));
    assert!(matches!(
        remap(&base, 0.6, 0.4, 1.0, 257),
        Err(PestvizError::InvalidRange { .. })
    ));
    assert!(matches!(
        remap(&base, 0.0, 0.5, 1.0, 0),
        Err(PestvizError::InvalidResolution { resolution: 0 })
    ));

    // The caller-side fallback keeps the unshifted gradient
    let fallback = recenter_or_identity(&base, &[0.0, 0.0, 0.0], BoundsMode::Proportional, 257);
    assert_eq!(&fallback, base.as_ref());
}

#[test]
fn test_spatial_legend_uses_recentered_colors() {
    let registry = GradientRegistry::with_builtins().unwrap();
    let base = registry.get_checked("coolwarm").unwrap();

    let residuals: Vec<f64> = (0..200).map(|i| (i as f64 - 150.0) * 0.1).collect();
    let normalized = NormalizedColormap::from_values(&base, &residuals).unwrap();

    let legend_values = default_legend_values(&residuals).unwrap();
    assert_eq!(legend_values.len(), 8);

    let entries = build_legend(
        &legend_values,
        &residuals,
        &ColorBy::Graduated,
        normalized.gradient(),
        &MarkerScale::default(),
        "ft",
    )
    .unwrap();

    assert_eq!(entries.len(), legend_values.len());
    assert!(entries[0].label.ends_with(" ft"));
    assert_eq!(entries[0].color, normalized.gradient().sample(0.0));
    assert_eq!(entries[7].color, normalized.gradient().sample(1.0));

    // Larger magnitudes never get smaller markers
    let largest = entries
        .iter()
        .max_by(|a, b| a.value.abs().total_cmp(&b.value.abs()))
        .unwrap();
    assert!(entries.iter().all(|e| e.marker_size <= largest.marker_size));
}

#[test]
fn test_config_file_drives_pipeline() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "recenter": {{
                "colormap": "RdBu_r",
                "resolution": 129,
                "bounds_mode": "full",
                "register_as": "residual_cmap"
            }},
            "log_level": "debug"
        }}"#
    )
    .unwrap();

    let config = Config::load_from_file(file.path()).unwrap();
    config.validate().unwrap();

    let registry = GradientRegistry::with_builtins().unwrap();
    let normalized =
        NormalizedColormap::from_config(&config.recenter, &registry, &[-2.0, 8.0]).unwrap();

    assert_eq!(normalized.gradient().len(), 129);
    assert_eq!((normalized.start, normalized.stop), (0.0, 1.0));

    let stored = registry.get_checked("residual_cmap").unwrap();
    let base = registry.get_checked("rdbu_r").unwrap();
    assert_color_approx_eq(&stored.sample(0.5), &base.sample(0.2), None);
}

#[test]
fn test_colorbar_of_recentered_gradient() {
    let registry = GradientRegistry::with_builtins().unwrap();
    let base = registry.get_checked("bwr").unwrap();
    let normalized = NormalizedColormap::new(&base, &[-1.0, 3.0], BoundsMode::Full, 257).unwrap();

    let img = render_colorbar(normalized.gradient(), 257, 4, Orientation::Horizontal).unwrap();
    // Center column shows the color of zero: bwr sampled at midpoint 0.25
    let expected = base.sample(0.25).to_rgba8();
    assert_eq!(img.get_pixel(128, 0).0, expected);

    let png = encode_png(&img).unwrap();
    assert!(!png.is_empty());
}
