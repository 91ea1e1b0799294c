//! Property checks for the full per-pixel pipeline over many sampled inputs.

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use slsh_starfield::*;

fn sample_frames(count: usize) -> Vec<(Vec2, FrameInputs)> {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    (0..count)
        .map(|_| {
            let w = rng.random_range(1.0f32..4096.0).floor();
            let h = rng.random_range(1.0f32..4096.0).floor();
            let angles = ViewAngles::new(
                rng.random_range(-50.0..50.0),
                rng.random_range(-50.0..50.0),
            );
            let pixel = Vec2::new(rng.random_range(0.0..w), rng.random_range(0.0..h));
            (pixel, FrameInputs::new(w, h, angles))
        })
        .collect()
}

#[test]
fn pipeline_is_deterministic() {
    let params = StarfieldParams::default();
    for (pixel, frame) in sample_frames(2000) {
        let a = pixel_brightness(pixel, &frame, &params);
        let b = pixel_brightness(pixel, &frame, &params);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn brightness_is_finite_and_non_negative() {
    let params = StarfieldParams::default();
    for (pixel, frame) in sample_frames(5000) {
        let b = pixel_brightness(pixel, &frame, &params);
        assert!(b.is_finite(), "non-finite brightness at {pixel:?} {frame:?}");
        assert!(b >= 0.0, "negative brightness {b}");
        assert!(b <= params.layer_count as f32);
    }
}

#[test]
fn pixels_outside_the_image_are_still_finite() {
    let params = StarfieldParams::default();
    let frame = FrameInputs::new(800.0, 600.0, ViewAngles::new(0.7, -1.1));
    for pixel in [
        Vec2::new(-5000.0, 3.0),
        Vec2::new(1e6, -1e6),
        Vec2::new(800.0, 600.0),
    ] {
        let b = pixel_brightness(pixel, &frame, &params);
        assert!(b.is_finite() && b >= 0.0);
    }
}

#[test]
fn hash_is_uniform_over_adjacent_cells() {
    const BINS: usize = 16;
    let mut counts = [[0u32; BINS]; 3];
    let mut n = 0u32;
    for x in -32..32 {
        for y in -32..32 {
            for z in 0..4 {
                let h = hash33(Vec3::new(x as f32, y as f32, z as f32));
                for (axis, c) in h.to_array().into_iter().enumerate() {
                    assert!((0.0..1.0).contains(&c));
                    counts[axis][(c * BINS as f32) as usize] += 1;
                }
                n += 1;
            }
        }
    }

    let expected = n as f32 / BINS as f32;
    for (axis, bins) in counts.iter().enumerate() {
        let chi2: f32 = bins
            .iter()
            .map(|&c| (c as f32 - expected).powi(2) / expected)
            .sum();
        // 15 degrees of freedom; 40 is well past the 0.1% critical value.
        assert!(chi2 < 40.0, "axis {axis} chi-square {chi2} too large");
    }
}

#[test]
fn hash_has_no_short_period_along_an_axis() {
    let xs: Vec<f32> = (-2000..2000)
        .map(|i| hash33(Vec3::new(i as f32, 5.0, 7.0)).x)
        .collect();
    let mean = xs.iter().sum::<f32>() / xs.len() as f32;
    let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / xs.len() as f32;

    for lag in [1, 2, 3, 4, 8, 10, 16, 97] {
        let n = xs.len() - lag;
        let cov = (0..n)
            .map(|t| (xs[t] - mean) * (xs[t + lag] - mean))
            .sum::<f32>()
            / n as f32;
        let corr = cov / var;
        assert!(corr.abs() < 0.1, "lag {lag} autocorrelation {corr}");
    }
}

#[test]
fn zero_angles_give_the_unrotated_ray() {
    let params = StarfieldParams::default();
    let res = Vec2::new(1280.0, 720.0);
    for pixel in [Vec2::ZERO, Vec2::new(1279.0, 0.0), Vec2::new(311.5, 402.25)] {
        let uv = screen_uv(pixel, res, &params);
        let expected = Vec3::new(uv.x, uv.y, 2.0).normalize();
        let ray = build_ray(pixel, res, ViewAngles::ZERO, &params);
        assert!((ray - expected).length() < 1e-6);
    }
}

#[test]
fn center_column_ignores_width() {
    let params = StarfieldParams::default();
    let narrow = build_ray(
        Vec2::new(200.0, 123.0),
        Vec2::new(400.0, 600.0),
        ViewAngles::new(0.4, 0.2),
        &params,
    );
    let wide = build_ray(
        Vec2::new(400.0, 123.0),
        Vec2::new(800.0, 600.0),
        ViewAngles::new(0.4, 0.2),
        &params,
    );
    assert!((narrow - wide).length() < 1e-6);
}

#[test]
fn widening_the_image_does_not_stretch_it() {
    let params = StarfieldParams::default();
    let angles = ViewAngles::new(-0.3, 0.5);
    // Same offset from the horizontal center, different widths.
    for offset in [-150.0, -20.0, 75.0, 190.0] {
        let a = build_ray(
            Vec2::new(200.0 + offset, 50.0),
            Vec2::new(400.0, 600.0),
            angles,
            &params,
        );
        let b = build_ray(
            Vec2::new(400.0 + offset, 50.0),
            Vec2::new(800.0, 600.0),
            angles,
            &params,
        );
        assert!((a - b).length() < 1e-6, "offset {offset}");
    }
}

#[test]
fn scaling_the_whole_image_keeps_rays() {
    let params = StarfieldParams::default();
    let angles = ViewAngles::new(2.0, -0.7);
    let a = build_ray(
        Vec2::new(100.0, 80.0),
        Vec2::new(640.0, 480.0),
        angles,
        &params,
    );
    let b = build_ray(
        Vec2::new(200.0, 160.0),
        Vec2::new(1280.0, 960.0),
        angles,
        &params,
    );
    assert!((a - b).length() < 1e-6);
}

#[test]
fn every_layer_uses_a_different_cell() {
    let params = StarfieldParams::default();
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for _ in 0..500 {
        let ray = Vec3::new(
            rng.random_range(-1.0f32..1.0),
            rng.random_range(-1.0f32..1.0),
            rng.random_range(-1.0f32..1.0),
        )
        .try_normalize()
        .unwrap_or(Vec3::Z);
        let cells: Vec<Vec3> = (0..params.layer_count)
            .map(|layer| layer_cell(ray, layer, &params))
            .collect();
        for i in 0..cells.len() {
            for j in (i + 1)..cells.len() {
                assert_ne!(cells[i], cells[j], "layers {i} and {j} share a cell");
            }
        }
    }
}

#[test]
fn degenerate_radius_contributes_nothing() {
    let params = StarfieldParams::default();
    for hash in [Vec3::ONE, Vec3::ZERO, Vec3::new(0.99, 0.01, 0.99)] {
        let star = StarCandidate::from_hash(hash, &params);
        assert_eq!(star.radius, 0.0);
        for local in [star.center, Vec3::ZERO, Vec3::splat(-0.5)] {
            let f = star.falloff(local);
            assert!(f.is_finite());
            assert_eq!(f, 0.0);
        }
    }
}

#[test]
fn image_center_scenario() {
    let params = StarfieldParams::default();
    let frame = FrameInputs::new(800.0, 600.0, ViewAngles::ZERO);
    let ray = build_ray(
        Vec2::new(400.0, 300.0),
        frame.resolution,
        frame.view_angles,
        &params,
    );
    assert!((ray - Vec3::Z).length() < 1e-6);

    let first = star_field(Vec3::Z, &params);
    for _ in 0..10 {
        assert!((star_field(Vec3::Z, &params) - first).abs() <= 1e-6);
    }
    assert_eq!(
        pixel_brightness(Vec2::new(400.0, 300.0), &frame, &params),
        star_field(ray, &params)
    );
}

#[test]
fn neighbouring_pixels_are_not_smoothed() {
    let params = StarfieldParams::default();
    let frame = FrameInputs::new(800.0, 600.0, ViewAngles::ZERO);
    let row: Vec<Vec3> = (0..800)
        .map(|x| {
            build_ray(
                Vec2::new(x as f32 + 0.5, 300.5),
                frame.resolution,
                frame.view_angles,
                &params,
            )
        })
        .collect();

    let cell_changes = row
        .windows(2)
        .filter(|w| layer_cell(w[0], 0, &params) != layer_cell(w[1], 0, &params))
        .count();
    assert!(
        cell_changes > 100,
        "expected frequent cell changes along a row, got {cell_changes}"
    );

    // Across a cell boundary the brightness is independent of the neighbour:
    // a lit pixel may sit right next to a dark one.
    let brightness: Vec<f32> = row.iter().map(|r| star_field(*r, &params)).collect();
    let steps = brightness
        .windows(2)
        .filter(|w| (w[0] > 0.0) != (w[1] > 0.0))
        .count();
    let lit = brightness.iter().filter(|&&b| b > 0.0).count();
    assert!(lit < brightness.len(), "row should not be uniformly lit");
    if lit > 0 {
        assert!(steps > 0);
    }
}
