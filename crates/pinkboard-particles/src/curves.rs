//! Heart curve and easing

use pinkboard_core::Point;

/// Point on the heart curve at parameter `t` (y up, centred near the origin).
///
/// The outline spans roughly x ∈ [-160, 160], y ∈ [-145, 100] for
/// `t ∈ [-π, π]`.
pub fn point_on_heart(t: f32) -> Point {
    Point::new(
        160.0 * t.sin().powi(3),
        130.0 * t.cos() - 50.0 * (2.0 * t).cos() - 20.0 * (3.0 * t).cos()
            - 10.0 * (4.0 * t).cos()
            + 25.0,
    )
}

/// `(t - 1)³ + 1`: fast growth that settles at 1
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t - 1.0;
    t * t * t + 1.0
}

/// Sample the heart curve from `start` to `end` inclusive, every `step`.
///
/// Parameters are computed as `start + i * step` so long outlines do not
/// accumulate rounding drift. An empty vector is returned for a non-positive
/// step or an empty range.
pub fn heart_outline(start: f32, end: f32, step: f32) -> Vec<Point> {
    if step <= 0.0 || end < start {
        return Vec::new();
    }
    let count = ((end - start) / step).floor() as usize + 1;
    (0..count)
        .map(|i| point_on_heart(start + i as f32 * step))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn heart_is_mirror_symmetric() {
        for i in 0..=200 {
            let t = -PI + i as f32 * (2.0 * PI / 200.0);
            let a = point_on_heart(t);
            let b = point_on_heart(-t);
            assert!((a.x + b.x).abs() < 1e-3, "x not odd at t={t}");
            assert!((a.y - b.y).abs() < 1e-3, "y not even at t={t}");
        }
    }

    #[test]
    fn heart_known_points() {
        let top = point_on_heart(0.0);
        assert!(top.x.abs() < 1e-6);
        assert!((top.y - 75.0).abs() < 1e-4);

        let bottom = point_on_heart(PI);
        assert!(bottom.x.abs() < 1e-3);
        assert!((bottom.y - (-145.0)).abs() < 1e-3);

        let side = point_on_heart(PI / 2.0);
        assert!((side.x - 160.0).abs() < 1e-3);
    }

    #[test]
    fn heart_never_passes_through_origin() {
        // Emission normalizes sampled points, so the curve must avoid zero
        for i in 0..=1000 {
            let t = -PI + i as f32 * (2.0 * PI / 1000.0);
            assert!(point_on_heart(t).length() > 1.0);
        }
    }

    #[test]
    fn ease_out_cubic_endpoints() {
        assert!(ease_out_cubic(0.0).abs() < 1e-6);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < 1e-6);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
        // Monotonic over the unit interval
        let mut prev = ease_out_cubic(0.0);
        for i in 1..=100 {
            let v = ease_out_cubic(i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn outline_sample_counts() {
        assert_eq!(heart_outline(0.0, 1.0, 0.25).len(), 5);
        assert_eq!(heart_outline(0.0, 2.0 * PI, 0.02).len(), 315);
        assert!(heart_outline(1.0, 0.0, 0.1).is_empty());
        assert!(heart_outline(0.0, 1.0, 0.0).is_empty());
    }
}
