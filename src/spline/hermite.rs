//! Catmull-Rom sampling over the cubic Hermite basis.
//!
//! A Catmull-Rom segment `p0 -> p1` is a Hermite curve whose tangents come
//! from the neighbouring control points: `m[k] = (p[k+1] - p[k-1]) / 2`.

use bevy::prelude::*;

use crate::geometry::side_normal;

use super::error::Result;
use super::types::{SplineConfig, SplinePoint, SplineTable};

/// Hermite curve position at `t` in `[0, 1]`.
pub fn hermite_position(p0: Vec3, p1: Vec3, m0: Vec3, m1: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;

    (2.0 * t3 - 3.0 * t2 + 1.0) * p0
        + (t3 - 2.0 * t2 + t) * m0
        + (-2.0 * t3 + 3.0 * t2) * p1
        + (t3 - t2) * m1
}

/// Unnormalized derivative of [`hermite_position`] with respect to `t`.
pub fn hermite_derivative(p0: Vec3, p1: Vec3, m0: Vec3, m1: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;

    (6.0 * t2 - 6.0 * t) * p0
        + (3.0 * t2 - 4.0 * t + 1.0) * m0
        + (-6.0 * t2 + 6.0 * t) * p1
        + (3.0 * t2 - 2.0 * t) * m1
}

/// Unit tangent at `t`, or zero if the derivative vanishes.
pub fn hermite_tangent(p0: Vec3, p1: Vec3, m0: Vec3, m1: Vec3, t: f32) -> Vec3 {
    hermite_derivative(p0, p1, m0, m1, t).normalize_or_zero()
}

/// Evaluate position, tangent and normal of a segment at `t`.
pub fn evaluate(p0: Vec3, p1: Vec3, m0: Vec3, m1: Vec3, t: f32) -> SplinePoint {
    let position = hermite_position(p0, p1, m0, m1, t);
    let tangent = hermite_tangent(p0, p1, m0, m1, t);
    SplinePoint::new(position, tangent, side_normal(tangent))
}

/// Tangent estimates `(m0, m1)` for segment `k` of `points`.
///
/// Open paths fall back to one-sided differences at the ends. Closed paths
/// wrap neighbour indices in both directions. Every estimate is halved.
pub fn segment_tangents(points: &[Vec3], k: usize, closed_loop: bool) -> (Vec3, Vec3) {
    let n = points.len();
    let p0 = points[k];
    let p1 = points[(k + 1) % n];

    let m0 = if closed_loop {
        p1 - points[(k + n - 1) % n]
    } else if k == 0 {
        p1 - p0
    } else {
        p1 - points[k - 1]
    };

    let m1 = if closed_loop {
        points[(k + 2) % n] - p0
    } else if k + 2 < n {
        points[k + 2] - p0
    } else {
        p1 - p0
    };

    (m0 * 0.5, m1 * 0.5)
}

/// Sample every segment of `points` into a new table.
///
/// Each segment contributes `config.resolution` samples over `[0, 1)`. The
/// final segment (or the loop-closing one) spreads its samples over `[0, 1]`
/// instead, so the table ends exactly on the last point (or back on the
/// first point for a closed loop).
///
/// `points` must not be empty and `config` must be valid. Fails when the
/// table would be too large to allocate.
pub fn build_table(points: &[Vec3], config: &SplineConfig) -> Result<SplineTable> {
    let n = points.len();
    let resolution = config.resolution;
    let segments = config.segment_count(n);
    let mut samples = Vec::with_capacity(config.sample_count(n)?);

    for k in 0..segments {
        let p0 = points[k];
        let p1 = points[(k + 1) % n];
        let (m0, m1) = segment_tangents(points, k, config.closed_loop);

        let divisor = if k + 1 == segments {
            resolution - 1
        } else {
            resolution
        };

        for i in 0..resolution {
            let t = i as f32 / divisor as f32;
            samples.push(evaluate(p0, p1, m0, m1, t));
        }
    }

    Ok(SplineTable::new(samples, config.closed_loop))
}
