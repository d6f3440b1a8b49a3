//! Geometric primitives on `Vector3<f64>`.
//!
//! Small free functions only; the mesh types build on these.

use nalgebra::{Rotation3, Unit, Vector3};

use crate::cfg::EPS;

pub type Vec3 = Vector3<f64>;

/// Arithmetic mean of a point set. Zero for an empty slice.
pub fn centroid(points: &[Vec3]) -> Vec3 {
    if points.is_empty() {
        return Vec3::zeros();
    }
    points.iter().fold(Vec3::zeros(), |acc, p| acc + p) / points.len() as f64
}

/// Unit normal of a closed polygon via Newell's method.
///
/// Counterclockwise order (seen from the tip) yields the normal toward the
/// viewer. Returns zero for a degenerate polygon.
pub fn newell_normal(points: &[Vec3]) -> Vec3 {
    let mut n = Vec3::zeros();
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        n.x += (a.y - b.y) * (a.z + b.z);
        n.y += (a.z - b.z) * (a.x + b.x);
        n.z += (a.x - b.x) * (a.y + b.y);
    }
    n.try_normalize(0.0).unwrap_or_else(Vec3::zeros)
}

/// Rotate `p` by `angle` about the line through `center` along `axis`.
pub fn rotate_about(p: &Vec3, center: &Vec3, axis: &Vec3, angle: f64) -> Vec3 {
    let rot = Rotation3::from_axis_angle(&Unit::new_normalize(*axis), angle);
    center + rot * (p - center)
}

#[inline]
pub fn distance(a: &Vec3, b: &Vec3) -> f64 {
    (a - b).norm()
}

/// Plane of a regular polygon candidate.
#[derive(Clone, Copy, Debug)]
pub struct RegularFrame {
    pub center: Vec3,
    pub normal: Vec3,
    pub radius: f64,
}

/// Check that `points` are coplanar and concyclic about their centroid.
///
/// Orientation follows the input order (Newell normal).
pub fn regular_frame(points: &[Vec3]) -> Option<RegularFrame> {
    if points.len() < 3 {
        return None;
    }
    let center = centroid(points);
    let normal = newell_normal(points);
    if normal.norm() < 0.5 {
        return None;
    }
    let radius = distance(&points[0], &center);
    let regular = points.iter().all(|p| {
        (p - center).dot(&normal).abs() <= EPS && (distance(p, &center) - radius).abs() <= EPS
    });
    regular.then_some(RegularFrame {
        center,
        normal,
        radius,
    })
}

/// Orthonormal frame `(x, y, z)` with `x` along the projection of `x_hint`.
pub(crate) fn frame(x_hint: &Vec3, z: &Vec3) -> (Vec3, Vec3, Vec3) {
    let z = z.normalize();
    let x = (x_hint - z * x_hint.dot(&z)).normalize();
    (x, z.cross(&x), z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn newell_normal_follows_winding() {
        let sq = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        assert!((newell_normal(&sq) - Vec3::z()).norm() < 1e-12);
        let rev: Vec<Vec3> = sq.iter().rev().copied().collect();
        assert!((newell_normal(&rev) + Vec3::z()).norm() < 1e-12);
    }

    #[test]
    fn rotate_quarter_turn() {
        let p = rotate_about(&Vec3::new(2.0, 1.0, 0.0), &Vec3::new(1.0, 1.0, 0.0), &Vec3::z(), PI / 2.0);
        assert!((p - Vec3::new(1.0, 2.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn regular_frame_needs_planar_concyclic_points() {
        let rect = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(2.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        // A rectangle is concyclic; skewing one corner breaks it.
        assert!(regular_frame(&rect).is_some());
        let skew = [rect[0], rect[1], Vec3::new(2.0, 1.5, 0.0), rect[3]];
        assert!(regular_frame(&skew).is_none());
        let bent = [rect[0], rect[1], Vec3::new(2.0, 1.0, 0.3), rect[3]];
        assert!(regular_frame(&bent).is_none());
    }
}
