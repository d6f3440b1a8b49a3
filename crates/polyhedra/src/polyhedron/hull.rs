//! Mesh construction from a bare point set.
//!
//! Only for equilateral convex inputs: edges are the closest vertex pairs, and
//! each face is the supporting plane through a vertex and two of its neighbours.

use std::collections::HashSet;

use tracing::trace;

use super::types::Polyhedron;
use crate::cfg::EPS;
use crate::error::{PolyError, Result};
use crate::geometry::{centroid, distance, Vec3};

impl Polyhedron {
    /// Facet an equilateral convex point set.
    ///
    /// Faces are oriented outward and ordered counterclockwise. Fails with a
    /// structural error if the recovered faces do not close up.
    pub fn from_vertices(name: impl Into<String>, points: Vec<Vec3>) -> Result<Self> {
        let name = name.into();
        let n = points.len();
        if n < 4 {
            return Err(PolyError::Structural(format!(
                "{name}: {n} points cannot bound a solid"
            )));
        }
        let mut shortest = f64::INFINITY;
        for i in 0..n {
            for j in i + 1..n {
                shortest = shortest.min(distance(&points[i], &points[j]));
            }
        }
        let mut adj = vec![Vec::new(); n];
        for i in 0..n {
            for j in i + 1..n {
                if (distance(&points[i], &points[j]) - shortest).abs() < 10.0 * EPS {
                    adj[i].push(j);
                    adj[j].push(i);
                }
            }
        }

        let mut seen: HashSet<Vec<usize>> = HashSet::new();
        let mut faces = Vec::new();
        for v in 0..n {
            for (k, &a) in adj[v].iter().enumerate() {
                for &b in &adj[v][k + 1..] {
                    let Some(normal) = supporting_normal(&points, v, a, b) else {
                        continue;
                    };
                    let offset = normal.dot(&points[v]);
                    // Ascending by construction, so it doubles as the dedup key.
                    let mut on: Vec<usize> = (0..n)
                        .filter(|&i| (normal.dot(&points[i]) - offset).abs() < EPS)
                        .collect();
                    if !seen.insert(on.clone()) {
                        continue;
                    }
                    order_around(&points, &mut on, &normal);
                    faces.push(on);
                }
            }
        }
        trace!(name = %name, vertices = n, faces = faces.len(), "hull");
        Self::new(name, points, faces)
    }
}

/// Outward normal of the plane through `v, a, b` if it supports the point set.
fn supporting_normal(points: &[Vec3], v: usize, a: usize, b: usize) -> Option<Vec3> {
    let raw = (points[a] - points[v]).cross(&(points[b] - points[v]));
    if raw.norm() < EPS {
        return None;
    }
    let normal = raw.normalize();
    let offset = normal.dot(&points[v]);
    let side = |p: &Vec3| normal.dot(p) - offset;
    if points.iter().all(|p| side(p) <= EPS) {
        Some(normal)
    } else if points.iter().all(|p| side(p) >= -EPS) {
        Some(-normal)
    } else {
        None
    }
}

/// Sort coplanar indices counterclockwise about `normal`.
fn order_around(points: &[Vec3], idx: &mut [usize], normal: &Vec3) {
    let pts: Vec<Vec3> = idx.iter().map(|&i| points[i]).collect();
    let c = centroid(&pts);
    let u = (points[idx[0]] - c).normalize();
    let w = normal.cross(&u);
    let angle = |i: usize| {
        let d = points[i] - c;
        w.dot(&d).atan2(u.dot(&d))
    };
    idx.sort_by(|&i, &j| angle(i).total_cmp(&angle(j)));
}
