//! Metric and combinatorial accessors.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use super::types::{Edge, Polyhedron};
use crate::cfg::EPS;
use crate::error::{PolyError, Result};
use crate::geometry::{centroid, Vec3};

impl Polyhedron {
    /// Signed volume from a fan of tetrahedra around the vertex centroid.
    pub fn volume(&self) -> f64 {
        let c = centroid(self.vertex_vectors());
        let mut total = 0.0;
        for fi in self.f_indices() {
            let p = self.face_points(fi);
            for i in 1..p.len() - 1 {
                total += (p[0] - c).dot(&(p[i] - c).cross(&(p[i + 1] - c))) / 6.0;
            }
        }
        total
    }

    pub fn surface_area(&self) -> f64 {
        self.f_indices()
            .map(|fi| {
                let p = self.face_points(fi);
                let n = self.face_normal(fi);
                let sum = p
                    .iter()
                    .enumerate()
                    .fold(Vec3::zeros(), |acc, (i, a)| {
                        acc + a.cross(&p[(i + 1) % p.len()])
                    });
                sum.dot(&n).abs() / 2.0
            })
            .sum()
    }

    /// `36πV² / S³`; a sphere scores 1.
    pub fn sphericity(&self) -> f64 {
        let v = self.volume();
        let s = self.surface_area();
        36.0 * PI * v * v / s.powi(3)
    }

    /// Interior angle between the two faces sharing `edge`.
    ///
    /// Values above π mark a reflex edge. Fails if the edge does not border
    /// exactly two faces.
    pub fn dihedral_angle(&self, edge: Edge) -> Result<f64> {
        let (a, b) = edge;
        let (Some(f1), Some(f2)) = (self.face_with_edge(a, b), self.face_with_edge(b, a)) else {
            return Err(PolyError::Structural(format!(
                "{}: ({a}, {b}) does not border two faces",
                self.name()
            )));
        };
        let n1 = self.face_normal(f1);
        let n2 = self.face_normal(f2);
        let angle = n1.dot(&n2).clamp(-1.0, 1.0).acos();
        let verts = self.vertex_vectors();
        let off_edge = self.faces()[f2]
            .iter()
            .find(|&&v| v != a && v != b)
            .map(|&v| verts[v] - verts[a]);
        match off_edge {
            Some(d) if n1.dot(&d) > EPS => Ok(PI + angle),
            _ => Ok(PI - angle),
        }
    }

    /// Faces around vertex `v` in cyclic order.
    pub fn vertex_faces(&self, v: usize) -> Result<Vec<usize>> {
        let start = self
            .f_indices()
            .find(|&fi| self.faces()[fi].contains(&v))
            .ok_or_else(|| {
                PolyError::Structural(format!("{}: vertex {v} has no faces", self.name()))
            })?;
        let mut out = Vec::new();
        let mut fi = start;
        loop {
            out.push(fi);
            let face = &self.faces()[fi];
            let i = face.iter().position(|&x| x == v).unwrap_or(0);
            let next = face[(i + 1) % face.len()];
            fi = self.face_with_edge(next, v).ok_or_else(|| {
                PolyError::Structural(format!("{}: open fan at vertex {v}", self.name()))
            })?;
            if fi == start {
                return Ok(out);
            }
            if out.len() > self.num_faces() {
                return Err(PolyError::Structural(format!(
                    "{}: fan at vertex {v} does not close",
                    self.name()
                )));
            }
        }
    }

    /// Canonical cyclic face-degree signature per vertex, counted.
    ///
    /// The key is the lexicographically smallest rotation of the degree
    /// sequence or its reverse, e.g. `"3.4.3.4"`.
    pub fn vertex_configuration(&self) -> Result<BTreeMap<String, usize>> {
        let mut counts = BTreeMap::new();
        for v in 0..self.num_vertices() {
            let degrees: Vec<usize> = self
                .vertex_faces(v)?
                .into_iter()
                .map(|fi| self.faces()[fi].len())
                .collect();
            *counts.entry(canonical_cycle(&degrees)).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// Polygon side count → number of faces.
    pub fn num_faces_by_sides(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for f in self.faces() {
            *counts.entry(f.len()).or_insert(0) += 1;
        }
        counts
    }
}

fn canonical_cycle(seq: &[usize]) -> String {
    let reversed: Vec<usize> = seq.iter().rev().copied().collect();
    let best = [seq, reversed.as_slice()]
        .into_iter()
        .flat_map(|s| (0..s.len()).map(move |r| [&s[r..], &s[..r]].concat()))
        .min()
        .unwrap_or_default();
    best.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::canonical_cycle;

    #[test]
    fn canonical_cycle_picks_smallest_rotation_either_direction() {
        assert_eq!(canonical_cycle(&[4, 3, 4, 3]), "3.4.3.4");
        assert_eq!(canonical_cycle(&[5, 3, 3, 4]), "3.3.4.5");
        assert_eq!(canonical_cycle(&[4, 3, 3, 5]), "3.3.4.5");
    }
}
