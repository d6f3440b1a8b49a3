//! Peaks: removable caps (pyramid, cupola, rotunda) sitting on a regular
//! polygon cross-section of the mesh.

use std::collections::{BTreeSet, HashMap, HashSet};

use super::types::Polyhedron;
use crate::cfg::EPS;
use crate::geometry::{newell_normal, regular_frame, Vec3};
use crate::relations::CapKind;

/// A cap that can be diminished or gyrated.
///
/// `boundary` is the cycle separating the cap from the rest of the mesh,
/// wound so that its normal points toward the cap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Peak {
    pub kind: CapKind,
    /// Vertices above the boundary plane, sorted.
    pub interior: Vec<usize>,
    /// Faces of the cap, sorted.
    pub faces: Vec<usize>,
    pub boundary: Vec<usize>,
}

impl Peak {
    pub fn boundary_points(&self, poly: &Polyhedron) -> Vec<Vec3> {
        self.boundary
            .iter()
            .map(|&v| poly.vertex_vectors()[v])
            .collect()
    }

    /// Unit normal of the boundary plane, pointing into the cap.
    pub fn normal(&self, poly: &Polyhedron) -> Vec3 {
        newell_normal(&self.boundary_points(poly))
    }
}

impl Polyhedron {
    /// All peaks of the current mesh: pyramids first (by apex), then cupolae
    /// and rotundae (by top face).
    pub fn peaks(&self) -> Vec<Peak> {
        let inc = self.incident_faces();
        let faces = self.faces();
        let mut out = Vec::new();

        for (v, fan) in inc.iter().enumerate() {
            if fan.iter().any(|&f| faces[f].len() != 3) {
                continue;
            }
            if let Some(kind) = CapKind::pyramid(fan.len()) {
                out.extend(self.make_peak(kind, vec![v], fan.clone()));
            }
        }

        for (fi, top) in faces.iter().enumerate() {
            let n = top.len();
            let adjacent: Option<Vec<usize>> = (0..n)
                .map(|i| self.face_with_edge(top[(i + 1) % n], top[i]))
                .collect();
            let Some(adjacent) = adjacent else {
                continue;
            };

            if let Some(kind) = CapKind::cupola(n) {
                if adjacent.iter().all(|&a| faces[a].len() == 4) {
                    let region: BTreeSet<usize> =
                        top.iter().flat_map(|&v| inc[v].iter().copied()).collect();
                    let lower: Vec<usize> = region
                        .iter()
                        .copied()
                        .filter(|f| *f != fi && !adjacent.contains(f))
                        .collect();
                    if lower.len() == n && lower.iter().all(|&f| faces[f].len() == 3) {
                        out.extend(self.make_peak(kind, top.clone(), region.into_iter().collect()));
                    }
                }
            }

            if n == 5 && adjacent.iter().all(|&a| faces[a].len() == 3) {
                let apexes: BTreeSet<usize> = adjacent
                    .iter()
                    .flat_map(|&a| faces[a].iter().copied())
                    .filter(|v| !top.contains(v))
                    .collect();
                let interior: BTreeSet<usize> = top.iter().copied().chain(apexes.iter().copied()).collect();
                let region: BTreeSet<usize> =
                    interior.iter().flat_map(|&v| inc[v].iter().copied()).collect();
                let mut sides: Vec<usize> = region.iter().map(|&f| faces[f].len()).collect();
                sides.sort_unstable();
                let rotunda_sides = [[3usize; 10].as_slice(), [5usize; 6].as_slice()].concat();
                if apexes.len() == 5 && sides == rotunda_sides {
                    out.extend(self.make_peak(
                        CapKind::R5,
                        interior.into_iter().collect(),
                        region.into_iter().collect(),
                    ));
                }
            }
        }
        out
    }

    fn make_peak(&self, kind: CapKind, mut interior: Vec<usize>, mut faces: Vec<usize>) -> Option<Peak> {
        let boundary = self.boundary_cycle(&faces)?;
        let pts: Vec<Vec3> = boundary.iter().map(|&v| self.vertex_vectors()[v]).collect();
        let frame = regular_frame(&pts)?;
        let above = interior
            .iter()
            .all(|&v| (self.vertex_vectors()[v] - frame.center).dot(&frame.normal) > EPS);
        if !above {
            return None;
        }
        let covered: HashSet<usize> = interior.iter().chain(boundary.iter()).copied().collect();
        if covered.len() == self.num_vertices() {
            // Nothing left once the cap is removed.
            return None;
        }
        interior.sort_unstable();
        faces.sort_unstable();
        Some(Peak {
            kind,
            interior,
            faces,
            boundary,
        })
    }

    /// Single outer cycle of a face set, following the faces' own winding.
    pub(crate) fn boundary_cycle(&self, faces: &[usize]) -> Option<Vec<usize>> {
        let directed: HashSet<(usize, usize)> = faces
            .iter()
            .flat_map(|&fi| {
                let f = &self.faces()[fi];
                (0..f.len()).map(move |i| (f[i], f[(i + 1) % f.len()]))
            })
            .collect();
        let mut next = HashMap::new();
        for &(a, b) in &directed {
            if !directed.contains(&(b, a)) && next.insert(a, b).is_some() {
                return None;
            }
        }
        let start = *next.keys().min()?;
        let mut cycle = vec![start];
        let mut v = *next.get(&start)?;
        while v != start {
            if cycle.len() >= next.len() {
                return None;
            }
            cycle.push(v);
            v = *next.get(&v)?;
        }
        (cycle.len() == next.len()).then_some(cycle)
    }
}
