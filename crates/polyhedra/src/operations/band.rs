//! Prism/antiprism bands: insertion (`P`, `A`) and removal (`~P`, `~A`).

use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use tracing::{debug, trace};

use super::no_target;
use crate::cfg::EPS;
use crate::error::Result;
use crate::geometry::{centroid, distance, newell_normal, rotate_about, Vec3};
use crate::polyhedron::{Face, Peak, Polyhedron};
use crate::relations::Operation;

/// Where to cut: the cycle to split along, the faces above it, and the
/// vertices above it.
struct CutSite {
    cycle: Vec<usize>,
    moving_faces: HashSet<usize>,
    moving_vertices: Vec<usize>,
}

/// First peak's boundary if there is one, otherwise the largest face.
fn cut_site(poly: &Polyhedron) -> CutSite {
    match poly.peaks().into_iter().next() {
        Some(peak) => CutSite {
            cycle: peak.boundary,
            moving_faces: peak.faces.into_iter().collect(),
            moving_vertices: peak.interior,
        },
        None => {
            let face = poly.largest_face();
            CutSite {
                cycle: poly.faces()[face].clone(),
                moving_faces: HashSet::from([face]),
                moving_vertices: Vec::new(),
            }
        }
    }
}

/// Split along the cut cycle and insert a band of squares (prism) or
/// alternating triangles (antiprism).
pub(super) fn elongate(poly: &Polyhedron, antiprism: bool, to: &str) -> Result<Polyhedron> {
    let site = cut_site(poly);
    let verts = poly.vertex_vectors();
    let pts: Vec<Vec3> = site.cycle.iter().map(|&v| verts[v]).collect();
    let center = centroid(&pts);
    let normal = newell_normal(&pts);
    let s = poly.edge_length();
    let m = site.cycle.len();

    let (angle, height) = if antiprism {
        let angle = PI / m as f64;
        let d = distance(&rotate_about(&pts[0], &center, &normal, angle), &pts[0]);
        (angle, (s * s - d * d).sqrt())
    } else {
        (0.0, s)
    };
    let lift = |p: &Vec3| rotate_about(p, &center, &normal, angle) + normal * height;

    let mut vertices = verts.to_vec();
    let mut copy: HashMap<usize, usize> = HashMap::new();
    for &v in &site.cycle {
        copy.insert(v, vertices.len());
        vertices.push(lift(&verts[v]));
    }
    for &v in &site.moving_vertices {
        vertices[v] = lift(&verts[v]);
    }

    let mut faces: Vec<Face> = poly
        .faces()
        .iter()
        .enumerate()
        .map(|(i, f)| {
            if site.moving_faces.contains(&i) {
                f.iter().map(|v| *copy.get(v).unwrap_or(v)).collect()
            } else {
                f.clone()
            }
        })
        .collect();
    for i in 0..m {
        let (a, b) = (site.cycle[i], site.cycle[(i + 1) % m]);
        let (a2, b2) = (copy[&a], copy[&b]);
        if antiprism {
            faces.push(vec![a, b, a2]);
            faces.push(vec![a2, b, b2]);
        } else {
            faces.push(vec![a, b, b2, a2]);
        }
    }
    debug!(name = poly.name(), antiprism, cycle = m, to, "elongate");
    Polyhedron::new(to, vertices, faces)
}

/// Band faces directly beneath a peak, with the far cycle and the offset
/// between the two cycles.
struct Band {
    faces: HashSet<usize>,
    lower: Vec<usize>,
    center: Vec3,
    normal: Vec3,
    height: f64,
}

fn find_band(poly: &Polyhedron, peak: &Peak, antiprism: bool) -> Option<Band> {
    let cycle = &peak.boundary;
    let m = cycle.len();
    let verts = poly.vertex_vectors();
    let pts = peak.boundary_points(poly);
    let center = centroid(&pts);
    let normal = newell_normal(&pts);

    let mut faces = HashSet::new();
    let mut lower = Vec::with_capacity(m);
    for i in 0..m {
        let (a, b) = (cycle[i], cycle[(i + 1) % m]);
        let outer = poly.face_with_edge(b, a)?;
        let f = &poly.faces()[outer];
        if antiprism {
            if f.len() != 3 {
                return None;
            }
            lower.push(*f.iter().find(|&&v| v != a && v != b)?);
        } else {
            if f.len() != 4 {
                return None;
            }
            let j = f.iter().position(|&v| v == b)?;
            lower.push(f[(j + 2) % 4]);
        }
        faces.insert(outer);
    }
    if lower.iter().collect::<HashSet<_>>().len() != m {
        return None;
    }
    if antiprism {
        // Triangles pointing up between consecutive lower vertices.
        for i in 0..m {
            let (x, y, b) = (lower[i], lower[(i + 1) % m], cycle[(i + 1) % m]);
            let fi = poly.face_with_edge(b, x)?;
            let mut got = poly.faces()[fi].clone();
            let mut want = vec![x, b, y];
            got.sort_unstable();
            want.sort_unstable();
            if got != want {
                return None;
            }
            faces.insert(fi);
        }
    }

    let lower_pts: Vec<Vec3> = lower.iter().map(|&v| verts[v]).collect();
    let lower_center = centroid(&lower_pts);
    let radius = distance(&lower_pts[0], &lower_center);
    let regular = lower_pts.iter().all(|p| {
        (p - lower_center).dot(&normal).abs() <= EPS
            && (distance(p, &lower_center) - radius).abs() <= EPS
    });
    let offset = lower_center - center;
    if !regular || offset.cross(&normal).norm() > EPS || offset.dot(&normal) >= 0.0 {
        return None;
    }
    Some(Band {
        faces,
        lower,
        center,
        normal,
        height: offset.norm(),
    })
}

/// Remove the band under some peak and lower the peak onto the far cycle.
pub(super) fn shorten(poly: &Polyhedron, antiprism: bool, to: &str) -> Result<Polyhedron> {
    let verts = poly.vertex_vectors();
    for peak in poly.peaks() {
        let Some(band) = find_band(poly, &peak, antiprism) else {
            trace!(name = poly.name(), kind = %peak.kind, "no band under peak");
            continue;
        };
        let m = peak.boundary.len() as f64;
        let angles = if antiprism { vec![PI / m, -PI / m] } else { vec![0.0] };
        for angle in angles {
            let sink = |p: &Vec3| {
                rotate_about(p, &band.center, &band.normal, angle) - band.normal * band.height
            };
            let mut landing: HashMap<usize, usize> = HashMap::new();
            for &v in &peak.boundary {
                let q = sink(&verts[v]);
                let hit = band
                    .lower
                    .iter()
                    .copied()
                    .find(|&x| distance(&verts[x], &q) <= EPS);
                match hit {
                    Some(x) => {
                        landing.insert(v, x);
                    }
                    None => break,
                }
            }
            if landing.len() != peak.boundary.len() {
                continue;
            }
            let mut vertices = verts.to_vec();
            for &v in &peak.interior {
                vertices[v] = sink(&verts[v]);
            }
            let faces: Vec<Face> = poly
                .faces()
                .iter()
                .enumerate()
                .filter(|(i, _)| !band.faces.contains(i))
                .map(|(_, f)| f.iter().map(|v| *landing.get(v).unwrap_or(v)).collect())
                .collect();
            debug!(name = poly.name(), antiprism, kind = %peak.kind, to, "shorten");
            return Polyhedron::compacted(to, &vertices, faces);
        }
    }
    let op = if antiprism {
        Operation::ShortenAntiprism
    } else {
        Operation::ShortenPrism
    };
    Err(no_target(poly, op, "no band beneath any peak".to_string()))
}
