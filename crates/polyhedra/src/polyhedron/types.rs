//! Core mesh type with derived edge and directed-edge lookups.

use std::collections::{HashMap, VecDeque};
use std::ops::Range;

use crate::error::{PolyError, Result};
use crate::geometry::{centroid, newell_normal, Vec3};

/// Cyclic list of vertex indices.
pub type Face = Vec<usize>;
/// Unordered vertex pair stored as `(min, max)`.
pub type Edge = (usize, usize);

#[derive(Clone, Debug)]
pub struct Polyhedron {
    name: String,
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
    edges: Vec<Edge>,
    edge_face: HashMap<(usize, usize), usize>,
}

impl Polyhedron {
    /// Build a mesh and check closure, index range, and connectivity.
    pub fn new(name: impl Into<String>, vertices: Vec<Vec3>, faces: Vec<Face>) -> Result<Self> {
        let name = name.into();
        if faces.is_empty() {
            return Err(PolyError::Structural(format!("{name}: mesh has no faces")));
        }
        let mut edge_face = HashMap::new();
        for (fi, face) in faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(PolyError::Structural(format!(
                    "{name}: face {fi} has {} vertices",
                    face.len()
                )));
            }
            for (i, &a) in face.iter().enumerate() {
                let b = face[(i + 1) % face.len()];
                if a >= vertices.len() || b >= vertices.len() {
                    return Err(PolyError::Structural(format!(
                        "{name}: face {fi} references a missing vertex"
                    )));
                }
                if edge_face.insert((a, b), fi).is_some() {
                    return Err(PolyError::Structural(format!(
                        "{name}: directed edge ({a}, {b}) appears twice"
                    )));
                }
            }
        }
        let mut edges: Vec<Edge> = Vec::with_capacity(edge_face.len() / 2);
        for &(a, b) in edge_face.keys() {
            if !edge_face.contains_key(&(b, a)) {
                return Err(PolyError::Structural(format!(
                    "{name}: edge ({a}, {b}) borders only one face"
                )));
            }
            if a < b {
                edges.push((a, b));
            }
        }
        edges.sort_unstable();
        let poly = Self {
            name,
            vertices,
            faces,
            edges,
            edge_face,
        };
        poly.check_connected()?;
        Ok(poly)
    }

    fn check_connected(&self) -> Result<()> {
        let n = self.vertices.len();
        if n == 0 {
            return Err(PolyError::Structural(format!("{}: mesh is empty", self.name)));
        }
        let mut adj = vec![Vec::new(); n];
        for &(a, b) in &self.edges {
            adj[a].push(b);
            adj[b].push(a);
        }
        let mut seen = vec![false; n];
        let mut queue = VecDeque::from([0]);
        seen[0] = true;
        while let Some(v) = queue.pop_front() {
            for &w in &adj[v] {
                if !seen[w] {
                    seen[w] = true;
                    queue.push_back(w);
                }
            }
        }
        if seen.iter().any(|s| !s) {
            return Err(PolyError::Structural(format!(
                "{}: mesh has isolated parts",
                self.name
            )));
        }
        Ok(())
    }

    /// Keep only referenced vertices and renumber faces accordingly.
    pub fn compacted(name: impl Into<String>, vertices: &[Vec3], faces: Vec<Face>) -> Result<Self> {
        let mut remap = vec![usize::MAX; vertices.len()];
        let mut kept = Vec::new();
        let mut used: Vec<usize> = faces.iter().flatten().copied().collect();
        used.sort_unstable();
        used.dedup();
        for v in used {
            let p = vertices.get(v).ok_or_else(|| {
                PolyError::Structural(format!("vertex {v} out of range during compaction"))
            })?;
            remap[v] = kept.len();
            kept.push(*p);
        }
        let faces = faces
            .into_iter()
            .map(|f| f.into_iter().map(|v| remap[v]).collect())
            .collect();
        Self::new(name, kept, faces)
    }

    /// Same mesh under a new name.
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }
    #[inline]
    pub fn vertex_vectors(&self) -> &[Vec3] {
        &self.vertices
    }
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
    /// Valid face indices.
    #[inline]
    pub fn f_indices(&self) -> Range<usize> {
        0..self.faces.len()
    }

    /// Face that contains the directed edge `a → b`.
    #[inline]
    pub fn face_with_edge(&self, a: usize, b: usize) -> Option<usize> {
        self.edge_face.get(&(a, b)).copied()
    }

    pub fn face_points(&self, face: usize) -> Vec<Vec3> {
        self.faces[face].iter().map(|&v| self.vertices[v]).collect()
    }
    pub fn face_normal(&self, face: usize) -> Vec3 {
        newell_normal(&self.face_points(face))
    }
    pub fn face_centroid(&self, face: usize) -> Vec3 {
        centroid(&self.face_points(face))
    }

    /// Length of the first edge; uniformity is checked by the validity oracle.
    pub fn edge_length(&self) -> f64 {
        self.edges
            .first()
            .map(|&(a, b)| (self.vertices[a] - self.vertices[b]).norm())
            .unwrap_or(0.0)
    }

    /// Faces incident to each vertex, in face-index order.
    pub(crate) fn incident_faces(&self) -> Vec<Vec<usize>> {
        let mut inc = vec![Vec::new(); self.vertices.len()];
        for (fi, face) in self.faces.iter().enumerate() {
            for &v in face {
                inc[v].push(fi);
            }
        }
        inc
    }

    /// Index of the first face with the most sides.
    pub fn largest_face(&self) -> usize {
        let mut best = 0;
        for (i, f) in self.faces.iter().enumerate() {
            if f.len() > self.faces[best].len() {
                best = i;
            }
        }
        best
    }
}
