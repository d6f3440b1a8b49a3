use anyhow::{Context, Result};
use polyhedra::classification::SolidInfo;
use polyhedra::relations::RelationEdge;
use polyhedra::Polyhedron;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON view of `SolidInfo`.
#[derive(Serialize)]
pub struct InfoView<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub solid_type: String,
    pub conway: &'a str,
    pub vertices: usize,
    pub edges: usize,
    pub faces: usize,
    pub vertex_configuration: BTreeMap<String, usize>,
    pub faces_by_type: &'a BTreeMap<String, usize>,
    pub volume: f64,
    pub surface_area: f64,
    pub sphericity: f64,
    pub symmetry: String,
    pub symmetry_name: &'a str,
    pub order: u32,
    pub alternate_names: &'a [&'static str],
}

impl<'a> From<&'a SolidInfo> for InfoView<'a> {
    fn from(info: &'a SolidInfo) -> Self {
        Self {
            name: &info.name,
            solid_type: info.solid_type.to_string(),
            conway: &info.conway,
            vertices: info.vertices,
            edges: info.edges,
            faces: info.faces,
            vertex_configuration: info
                .vertex_configuration
                .iter()
                .map(|(k, v)| (polyhedra::classification::display_vertex_config(k), *v))
                .collect(),
            faces_by_type: &info.faces_by_type,
            volume: info.volume,
            surface_area: info.surface_area,
            sphericity: info.sphericity,
            symmetry: info.symmetry.to_string(),
            symmetry_name: &info.symmetry_name,
            order: info.order,
            alternate_names: &info.alternate_names,
        }
    }
}

#[derive(Serialize)]
pub struct RelationView<'a> {
    pub op: String,
    pub to: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub using: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gyrate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
}

impl<'a> From<&'a RelationEdge> for RelationView<'a> {
    fn from(e: &'a RelationEdge) -> Self {
        Self {
            op: e.op.to_string(),
            to: &e.to,
            using: e.using.map(|c| c.to_string()),
            gyrate: e.gyrate.map(|g| g.to_string()),
            align: e.align.map(|a| a.to_string()),
        }
    }
}

pub fn mesh_json(poly: &Polyhedron) -> Value {
    let vertices: Vec<[f64; 3]> = poly
        .vertex_vectors()
        .iter()
        .map(|p| [p.x, p.y, p.z])
        .collect();
    json!({
        "name": poly.name(),
        "vertices": vertices,
        "faces": poly.faces(),
    })
}

/// Write `value` to `path` and a `<stem>.provenance.json` sidecar recording
/// the library version and the parameters that produced it.
pub fn write_with_sidecar(path: &Path, value: &Value, params: Value) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    let sidecar = sidecar_path(path);
    let doc = json!({
        "polyhedra_version": polyhedra::VERSION,
        "params": params,
        "outputs": [path.to_string_lossy()],
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("mesh"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyhedra::Catalog;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_the_mesh() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/out/cube.json")),
            Path::new("/tmp/out/cube.provenance.json")
        );
    }

    #[test]
    fn mesh_and_sidecar_are_written() {
        let catalog = Catalog::new().unwrap();
        let cube = catalog.get("cube").unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("cube.json");
        let sidecar = write_with_sidecar(&path, &mesh_json(cube), json!({"name": "cube"})).unwrap();
        let mesh: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(mesh["vertices"].as_array().unwrap().len(), 8);
        assert_eq!(mesh["faces"].as_array().unwrap().len(), 6);
        let doc: Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(doc["params"]["name"], "cube");
    }
}
