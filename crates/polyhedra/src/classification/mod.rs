//! Classification: symmetry group and order from a solid's name, plus the
//! normalised metrics shown alongside it.
//!
//! Symmetry follows Schoenflies notation as `group` letter plus subscript
//! (`O` + `h`, `C` + `5v`, `D` + `4d`). Platonic and Archimedean solids are
//! classified by name family, prisms and antiprisms by their polygon, and
//! Johnson solids by table.

pub mod names;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{PolyError, Result};
use crate::polyhedron::Polyhedron;

use names::{adjective_for, get_type, johnson_index, prism_sides, unescape_name, SolidType};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    T,
    O,
    I,
    C,
    D,
}

impl Group {
    fn letter(self) -> char {
        match self {
            Group::T => 'T',
            Group::O => 'O',
            Group::I => 'I',
            Group::C => 'C',
            Group::D => 'D',
        }
    }
}

/// Point group: family letter and subscript (`"h"`, `"5v"`, `"s"`, `""`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Symmetry {
    pub group: Group,
    pub sub: String,
}

impl Symmetry {
    pub fn new(group: Group, sub: impl Into<String>) -> Self {
        Self {
            group,
            sub: sub.into(),
        }
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.group.letter(), self.sub)
    }
}

impl FromStr for Symmetry {
    type Err = PolyError;
    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let group = match chars.next() {
            Some('T') => Group::T,
            Some('O') => Group::O,
            Some('I') => Group::I,
            Some('C') => Group::C,
            Some('D') => Group::D,
            _ => return Err(PolyError::InvalidGroup(s.to_string())),
        };
        Ok(Self::new(group, chars.as_str()))
    }
}

/// Johnson symmetry, J1 through J92.
const JOHNSON_SYMMETRY: [&str; 92] = [
    "C4v", "C5v", "C3v", "C4v", "C5v", "C5v", "C3v", "C4v", "C5v", "C4v", //
    "C5v", "D3h", "D5h", "D3h", "D4h", "D5h", "D4d", "C3v", "C4v", "C5v", //
    "C5v", "C3v", "C4v", "C5v", "C5v", "D2d", "D3h", "D4h", "D4d", "D5h", //
    "D5d", "C5v", "C5v", "D5h", "D3h", "D3d", "D4d", "D5h", "D5d", "C5v", //
    "C5v", "D5h", "D5d", "D3", "D4", "D5", "C5", "D5", "C2v", "C2v", //
    "D3h", "C2v", "C2v", "C2v", "D2h", "C2v", "D3h", "C5v", "D5d", "C2v", //
    "C3v", "C2v", "C3v", "C3v", "C3v", "C4v", "D4h", "C5v", "D5d", "C2v", //
    "C3v", "C5v", "D5d", "C2v", "C3v", "C5v", "C5v", "Cs", "Cs", "D5d", //
    "C2v", "Cs", "C3v", "D2d", "D4d", "C2v", "Cs", "C2v", "C2v", "D2d", //
    "D2h", "C3v",
];

/// Point group of a named solid.
///
/// Platonic and Archimedean solids take the full group of their family,
/// except the snubs which keep only the rotations. The tetrahedral members
/// report `Td` rather than `Th`: neither has an inversion centre. Both groups
/// have order 24, so `get_order` is unaffected by the choice. Only the pure
/// rotation groups (`T`, `O`, `I`) are named chiral by `get_symmetry_name`, so
/// `Td` reads as plain "tetrahedral".
pub fn get_symmetry(name: &str) -> Result<Symmetry> {
    let name = unescape_name(name);
    let solid_type = get_type(&name)?;
    match solid_type {
        SolidType::Platonic | SolidType::Archimedean => {
            let group = if name.contains("tetra") {
                Group::T
            } else if name.contains("cub") || name.contains("oct") {
                Group::O
            } else if name.contains("icos") || name.contains("dodec") {
                Group::I
            } else {
                return Err(PolyError::InvalidGroup(name));
            };
            let sub = if name.contains("snub") {
                ""
            } else if group == Group::T {
                // Tetrahedral solids have no inversion centre: Td, not Th.
                "d"
            } else {
                "h"
            };
            Ok(Symmetry::new(group, sub))
        }
        SolidType::Prism | SolidType::Antiprism => {
            let n = prism_sides(&name).ok_or_else(|| PolyError::InvalidGroup(name.clone()))?;
            let kind = if solid_type == SolidType::Prism { "h" } else { "d" };
            Ok(Symmetry::new(Group::D, format!("{n}{kind}")))
        }
        SolidType::Johnson => {
            let j = johnson_index(&name).ok_or_else(|| PolyError::UnknownSolid(name.clone()))?;
            JOHNSON_SYMMETRY[j - 1].parse()
        }
    }
}

/// Leading integer of a subscript such as `"5v"`.
fn sub_number(sym: &Symmetry, suffix: &str) -> Result<u32> {
    sym.sub
        .strip_suffix(suffix)
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| PolyError::InvalidGroup(sym.to_string()))
}

/// Number of elements in the point group.
///
/// Cyclic groups count both handednesses of the solid: `Cn` reports `2n`,
/// the same as `Cnv`, so the gyroelongated pentagonal cupolarotunda (`C5`)
/// reports 10.
pub fn get_order(sym: &Symmetry) -> Result<u32> {
    match sym.group {
        Group::T | Group::O | Group::I => {
            let base = match sym.group {
                Group::T => 12,
                Group::O => 24,
                _ => 60,
            };
            match sym.sub.as_str() {
                "h" | "d" => Ok(base * 2),
                "" => Ok(base),
                _ => Err(PolyError::InvalidGroup(sym.to_string())),
            }
        }
        Group::C => match sym.sub.as_str() {
            "s" => Ok(2),
            s if s.ends_with('v') => Ok(2 * sub_number(sym, "v")?),
            _ => Ok(2 * sub_number(sym, "")?),
        },
        Group::D => match sym.sub.chars().last() {
            Some('h') => Ok(4 * sub_number(sym, "h")?),
            Some('d') => Ok(4 * sub_number(sym, "d")?),
            _ => Ok(2 * sub_number(sym, "")?),
        },
    }
}

/// Descriptive name: "octahedral", "pentagonal pyramidal", "bilateral", ...
pub fn get_symmetry_name(sym: &Symmetry) -> Result<String> {
    let adjective = |n: u32| adjective_for(n).ok_or_else(|| PolyError::InvalidGroup(sym.to_string()));
    match sym.group {
        Group::T | Group::O | Group::I => {
            let base = match sym.group {
                Group::T => "tetrahedral",
                Group::O => "octahedral",
                _ => "icosahedral",
            };
            let chiral = if sym.sub.is_empty() { "chiral " } else { "" };
            Ok(format!("{chiral}{base}"))
        }
        Group::C => match sym.sub.as_str() {
            "s" => Ok("bilateral".to_string()),
            "2v" => Ok("biradial".to_string()),
            s => {
                let n = sub_number(sym, if s.ends_with('v') { "v" } else { "" })?;
                Ok(format!("{} pyramidal", adjective(n)?))
            }
        },
        Group::D => match sym.sub.chars().last() {
            Some('h') => Ok(format!("{} prismatic", adjective(sub_number(sym, "h")?)?)),
            Some('d') => Ok(format!("{} antiprismatic", adjective(sub_number(sym, "d")?)?)),
            _ => Ok(format!("{} dihedral", adjective(sub_number(sym, "")?)?)),
        },
    }
}

/// Run-length encode a vertex configuration: `"3.3.3.3.4"` → `[("3", 4), ("4", 1)]`.
pub fn grouped_vertex_config(config: &str) -> Vec<(&str, usize)> {
    config.split('.').fold(Vec::new(), |mut runs, kind| {
        match runs.last_mut() {
            Some((last, count)) if *last == kind => *count += 1,
            _ => runs.push((kind, 1)),
        }
        runs
    })
}

/// Compact display form, e.g. `"3.3.3.3.4"` → `"3^4.4"`.
pub fn display_vertex_config(config: &str) -> String {
    grouped_vertex_config(config)
        .into_iter()
        .map(|(kind, count)| {
            if count == 1 {
                kind.to_string()
            } else {
                format!("{kind}^{count}")
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Everything the info view shows for one solid.
#[derive(Clone, Debug, PartialEq)]
pub struct SolidInfo {
    pub name: String,
    pub solid_type: SolidType,
    pub conway: String,
    pub vertices: usize,
    pub edges: usize,
    pub faces: usize,
    pub vertex_configuration: BTreeMap<String, usize>,
    /// Polygon name → count.
    pub faces_by_type: BTreeMap<String, usize>,
    /// In units of edge length cubed.
    pub volume: f64,
    /// In units of edge length squared.
    pub surface_area: f64,
    pub sphericity: f64,
    pub symmetry: Symmetry,
    pub symmetry_name: String,
    pub order: u32,
    pub alternate_names: Vec<&'static str>,
}

pub fn describe(poly: &Polyhedron) -> Result<SolidInfo> {
    let name = unescape_name(poly.name());
    let symmetry = get_symmetry(&name)?;
    let s = poly.edge_length();
    let faces_by_type = poly
        .num_faces_by_sides()
        .into_iter()
        .map(|(sides, count)| {
            let label = names::polygon_name(sides)
                .map(str::to_string)
                .unwrap_or_else(|| format!("{sides}-gon"));
            (label, count)
        })
        .collect();
    Ok(SolidInfo {
        solid_type: get_type(&name)?,
        conway: names::to_conway_notation(&name)?,
        vertices: poly.num_vertices(),
        edges: poly.num_edges(),
        faces: poly.num_faces(),
        vertex_configuration: poly.vertex_configuration()?,
        faces_by_type,
        volume: round3(poly.volume() / s.powi(3)),
        surface_area: round3(poly.surface_area() / s.powi(2)),
        sphericity: round3(poly.sphericity()),
        symmetry_name: get_symmetry_name(&symmetry)?,
        order: get_order(&symmetry)?,
        symmetry,
        alternate_names: names::get_alternate_names(&name),
        name,
    })
}

#[cfg(test)]
mod tests;
