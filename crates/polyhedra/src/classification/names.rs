//! Solid names: families, escaping, Conway notation, alternates.

use std::fmt;

use crate::error::{PolyError, Result};

pub const PLATONIC: [(&str, &str); 5] = [
    ("tetrahedron", "T"),
    ("cube", "C"),
    ("octahedron", "O"),
    ("dodecahedron", "D"),
    ("icosahedron", "I"),
];

pub const ARCHIMEDEAN: [(&str, &str); 13] = [
    ("truncated tetrahedron", "tT"),
    ("cuboctahedron", "aC"),
    ("truncated cube", "tC"),
    ("truncated octahedron", "tO"),
    ("rhombicuboctahedron", "eC"),
    ("truncated cuboctahedron", "bC"),
    ("snub cube", "sC"),
    ("icosidodecahedron", "aD"),
    ("truncated dodecahedron", "tD"),
    ("truncated icosahedron", "tI"),
    ("rhombicosidodecahedron", "eD"),
    ("truncated icosidodecahedron", "bD"),
    ("snub dodecahedron", "sD"),
];

pub const PRISMS: [&str; 5] = [
    "triangular prism",
    "pentagonal prism",
    "hexagonal prism",
    "octagonal prism",
    "decagonal prism",
];

pub const ANTIPRISMS: [&str; 5] = [
    "square antiprism",
    "pentagonal antiprism",
    "hexagonal antiprism",
    "octagonal antiprism",
    "decagonal antiprism",
];

/// J1 through J92, in order.
pub const JOHNSON_SOLIDS: [&str; 92] = [
    "square pyramid",
    "pentagonal pyramid",
    "triangular cupola",
    "square cupola",
    "pentagonal cupola",
    "pentagonal rotunda",
    "elongated triangular pyramid",
    "elongated square pyramid",
    "elongated pentagonal pyramid",
    "gyroelongated square pyramid",
    "gyroelongated pentagonal pyramid",
    "triangular bipyramid",
    "pentagonal bipyramid",
    "elongated triangular bipyramid",
    "elongated square bipyramid",
    "elongated pentagonal bipyramid",
    "gyroelongated square bipyramid",
    "elongated triangular cupola",
    "elongated square cupola",
    "elongated pentagonal cupola",
    "elongated pentagonal rotunda",
    "gyroelongated triangular cupola",
    "gyroelongated square cupola",
    "gyroelongated pentagonal cupola",
    "gyroelongated pentagonal rotunda",
    "gyrobifastigium",
    "triangular orthobicupola",
    "square orthobicupola",
    "square gyrobicupola",
    "pentagonal orthobicupola",
    "pentagonal gyrobicupola",
    "pentagonal orthocupolarotunda",
    "pentagonal gyrocupolarotunda",
    "pentagonal orthobirotunda",
    "elongated triangular orthobicupola",
    "elongated triangular gyrobicupola",
    "elongated square gyrobicupola",
    "elongated pentagonal orthobicupola",
    "elongated pentagonal gyrobicupola",
    "elongated pentagonal orthocupolarotunda",
    "elongated pentagonal gyrocupolarotunda",
    "elongated pentagonal orthobirotunda",
    "elongated pentagonal gyrobirotunda",
    "gyroelongated triangular bicupola",
    "gyroelongated square bicupola",
    "gyroelongated pentagonal bicupola",
    "gyroelongated pentagonal cupolarotunda",
    "gyroelongated pentagonal birotunda",
    "augmented triangular prism",
    "biaugmented triangular prism",
    "triaugmented triangular prism",
    "augmented pentagonal prism",
    "biaugmented pentagonal prism",
    "augmented hexagonal prism",
    "parabiaugmented hexagonal prism",
    "metabiaugmented hexagonal prism",
    "triaugmented hexagonal prism",
    "augmented dodecahedron",
    "parabiaugmented dodecahedron",
    "metabiaugmented dodecahedron",
    "triaugmented dodecahedron",
    "metabidiminished icosahedron",
    "tridiminished icosahedron",
    "augmented tridiminished icosahedron",
    "augmented truncated tetrahedron",
    "augmented truncated cube",
    "biaugmented truncated cube",
    "augmented truncated dodecahedron",
    "parabiaugmented truncated dodecahedron",
    "metabiaugmented truncated dodecahedron",
    "triaugmented truncated dodecahedron",
    "gyrate rhombicosidodecahedron",
    "parabigyrate rhombicosidodecahedron",
    "metabigyrate rhombicosidodecahedron",
    "trigyrate rhombicosidodecahedron",
    "diminished rhombicosidodecahedron",
    "paragyrate diminished rhombicosidodecahedron",
    "metagyrate diminished rhombicosidodecahedron",
    "bigyrate diminished rhombicosidodecahedron",
    "parabidiminished rhombicosidodecahedron",
    "metabidiminished rhombicosidodecahedron",
    "gyrate bidiminished rhombicosidodecahedron",
    "tridiminished rhombicosidodecahedron",
    "snub disphenoid",
    "snub square antiprism",
    "sphenocorona",
    "augmented sphenocorona",
    "sphenomegacorona",
    "hebesphenomegacorona",
    "disphenocingulum",
    "bilunabirotunda",
    "triangular hebesphenorotunda",
];

const ALTERNATE_NAMES: [(&str, &[&str]); 10] = [
    ("tetrahedron", &["triangular pyramid", "digonal antiprism"]),
    ("cube", &["square prism"]),
    ("octahedron", &["square bipyramid", "triangular antiprism"]),
    ("icosahedron", &["gyroelongated pentagonal bipyramid"]),
    ("cuboctahedron", &["triangular gyrobicupola"]),
    ("icosidodecahedron", &["pentagonal gyrobirotunda"]),
    (
        "rhombicuboctahedron",
        &["small rhombicuboctahedron", "elongated square orthobicupola"],
    ),
    ("truncated cuboctahedron", &["great rhombicuboctahedron"]),
    ("rhombicosidodecahedron", &["small rhombicosidodecahedron"]),
    ("truncated icosidodecahedron", &["great rhombicosidodecahedron"]),
];

/// Numeric value of the polygon adjectives used in solid names.
pub(crate) const ADJECTIVES: [(&str, u32); 7] = [
    ("digonal", 2),
    ("triangular", 3),
    ("square", 4),
    ("pentagonal", 5),
    ("hexagonal", 6),
    ("octagonal", 8),
    ("decagonal", 10),
];

pub(crate) fn adjective_value(word: &str) -> Option<u32> {
    ADJECTIVES.iter().find(|(w, _)| *w == word).map(|&(_, n)| n)
}

pub(crate) fn adjective_for(n: u32) -> Option<&'static str> {
    ADJECTIVES.iter().find(|&&(_, v)| v == n).map(|&(w, _)| w)
}

/// `"pentagonal-prism"` → `"pentagonal prism"`.
pub fn unescape_name(name: &str) -> String {
    name.replace('-', " ")
}

pub fn escape_name(name: &str) -> String {
    name.replace(' ', "-")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolidType {
    Platonic,
    Archimedean,
    Prism,
    Antiprism,
    Johnson,
}

impl fmt::Display for SolidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SolidType::Platonic => "Platonic solid",
            SolidType::Archimedean => "Archimedean solid",
            SolidType::Prism => "Prism",
            SolidType::Antiprism => "Antiprism",
            SolidType::Johnson => "Johnson solid",
        })
    }
}

pub fn get_type(name: &str) -> Result<SolidType> {
    let name = unescape_name(name);
    if PLATONIC.iter().any(|(n, _)| *n == name) {
        Ok(SolidType::Platonic)
    } else if ARCHIMEDEAN.iter().any(|(n, _)| *n == name) {
        Ok(SolidType::Archimedean)
    } else if PRISMS.contains(&name.as_str()) {
        Ok(SolidType::Prism)
    } else if ANTIPRISMS.contains(&name.as_str()) {
        Ok(SolidType::Antiprism)
    } else if JOHNSON_SOLIDS.contains(&name.as_str()) {
        Ok(SolidType::Johnson)
    } else {
        Err(PolyError::UnknownSolid(name))
    }
}

/// 1-based Johnson index.
pub fn johnson_index(name: &str) -> Option<usize> {
    let name = unescape_name(name);
    JOHNSON_SOLIDS.iter().position(|n| *n == name).map(|i| i + 1)
}

/// Polygon side count named by the first word of a prism/antiprism name.
pub(crate) fn prism_sides(name: &str) -> Option<u32> {
    name.split([' ', '-']).next().and_then(adjective_value)
}

/// Conway-style symbol: `C`, `aC`, `P5`, `A8`, `J37`, ...
pub fn to_conway_notation(name: &str) -> Result<String> {
    let key = unescape_name(name);
    let lookup = |table: &[(&str, &str)]| {
        table
            .iter()
            .find(|(n, _)| *n == key)
            .map(|(_, c)| c.to_string())
    };
    let sides = || {
        prism_sides(&key).ok_or_else(|| PolyError::UnknownSolid(key.clone()))
    };
    match get_type(&key)? {
        SolidType::Platonic => lookup(&PLATONIC).ok_or_else(|| PolyError::UnknownSolid(key.clone())),
        SolidType::Archimedean => {
            lookup(&ARCHIMEDEAN).ok_or_else(|| PolyError::UnknownSolid(key.clone()))
        }
        SolidType::Prism => Ok(format!("P{}", sides()?)),
        SolidType::Antiprism => Ok(format!("A{}", sides()?)),
        SolidType::Johnson => johnson_index(&key)
            .map(|j| format!("J{j}"))
            .ok_or_else(|| PolyError::UnknownSolid(key.clone())),
    }
}

pub fn get_alternate_names(name: &str) -> Vec<&'static str> {
    let key = unescape_name(name);
    ALTERNATE_NAMES
        .iter()
        .find(|(n, _)| *n == key)
        .map(|(_, alts)| alts.to_vec())
        .unwrap_or_default()
}

pub fn polygon_name(sides: usize) -> Option<&'static str> {
    match sides {
        3 => Some("triangle"),
        4 => Some("square"),
        5 => Some("pentagon"),
        6 => Some("hexagon"),
        8 => Some("octagon"),
        10 => Some("decagon"),
        _ => None,
    }
}
