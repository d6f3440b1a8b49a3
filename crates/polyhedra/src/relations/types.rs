//! Closed vocabularies for operations and their options.

use std::fmt;
use std::str::FromStr;

use crate::error::PolyError;

/// Operation symbols of the relation graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    /// `+`: attach a cap onto a face.
    Augment,
    /// `-`: remove a peak, closing the hole with one face.
    Diminish,
    /// `g`: rotate a peak by its base polygon's symmetry angle.
    Gyrate,
    /// `P`: insert a prism band below a cap.
    Elongate,
    /// `A`: insert an antiprism band below a cap.
    Gyroelongate,
    /// `~P`: remove a prism band.
    ShortenPrism,
    /// `~A`: remove an antiprism band.
    ShortenAntiprism,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::Augment,
        Operation::Diminish,
        Operation::Gyrate,
        Operation::Elongate,
        Operation::Gyroelongate,
        Operation::ShortenPrism,
        Operation::ShortenAntiprism,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Augment => "+",
            Operation::Diminish => "-",
            Operation::Gyrate => "g",
            Operation::Elongate => "P",
            Operation::Gyroelongate => "A",
            Operation::ShortenPrism => "~P",
            Operation::ShortenAntiprism => "~A",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = PolyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| PolyError::Parse(format!("operation symbol '{s}'")))
    }
}

/// Relative twist of a new cap against the cap or band it faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Gyrate {
    Ortho,
    Gyro,
}

impl fmt::Display for Gyrate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gyrate::Ortho => "ortho",
            Gyrate::Gyro => "gyro",
        })
    }
}

impl FromStr for Gyrate {
    type Err = PolyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ortho" => Ok(Gyrate::Ortho),
            "gyro" => Ok(Gyrate::Gyro),
            _ => Err(PolyError::Parse(format!("gyrate option '{s}'"))),
        }
    }
}

/// Placement of a second cap relative to an existing one: opposite (`Para`)
/// or anywhere else (`Meta`). Derived from geometry, never user supplied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Align {
    Para,
    Meta,
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Align::Para => "para",
            Align::Meta => "meta",
        })
    }
}

/// Cap shapes: pyramids `Y`, cupolae `U`, and the pentagonal rotunda.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CapKind {
    Y3,
    Y4,
    Y5,
    U3,
    U4,
    U5,
    R5,
}

impl CapKind {
    pub const ALL: [CapKind; 7] = [
        CapKind::Y3,
        CapKind::Y4,
        CapKind::Y5,
        CapKind::U3,
        CapKind::U4,
        CapKind::U5,
        CapKind::R5,
    ];

    pub fn pyramid(n: usize) -> Option<Self> {
        match n {
            3 => Some(CapKind::Y3),
            4 => Some(CapKind::Y4),
            5 => Some(CapKind::Y5),
            _ => None,
        }
    }

    pub fn cupola(n: usize) -> Option<Self> {
        match n {
            3 => Some(CapKind::U3),
            4 => Some(CapKind::U4),
            5 => Some(CapKind::U5),
            _ => None,
        }
    }

    pub fn is_pyramid(self) -> bool {
        matches!(self, CapKind::Y3 | CapKind::Y4 | CapKind::Y5)
    }

    /// Caps whose base fits a polygon with `sides` sides.
    pub fn for_sides(sides: usize) -> &'static [CapKind] {
        match sides {
            3 => &[CapKind::Y3],
            4 => &[CapKind::Y4],
            5 => &[CapKind::Y5],
            6 => &[CapKind::U3],
            8 => &[CapKind::U4],
            10 => &[CapKind::U5, CapKind::R5],
            _ => &[],
        }
    }

    pub fn base_sides(self) -> usize {
        match self {
            CapKind::Y3 => 3,
            CapKind::Y4 => 4,
            CapKind::Y5 => 5,
            CapKind::U3 => 6,
            CapKind::U4 => 8,
            CapKind::U5 | CapKind::R5 => 10,
        }
    }

    /// Catalog solid whose largest face is the cap's base.
    pub fn template(self) -> &'static str {
        match self {
            CapKind::Y3 => "tetrahedron",
            CapKind::Y4 => "square pyramid",
            CapKind::Y5 => "pentagonal pyramid",
            CapKind::U3 => "triangular cupola",
            CapKind::U4 => "square cupola",
            CapKind::U5 => "pentagonal cupola",
            CapKind::R5 => "pentagonal rotunda",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            CapKind::Y3 => "Y3",
            CapKind::Y4 => "Y4",
            CapKind::Y5 => "Y5",
            CapKind::U3 => "U3",
            CapKind::U4 => "U4",
            CapKind::U5 => "U5",
            CapKind::R5 => "R5",
        }
    }
}

impl fmt::Display for CapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CapKind {
    type Err = PolyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CapKind::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| PolyError::Parse(format!("cap kind '{s}'")))
    }
}

/// Caller-supplied disambiguation; `None` leaves the field open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub gyrate: Option<Gyrate>,
    pub using: Option<CapKind>,
}
