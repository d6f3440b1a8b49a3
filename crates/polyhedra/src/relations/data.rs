//! The standard relation graph.
//!
//! Every augment edge names the cap it uses; `gyrate` separates ortho/gyro
//! placements of cupolae and rotundae; `align` separates para/meta placements
//! of a second cap. On `-` and `g` edges, `using` and `gyrate` describe the
//! peak being acted on.

use super::{Align, CapKind, Gyrate, Operation, RelationEdge};

use CapKind::{R5, U3, U4, U5, Y3, Y4, Y5};
use Operation::{
    Augment, Diminish, Elongate, Gyrate as Rotate, Gyroelongate, ShortenAntiprism, ShortenPrism,
};

impl RelationEdge {
    fn new(from: &str, op: Operation, to: &str) -> Self {
        Self {
            from: from.to_string(),
            op,
            to: to.to_string(),
            using: None,
            gyrate: None,
            align: None,
        }
    }
    fn using(mut self, cap: CapKind) -> Self {
        self.using = Some(cap);
        self
    }
    fn gyrate(mut self, gyrate: Gyrate) -> Self {
        self.gyrate = Some(gyrate);
        self
    }
    fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }
}

fn adjective(n: usize) -> &'static str {
    match n {
        3 => "triangular",
        4 => "square",
        5 => "pentagonal",
        6 => "hexagonal",
        8 => "octagonal",
        _ => "decagonal",
    }
}

pub(super) fn standard_edges() -> Vec<RelationEdge> {
    let mut out = Vec::new();
    let mut e = |from: &str, op: Operation, to: &str| out.push(RelationEdge::new(from, op, to));

    // Pyramids, bipyramids and their elongations.
    e("tetrahedron", Elongate, "elongated triangular pyramid");
    e("triangular bipyramid", Diminish, "tetrahedron");
    e("triangular bipyramid", Elongate, "elongated triangular bipyramid");
    e("elongated triangular bipyramid", Diminish, "elongated triangular pyramid");
    e("elongated triangular bipyramid", ShortenPrism, "triangular bipyramid");
    e("elongated triangular pyramid", Diminish, "triangular prism");
    e("elongated triangular pyramid", ShortenPrism, "tetrahedron");
    e("octahedron", Diminish, "square pyramid");
    e("octahedron", Elongate, "elongated square bipyramid");
    e("octahedron", Gyroelongate, "gyroelongated square bipyramid");
    e("square pyramid", Elongate, "elongated square pyramid");
    e("square pyramid", Gyroelongate, "gyroelongated square pyramid");
    e("elongated square pyramid", Diminish, "cube");
    e("elongated square pyramid", ShortenPrism, "square pyramid");
    e("gyroelongated square pyramid", Diminish, "square antiprism");
    e("gyroelongated square pyramid", ShortenAntiprism, "square pyramid");
    e("elongated square bipyramid", Diminish, "elongated square pyramid");
    e("elongated square bipyramid", ShortenPrism, "octahedron");
    e("gyroelongated square bipyramid", Diminish, "gyroelongated square pyramid");
    e("gyroelongated square bipyramid", ShortenAntiprism, "octahedron");
    e("icosahedron", Diminish, "gyroelongated pentagonal pyramid");
    e("pentagonal pyramid", Elongate, "elongated pentagonal pyramid");
    e("pentagonal pyramid", Gyroelongate, "gyroelongated pentagonal pyramid");
    e("pentagonal bipyramid", Diminish, "pentagonal pyramid");
    e("pentagonal bipyramid", Elongate, "elongated pentagonal bipyramid");
    e("pentagonal bipyramid", Gyroelongate, "icosahedron");
    e("elongated pentagonal pyramid", Diminish, "pentagonal prism");
    e("elongated pentagonal pyramid", ShortenPrism, "pentagonal pyramid");
    e("elongated pentagonal bipyramid", Diminish, "elongated pentagonal pyramid");
    e("elongated pentagonal bipyramid", ShortenPrism, "pentagonal bipyramid");
    e("gyroelongated pentagonal pyramid", ShortenAntiprism, "pentagonal pyramid");
    e("augmented dodecahedron", Diminish, "dodecahedron");
    e("augmented triangular prism", Diminish, "triangular prism");
    e("biaugmented triangular prism", Diminish, "augmented triangular prism");
    e("triaugmented triangular prism", Diminish, "biaugmented triangular prism");
    e("augmented pentagonal prism", Diminish, "pentagonal prism");
    e("biaugmented pentagonal prism", Diminish, "augmented pentagonal prism");
    e("augmented hexagonal prism", Diminish, "hexagonal prism");
    e("parabiaugmented hexagonal prism", Diminish, "augmented hexagonal prism");
    e("metabiaugmented hexagonal prism", Diminish, "augmented hexagonal prism");
    e("triaugmented hexagonal prism", Diminish, "metabiaugmented hexagonal prism");
    e("parabiaugmented dodecahedron", Diminish, "augmented dodecahedron");
    e("metabiaugmented dodecahedron", Diminish, "augmented dodecahedron");
    e("triaugmented dodecahedron", Diminish, "metabiaugmented dodecahedron");
    e("metabidiminished icosahedron", Diminish, "tridiminished icosahedron");
    e("augmented tridiminished icosahedron", Diminish, "tridiminished icosahedron");
    e("augmented sphenocorona", Diminish, "sphenocorona");

    let augments = [
        ("tetrahedron", "triangular bipyramid", Y3),
        ("elongated triangular pyramid", "elongated triangular bipyramid", Y3),
        ("square pyramid", "octahedron", Y4),
        ("elongated square pyramid", "elongated square bipyramid", Y4),
        ("gyroelongated square pyramid", "gyroelongated square bipyramid", Y4),
        ("cube", "elongated square pyramid", Y4),
        ("square antiprism", "gyroelongated square pyramid", Y4),
        ("pentagonal pyramid", "pentagonal bipyramid", Y5),
        ("elongated pentagonal pyramid", "elongated pentagonal bipyramid", Y5),
        ("gyroelongated pentagonal pyramid", "icosahedron", Y5),
        ("pentagonal antiprism", "gyroelongated pentagonal pyramid", Y5),
        ("dodecahedron", "augmented dodecahedron", Y5),
        ("triangular prism", "elongated triangular pyramid", Y3),
        ("triangular prism", "augmented triangular prism", Y4),
        ("augmented triangular prism", "biaugmented triangular prism", Y4),
        ("biaugmented triangular prism", "triaugmented triangular prism", Y4),
        ("pentagonal prism", "elongated pentagonal pyramid", Y5),
        ("pentagonal prism", "augmented pentagonal prism", Y4),
        ("augmented pentagonal prism", "biaugmented pentagonal prism", Y4),
        ("hexagonal prism", "augmented hexagonal prism", Y4),
        ("metabiaugmented hexagonal prism", "triaugmented hexagonal prism", Y4),
        ("metabiaugmented dodecahedron", "triaugmented dodecahedron", Y5),
        ("metabidiminished icosahedron", "gyroelongated pentagonal pyramid", Y5),
        ("tridiminished icosahedron", "metabidiminished icosahedron", Y5),
        ("tridiminished icosahedron", "augmented tridiminished icosahedron", Y3),
        ("hexagonal prism", "elongated triangular cupola", U3),
        ("octagonal prism", "elongated square cupola", U4),
        ("decagonal prism", "elongated pentagonal cupola", U5),
        ("decagonal prism", "elongated pentagonal rotunda", R5),
        ("hexagonal antiprism", "gyroelongated triangular cupola", U3),
        ("octagonal antiprism", "gyroelongated square cupola", U4),
        ("decagonal antiprism", "gyroelongated pentagonal cupola", U5),
        ("decagonal antiprism", "gyroelongated pentagonal rotunda", R5),
        ("gyroelongated pentagonal rotunda", "gyroelongated pentagonal birotunda", R5),
        ("gyroelongated pentagonal cupola", "gyroelongated pentagonal cupolarotunda", R5),
        ("gyroelongated pentagonal rotunda", "gyroelongated pentagonal cupolarotunda", U5),
        ("sphenocorona", "augmented sphenocorona", Y4),
    ];
    for (from, to, cap) in augments {
        out.push(RelationEdge::new(from, Augment, to).using(cap));
    }

    // Second pyramids opposite an existing one (para) or elsewhere (meta).
    for (from, cap) in [("augmented hexagonal prism", Y4), ("augmented dodecahedron", Y5)] {
        out.push(
            RelationEdge::new(from, Augment, &format!("parabi{from}"))
                .using(cap)
                .align(Align::Para),
        );
        out.push(
            RelationEdge::new(from, Augment, &format!("metabi{from}"))
                .using(cap)
                .align(Align::Meta),
        );
    }
    out.push(
        RelationEdge::new("gyroelongated pentagonal pyramid", Diminish, "pentagonal antiprism")
            .align(Align::Para),
    );
    out.push(
        RelationEdge::new("gyroelongated pentagonal pyramid", Diminish, "metabidiminished icosahedron")
            .align(Align::Meta),
    );

    for (n, cap) in [(3, U3), (4, U4), (5, U5)] {
        cupola_family(&mut out, n, cap);
    }
    rotunda_family(&mut out);
    cupolarotunda_family(&mut out);
    truncated_family(&mut out);
    rhombicosidodecahedron_family(&mut out);
    out
}

/// Cupola, its bicupolae, and their (gyro)elongations for one base size.
fn cupola_family(out: &mut Vec<RelationEdge>, n: usize, cap: CapKind) {
    let adj = adjective(n);
    let cupola = format!("{adj} cupola");
    let ortho = format!("{adj} orthobicupola");
    let gyro = if n == 3 {
        "cuboctahedron".to_string()
    } else {
        format!("{adj} gyrobicupola")
    };
    let elongated = format!("elongated {adj} cupola");
    let gyroelongated = format!("gyroelongated {adj} cupola");
    let elongated_ortho = if n == 4 {
        "rhombicuboctahedron".to_string()
    } else {
        format!("elongated {adj} orthobicupola")
    };
    let elongated_gyro = format!("elongated {adj} gyrobicupola");
    let bicupola = format!("gyroelongated {adj} bicupola");
    let prism = format!("{} prism", adjective(2 * n));
    let antiprism = format!("{} antiprism", adjective(2 * n));

    let plain = |from: &str, op, to: &str| RelationEdge::new(from, op, to);
    out.extend([
        plain(&cupola, Augment, &ortho).using(cap).gyrate(Gyrate::Ortho),
        plain(&cupola, Augment, &gyro).using(cap).gyrate(Gyrate::Gyro),
        plain(&cupola, Elongate, &elongated),
        plain(&cupola, Gyroelongate, &gyroelongated),
        plain(&elongated, Augment, &elongated_ortho).using(cap).gyrate(Gyrate::Ortho),
        plain(&elongated, Augment, &elongated_gyro).using(cap).gyrate(Gyrate::Gyro),
        plain(&elongated, Diminish, &prism),
        plain(&elongated, ShortenPrism, &cupola),
        plain(&gyroelongated, Augment, &bicupola).using(cap),
        plain(&gyroelongated, Diminish, &antiprism),
        plain(&gyroelongated, ShortenAntiprism, &cupola),
    ]);
    for (this, other, elongation) in [(&ortho, &gyro, &elongated_ortho), (&gyro, &ortho, &elongated_gyro)] {
        out.extend([
            plain(this, Diminish, &cupola),
            plain(this, Rotate, other),
            plain(this, Elongate, elongation),
            plain(this, Gyroelongate, &bicupola),
        ]);
    }
    for (this, other, shortened) in [
        (&elongated_ortho, &elongated_gyro, &ortho),
        (&elongated_gyro, &elongated_ortho, &gyro),
    ] {
        out.extend([
            plain(this, Diminish, &elongated),
            plain(this, Rotate, other),
            plain(this, ShortenPrism, shortened),
        ]);
    }
    out.push(plain(&bicupola, Diminish, &gyroelongated));
}

fn rotunda_family(out: &mut Vec<RelationEdge>) {
    let rotunda = "pentagonal rotunda";
    let elongated = "elongated pentagonal rotunda";
    let gyroelongated = "gyroelongated pentagonal rotunda";
    let ortho = "pentagonal orthobirotunda";
    let gyro = "icosidodecahedron";
    let elongated_ortho = "elongated pentagonal orthobirotunda";
    let elongated_gyro = "elongated pentagonal gyrobirotunda";
    let birotunda = "gyroelongated pentagonal birotunda";

    out.extend([
        RelationEdge::new(rotunda, Augment, ortho).using(R5).gyrate(Gyrate::Ortho),
        RelationEdge::new(rotunda, Augment, gyro).using(R5).gyrate(Gyrate::Gyro),
        RelationEdge::new(rotunda, Elongate, elongated),
        RelationEdge::new(rotunda, Gyroelongate, gyroelongated),
        RelationEdge::new(elongated, Augment, elongated_ortho).using(R5).gyrate(Gyrate::Ortho),
        RelationEdge::new(elongated, Augment, elongated_gyro).using(R5).gyrate(Gyrate::Gyro),
        RelationEdge::new(elongated, Diminish, "decagonal prism"),
        RelationEdge::new(elongated, ShortenPrism, rotunda),
        RelationEdge::new(gyroelongated, Diminish, "decagonal antiprism"),
        RelationEdge::new(gyroelongated, ShortenAntiprism, rotunda),
        RelationEdge::new(birotunda, Diminish, gyroelongated),
    ]);
    for (this, other, elongation) in [(ortho, gyro, elongated_ortho), (gyro, ortho, elongated_gyro)] {
        out.extend([
            RelationEdge::new(this, Diminish, rotunda),
            RelationEdge::new(this, Rotate, other),
            RelationEdge::new(this, Elongate, elongation),
            RelationEdge::new(this, Gyroelongate, birotunda),
        ]);
    }
    for (this, other, shortened) in [(elongated_ortho, elongated_gyro, ortho), (elongated_gyro, elongated_ortho, gyro)] {
        out.extend([
            RelationEdge::new(this, Diminish, elongated),
            RelationEdge::new(this, Rotate, other),
            RelationEdge::new(this, ShortenPrism, shortened),
        ]);
    }
}

/// A pentagonal cupola and a pentagonal rotunda joined base to base,
/// directly or through a band.
fn cupolarotunda_family(out: &mut Vec<RelationEdge>) {
    let cupola = "pentagonal cupola";
    let rotunda = "pentagonal rotunda";
    let ortho = "pentagonal orthocupolarotunda";
    let gyro = "pentagonal gyrocupolarotunda";
    let elongated_ortho = "elongated pentagonal orthocupolarotunda";
    let elongated_gyro = "elongated pentagonal gyrocupolarotunda";
    let gyroelongated = "gyroelongated pentagonal cupolarotunda";

    for (lower, upper, cap) in [(cupola, ortho, R5), (rotunda, ortho, U5)] {
        out.push(RelationEdge::new(lower, Augment, upper).using(cap).gyrate(Gyrate::Ortho));
    }
    for (lower, upper, cap) in [(cupola, gyro, R5), (rotunda, gyro, U5)] {
        out.push(RelationEdge::new(lower, Augment, upper).using(cap).gyrate(Gyrate::Gyro));
    }
    let pairs = [
        (Gyrate::Ortho, ortho, elongated_ortho),
        (Gyrate::Gyro, gyro, elongated_gyro),
    ];
    for (twist, joined, elongated) in pairs {
        out.extend([
            RelationEdge::new("elongated pentagonal cupola", Augment, elongated)
                .using(R5)
                .gyrate(twist),
            RelationEdge::new("elongated pentagonal rotunda", Augment, elongated)
                .using(U5)
                .gyrate(twist),
            RelationEdge::new(joined, Diminish, rotunda).using(U5),
            RelationEdge::new(joined, Diminish, cupola).using(R5),
            RelationEdge::new(joined, Elongate, elongated),
            RelationEdge::new(joined, Gyroelongate, gyroelongated),
            RelationEdge::new(elongated, Diminish, "elongated pentagonal rotunda").using(U5),
            RelationEdge::new(elongated, Diminish, "elongated pentagonal cupola").using(R5),
            RelationEdge::new(elongated, ShortenPrism, joined),
        ]);
    }
    out.extend([
        RelationEdge::new(ortho, Rotate, gyro),
        RelationEdge::new(gyro, Rotate, ortho),
        RelationEdge::new(elongated_ortho, Rotate, elongated_gyro),
        RelationEdge::new(elongated_gyro, Rotate, elongated_ortho),
        RelationEdge::new(gyroelongated, Diminish, "gyroelongated pentagonal rotunda").using(U5),
        RelationEdge::new(gyroelongated, Diminish, "gyroelongated pentagonal cupola").using(R5),
    ]);
}

/// Cupolae on the large faces of the truncated Platonic solids.
fn truncated_family(out: &mut Vec<RelationEdge>) {
    let chains = [
        ("truncated tetrahedron", "augmented truncated tetrahedron", U3),
        ("truncated cube", "augmented truncated cube", U4),
        ("augmented truncated cube", "biaugmented truncated cube", U4),
        ("truncated dodecahedron", "augmented truncated dodecahedron", U5),
        ("metabiaugmented truncated dodecahedron", "triaugmented truncated dodecahedron", U5),
    ];
    for (from, to, cap) in chains {
        out.push(RelationEdge::new(from, Augment, to).using(cap));
        out.push(RelationEdge::new(to, Diminish, from));
    }
    let once = "augmented truncated dodecahedron";
    for (align, twice) in [
        (Align::Para, "parabiaugmented truncated dodecahedron"),
        (Align::Meta, "metabiaugmented truncated dodecahedron"),
    ] {
        out.push(RelationEdge::new(once, Augment, twice).using(U5).align(align));
        out.push(RelationEdge::new(twice, Diminish, once));
    }
}

/// Gyrations and diminishments of the rhombicosidodecahedron's pentagonal
/// cupolae.
///
/// `g` and `-` edges carry the twist of the peak acted on; `+` edges carry the
/// twist of the new cupola.
fn rhombicosidodecahedron_family(out: &mut Vec<RelationEdge>) {
    use Gyrate::{Gyro, Ortho};
    let name = |prefix: &str| {
        if prefix.is_empty() {
            "rhombicosidodecahedron".to_string()
        } else {
            format!("{prefix} rhombicosidodecahedron")
        }
    };
    let edge = |from: &str, op, to: &str, twist| {
        RelationEdge::new(&name(from), op, &name(to)).gyrate(twist)
    };
    let rotate = |from, to, twist| edge(from, Rotate, to, twist);
    let cut = |from, to, twist| edge(from, Diminish, to, twist);
    let cap = |from, to, twist| edge(from, Augment, to, twist).using(U5);

    out.extend([
        rotate("", "gyrate", Gyro),
        cut("", "diminished", Gyro),
        rotate("gyrate", "", Ortho),
        rotate("gyrate", "parabigyrate", Gyro).align(Align::Para),
        rotate("gyrate", "metabigyrate", Gyro).align(Align::Meta),
        cut("gyrate", "diminished", Ortho),
        cut("gyrate", "paragyrate diminished", Gyro).align(Align::Para),
        cut("gyrate", "metagyrate diminished", Gyro).align(Align::Meta),
        rotate("parabigyrate", "gyrate", Ortho),
        cut("parabigyrate", "paragyrate diminished", Ortho),
        rotate("metabigyrate", "gyrate", Ortho),
        rotate("metabigyrate", "trigyrate", Gyro),
        cut("metabigyrate", "metagyrate diminished", Ortho),
        cut("metabigyrate", "bigyrate diminished", Gyro),
        rotate("trigyrate", "metabigyrate", Ortho),
        cut("trigyrate", "bigyrate diminished", Ortho),
        rotate("diminished", "paragyrate diminished", Gyro).align(Align::Para),
        rotate("diminished", "metagyrate diminished", Gyro).align(Align::Meta),
        cut("diminished", "parabidiminished", Gyro).align(Align::Para),
        cut("diminished", "metabidiminished", Gyro).align(Align::Meta),
        cap("diminished", "", Gyro),
        cap("diminished", "gyrate", Ortho),
        rotate("paragyrate diminished", "diminished", Ortho),
        cut("paragyrate diminished", "parabidiminished", Ortho),
        cap("paragyrate diminished", "gyrate", Gyro),
        cap("paragyrate diminished", "parabigyrate", Ortho),
        rotate("metagyrate diminished", "diminished", Ortho),
        rotate("metagyrate diminished", "bigyrate diminished", Gyro),
        cut("metagyrate diminished", "metabidiminished", Ortho),
        cut("metagyrate diminished", "gyrate bidiminished", Gyro),
        cap("metagyrate diminished", "gyrate", Gyro),
        cap("metagyrate diminished", "metabigyrate", Ortho),
        rotate("bigyrate diminished", "metagyrate diminished", Ortho),
        cut("bigyrate diminished", "gyrate bidiminished", Ortho),
        cap("bigyrate diminished", "metabigyrate", Gyro),
        cap("bigyrate diminished", "trigyrate", Ortho),
        cap("parabidiminished", "diminished", Gyro),
        cap("parabidiminished", "paragyrate diminished", Ortho),
        rotate("metabidiminished", "gyrate bidiminished", Gyro),
        cut("metabidiminished", "tridiminished", Gyro),
        cap("metabidiminished", "diminished", Gyro),
        cap("metabidiminished", "metagyrate diminished", Ortho),
        rotate("gyrate bidiminished", "metabidiminished", Ortho),
        cut("gyrate bidiminished", "tridiminished", Ortho),
        cap("gyrate bidiminished", "metagyrate diminished", Gyro),
        cap("gyrate bidiminished", "bigyrate diminished", Ortho),
        cap("tridiminished", "metabidiminished", Gyro),
        cap("tridiminished", "gyrate bidiminished", Ortho),
    ]);
}
