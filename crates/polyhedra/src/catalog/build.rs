//! Closed-form constructions for the catalog solids.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use crate::cfg::EPS;
use crate::classification::names::adjective_for;
use crate::error::{PolyError, Result};
use crate::geometry::{centroid, distance, newell_normal, rotate_about, Vec3};
use crate::operations::convex_cap_points;
use crate::polyhedron::Polyhedron;
use crate::relations::CapKind;

fn phi() -> f64 {
    (1.0 + 5f64.sqrt()) / 2.0
}

fn adjective(n: usize) -> Result<&'static str> {
    u32::try_from(n)
        .ok()
        .and_then(adjective_for)
        .ok_or_else(|| PolyError::Structural(format!("no adjective for a {n}-gon")))
}

/// Lexicographically sorted, duplicate-free point list.
fn orbit(mut points: Vec<Vec3>) -> Vec<Vec3> {
    for p in &mut points {
        // Fold -0.0 into 0.0 so equal points compare equal.
        p.iter_mut().for_each(|c| *c += 0.0);
    }
    points.sort_by(|a, b| {
        a.x.total_cmp(&b.x)
            .then(a.y.total_cmp(&b.y))
            .then(a.z.total_cmp(&b.z))
    });
    points.dedup();
    points
}

fn sign_changes(v: [f64; 3]) -> Vec<Vec3> {
    let mut out = Vec::with_capacity(8);
    for sx in [1.0, -1.0] {
        for sy in [1.0, -1.0] {
            for sz in [1.0, -1.0] {
                out.push(Vec3::new(sx * v[0], sy * v[1], sz * v[2]));
            }
        }
    }
    out
}

fn signs(v: [f64; 3]) -> Vec<Vec3> {
    orbit(sign_changes(v))
}

/// Cyclic permutations with all sign changes.
fn even_perms(v: [f64; 3]) -> Vec<Vec3> {
    let [a, b, c] = v;
    orbit(
        [[a, b, c], [b, c, a], [c, a, b]]
            .into_iter()
            .flat_map(sign_changes)
            .collect(),
    )
}

fn all_perms(v: [f64; 3]) -> Vec<Vec3> {
    let [a, b, c] = v;
    orbit(
        [[a, b, c], [a, c, b], [b, a, c], [b, c, a], [c, a, b], [c, b, a]]
            .into_iter()
            .flat_map(sign_changes)
            .collect(),
    )
}

/// Sign changes of `v` with an even (or odd) number of plus signs.
fn signs_with_parity(v: [f64; 3], even_plus: bool) -> Vec<Vec3> {
    let mut out = Vec::with_capacity(4);
    for sx in [1.0, -1.0] {
        for sy in [1.0, -1.0] {
            for sz in [1.0, -1.0] {
                let plus = [sx, sy, sz].iter().filter(|&&s| s > 0.0).count();
                if (plus % 2 == 0) == even_plus {
                    out.push(Vec3::new(sx * v[0], sy * v[1], sz * v[2]));
                }
            }
        }
    }
    out
}

/// One hand of a snub: cyclic permutations with an even number of plus
/// signs, and (when `with_odd`) the odd permutations with an odd number.
fn snub_orbit(bases: &[[f64; 3]], with_odd: bool) -> Vec<Vec3> {
    let mut pts = Vec::new();
    for &[a, b, c] in bases {
        for v in [[a, b, c], [b, c, a], [c, a, b]] {
            pts.extend(signs_with_parity(v, true));
        }
        if with_odd {
            for v in [[a, c, b], [b, a, c], [c, b, a]] {
                pts.extend(signs_with_parity(v, false));
            }
        }
    }
    orbit(pts)
}

/// Root of `f` in `[lo, hi]`, given a sign change across the interval.
fn bisect(f: impl Fn(f64) -> f64, mut lo: f64, mut hi: f64) -> f64 {
    let below = f(lo) < 0.0;
    for _ in 0..200 {
        let mid = 0.5 * (lo + hi);
        if (f(mid) < 0.0) == below {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

/// Rescale so the shortest pairwise distance is 1.
fn unit_edge(points: Vec<Vec3>) -> Vec<Vec3> {
    let mut shortest = f64::INFINITY;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            shortest = shortest.min(distance(a, b));
        }
    }
    points.into_iter().map(|p| p / shortest).collect()
}

fn ring_radius(n: usize) -> f64 {
    1.0 / (2.0 * (PI / n as f64).sin())
}

/// Regular unit-edge `n`-gon in the plane `z`, first vertex at angle `phase`.
fn ring(n: usize, phase: f64, z: f64) -> Vec<Vec3> {
    ring_with_radius(n, phase, z, ring_radius(n))
}

fn ring_with_radius(n: usize, phase: f64, z: f64, r: f64) -> Vec<Vec3> {
    (0..n)
        .map(|k| {
            let t = phase + 2.0 * PI * k as f64 / n as f64;
            Vec3::new(r * t.cos(), r * t.sin(), z)
        })
        .collect()
}

/// Height that makes the closest pair between two horizontal point sets a unit edge.
fn gap(a: &[Vec3], b: &[Vec3]) -> f64 {
    let mut d = f64::INFINITY;
    for p in a {
        for q in b {
            d = d.min((p.x - q.x).hypot(p.y - q.y));
        }
    }
    (1.0 - d * d).sqrt()
}

fn rotate_z(points: &[Vec3], angle: f64) -> Vec<Vec3> {
    let (s, c) = angle.sin_cos();
    points
        .iter()
        .map(|p| Vec3::new(c * p.x - s * p.y, s * p.x + c * p.y, p.z))
        .collect()
}

fn icosidodecahedron_points() -> Vec<Vec3> {
    let phi = phi();
    let mut pts = Vec::with_capacity(30);
    for s in [1.0, -1.0] {
        pts.push(Vec3::new(s * phi, 0.0, 0.0));
        pts.push(Vec3::new(0.0, s * phi, 0.0));
        pts.push(Vec3::new(0.0, 0.0, s * phi));
    }
    for sx in [1.0, -1.0] {
        for sy in [1.0, -1.0] {
            for sz in [1.0, -1.0] {
                let (a, b, c) = (sx * 0.5, sy * phi / 2.0, sz * phi * phi / 2.0);
                pts.push(Vec3::new(a, b, c));
                pts.push(Vec3::new(b, c, a));
                pts.push(Vec3::new(c, a, b));
            }
        }
    }
    unit_edge(pts)
}

/// Points of a cap above its base ring; the ring itself is `ring(m, 0, 0)`.
fn cap_points(kind: CapKind) -> Result<Vec<Vec3>> {
    let m = kind.base_sides();
    match kind {
        CapKind::Y3 | CapKind::Y4 | CapKind::Y5 => {
            let apex = [Vec3::zeros()];
            Ok(vec![Vec3::new(0.0, 0.0, gap(&ring(m, 0.0, 0.0), &apex))])
        }
        CapKind::U3 | CapKind::U4 | CapKind::U5 => {
            let n = m / 2;
            let top = ring(n, -PI / (2.0 * n as f64), 0.0);
            let h = gap(&ring(m, 0.0, 0.0), &top);
            Ok(top.into_iter().map(|p| Vec3::new(p.x, p.y, h)).collect())
        }
        CapKind::R5 => {
            // Half an icosidodecahedron cut through a decagonal equator.
            let pts = icosidodecahedron_points();
            let axis = Vec3::new(0.0, phi(), 1.0).normalize();
            let equator: Vec<&Vec3> = pts.iter().filter(|p| p.dot(&axis).abs() < EPS).collect();
            let first = equator
                .first()
                .filter(|_| equator.len() == 10)
                .ok_or_else(|| PolyError::Structural("rotunda equator is not a decagon".into()))?;
            let x = first.normalize();
            let y = axis.cross(&x);
            Ok(pts
                .iter()
                .filter(|p| p.dot(&axis) > EPS)
                .map(|p| Vec3::new(p.dot(&x), p.dot(&y), p.dot(&axis)))
                .collect())
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Band {
    Prism,
    Antiprism,
}

/// Stacked solid on an `m`-gon: optional bottom cap, optional band, optional
/// top cap. `gyro` twists the bottom cap by one ring step.
fn stack(
    name: &str,
    m: usize,
    bottom: Option<CapKind>,
    band: Option<Band>,
    top: Option<CapKind>,
    gyro: bool,
) -> Result<Polyhedron> {
    let base = ring(m, 0.0, 0.0);
    let mut pts = base.clone();
    let (z_top, turn) = match band {
        None => (0.0, 0.0),
        Some(Band::Prism) => {
            pts.extend(ring(m, 0.0, 1.0));
            (1.0, 0.0)
        }
        Some(Band::Antiprism) => {
            let turn = PI / m as f64;
            let upper = ring(m, turn, 0.0);
            let z = gap(&base, &upper);
            pts.extend(upper.into_iter().map(|p| Vec3::new(p.x, p.y, z)));
            (z, turn)
        }
    };
    for (cap, is_top) in [(top, true), (bottom, false)] {
        let Some(cap) = cap else { continue };
        if cap.base_sides() != m {
            return Err(PolyError::Structural(format!(
                "{name}: cap {cap} does not fit a {m}-gon"
            )));
        }
        let cp = cap_points(cap)?;
        if is_top {
            pts.extend(rotate_z(&cp, turn).into_iter().map(|p| p + Vec3::new(0.0, 0.0, z_top)));
        } else {
            let mirrored: Vec<Vec3> = cp.iter().map(|p| Vec3::new(p.x, p.y, -p.z)).collect();
            let twist = if gyro { 2.0 * PI / m as f64 } else { 0.0 };
            pts.extend(rotate_z(&mirrored, twist));
        }
    }
    Polyhedron::from_vertices(name, pts)
}

/// Add a unit-edge pyramid apex over each chosen face.
fn with_apexes(name: &str, base: &Polyhedron, faces: &[usize]) -> Result<Polyhedron> {
    let mut verts = base.vertex_vectors().to_vec();
    for &fi in faces {
        let pts = base.face_points(fi);
        let c = centroid(&pts);
        let r = distance(&pts[0], &c);
        verts.push(c + newell_normal(&pts) * (1.0 - r * r).sqrt());
    }
    Polyhedron::from_vertices(name, verts)
}

fn shares_edge(p: &Polyhedron, a: usize, b: usize) -> bool {
    p.faces()[a].iter().filter(|v| p.faces()[b].contains(v)).count() >= 2
}

fn antiparallel(p: &Polyhedron, a: usize, b: usize) -> bool {
    p.face_normal(a).dot(&p.face_normal(b)) < -1.0 + EPS
}

/// Greedily pick `count` faces with `sides` sides, each new face satisfying
/// `rule` against all faces chosen so far.
fn pick_faces(
    p: &Polyhedron,
    sides: usize,
    count: usize,
    rule: impl Fn(&Polyhedron, usize, usize) -> bool,
) -> Result<Vec<usize>> {
    let mut chosen: Vec<usize> = Vec::with_capacity(count);
    for fi in p.f_indices().filter(|&fi| p.faces()[fi].len() == sides) {
        if chosen.len() == count {
            break;
        }
        if chosen.iter().all(|&c| rule(p, c, fi)) {
            chosen.push(fi);
        }
    }
    if chosen.len() != count {
        return Err(PolyError::Structural(format!(
            "{}: cannot place {count} caps",
            p.name()
        )));
    }
    Ok(chosen)
}

fn para(p: &Polyhedron, a: usize, b: usize) -> bool {
    antiparallel(p, a, b)
}

fn meta(p: &Polyhedron, a: usize, b: usize) -> bool {
    !shares_edge(p, a, b) && !antiparallel(p, a, b)
}

/// Faces meeting at an obtuse angle, short of antiparallel. Unlike `meta`,
/// this also rejects neighbours that only share a vertex or a square.
fn oblique(p: &Polyhedron, a: usize, b: usize) -> bool {
    let d = p.face_normal(a).dot(&p.face_normal(b));
    d < -EPS && d > -1.0 + EPS
}

/// Glue the convex placement of `template` onto each chosen face.
fn with_cupolae(
    name: &str,
    base: &Polyhedron,
    faces: &[usize],
    template: &Polyhedron,
) -> Result<Polyhedron> {
    let mut verts = base.vertex_vectors().to_vec();
    for &fi in faces {
        let cap = convex_cap_points(base, fi, template).ok_or_else(|| {
            PolyError::Structural(format!("{name}: no convex cap on face {fi}"))
        })?;
        verts.extend(cap);
    }
    Polyhedron::from_vertices(name, verts)
}

/// Turn the cupola on each face of `gyrated` by a fifth of a turn and drop
/// the vertices of each face of `removed`.
fn regyrated(
    name: &str,
    base: &Polyhedron,
    gyrated: &[usize],
    removed: &[usize],
) -> Result<Polyhedron> {
    let mut verts = base.vertex_vectors().to_vec();
    for &fi in gyrated {
        let pts = base.face_points(fi);
        let (c, axis) = (centroid(&pts), newell_normal(&pts));
        for &v in &base.faces()[fi] {
            verts[v] = rotate_about(&verts[v], &c, &axis, PI / 5.0);
        }
    }
    let dropped: Vec<usize> = removed
        .iter()
        .flat_map(|&fi| base.faces()[fi].iter().copied())
        .collect();
    let kept = verts
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !dropped.contains(i))
        .map(|(_, p)| p)
        .collect();
    Polyhedron::from_vertices(name, kept)
}

/// Remove `count` vertices that are pairwise neither adjacent nor antipodal.
fn without_vertices(name: &str, base: &Polyhedron, count: usize) -> Result<Polyhedron> {
    let vs = base.vertex_vectors();
    let mut removed = vec![0];
    for i in 1..vs.len() {
        if removed.len() == count {
            break;
        }
        let apart = removed
            .iter()
            .all(|&r| (distance(&vs[i], &vs[r]) - 1.0).abs() > EPS && (vs[i] + vs[r]).norm() > EPS);
        if apart {
            removed.push(i);
        }
    }
    if removed.len() != count {
        return Err(PolyError::Structural(format!(
            "{name}: cannot remove {count} vertices"
        )));
    }
    let kept = vs
        .iter()
        .enumerate()
        .filter(|(i, _)| !removed.contains(i))
        .map(|(_, p)| *p)
        .collect();
    Polyhedron::from_vertices(name, kept)
}

pub(super) fn all_solids() -> Result<BTreeMap<String, Polyhedron>> {
    use Band::{Antiprism, Prism};
    use CapKind::{R5, U3, U4, U5, Y3, Y4, Y5};

    let mut out = BTreeMap::new();
    let mut put = |p: Polyhedron| {
        out.insert(p.name().to_string(), p);
    };
    let phi = phi();

    put(Polyhedron::from_vertices(
        "tetrahedron",
        unit_edge(vec![
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(-1.0, -1.0, 1.0),
        ]),
    )?);
    put(Polyhedron::from_vertices("cube", unit_edge(signs([1.0, 1.0, 1.0])))?);
    put(Polyhedron::from_vertices("octahedron", unit_edge(all_perms([1.0, 0.0, 0.0])))?);
    let mut dodeca = signs([1.0, 1.0, 1.0]);
    dodeca.extend(even_perms([0.0, phi, 1.0 / phi]));
    put(Polyhedron::from_vertices("dodecahedron", unit_edge(dodeca))?);
    put(Polyhedron::from_vertices("icosahedron", unit_edge(even_perms([0.0, 1.0, phi])))?);
    put(Polyhedron::from_vertices("cuboctahedron", unit_edge(all_perms([1.0, 1.0, 0.0])))?);
    put(Polyhedron::from_vertices("icosidodecahedron", icosidodecahedron_points())?);
    put(Polyhedron::from_vertices(
        "rhombicuboctahedron",
        unit_edge(all_perms([1.0, 1.0, 1.0 + 2f64.sqrt()])),
    )?);

    let s2 = 2f64.sqrt();
    let truncated_tetrahedron = all_perms([3.0, 1.0, 1.0])
        .into_iter()
        .filter(|p| p.iter().filter(|&&c| c < 0.0).count() % 2 == 0)
        .collect();
    put(Polyhedron::from_vertices("truncated tetrahedron", unit_edge(truncated_tetrahedron))?);
    put(Polyhedron::from_vertices("truncated cube", unit_edge(all_perms([s2 - 1.0, 1.0, 1.0])))?);
    put(Polyhedron::from_vertices("truncated octahedron", unit_edge(all_perms([0.0, 1.0, 2.0])))?);
    put(Polyhedron::from_vertices(
        "truncated cuboctahedron",
        unit_edge(all_perms([1.0, 1.0 + s2, 1.0 + 2.0 * s2])),
    )?);
    let r33 = 3.0 * 33f64.sqrt();
    let tribonacci = (1.0 + (19.0 + r33).cbrt() + (19.0 - r33).cbrt()) / 3.0;
    put(Polyhedron::from_vertices(
        "snub cube",
        unit_edge(snub_orbit(&[[1.0, 1.0 / tribonacci, tribonacci]], true)),
    )?);

    let golden = |bases: &[[f64; 3]]| {
        unit_edge(orbit(bases.iter().flat_map(|&v| even_perms(v)).collect()))
    };
    let phi2 = phi * phi;
    put(Polyhedron::from_vertices(
        "truncated dodecahedron",
        golden(&[[0.0, 1.0 / phi, 2.0 + phi], [1.0 / phi, phi, 2.0 * phi], [phi, 2.0, phi + 1.0]]),
    )?);
    put(Polyhedron::from_vertices(
        "truncated icosahedron",
        golden(&[[0.0, 1.0, 3.0 * phi], [1.0, 2.0 + phi, 2.0 * phi], [phi, 2.0, phi2 * phi]]),
    )?);
    put(Polyhedron::from_vertices(
        "rhombicosidodecahedron",
        golden(&[[1.0, 1.0, phi2 * phi], [phi2, phi, 2.0 * phi], [2.0 + phi, 0.0, phi2]]),
    )?);
    put(Polyhedron::from_vertices(
        "truncated icosidodecahedron",
        golden(&[
            [1.0 / phi, 1.0 / phi, 3.0 + phi],
            [2.0 / phi, phi, 1.0 + 2.0 * phi],
            [1.0 / phi, phi2, 3.0 * phi - 1.0],
            [2.0 * phi - 1.0, 2.0, 2.0 + phi],
            [phi, 3.0, 2.0 * phi],
        ]),
    )?);
    let xi = bisect(|x| x * x * x - 2.0 * x - phi, 1.0, 2.0);
    let (a, b) = (xi - 1.0 / xi, xi * phi + phi2 + phi / xi);
    put(Polyhedron::from_vertices(
        "snub dodecahedron",
        unit_edge(snub_orbit(
            &[
                [2.0 * a, 2.0, 2.0 * b],
                [a + b / phi + phi, -a * phi + b + 1.0 / phi, a / phi + b * phi - 1.0],
                [-a / phi + b * phi + 1.0, -a + b / phi - phi, a * phi + b - 1.0 / phi],
                [-a / phi + b * phi - 1.0, a - b / phi - phi, a * phi + b + 1.0 / phi],
                [a + b / phi - phi, a * phi - b + 1.0 / phi, a / phi + b * phi + 1.0],
            ],
            false,
        )),
    )?);

    for n in [3, 5, 6, 8, 10] {
        put(stack(&format!("{} prism", adjective(n)?), n, None, Some(Prism), None, false)?);
    }
    for n in [4, 5, 6, 8, 10] {
        put(stack(&format!("{} antiprism", adjective(n)?), n, None, Some(Antiprism), None, false)?);
    }

    let singles = [
        ("square pyramid", 4, None, None, Y4),
        ("pentagonal pyramid", 5, None, None, Y5),
        ("triangular cupola", 6, None, None, U3),
        ("square cupola", 8, None, None, U4),
        ("pentagonal cupola", 10, None, None, U5),
        ("pentagonal rotunda", 10, None, None, R5),
        ("elongated triangular pyramid", 3, None, Some(Prism), Y3),
        ("elongated square pyramid", 4, None, Some(Prism), Y4),
        ("elongated pentagonal pyramid", 5, None, Some(Prism), Y5),
        ("gyroelongated square pyramid", 4, None, Some(Antiprism), Y4),
        ("gyroelongated pentagonal pyramid", 5, None, Some(Antiprism), Y5),
        ("triangular bipyramid", 3, Some(Y3), None, Y3),
        ("pentagonal bipyramid", 5, Some(Y5), None, Y5),
        ("elongated triangular bipyramid", 3, Some(Y3), Some(Prism), Y3),
        ("elongated square bipyramid", 4, Some(Y4), Some(Prism), Y4),
        ("elongated pentagonal bipyramid", 5, Some(Y5), Some(Prism), Y5),
        ("gyroelongated square bipyramid", 4, Some(Y4), Some(Antiprism), Y4),
        ("elongated pentagonal rotunda", 10, None, Some(Prism), R5),
        ("gyroelongated pentagonal rotunda", 10, None, Some(Antiprism), R5),
        ("pentagonal orthobirotunda", 10, Some(R5), None, R5),
        ("elongated pentagonal orthobirotunda", 10, Some(R5), Some(Prism), R5),
        ("gyroelongated pentagonal birotunda", 10, Some(R5), Some(Antiprism), R5),
    ];
    for (name, m, bottom, band, top) in singles {
        put(stack(name, m, bottom, band, Some(top), false)?);
    }
    put(stack(
        "elongated pentagonal gyrobirotunda",
        10,
        Some(R5),
        Some(Prism),
        Some(R5),
        true,
    )?);

    for (n, cap) in [(3, U3), (4, U4), (5, U5)] {
        let adj = adjective(n)?;
        let m = 2 * n;
        let c = Some(cap);
        put(stack(&format!("elongated {adj} cupola"), m, None, Some(Prism), c, false)?);
        put(stack(&format!("gyroelongated {adj} cupola"), m, None, Some(Antiprism), c, false)?);
        put(stack(&format!("{adj} orthobicupola"), m, c, None, c, false)?);
        if n != 3 {
            // The triangular gyrobicupola is the cuboctahedron.
            put(stack(&format!("{adj} gyrobicupola"), m, c, None, c, true)?);
        }
        if n != 4 {
            // The elongated square orthobicupola is the rhombicuboctahedron.
            put(stack(&format!("elongated {adj} orthobicupola"), m, c, Some(Prism), c, false)?);
        }
        put(stack(&format!("elongated {adj} gyrobicupola"), m, c, Some(Prism), c, true)?);
        put(stack(&format!("gyroelongated {adj} bicupola"), m, c, Some(Antiprism), c, false)?);
    }
    for (band, prefix) in [(None, ""), (Some(Prism), "elongated ")] {
        for (gyro, joint) in [(false, "ortho"), (true, "gyro")] {
            let name = format!("{prefix}pentagonal {joint}cupolarotunda");
            put(stack(&name, 10, Some(U5), band, Some(R5), gyro)?);
        }
    }
    put(stack(
        "gyroelongated pentagonal cupolarotunda",
        10,
        Some(U5),
        Some(Antiprism),
        Some(R5),
        false,
    )?);

    let h = 3f64.sqrt() / 2.0;
    put(Polyhedron::from_vertices(
        "gyrobifastigium",
        vec![
            Vec3::new(0.5, 0.5, 0.0),
            Vec3::new(0.5, -0.5, 0.0),
            Vec3::new(-0.5, 0.5, 0.0),
            Vec3::new(-0.5, -0.5, 0.0),
            Vec3::new(0.5, 0.0, h),
            Vec3::new(-0.5, 0.0, h),
            Vec3::new(0.0, 0.5, -h),
            Vec3::new(0.0, -0.5, -h),
        ],
    )?);
    put(snub_disphenoid()?);
    put(snub_square_antiprism()?);
    put(sphenocorona()?);
    put(bilunabirotunda()?);
    drop(put);

    let get = |name: &str| {
        out.get(name)
            .cloned()
            .ok_or_else(|| PolyError::UnknownSolid(name.to_string()))
    };
    let triangular_prism = get("triangular prism")?;
    let pentagonal_prism = get("pentagonal prism")?;
    let hexagonal_prism = get("hexagonal prism")?;
    let dodecahedron = get("dodecahedron")?;
    let icosahedron = get("icosahedron")?;

    let any = |_: &Polyhedron, _: usize, _: usize| true;
    let mut derived = Vec::new();
    for (count, prefix) in [(1, ""), (2, "bi"), (3, "tri")] {
        let faces = pick_faces(&triangular_prism, 4, count, any)?;
        derived.push(with_apexes(
            &format!("{prefix}augmented triangular prism"),
            &triangular_prism,
            &faces,
        )?);
    }
    let faces = pick_faces(&pentagonal_prism, 4, 1, any)?;
    derived.push(with_apexes("augmented pentagonal prism", &pentagonal_prism, &faces)?);
    let faces = pick_faces(&pentagonal_prism, 4, 2, |p, a, b| !shares_edge(p, a, b))?;
    derived.push(with_apexes("biaugmented pentagonal prism", &pentagonal_prism, &faces)?);

    for (base, sides, base_name) in [
        (&hexagonal_prism, 4, "hexagonal prism"),
        (&dodecahedron, 5, "dodecahedron"),
    ] {
        let one = pick_faces(base, sides, 1, any)?;
        derived.push(with_apexes(&format!("augmented {base_name}"), base, &one)?);
        let two_para = pick_faces(base, sides, 2, para)?;
        derived.push(with_apexes(&format!("parabiaugmented {base_name}"), base, &two_para)?);
        let two_meta = pick_faces(base, sides, 2, meta)?;
        derived.push(with_apexes(&format!("metabiaugmented {base_name}"), base, &two_meta)?);
        let three = pick_faces(base, sides, 3, meta)?;
        derived.push(with_apexes(&format!("triaugmented {base_name}"), base, &three)?);
    }

    derived.push(without_vertices("metabidiminished icosahedron", &icosahedron, 2)?);
    let tridiminished = without_vertices("tridiminished icosahedron", &icosahedron, 3)?;
    // The triangle bordering all three pentagons takes the extra pyramid.
    let pentagons: Vec<usize> = tridiminished
        .f_indices()
        .filter(|&f| tridiminished.faces()[f].len() == 5)
        .collect();
    let central: Vec<usize> = tridiminished
        .f_indices()
        .filter(|&f| {
            tridiminished.faces()[f].len() == 3
                && pentagons.iter().all(|&p| shares_edge(&tridiminished, f, p))
        })
        .collect();
    derived.push(with_apexes(
        "augmented tridiminished icosahedron",
        &tridiminished,
        &central,
    )?);
    derived.push(tridiminished);

    for (base_name, sides, cupola) in [
        ("truncated tetrahedron", 6, "triangular cupola"),
        ("truncated cube", 8, "square cupola"),
        ("truncated dodecahedron", 10, "pentagonal cupola"),
    ] {
        let base = get(base_name)?;
        let template = get(cupola)?;
        let one = pick_faces(&base, sides, 1, any)?;
        derived.push(with_cupolae(&format!("augmented {base_name}"), &base, &one, &template)?);
        if sides == 8 {
            let two = pick_faces(&base, sides, 2, para)?;
            derived.push(with_cupolae(&format!("biaugmented {base_name}"), &base, &two, &template)?);
        }
        if sides == 10 {
            let two_para = pick_faces(&base, sides, 2, para)?;
            let two_meta = pick_faces(&base, sides, 2, oblique)?;
            let three = pick_faces(&base, sides, 3, oblique)?;
            for (prefix, faces) in [("parabi", &two_para), ("metabi", &two_meta), ("tri", &three)] {
                let name = format!("{prefix}augmented {base_name}");
                derived.push(with_cupolae(&name, &base, faces, &template)?);
            }
        }
    }

    let rhombi = get("rhombicosidodecahedron")?;
    let one = pick_faces(&rhombi, 5, 1, any)?;
    let pair = pick_faces(&rhombi, 5, 2, para)?;
    let bent = pick_faces(&rhombi, 5, 2, oblique)?;
    let three = pick_faces(&rhombi, 5, 3, oblique)?;
    let changes: [(&str, &[usize], &[usize]); 12] = [
        ("gyrate", &one, &[]),
        ("parabigyrate", &pair, &[]),
        ("metabigyrate", &bent, &[]),
        ("trigyrate", &three, &[]),
        ("diminished", &[], &one),
        ("paragyrate diminished", &pair[1..], &pair[..1]),
        ("metagyrate diminished", &bent[1..], &bent[..1]),
        ("bigyrate diminished", &three[1..], &three[..1]),
        ("parabidiminished", &[], &pair),
        ("metabidiminished", &[], &bent),
        ("gyrate bidiminished", &three[2..], &three[..2]),
        ("tridiminished", &[], &three),
    ];
    for (prefix, gyrated, removed) in changes {
        let name = format!("{prefix} rhombicosidodecahedron");
        derived.push(regyrated(&name, &rhombi, gyrated, removed)?);
    }

    let sphenocorona = get("sphenocorona")?;
    let square = pick_faces(&sphenocorona, 4, 1, any)?;
    derived.push(with_apexes("augmented sphenocorona", &sphenocorona, &square)?);
    derived.push(hebesphenorotunda(&get("icosidodecahedron")?)?);

    for p in derived {
        out.insert(p.name().to_string(), p);
    }
    Ok(out)
}

fn snub_disphenoid() -> Result<Polyhedron> {
    let q = bisect(|x| ((2.0 * x + 11.0) * x + 4.0) * x - 1.0, 0.0, 1.0);
    let (r, s) = (q.sqrt(), ((1.0 - q) / (2.0 * q)).sqrt());
    let t = 2.0 * r * s;
    let pts = vec![
        Vec3::new(t, r, 0.0),
        Vec3::new(-t, r, 0.0),
        Vec3::new(0.0, -r, t),
        Vec3::new(0.0, -r, -t),
        Vec3::new(1.0, -s, 0.0),
        Vec3::new(-1.0, -s, 0.0),
        Vec3::new(0.0, s, 1.0),
        Vec3::new(0.0, s, -1.0),
    ];
    Polyhedron::from_vertices("snub disphenoid", unit_edge(pts))
}

/// Two squares turned against each other, joined by a zig-zag ring of eight.
fn snub_square_antiprism() -> Result<Polyhedron> {
    // Solved numerically: square height, ring radius, ring zig-zag amplitude.
    let (height, radius, zig) = (
        0.676_868_511_219_510_1,
        1.213_205_543_533_479_6,
        -0.185_607_022_813_256_75,
    );
    let mut pts = ring(4, PI / 4.0, height);
    pts.extend(ring(4, PI / 2.0, -height));
    pts.extend(
        ring_with_radius(8, PI / 4.0, 0.0, radius)
            .into_iter()
            .enumerate()
            .map(|(k, p)| Vec3::new(p.x, p.y, if k % 2 == 0 { zig } else { -zig })),
    );
    Polyhedron::from_vertices("snub square antiprism", pts)
}

fn sphenocorona() -> Result<Polyhedron> {
    let k = bisect(
        |x| (((60.0 * x - 48.0) * x - 100.0) * x + 56.0) * x + 23.0,
        0.5,
        0.99,
    );
    let a = (1.0 - k * k).sqrt();
    let y = 1.0 + ((3.0 - 4.0 * k * k) / (1.0 - k * k)).sqrt();
    let z = (1.0 - 2.0 * k * k) / a;
    let w = (2.0 + 4.0 * k - 4.0 * k * k).sqrt();
    let mut pts = Vec::with_capacity(10);
    for s in [1.0, -1.0] {
        pts.push(Vec3::new(0.0, s, 2.0 * a));
        pts.push(Vec3::new(2.0 * k, s, 0.0));
        pts.push(Vec3::new(-2.0 * k, s, 0.0));
        pts.push(Vec3::new(0.0, s * y, z));
        pts.push(Vec3::new(s, 0.0, -w));
    }
    Polyhedron::from_vertices("sphenocorona", unit_edge(pts))
}

fn bilunabirotunda() -> Result<Polyhedron> {
    let phi = phi();
    let mut pts = Vec::with_capacity(14);
    for sx in [1.0, -1.0] {
        for sy in [1.0, -1.0] {
            pts.push(Vec3::new(sx / 2.0, sy / 2.0, phi / 2.0));
            pts.push(Vec3::new(sx / 2.0, sy / 2.0, -phi / 2.0));
            pts.push(Vec3::new(0.0, sx * phi * phi / 2.0, sy / 2.0));
        }
        pts.push(Vec3::new(sx * phi / 2.0, 0.0, 0.0));
    }
    Polyhedron::from_vertices("bilunabirotunda", pts)
}

/// The icosidodecahedron's top three layers around a triangle, closed below
/// by a hexagon.
fn hebesphenorotunda(ico: &Polyhedron) -> Result<Polyhedron> {
    let name = "triangular hebesphenorotunda";
    let structural = |what: &str| PolyError::Structural(format!("{name}: {what}"));
    let tri = ico
        .f_indices()
        .find(|&f| ico.faces()[f].len() == 3)
        .ok_or_else(|| structural("no triangle to build on"))?;
    let n = ico.face_normal(tri);
    let corners = ico.face_points(tri);
    let x = (corners[0] - centroid(&corners)).normalize();
    let y = n.cross(&x);

    let mut levels: Vec<f64> = ico.vertex_vectors().iter().map(|p| p.dot(&n)).collect();
    levels.sort_by(|a, b| b.total_cmp(a));
    levels.dedup_by(|a, b| (*a - *b).abs() < EPS);
    let floor = *levels.get(2).ok_or_else(|| structural("too few layers"))?;

    let mut pts: Vec<Vec3> = ico
        .vertex_vectors()
        .iter()
        .filter(|p| p.dot(&n) > floor - EPS)
        .map(|p| Vec3::new(p.dot(&x), p.dot(&y), p.dot(&n)))
        .collect();
    let lowest: Vec<Vec3> = pts.iter().filter(|p| (p.z - floor).abs() < EPS).copied().collect();
    let hexagon = ring(6, PI / 6.0, 0.0);
    let z = floor - gap(&lowest, &hexagon);
    pts.extend(hexagon.into_iter().map(|p| Vec3::new(p.x, p.y, z)));
    Polyhedron::from_vertices(name, pts)
}
