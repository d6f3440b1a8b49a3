use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use polyhedra::classification::describe;
use polyhedra::classification::names::{escape_name, to_conway_notation};
use polyhedra::prelude::*;
use serde_json::json;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod output;

use output::{mesh_json, write_with_sidecar, InfoView, RelationView};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Explore convex regular-faced polyhedra and the operations between them")]
struct Cmd {
    /// Log debug events from the engine
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// List catalog solids with their Conway notation
    List,
    /// Print classification and metrics of one solid
    Info { name: String },
    /// Print the outgoing relation edges of one solid
    Relations { name: String },
    /// Apply one operation (+ - g P A ~P ~A) and report the result
    Apply {
        name: String,
        op: String,
        /// Face index to augment
        #[arg(long)]
        face: Option<usize>,
        /// Peak index (into the solid's peak list) to diminish or gyrate
        #[arg(long)]
        peak: Option<usize>,
        /// ortho | gyro
        #[arg(long)]
        gyrate: Option<String>,
        /// Cap kind: Y3 Y4 Y5 U3 U4 U5 R5
        #[arg(long)]
        using: Option<String>,
        /// Include vertices and faces in the output
        #[arg(long)]
        mesh: bool,
        /// Also write the mesh JSON here, with a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Random operation walk from a solid
    Walk {
        name: String,
        #[arg(long, default_value_t = 10)]
        steps: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let catalog = Catalog::new().context("building catalog")?;
    match cmd.action {
        Action::List => list(&catalog),
        Action::Info { name } => info(&catalog, &name),
        Action::Relations { name } => relations(&catalog, &name),
        Action::Apply {
            name,
            op,
            face,
            peak,
            gyrate,
            using,
            mesh,
            out,
        } => {
            let options = Options {
                gyrate: gyrate.as_deref().map(str::parse).transpose()?,
                using: using.as_deref().map(str::parse).transpose()?,
            };
            apply(&catalog, &name, &op, face, peak, options, mesh, out)
        }
        Action::Walk { name, steps, seed } => walk(&catalog, &name, steps, seed),
    }
}

fn list(catalog: &Catalog) -> Result<()> {
    let rows = catalog
        .names()
        .map(|name| {
            Ok(json!({
                "name": name,
                "slug": escape_name(name),
                "conway": to_conway_notation(name)?,
            }))
        })
        .collect::<Result<Vec<_>>>()?;
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn info(catalog: &Catalog, name: &str) -> Result<()> {
    let poly = catalog.get(name)?;
    let info = describe(poly).with_context(|| format!("classifying {name}"))?;
    println!("{}", serde_json::to_string_pretty(&InfoView::from(&info))?);
    Ok(())
}

fn relations(catalog: &Catalog, name: &str) -> Result<()> {
    let poly = catalog.get(name)?;
    let table = catalog.relations();
    let edges: Vec<RelationView> = table
        .get_operations(poly.name())
        .into_iter()
        .flat_map(|op| table.get_relations(poly.name(), op))
        .map(RelationView::from)
        .collect();
    tracing::info!(name = poly.name(), edges = edges.len(), "relations");
    println!("{}", serde_json::to_string_pretty(&edges)?);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn apply(
    catalog: &Catalog,
    name: &str,
    op: &str,
    face: Option<usize>,
    peak: Option<usize>,
    options: Options,
    mesh: bool,
    out: Option<PathBuf>,
) -> Result<()> {
    let poly = catalog.get(name)?;
    let op: Operation = op.parse()?;
    let argument = match (op, face, peak) {
        (Operation::Augment, Some(f), None) => Argument::Face(f),
        (Operation::Augment, None, None) => eligible_arguments(catalog, op, poly)
            .into_iter()
            .next()
            .context("no face can be augmented")?,
        (Operation::Diminish | Operation::Gyrate, None, index) => {
            let peaks = poly.peaks();
            let i = index.unwrap_or(0);
            let Some(p) = peaks.into_iter().nth(i) else {
                bail!("{} has no peak {i}", poly.name());
            };
            Argument::Peak(p)
        }
        (_, None, None) => Argument::Whole,
        _ => bail!("--face only applies to '+', --peak only to '-' and 'g'"),
    };
    tracing::info!(name = poly.name(), op = %op, argument = ?argument, "apply");
    let result = apply_operation(catalog, op, poly, &argument, &options)?;
    let valid = validate(catalog, &result);
    let mut doc = json!({
        "from": poly.name(),
        "op": op.to_string(),
        "to": result.name(),
        "proper": is_proper_polyhedron(&result),
        "valid": valid.is_ok(),
    });
    if let Err(e) = &valid {
        doc["reason"] = json!(e.to_string());
    }
    if mesh {
        doc["mesh"] = mesh_json(&result);
    }
    if let Some(path) = out {
        let params = json!({
            "from": poly.name(),
            "op": op.to_string(),
            "face": face,
            "peak": peak,
            "gyrate": options.gyrate.map(|g| g.to_string()),
            "using": options.using.map(|c| c.to_string()),
        });
        let sidecar = write_with_sidecar(&path, &mesh_json(&result), params)?;
        tracing::info!(out = %path.display(), sidecar = %sidecar.display(), "wrote mesh");
    }
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn walk(catalog: &Catalog, name: &str, steps: usize, seed: u64) -> Result<()> {
    let walk = random_walk(catalog, name, steps, ReplayToken { seed, index: 0 })?;
    let rows: Vec<_> = walk
        .iter()
        .map(|s| json!({ "op": s.op.to_string(), "to": s.result.name() }))
        .collect();
    println!("{}", serde_json::to_string_pretty(&json!({ "start": name, "steps": rows }))?);
    Ok(())
}
