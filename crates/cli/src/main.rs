use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hypertile::api::{
    GeomCfg, HyperbolicTessellation, TessellateCfg, TessellationConfig, TessellationGraph,
    Traversal, VertexMatching, DEFAULT_MATCH_EPS, DEFAULT_MIN_AREA,
};
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod drawing;
mod export;
mod provenance;

use provenance::RunRecord;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Draw {p,q} tilings of the Poincaré disk and their adjacency graphs")]
struct Cmd {
    /// Geometric tolerance used for collinearity and near-equality checks
    #[arg(long, global = true)]
    eps: Option<f64>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Tile the disk by reflection and write an SVG drawing
    Tessellate {
        #[arg(long)]
        p: usize,
        #[arg(long)]
        q: usize,
        /// Stop expanding polygons whose bounding box is smaller than this
        #[arg(long, default_value_t = DEFAULT_MIN_AREA)]
        min_area: f64,
        /// Canvas width and height in pixels
        #[arg(long, default_value_t = 500.0)]
        width: f64,
        /// Deduplicate with sorted pointwise matching (may not terminate on sort ties)
        #[arg(long)]
        sorted: bool,
        /// Per-vertex tolerance for recognizing an already-drawn polygon
        #[arg(long, default_value_t = DEFAULT_MATCH_EPS)]
        match_eps: f64,
        /// Expand polygons in discovery order instead of depth-first
        #[arg(long)]
        breadth_first: bool,
        #[arg(long)]
        out: String,
    },
    /// Build the layered adjacency graph and write it as JSON
    Graph {
        #[arg(long)]
        p: usize,
        #[arg(long)]
        q: usize,
        #[arg(long, default_value_t = 3)]
        layers: usize,
        #[arg(long)]
        out: String,
    },
    /// Print the crate version and code revision as JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let geom = cmd.eps.map_or_else(GeomCfg::default, GeomCfg::uniform);
    match cmd.action {
        Action::Tessellate {
            p,
            q,
            min_area,
            width,
            sorted,
            match_eps,
            breadth_first,
            out,
        } => {
            let run = TessellateCfg {
                min_area,
                matching: if sorted {
                    VertexMatching::Sorted
                } else {
                    VertexMatching::Unordered
                },
                match_eps,
                traversal: if breadth_first {
                    Traversal::BreadthFirst
                } else {
                    Traversal::DepthFirst
                },
            };
            tessellate(p, q, run, width, geom, out)
        }
        Action::Graph { p, q, layers, out } => graph(p, q, layers, out),
        Action::Report => report(),
    }
}

fn tessellate(
    p: usize,
    q: usize,
    run: TessellateCfg,
    width: f64,
    geom: GeomCfg,
    out: String,
) -> Result<()> {
    tracing::info!(
        p,
        q,
        min_area = run.min_area,
        matching = ?run.matching,
        width,
        out,
        "tessellate"
    );
    let config = TessellationConfig::new(p, q)?;
    let tiling = HyperbolicTessellation::with_cfg(config, geom, run)
        .with_context(|| format!("tessellating {config}"))?;
    let doc = drawing::render_tessellation(&tiling, width).context("rendering svg")?;
    write_artifact(&out, doc.to_string().as_bytes())?;
    tracing::info!(polygons = tiling.len(), "svg written");

    RunRecord::new(
        "tessellate",
        json!({
            "p": p,
            "q": q,
            "min_area": run.min_area,
            "width": width,
            "matching": format!("{:?}", run.matching),
            "match_eps": run.match_eps,
            "traversal": format!("{:?}", run.traversal),
            "eps_dist": geom.eps_dist,
            "eps_det": geom.eps_det,
        }),
    )
    .with_summary(json!({ "polygons": tiling.len() }))
    .write_beside(Path::new(&out))?;
    Ok(())
}

fn graph(p: usize, q: usize, layers: usize, out: String) -> Result<()> {
    tracing::info!(p, q, layers, out, "graph");
    let config = TessellationConfig::new(p, q)?;
    let graph = TessellationGraph::new(config, layers)
        .with_context(|| format!("building {layers}-layer graph for {config}"))?;
    let doc = export::GraphDoc::from_graph(&graph);
    write_artifact(&out, &serde_json::to_vec_pretty(&doc)?)?;
    tracing::info!(
        vertices = graph.num_vertices(),
        edges = graph.edges().len(),
        "graph written"
    );

    RunRecord::new("graph", json!({ "p": p, "q": q, "layers": layers }))
        .with_summary(json!({ "layer_sizes": graph.layer_sizes() }))
        .write_beside(Path::new(&out))?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::code_rev(),
        "crate_version": hypertile::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_artifact(out: &str, bytes: &[u8]) -> Result<()> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, bytes).with_context(|| format!("writing {out}"))
}
