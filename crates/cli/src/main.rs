//! Demo/timing harness for the grid search. Not part of the library
//! contract; exercises the library the way a host program would.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

use gridroute::prelude::*;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Grid pathfinding demo runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build a grid, search corner to corner, print timing.
    Demo {
        /// Grid rows.
        #[arg(long, default_value_t = 75)]
        rows: u32,
        /// Grid columns.
        #[arg(long, default_value_t = 75)]
        cols: u32,
        /// Rotation penalty coefficient.
        #[arg(long, default_value_t = 1.0)]
        rotation_penalty: f64,
        /// Uniform per-edge cost.
        #[arg(long, default_value_t = 1.0)]
        edge_cost: f64,
        /// Emit the result as JSON on stdout.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct DemoReport {
    rows: u32,
    cols: u32,
    rotation_penalty: f64,
    cost: f64,
    path_edges: usize,
    build_ms: f64,
    search_ms: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Demo {
            rows,
            cols,
            rotation_penalty,
            edge_cost,
            json,
        } => demo(rows, cols, rotation_penalty, edge_cost, json),
    }
}

fn demo(rows: u32, cols: u32, rotation_penalty: f64, edge_cost: f64, json: bool) -> Result<()> {
    if rows == 0 || cols == 0 {
        bail!("grid must have at least one row and one column");
    }
    tracing::info!(rows, cols, rotation_penalty, "demo");

    let t0 = Instant::now();
    let ws = GridWorkspace::build(rows, cols, 1.0);
    let build_ms = t0.elapsed().as_secs_f64() * 1e3;
    tracing::info!(
        vertices = ws.graph().vertex_count(),
        edges = ws.graph().edge_count(),
        build_ms,
        "grid built"
    );

    let costs: HashMap<DirectedEdge, f64> =
        ws.graph().edges().map(|e| (e, edge_cost)).collect();
    let start = ws.vertex_at(Coordinate::new(0.0, 0.0))?;
    let goal = ws.vertex_at(Coordinate::new((rows - 1) as f64, (cols - 1) as f64))?;

    let t1 = Instant::now();
    let info = search_to_vertices(
        &ws,
        Coordinate::new(0.0, 1.0),
        start,
        &HashSet::from([goal]),
        &costs,
        rotation_penalty,
    )?;
    let search_ms = t1.elapsed().as_secs_f64() * 1e3;
    tracing::info!(cost = info.cost, path_edges = info.path.len(), search_ms, "search done");

    if json {
        let report = DemoReport {
            rows,
            cols,
            rotation_penalty,
            cost: info.cost,
            path_edges: info.path.len(),
            build_ms,
            search_ms,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}x{} grid: cost {:.6} over {} edges (build {:.2} ms, search {:.2} ms)",
            rows,
            cols,
            info.cost,
            info.path.len(),
            build_ms,
            search_ms
        );
    }
    Ok(())
}
