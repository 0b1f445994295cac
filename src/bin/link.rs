//! Link a fixture file: print advancement edges, the laid out graph, or integrity issues.
//! Run with: cargo run --bin link -- fixtures.csv [--graph | --check]

use clap::Parser;
use fixture_graph::{bracket_issues, build_graph, compute_advancement_edges, fixtures_from_path};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Fixture file (.csv or .json)
    file: PathBuf,
    /// Print the graph (positioned nodes and progress edges) instead of plain edges
    #[arg(long, conflicts_with = "check")]
    graph: bool,
    /// Print integrity issues; exits with status 1 if there are any
    #[arg(long)]
    check: bool,
}

fn run(args: &Args) -> Result<bool, Box<dyn std::error::Error>> {
    let fixtures = fixtures_from_path(&args.file)?;
    log::info!("Loaded {} fixtures from {}", fixtures.len(), args.file.display());

    if args.check {
        let issues = bracket_issues(&fixtures)?;
        for issue in &issues {
            println!("{}", issue);
        }
        if issues.is_empty() {
            println!("No issues found");
        }
        return Ok(issues.is_empty());
    }

    let out = if args.graph {
        serde_json::to_string_pretty(&build_graph(&fixtures)?)?
    } else {
        let edges = compute_advancement_edges(&fixtures)?;
        log::info!("Total edges created: {}", edges.len());
        serde_json::to_string_pretty(&edges)?
    };
    println!("{}", out);
    Ok(true)
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let args = Args::parse();

    match run(&args) {
        Ok(true) => (),
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(2);
        }
    }
}
