//! Analysis REPL Binary
//!
//! Loads hero catalog and match history snapshots from JSON and runs
//! the interactive analysis loop against them.

use anyhow::Context;
use clap::Parser;
use counterdraft::analysis::cli::CLI;
use counterdraft::catalog::catalog::Catalog;
use counterdraft::catalog::hero::Hero;
use counterdraft::history::record::MatchRecord;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// hero catalog snapshot: [{id, name}]
    #[arg(long)]
    heroes: std::path::PathBuf,
    /// match history snapshot: [{winner_team, participants}]
    #[arg(long)]
    matches: std::path::PathBuf,
}

fn main() -> anyhow::Result<()> {
    counterdraft::log();
    let args = Args::parse();
    let heroes: Vec<Hero> = load(&args.heroes).context("loading hero catalog")?;
    let history: Vec<MatchRecord> = load(&args.matches).context("loading match history")?;
    CLI::new(Catalog::from(heroes), history).run();
    Ok(())
}

fn load<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> anyhow::Result<T> {
    let file = std::fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
    Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
}
