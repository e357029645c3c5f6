//! Replay a CSV command script against a fresh deck.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use clap::Parser;
use linked_deck::{parse_capacity, read_script, run_script, Engine};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "replay")]
#[command(about = "Apply an op,id CSV script to a card deck")]
struct Cli {
    /// Script to replay; reads stdin when omitted
    script: Option<PathBuf>,

    /// Cards to reserve room for up front
    #[arg(long, default_value = "0", value_parser = parse_capacity)]
    capacity: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let steps = match &cli.script {
        Some(path) => read_script(BufReader::new(File::open(path)?))?,
        None => read_script(io::stdin().lock())?,
    };
    info!(steps = steps.len(), "script loaded");

    let mut engine = Engine::new(cli.capacity);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_script(&mut engine, &steps, &mut out)?;
    out.flush()?;

    info!(remaining = engine.card_count(), state_hash = engine.state_hash(), "replay finished");
    Ok(())
}
