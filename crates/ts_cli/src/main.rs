//! Match Scoring CLI
//!
//! Reads recorded matches (one per line) and writes one score line each.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use ts_cli::{process_file, OutputFormat};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "ts_cli")]
#[command(about = "Score recorded tennis matches line by line", long_about = None)]
struct Cli {
    /// Input file path (one recorded match per line)
    #[arg(long, short = 'i')]
    r#in: PathBuf,

    /// Output file path (one score line per match)
    #[arg(long, short = 'o')]
    out: PathBuf,

    /// Emit one JSON response per match instead of plain score lines
    #[arg(long, default_value = "false")]
    json: bool,
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("🎾 Scoring recorded matches...");
    println!("   Input:  {}", cli.r#in.display());
    println!("   Output: {}", cli.out.display());

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Plain
    };
    let stats = process_file(&cli.r#in, &cli.out, format)?;

    println!("\n✅ Scored {} matches ({} points)", stats.matches, stats.points);
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("ts_cli is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
