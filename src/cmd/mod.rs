//! Command-line interface

use anyhow::Context;
use clap::{Parser, Subcommand};
use cutfeed_core::Program;
use std::io::Write;
use std::path::Path;

pub mod parts;
pub mod points;
pub mod rewrite;

#[derive(Parser, Debug)]
#[command(name = "cutfeed")]
#[command(version, about = "Slow the feed on a cyclic subset of cuts in each part of a CNC program", long_about = None)]
pub struct Cli {
    /// Log decisions for every spindle-start event
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite the sentinel feed on a cyclic subset of cuts
    Rewrite(rewrite::RewriteArgs),

    /// List the parts of a program and their spindle-start totals
    Parts(parts::PartsArgs),

    /// Print the X/Y coordinate sequence of a program as JSON
    Points(points::PointsArgs),
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.cmd {
        Commands::Rewrite(args) => rewrite::run(args),
        Commands::Parts(args) => parts::run(args),
        Commands::Points(args) => points::run(args),
    }
}

/// Read a program file, decoding invalid UTF-8 lossily
pub(crate) fn read_program(path: &Path) -> anyhow::Result<Program> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Program::from_bytes(&bytes))
}

/// Write text to a file, or to stdout when the path is `-`
pub(crate) fn write_text(path: &Path, text: &str) -> anyhow::Result<()> {
    if path == Path::new("-") {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
    } else {
        std::fs::write(path, text)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}
