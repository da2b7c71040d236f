use clap::Args;
use cutfeed_processor::{compute_totals_scoped, PartScope, PartTotals};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct PartsArgs {
    /// Program file to inspect
    pub input: PathBuf,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Treat the whole program as one part, ignoring part markers
    #[arg(long)]
    pub whole_program: bool,
}

#[derive(Debug, Serialize)]
struct PartSummary<'a> {
    name: &'a str,
    events: usize,
}

pub fn run(args: PartsArgs) -> anyhow::Result<()> {
    let program = super::read_program(&args.input)?;
    let scope = if args.whole_program {
        PartScope::WholeProgram
    } else {
        PartScope::PerPart
    };
    let totals = compute_totals_scoped(&program, scope);

    let mut stdout = std::io::stdout().lock();
    write_parts(&totals, args.json, &mut stdout)
}

/// Write the part list as a tab-separated table or as JSON
pub fn write_parts(totals: &PartTotals, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    if json {
        let summaries: Vec<_> = totals
            .iter()
            .map(|(name, events)| PartSummary {
                name: name.as_str(),
                events,
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &summaries)?;
        writeln!(out)?;
    } else {
        for (name, events) in totals.iter() {
            writeln!(out, "{}\t{}", name, events)?;
        }
    }
    Ok(())
}
