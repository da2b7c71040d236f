use anyhow::Context;
use clap::Args;
use cutfeed_core::{PartName, Thickness};
use cutfeed_processor::{compute_totals_scoped, PartScope, RewriteDriver, RewriteLimits, RewriteReport};
use cutfeed_settings::Config;
use std::path::PathBuf;

/// A `NAME=N` limit given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitArg {
    pub part: PartName,
    pub limit: u32,
}

fn parse_limit(value: &str) -> Result<LimitArg, String> {
    RewriteLimits::parse_assignment(value)
        .map(|(part, limit)| LimitArg { part, limit })
        .map_err(|e| e.to_string())
}

#[derive(Args, Debug, Clone)]
pub struct RewriteArgs {
    /// Program file to rewrite
    pub input: PathBuf,

    /// Output file, or '-' for stdout [default: <prefix><input name> next to the input]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Material thickness: 8mm, 5mm, anything else keeps the full feed
    #[arg(short, long)]
    pub thickness: Option<String>,

    /// Rewrite limit for one part as NAME=N (repeatable)
    #[arg(short = 'l', long = "limit", value_parser = parse_limit)]
    pub limits: Vec<LimitArg>,

    /// Limit for parts without an explicit one
    #[arg(long)]
    pub default_limit: Option<u32>,

    /// Treat the whole program as one part, ignoring part markers
    #[arg(long)]
    pub whole_program: bool,

    /// Configuration file (.toml or .json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the decision for every spindle-start event to stderr
    #[arg(long)]
    pub report: bool,
}

impl RewriteArgs {
    /// Apply command-line overrides on top of the loaded configuration
    fn apply_to(&self, config: &mut Config) {
        if let Some(selector) = &self.thickness {
            config.thickness = Thickness::from_selector(selector);
        }
        if let Some(default) = self.default_limit {
            config.default_limit = Some(default);
        }
        if self.whole_program {
            config.part_scope = PartScope::WholeProgram;
        }
        for arg in &self.limits {
            config.limits.set(arg.part.clone(), arg.limit);
        }
    }
}

pub fn run(args: RewriteArgs) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;
    args.apply_to(&mut config);

    let mut program = super::read_program(&args.input)?;
    if !config.output.preserve_trailing_newline {
        program = program.with_trailing_newline(false);
    }

    let totals = compute_totals_scoped(&program, config.part_scope);
    let limits = config.resolve_limits(&totals.parts_with_events())?;

    let feed = config.thickness.feed_value();
    tracing::info!(
        "Rewriting {} ({} lines, {} parts) with thickness {} -> {}",
        args.input.display(),
        program.len(),
        totals.len(),
        config.thickness,
        feed
    );

    let report = RewriteDriver::new(feed, &limits)
        .with_scope(config.part_scope)
        .run(&program);

    if args.report {
        eprint!("{}", render_report(&report));
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.output.output_path_for(&args.input));
    super::write_text(&output, &report.program.to_text())?;
    tracing::info!("Wrote {}", output.display());

    Ok(())
}

/// One line per event: line number, part, position, decision
pub fn render_report(report: &RewriteReport) -> String {
    let mut text = String::new();
    for event in &report.events {
        text.push_str(&format!(
            "line {:>6}  {:<24} {:>3}/{:<3} {}\n",
            event.line_index + 1,
            event.part.as_str(),
            event.ordinal,
            event.part_total,
            event.decision
        ));
    }
    text.push_str(&format!(
        "{} of {} events rewritten, {} lines changed\n",
        report.rewritten_events(),
        report.events.len(),
        report.lines_rewritten
    ));
    text
}
