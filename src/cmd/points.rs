use clap::Args;
use cutfeed_processor::{extract_xy, XyPoint};
use std::io::Write;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct PointsArgs {
    /// Program file to inspect
    pub input: PathBuf,

    /// Only report points belonging to this part
    #[arg(short, long)]
    pub part: Option<String>,
}

pub fn run(args: PointsArgs) -> anyhow::Result<()> {
    let program = super::read_program(&args.input)?;
    let points = filter_points(extract_xy(&program), args.part.as_deref());
    tracing::debug!("Extracted {} points from {}", points.len(), args.input.display());

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &points)?;
    writeln!(stdout)?;
    Ok(())
}

pub fn filter_points(points: Vec<XyPoint>, part: Option<&str>) -> Vec<XyPoint> {
    match part {
        Some(part) => points
            .into_iter()
            .filter(|p| p.part.as_str() == part)
            .collect(),
        None => points,
    }
}
