use clap::Parser;
use cutfeed::{cmd, init_logging, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;
    tracing::debug!("cutfeed {} (built {})", cutfeed::VERSION, cutfeed::BUILD_DATE);

    cmd::run(cli)
}
