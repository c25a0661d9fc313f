use clap::Parser;
use sorta::config::Cli;
use sorta::Config;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    sorta::logging::init();
    debug!("sorta v{} starting", sorta::VERSION);

    // Convert CLI args to Config - this validates immediately
    let config = Config::try_from(cli)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    // Per-file failures are visible in the log stream and the summary line;
    // the exit code stays 0 as long as the run itself completes.
    runtime.block_on(sorta::commands::sort::run(&config))?;

    Ok(())
}
