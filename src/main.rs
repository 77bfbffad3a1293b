use clap::Parser;
use tracing_subscriber::EnvFilter;

use license_scorer::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Resolved before logging starts so a config file can turn tracing on
    let config = match &cli.command {
        cli::Commands::Score(args) => Some(cli::score::resolve_config(args)?),
        cli::Commands::Diff(_) => None,
    };
    let trace_enabled = config.as_ref().is_some_and(|c| !c.trace.is_empty());

    let filter = if cli.verbose || trace_enabled {
        EnvFilter::new("license_scorer=debug,info")
    } else {
        EnvFilter::new("license_scorer=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Score(args) => {
            let config = config.unwrap_or_default();
            cli::score::run(args, config, cli.format, cli.verbose)?;
        }
        cli::Commands::Diff(args) => {
            cli::diff::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
