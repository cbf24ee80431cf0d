use clap::Parser;
use surebet_relay::cli::{self, output, CheckCommand, Cli, Commands};
use surebet_relay::config::Config;
use tracing::debug;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Check(CheckCommand::Config) => {
            Ok(cli::check::execute_config(cli.config.as_deref())?)
        }
        Commands::Transform(args) => cli::transform::execute(&init(cli)?, args),
        Commands::Parse(args) => cli::parse::execute(&init(cli)?, args),
        Commands::Demo => {
            cli::demo::execute(&init(cli)?);
            Ok(())
        }
    }
}

/// Load config, apply CLI overrides and start logging.
fn init(cli: &Cli) -> anyhow::Result<Config> {
    let config = cli.load_config()?;
    config.init_logging();
    debug!(config = ?cli.config, "surebet-relay starting");
    Ok(config)
}
