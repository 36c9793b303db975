mod command;
mod config;
mod telemetry;

use clap::Parser;
use config::{CliArgs, CliConfig};
use telemetry::init_telemetry;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    init_telemetry()?;

    let config = CliConfig::try_from(args)?;
    if cfg!(debug_assertions) {
        tracing::debug!("Running with full config: {:#?}", config);
    } else {
        tracing::debug!(
            "Running with alphabet `{}` and offset {}",
            config.codec.alphabet(),
            config.codec.offset()
        );
    }

    let stdout = std::io::stdout();
    command::run(&config, &mut stdout.lock())
}
