use anyhow::Result;
use clap::Parser;

use vertex_probe::{
    cli::{handle_command, Cli},
    utils::init_logger,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_logger(cli.verbose);

    let passed = handle_command(&cli).await?;

    // Exit with appropriate code
    if !passed {
        std::process::exit(1);
    }

    Ok(())
}
