use anyhow::Result;
use clap::Parser;
use handler_typings::cli::{Cli, Commands};
use handler_typings::commands::generate::{handle_generate, GenerateConfig};
use handler_typings::observability::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    match cli.command {
        Commands::Generate {
            overloads,
            families,
            config,
            format,
            output,
        } => handle_generate(GenerateConfig {
            overloads,
            families,
            config,
            format,
            output,
        }),
        Commands::Families { config } => {
            handler_typings::commands::families::list_families(config.as_deref())
        }
        Commands::Init { force } => handler_typings::commands::init::init_config(force),
    }
}
