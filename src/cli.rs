use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "handler-typings")]
#[command(
    about = "Generate overloaded type declarations for composing handler chains",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate overload declarations
    Generate {
        /// Maximum handler chain length (overrides the config file; default 9)
        #[arg(
            short = 'n',
            long = "overloads",
            visible_alias = "max-arity",
            env = "HANDLER_TYPINGS_OVERLOADS",
            allow_negative_numbers = true
        )]
        overloads: Option<i64>,

        /// Families to generate, in order (defaults to every configured family)
        #[arg(long = "family", value_delimiter = ',')]
        families: Vec<String>,

        /// Configuration file (defaults to .handler-typings.toml discovery)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "typescript")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List configured families and the arities they accept
    Families {
        /// Configuration file (defaults to .handler-typings.toml discovery)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write a default .handler-typings.toml
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}
