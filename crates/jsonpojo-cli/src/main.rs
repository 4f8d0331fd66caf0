//! jsonpojo CLI - Java class generator for JSON samples
//!
//! Commands:
//! - `jsonpojo generate` - Generate Java source from a JSON sample
//! - `jsonpojo check` - Validate a jsonpojo.toml configuration
//! - `jsonpojo init` - Write a starter jsonpojo.toml

use clap::{ArgAction, Parser, Subcommand};

mod config;
mod generate;
mod logging;

#[derive(Parser)]
#[command(name = "jsonpojo")]
#[command(author, version, about = "Infer Java classes from JSON samples", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Java source from a JSON sample
    Generate(generate::GenerateArgs),

    /// Validate a jsonpojo.toml configuration
    Check {
        /// Path to jsonpojo.toml (default: ./jsonpojo.toml)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Write a starter jsonpojo.toml
    Init {
        /// Destination path (default: ./jsonpojo.toml)
        #[arg(short, long)]
        path: Option<String>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    match cli.command {
        Commands::Generate(args) => {
            generate::run(args)?;
        }
        Commands::Check { config } => {
            config::check(config)?;
        }
        Commands::Init { path, force } => {
            config::init(path, force)?;
        }
    }

    Ok(())
}
