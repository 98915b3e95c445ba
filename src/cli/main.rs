//! graph-models-cli: decode Graph beta payloads and inspect type registries

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use graph_beta_models::cli::{OutputFormat, handle_decode, handle_types, load_config};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "graph-models-cli")]
#[command(about = "Decode and re-encode Microsoft Graph beta payloads", long_about = None)]
#[command(version)]
struct Cli {
    /// Serializer settings (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Indent JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a payload through a polymorphic base type
    Decode {
        /// Base name (e.g. baseItem) or an @odata.type discriminator
        #[arg(long = "type", short = 't')]
        type_name: String,

        /// Input file, or '-' for stdin
        input: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// List every polymorphic base and its registered discriminators
    Types,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode {
            type_name,
            input,
            format,
        } => {
            let config = load_config(cli.config.as_deref(), cli.pretty)?;
            handle_decode(&type_name, &input, config, format)?;
        }
        Commands::Types => handle_types(),
    }

    Ok(())
}
