//! CLI module for the graph-models-cli binary

#[cfg(feature = "cli")]
pub mod commands;
#[cfg(feature = "cli")]
pub mod error;
#[cfg(feature = "cli")]
pub mod output;

#[cfg(feature = "cli")]
pub use commands::{DecodeTarget, DecodedModel, handle_decode, handle_types, load_config};
#[cfg(feature = "cli")]
pub use error::CliError;
#[cfg(feature = "cli")]
pub use output::OutputFormat;
