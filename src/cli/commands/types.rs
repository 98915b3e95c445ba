//! Types command implementation

use super::decode::DecodeTarget;
use crate::cli::output::format_registries;

/// Every polymorphic base with the discriminators it dispatches to
pub fn registry_listing() -> Vec<(&'static str, Vec<&'static str>)> {
    DecodeTarget::ALL
        .into_iter()
        .map(|target| (target.base_type(), target.discriminators()))
        .collect()
}

/// Handle the types command
pub fn handle_types() {
    print!("{}", format_registries(&registry_listing()));
}
