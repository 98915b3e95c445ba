//! Output formatting for CLI

use crate::cli::commands::DecodedModel;
use crate::cli::error::CliError;
use crate::serialization::JsonSerializer;

/// Rendering of a decoded model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Format a decoded model: the resolved type on the first line, then the
/// re-encoded payload
pub fn format_decoded(
    serializer: &JsonSerializer,
    decoded: &DecodedModel,
    format: OutputFormat,
) -> Result<String, CliError> {
    let body = match format {
        OutputFormat::Json => serializer.serialize(decoded.model.as_ref())?,
        OutputFormat::Yaml => {
            let value = serializer.serialize_value(decoded.model.as_ref())?;
            serde_yaml::to_string(&value).map_err(|e| CliError::OutputError(e.to_string()))?
        }
    };

    Ok(format!("Resolved type: {}\n{}", decoded.type_name, body.trim_end()))
}

/// Format the registry listing, one base per block
pub fn format_registries(registries: &[(&str, Vec<&str>)]) -> String {
    let mut output = String::new();
    for (base, discriminators) in registries {
        output.push_str(&format!("{} ({} subtypes)\n", base, discriminators.len()));
        for discriminator in discriminators {
            output.push_str(&format!("  - {}\n", discriminator));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Identity;

    #[test]
    fn test_format_registries() {
        let output = format_registries(&[("#a.base", vec!["#a.one", "#a.two"]), ("#b.base", vec![])]);
        assert_eq!(output, "#a.base (2 subtypes)\n  - #a.one\n  - #a.two\n#b.base (0 subtypes)\n");
    }

    #[test]
    fn test_format_decoded_yaml() {
        let mut identity = Identity::new();
        identity.display_name = Some("Megan".to_string());
        let decoded = DecodedModel {
            type_name: "Identity",
            model: Box::new(identity),
        };

        let output = format_decoded(&JsonSerializer::new(), &decoded, OutputFormat::Yaml).unwrap();
        assert_eq!(output, "Resolved type: Identity\ndisplayName: Megan");
    }
}
