//! CLI command implementations

mod decode;
mod types;

pub use decode::{DecodeTarget, DecodedModel, decode_content, handle_decode};
pub use types::{handle_types, registry_listing};

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::error::CliError;
use crate::config::JsonConfig;

/// Load input content from file or stdin
pub(crate) fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}

/// Build the serializer configuration from an optional TOML file.
///
/// `--pretty` on the command line turns pretty output on even when the file
/// leaves it off. The file's depth limit goes through the builder so it is
/// clamped the same way as a programmatic one.
pub fn load_config(path: Option<&Path>, pretty: bool) -> Result<JsonConfig, CliError> {
    let file_config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))?;
            let config: JsonConfig =
                toml::from_str(&text).map_err(|e| CliError::ConfigError(format!("{}: {}", path.display(), e)))?;
            debug!(path = %path.display(), "loaded serializer config");
            config
        }
        None => JsonConfig::default(),
    };

    Ok(JsonConfig::builder()
        .pretty(pretty || file_config.pretty)
        .max_depth(file_config.max_depth)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_defaults_without_file() {
        let config = load_config(None, false).unwrap();
        assert_eq!(config, JsonConfig::default());
    }

    #[test]
    fn test_load_config_from_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "pretty = false\nmaxDepth = 8").unwrap();

        let config = load_config(Some(file.path()), true).unwrap();
        assert!(config.pretty);
        assert_eq!(config.max_depth, 8);
    }

    #[test]
    fn test_load_config_clamps_depth() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "maxDepth = 0").unwrap();

        let config = load_config(Some(file.path()), false).unwrap();
        assert_eq!(config.max_depth, 1);
    }

    #[test]
    fn test_load_config_rejects_bad_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "maxDepth = \"deep\"").unwrap();

        let err = load_config(Some(file.path()), false).unwrap_err();
        assert!(matches!(err, CliError::ConfigError(_)));
    }

    #[test]
    fn test_missing_input_file() {
        let err = load_input("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CliError::FileReadError(_, _)));
    }
}
