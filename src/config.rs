//! Configuration for the JSON serializer

use serde::{Deserialize, Serialize};

/// Default nesting limit for decoded payloads
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Upper bound accepted by [`JsonConfigBuilder::max_depth`]
pub const MAX_DEPTH_LIMIT: usize = 1024;

/// Configuration for [`crate::serialization::JsonSerializer`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsonConfig {
    /// Indent serialized output
    pub pretty: bool,

    /// Maximum nesting depth accepted when decoding
    pub max_depth: usize,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl JsonConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> JsonConfigBuilder {
        JsonConfigBuilder::default()
    }
}

/// Builder for JsonConfig
#[derive(Debug, Default)]
pub struct JsonConfigBuilder {
    config: JsonConfig,
}

impl JsonConfigBuilder {
    /// Enable or disable indented output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    /// Set the maximum nesting depth (1 to 1024)
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth.clamp(1, MAX_DEPTH_LIMIT);
        self
    }

    /// Build the configuration
    pub fn build(self) -> JsonConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JsonConfig::default();
        assert!(!config.pretty);
        assert_eq!(config.max_depth, 64);
    }

    #[test]
    fn test_builder() {
        let config = JsonConfig::builder().pretty(true).max_depth(8).build();
        assert!(config.pretty);
        assert_eq!(config.max_depth, 8);
    }

    #[test]
    fn test_depth_clamping() {
        let config = JsonConfig::builder()
            .max_depth(0) // Should clamp to 1
            .build();
        assert_eq!(config.max_depth, 1);

        let config = JsonConfig::builder().max_depth(usize::MAX).build();
        assert_eq!(config.max_depth, MAX_DEPTH_LIMIT);
    }

    #[test]
    fn test_camel_case_fields() {
        let config: JsonConfig = serde_json::from_str(r#"{"maxDepth": 12}"#).unwrap();
        assert_eq!(config.max_depth, 12);
        assert!(!config.pretty);
    }
}
