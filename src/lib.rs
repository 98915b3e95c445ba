//! Graph Beta Models - typed Microsoft Graph beta resources
//!
//! Provides:
//! - Model records for pages, canvases, web parts, identities and search answers
//! - Discriminator-aware decoding from `@odata.type`
//! - Field-ordered JSON serialization that keeps unknown properties
//! - Wire codecs for the Graph enumeration types

pub mod config;
pub mod models;
pub mod serialization;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::{JsonConfig, JsonConfigBuilder};

// Re-export models
pub use models::*;

// Re-export serialization contracts
pub use serialization::{
    AdditionalData, AdditionalDataHolder, DiscriminatorRegistry, FieldDeserializers, IsoDuration, JsonParseNode,
    JsonSerializationWriter, JsonSerializer, ModelEnum, ODATA_TYPE_KEY, OdataType, Parsable, ParseNode,
    SerializationError, SerializationWriter,
};
