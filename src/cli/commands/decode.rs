//! Decode command implementation

use tracing::{debug, info};

use super::load_input;
use crate::cli::error::CliError;
use crate::cli::output::{OutputFormat, format_decoded};
use crate::config::JsonConfig;
use crate::models::search::SearchAnswer;
use crate::models::{BaseItem, Entity, Identity, UserIdentity, WebPart};
use crate::serialization::{JsonSerializer, Parsable, SerializationError};

/// Polymorphic base types a payload can be decoded through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeTarget {
    Entity,
    BaseItem,
    WebPart,
    SearchAnswer,
    Identity,
    UserIdentity,
}

/// A decoded payload together with the Rust type it resolved to
pub struct DecodedModel {
    pub type_name: &'static str,
    pub model: Box<dyn Parsable>,
}

impl DecodedModel {
    fn new<K: Parsable + 'static>(type_name: &'static str, model: K) -> Self {
        Self {
            type_name,
            model: Box::new(model),
        }
    }
}

impl DecodeTarget {
    pub const ALL: [DecodeTarget; 6] = [
        Self::Entity,
        Self::BaseItem,
        Self::WebPart,
        Self::SearchAnswer,
        Self::Identity,
        Self::UserIdentity,
    ];

    /// Short name accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::BaseItem => "baseItem",
            Self::WebPart => "webPart",
            Self::SearchAnswer => "search.searchAnswer",
            Self::Identity => "identity",
            Self::UserIdentity => "userIdentity",
        }
    }

    pub fn base_type(self) -> &'static str {
        match self {
            Self::Entity => Entity::registry().base_type(),
            Self::BaseItem => BaseItem::registry().base_type(),
            Self::WebPart => WebPart::registry().base_type(),
            Self::SearchAnswer => SearchAnswer::registry().base_type(),
            Self::Identity => Identity::registry().base_type(),
            Self::UserIdentity => UserIdentity::registry().base_type(),
        }
    }

    /// Discriminators of the subtypes this base dispatches to
    pub fn discriminators(self) -> Vec<&'static str> {
        match self {
            Self::Entity => Entity::registry().discriminators(),
            Self::BaseItem => BaseItem::registry().discriminators(),
            Self::WebPart => WebPart::registry().discriminators(),
            Self::SearchAnswer => SearchAnswer::registry().discriminators(),
            Self::Identity => Identity::registry().discriminators(),
            Self::UserIdentity => UserIdentity::registry().discriminators(),
        }
    }

    /// Resolve a short name or a full discriminator.
    ///
    /// A subtype discriminator selects the first base (in [`Self::ALL`]
    /// order) that registers it.
    pub fn from_name(name: &str) -> Result<Self, CliError> {
        let exact = Self::ALL
            .into_iter()
            .find(|target| target.name() == name || target.base_type() == name);
        if let Some(target) = exact {
            return Ok(target);
        }

        Self::ALL
            .into_iter()
            .find(|target| target.discriminators().contains(&name))
            .ok_or_else(|| CliError::InvalidArgument(format!("Unknown type: {}", name)))
    }

    pub fn decode(self, serializer: &JsonSerializer, content: &str) -> Result<DecodedModel, SerializationError> {
        Ok(match self {
            Self::Entity => {
                let kind = serializer.deserialize(content, Entity::create_from_discriminator_value)?;
                DecodedModel::new(kind.variant_name(), kind)
            }
            Self::BaseItem => {
                let kind = serializer.deserialize(content, BaseItem::create_from_discriminator_value)?;
                DecodedModel::new(kind.variant_name(), kind)
            }
            Self::WebPart => {
                let kind = serializer.deserialize(content, WebPart::create_from_discriminator_value)?;
                DecodedModel::new(kind.variant_name(), kind)
            }
            Self::SearchAnswer => {
                let kind = serializer.deserialize(content, SearchAnswer::create_from_discriminator_value)?;
                DecodedModel::new(kind.variant_name(), kind)
            }
            Self::Identity => {
                let kind = serializer.deserialize(content, Identity::create_from_discriminator_value)?;
                DecodedModel::new(kind.variant_name(), kind)
            }
            Self::UserIdentity => {
                let kind = serializer.deserialize(content, UserIdentity::create_from_discriminator_value)?;
                DecodedModel::new(kind.variant_name(), kind)
            }
        })
    }
}

/// Decode `content` through the named base type and render the result
pub fn decode_content(
    type_name: &str,
    content: &str,
    config: JsonConfig,
    format: OutputFormat,
) -> Result<String, CliError> {
    let target = DecodeTarget::from_name(type_name)?;
    debug!(target = target.name(), "decoding payload");

    let serializer = JsonSerializer::with_config(config);
    let decoded = target.decode(&serializer, content)?;
    info!(resolved = decoded.type_name, "decoded payload");
    format_decoded(&serializer, &decoded, format)
}

/// Handle the decode command
pub fn handle_decode(type_name: &str, input: &str, config: JsonConfig, format: OutputFormat) -> Result<(), CliError> {
    let content = load_input(input)?;
    let output = decode_content(type_name, &content, config, format)?;
    println!("{}", output);
    Ok(())
}
