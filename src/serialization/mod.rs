//! Serialization contracts shared by every model type
//!
//! Models never touch JSON directly. They read through [`ParseNode`] and
//! write through [`SerializationWriter`]; the [`json`] module provides the
//! `serde_json` backed implementations of both.
//!
//! Each model type registers its properties in a [`FieldDeserializers`] map
//! and, when it is the base of a polymorphic family, a
//! [`DiscriminatorRegistry`] that picks the concrete type from the payload's
//! `@odata.type` value.

pub mod duration;
pub mod enums;
pub mod error;
pub mod fields;
pub mod json;
pub mod parse_node;
pub mod registry;
pub mod writer;

pub use duration::IsoDuration;
pub(crate) use enums::model_enum;
pub use enums::{ModelEnum, serialize_enum_collection};
pub use error::SerializationError;
pub use fields::FieldDeserializers;
pub use json::{JsonParseNode, JsonSerializationWriter, JsonSerializer};
pub use parse_node::{ParseNode, Primitive};
pub use registry::DiscriminatorRegistry;
pub use writer::SerializationWriter;

/// Reserved property carrying the type discriminator
pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// Properties a model does not map, in payload order
pub type AdditionalData = serde_json::Map<String, serde_json::Value>;

/// Constructor invoked with the object node about to be decoded
pub type ParsableFactory<T> = fn(&dyn ParseNode) -> Result<T, SerializationError>;

/// A model that can be populated from a parse node and written to a writer
pub trait Parsable {
    /// Decode one property into the model. Returns `Ok(false)` when the
    /// model has no field for `name`.
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError>;

    /// Write every set field, then the discriminator and additional data
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError>;

    /// Store for properties that [`Parsable::assign_field`] does not handle
    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        None
    }
}

/// A model that keeps unknown properties for lossless round trips
pub trait AdditionalDataHolder {
    fn additional_data(&self) -> &AdditionalData;

    fn additional_data_mut(&mut self) -> &mut AdditionalData;
}

/// The `@odata.type` discriminator of a model instance.
///
/// Constructors of concrete subtypes fix the value. Decoding only fills it
/// in when it is still unset, so a fixed discriminator never changes and an
/// unrecognised one read from the payload is written back as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OdataType(Option<String>);

impl OdataType {
    pub(crate) fn fixed(value: &str) -> Self {
        Self(Some(value.to_string()))
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub(crate) fn adopt(&mut self, value: String) {
        if self.0.is_none() {
            self.0 = Some(value);
        }
    }
}

impl std::fmt::Display for OdataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_deref().unwrap_or(""))
    }
}

/// Narrow an optional nested model for [`SerializationWriter::write_object_value`]
pub fn parsable<T: Parsable>(value: &Option<T>) -> Option<&dyn Parsable> {
    value.as_ref().map(|v| v as &dyn Parsable)
}

/// Narrow a collection of models element by element for
/// [`SerializationWriter::write_collection_of_object_values`]
pub fn parsable_collection<T: Parsable>(values: &Option<Vec<T>>) -> Option<Vec<&dyn Parsable>> {
    values
        .as_ref()
        .map(|items| items.iter().map(|v| v as &dyn Parsable).collect())
}

/// Wire strings for an optional enum collection
pub fn enum_strings<E: ModelEnum>(values: &Option<Vec<E>>) -> Option<Vec<String>> {
    values.as_deref().map(serialize_enum_collection::<E>)
}
