use once_cell::sync::Lazy;

use crate::models::macros::additional_data_owned;
use crate::serialization::{
    AdditionalData, AdditionalDataHolder, FieldDeserializers, ODATA_TYPE_KEY, OdataType, Parsable, ParseNode,
    SerializationError, SerializationWriter,
};

/// Sign-out policy for idle browser sessions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdleSessionSignOut {
    pub is_enabled: Option<bool>,
    pub sign_out_after_in_seconds: Option<i64>,
    pub warn_after_in_seconds: Option<i64>,
    odata_type: OdataType,
    additional_data: AdditionalData,
}

static IDLE_SESSION_SIGN_OUT_FIELDS: Lazy<FieldDeserializers<IdleSessionSignOut>> = Lazy::new(|| {
    FieldDeserializers::<IdleSessionSignOut>::new()
        .boolean("isEnabled", |m, v| m.is_enabled = Some(v))
        .int64("signOutAfterInSeconds", |m, v| m.sign_out_after_in_seconds = Some(v))
        .int64("warnAfterInSeconds", |m, v| m.warn_after_in_seconds = Some(v))
        .odata_type(|m| &mut m.odata_type)
});

impl IdleSessionSignOut {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &IDLE_SESSION_SIGN_OUT_FIELDS
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }
}

impl Parsable for IdleSessionSignOut {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_bool_value("isEnabled", self.is_enabled)?;
        writer.write_i64_value("signOutAfterInSeconds", self.sign_out_after_in_seconds)?;
        writer.write_i64_value("warnAfterInSeconds", self.warn_after_in_seconds)?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

additional_data_owned!(IdleSessionSignOut);
