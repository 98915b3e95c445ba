use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use crate::models::entity::{Entity, Entityable};
use crate::models::macros::additional_data_in_base;
use crate::serialization::{
    AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode, SerializationError, SerializationWriter,
};

/// Per-tenant counts of users registered for MFA and self-service password reset
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialUserRegistrationsSummary {
    pub base: Entity,
    pub last_refreshed_date_time: Option<DateTime<Utc>>,
    pub mfa_and_sspr_capable_user_count: Option<i32>,
    /// Free-form state string reported by the service
    pub mfa_conditional_access_policy_state: Option<String>,
    pub mfa_excluded_user_count: Option<i32>,
    pub mfa_registered_user_count: Option<i32>,
    pub security_defaults_enabled: Option<bool>,
    pub sspr_enabled_user_count: Option<i32>,
    pub sspr_registered_user_count: Option<i32>,
    pub tenant_display_name: Option<String>,
    pub tenant_id: Option<String>,
    pub total_user_count: Option<i32>,
}

static SUMMARY_FIELDS: Lazy<FieldDeserializers<CredentialUserRegistrationsSummary>> = Lazy::new(|| {
    FieldDeserializers::<CredentialUserRegistrationsSummary>::inherit(Entity::field_deserializers(), |m| {
        &mut m.base
    })
    .date_time("lastRefreshedDateTime", |m, v| m.last_refreshed_date_time = Some(v))
    .int32("mfaAndSsprCapableUserCount", |m, v| m.mfa_and_sspr_capable_user_count = Some(v))
    .string("mfaConditionalAccessPolicyState", |m, v| {
        m.mfa_conditional_access_policy_state = Some(v)
    })
    .int32("mfaExcludedUserCount", |m, v| m.mfa_excluded_user_count = Some(v))
    .int32("mfaRegisteredUserCount", |m, v| m.mfa_registered_user_count = Some(v))
    .boolean("securityDefaultsEnabled", |m, v| m.security_defaults_enabled = Some(v))
    .int32("ssprEnabledUserCount", |m, v| m.sspr_enabled_user_count = Some(v))
    .int32("ssprRegisteredUserCount", |m, v| m.sspr_registered_user_count = Some(v))
    .string("tenantDisplayName", |m, v| m.tenant_display_name = Some(v))
    .string("tenantId", |m, v| m.tenant_id = Some(v))
    .int32("totalUserCount", |m, v| m.total_user_count = Some(v))
});

impl Default for CredentialUserRegistrationsSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialUserRegistrationsSummary {
    pub fn new() -> Self {
        Self {
            base: Entity::with_odata_type("#microsoft.graph.managedTenants.credentialUserRegistrationsSummary"),
            last_refreshed_date_time: None,
            mfa_and_sspr_capable_user_count: None,
            mfa_conditional_access_policy_state: None,
            mfa_excluded_user_count: None,
            mfa_registered_user_count: None,
            security_defaults_enabled: None,
            sspr_enabled_user_count: None,
            sspr_registered_user_count: None,
            tenant_display_name: None,
            tenant_id: None,
            total_user_count: None,
        }
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &SUMMARY_FIELDS
    }
}

impl Parsable for CredentialUserRegistrationsSummary {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize_fields(writer)?;
        writer.write_date_time_value("lastRefreshedDateTime", self.last_refreshed_date_time.as_ref())?;
        writer.write_i32_value("mfaAndSsprCapableUserCount", self.mfa_and_sspr_capable_user_count)?;
        writer.write_string_value(
            "mfaConditionalAccessPolicyState",
            self.mfa_conditional_access_policy_state.as_deref(),
        )?;
        writer.write_i32_value("mfaExcludedUserCount", self.mfa_excluded_user_count)?;
        writer.write_i32_value("mfaRegisteredUserCount", self.mfa_registered_user_count)?;
        writer.write_bool_value("securityDefaultsEnabled", self.security_defaults_enabled)?;
        writer.write_i32_value("ssprEnabledUserCount", self.sspr_enabled_user_count)?;
        writer.write_i32_value("ssprRegisteredUserCount", self.sspr_registered_user_count)?;
        writer.write_string_value("tenantDisplayName", self.tenant_display_name.as_deref())?;
        writer.write_string_value("tenantId", self.tenant_id.as_deref())?;
        writer.write_i32_value("totalUserCount", self.total_user_count)?;
        self.base.serialize_trailer(writer)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

impl Entityable for CredentialUserRegistrationsSummary {
    fn entity(&self) -> &Entity {
        &self.base
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.base
    }
}

additional_data_in_base!(CredentialUserRegistrationsSummary);
