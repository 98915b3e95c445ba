//! Identities of actors (users, applications, devices) and sets of them

use once_cell::sync::Lazy;

use super::macros::{additional_data_in_base, additional_data_owned, delegate_capability, model_kind};
use crate::serialization::{
    AdditionalData, AdditionalDataHolder, DiscriminatorRegistry, FieldDeserializers, ODATA_TYPE_KEY,
    OdataType, Parsable, ParseNode, SerializationError, SerializationWriter, parsable,
};

const USER_IDENTITY: &str = "#microsoft.graph.userIdentity";
const AUDIT_USER_IDENTITY: &str = "#microsoft.graph.auditUserIdentity";

/// An actor referenced by display name and id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Identity {
    pub display_name: Option<String>,
    pub id: Option<String>,
    odata_type: OdataType,
    additional_data: AdditionalData,
}

static IDENTITY_FIELDS: Lazy<FieldDeserializers<Identity>> = Lazy::new(|| {
    FieldDeserializers::<Identity>::new()
        .string("displayName", |m, v| m.display_name = Some(v))
        .string("id", |m, v| m.id = Some(v))
        .odata_type(|m| &mut m.odata_type)
});

static IDENTITY_REGISTRY: Lazy<DiscriminatorRegistry<IdentityKind>> = Lazy::new(|| {
    DiscriminatorRegistry::new("#microsoft.graph.identity", || IdentityKind::Identity(Identity::new()))
        .with(USER_IDENTITY, || UserIdentity::new().into())
        .with(AUDIT_USER_IDENTITY, || AuditUserIdentity::new().into())
});

impl Identity {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_odata_type(odata_type: &str) -> Self {
        Self {
            odata_type: OdataType::fixed(odata_type),
            ..Self::default()
        }
    }

    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<IdentityKind, SerializationError> {
        IDENTITY_REGISTRY.resolve(node)
    }

    pub fn registry() -> &'static DiscriminatorRegistry<IdentityKind> {
        &IDENTITY_REGISTRY
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &IDENTITY_FIELDS
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub(crate) fn serialize_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_string_value("id", self.id.as_deref())
    }

    pub(crate) fn serialize_trailer(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }
}

impl Parsable for Identity {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.serialize_fields(writer)?;
        self.serialize_trailer(writer)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

/// Any model built on [`Identity`]
pub trait Identityable: Parsable {
    fn identity(&self) -> &Identity;

    fn identity_mut(&mut self) -> &mut Identity;
}

impl Identityable for Identity {
    fn identity(&self) -> &Identity {
        self
    }

    fn identity_mut(&mut self) -> &mut Identity {
        self
    }
}

/// A signed-in user
#[derive(Debug, Clone, PartialEq)]
pub struct UserIdentity {
    pub base: Identity,
    pub ip_address: Option<String>,
    pub user_principal_name: Option<String>,
}

static USER_IDENTITY_FIELDS: Lazy<FieldDeserializers<UserIdentity>> = Lazy::new(|| {
    FieldDeserializers::<UserIdentity>::inherit(Identity::field_deserializers(), |m| &mut m.base)
        .string("ipAddress", |m, v| m.ip_address = Some(v))
        .string("userPrincipalName", |m, v| m.user_principal_name = Some(v))
});

static USER_IDENTITY_REGISTRY: Lazy<DiscriminatorRegistry<UserIdentityKind>> = Lazy::new(|| {
    DiscriminatorRegistry::new(USER_IDENTITY, || {
        UserIdentityKind::UserIdentity(UserIdentity::untyped())
    })
    .with(AUDIT_USER_IDENTITY, || AuditUserIdentity::new().into())
});

impl Default for UserIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl UserIdentity {
    pub fn new() -> Self {
        Self::with_odata_type(USER_IDENTITY)
    }

    pub(crate) fn with_odata_type(odata_type: &str) -> Self {
        Self {
            base: Identity::with_odata_type(odata_type),
            ip_address: None,
            user_principal_name: None,
        }
    }

    /// Fallback instance whose discriminator is taken from the payload
    fn untyped() -> Self {
        Self {
            base: Identity::new(),
            ip_address: None,
            user_principal_name: None,
        }
    }

    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<UserIdentityKind, SerializationError> {
        USER_IDENTITY_REGISTRY.resolve(node)
    }

    pub fn registry() -> &'static DiscriminatorRegistry<UserIdentityKind> {
        &USER_IDENTITY_REGISTRY
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &USER_IDENTITY_FIELDS
    }

    pub(crate) fn serialize_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize_fields(writer)?;
        writer.write_string_value("ipAddress", self.ip_address.as_deref())?;
        writer.write_string_value("userPrincipalName", self.user_principal_name.as_deref())
    }
}

impl Parsable for UserIdentity {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.serialize_fields(writer)?;
        self.base.serialize_trailer(writer)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

impl Identityable for UserIdentity {
    fn identity(&self) -> &Identity {
        &self.base
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.base
    }
}

/// Any model built on [`UserIdentity`]
pub trait UserIdentityable: Identityable {
    fn user_identity(&self) -> &UserIdentity;

    fn user_identity_mut(&mut self) -> &mut UserIdentity;
}

impl UserIdentityable for UserIdentity {
    fn user_identity(&self) -> &UserIdentity {
        self
    }

    fn user_identity_mut(&mut self) -> &mut UserIdentity {
        self
    }
}

/// A user as recorded in audit logs, including the home tenant
#[derive(Debug, Clone, PartialEq)]
pub struct AuditUserIdentity {
    pub base: UserIdentity,
    pub home_tenant_id: Option<String>,
    pub home_tenant_name: Option<String>,
}

static AUDIT_USER_IDENTITY_FIELDS: Lazy<FieldDeserializers<AuditUserIdentity>> = Lazy::new(|| {
    FieldDeserializers::<AuditUserIdentity>::inherit(UserIdentity::field_deserializers(), |m| &mut m.base)
        .string("homeTenantId", |m, v| m.home_tenant_id = Some(v))
        .string("homeTenantName", |m, v| m.home_tenant_name = Some(v))
});

impl Default for AuditUserIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditUserIdentity {
    pub fn new() -> Self {
        Self {
            base: UserIdentity::with_odata_type(AUDIT_USER_IDENTITY),
            home_tenant_id: None,
            home_tenant_name: None,
        }
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &AUDIT_USER_IDENTITY_FIELDS
    }
}

impl Parsable for AuditUserIdentity {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize_fields(writer)?;
        writer.write_string_value("homeTenantId", self.home_tenant_id.as_deref())?;
        writer.write_string_value("homeTenantName", self.home_tenant_name.as_deref())?;
        self.base.base.serialize_trailer(writer)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

impl Identityable for AuditUserIdentity {
    fn identity(&self) -> &Identity {
        &self.base.base
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.base.base
    }
}

impl UserIdentityable for AuditUserIdentity {
    fn user_identity(&self) -> &UserIdentity {
        &self.base
    }

    fn user_identity_mut(&mut self) -> &mut UserIdentity {
        &mut self.base
    }
}

additional_data_owned!(Identity);
additional_data_in_base!(UserIdentity, AuditUserIdentity);

model_kind! {
    /// Any identity, resolved from `@odata.type`
    pub enum IdentityKind {
        Identity(Identity),
        UserIdentity(UserIdentity),
        AuditUserIdentity(AuditUserIdentity),
    }
}

delegate_capability! {
    IdentityKind: Identityable { identity, identity_mut -> Identity } [
        Identity,
        UserIdentity,
        AuditUserIdentity,
    ]
}

model_kind! {
    /// A user identity or one of its subtypes
    pub enum UserIdentityKind {
        UserIdentity(UserIdentity),
        AuditUserIdentity(AuditUserIdentity),
    }
}

delegate_capability! {
    UserIdentityKind: Identityable { identity, identity_mut -> Identity } [
        UserIdentity,
        AuditUserIdentity,
    ]
}

delegate_capability! {
    UserIdentityKind: UserIdentityable { user_identity, user_identity_mut -> UserIdentity } [
        UserIdentity,
        AuditUserIdentity,
    ]
}

/// The application, device and user behind an action
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentitySet {
    pub application: Option<IdentityKind>,
    pub device: Option<IdentityKind>,
    pub user: Option<IdentityKind>,
    odata_type: OdataType,
    additional_data: AdditionalData,
}

static IDENTITY_SET_FIELDS: Lazy<FieldDeserializers<IdentitySet>> = Lazy::new(|| {
    FieldDeserializers::<IdentitySet>::new()
        .object("application", Identity::create_from_discriminator_value, |m, v| {
            m.application = Some(v)
        })
        .object("device", Identity::create_from_discriminator_value, |m, v| m.device = Some(v))
        .object("user", Identity::create_from_discriminator_value, |m, v| m.user = Some(v))
        .odata_type(|m| &mut m.odata_type)
});

impl IdentitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &IDENTITY_SET_FIELDS
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }
}

impl Parsable for IdentitySet {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_object_value("application", parsable(&self.application))?;
        writer.write_object_value("device", parsable(&self.device))?;
        writer.write_object_value("user", parsable(&self.user))?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

additional_data_owned!(IdentitySet);
