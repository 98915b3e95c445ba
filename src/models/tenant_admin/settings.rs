use once_cell::sync::Lazy;
use uuid::Uuid;

use super::IdleSessionSignOut;
use crate::models::entity::{Entity, Entityable};
use crate::models::enums::{ImageTaggingChoice, SharingCapabilities, SharingDomainRestrictionMode};
use crate::models::macros::additional_data_in_base;
use crate::serialization::{
    AdditionalDataHolder, FieldDeserializers, ModelEnum, Parsable, ParseNode, SerializationError,
    SerializationWriter, parsable,
};

/// SharePoint and OneDrive settings for a whole tenant
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub base: Entity,
    /// Trusted domain GUIDs for the OneDrive sync app
    pub allowed_domain_guids_for_sync_app: Option<Vec<Uuid>>,
    /// Read-only on the service side
    pub available_managed_paths_for_site_creation: Option<Vec<String>>,
    pub deleted_user_personal_site_retention_period_in_days: Option<i32>,
    pub excluded_file_extensions_for_sync_app: Option<Vec<String>>,
    pub idle_session_sign_out: Option<IdleSessionSignOut>,
    pub image_tagging_option: Option<ImageTaggingChoice>,
    pub is_commenting_on_site_pages_enabled: Option<bool>,
    pub is_file_activity_notification_enabled: Option<bool>,
    pub is_legacy_auth_protocols_enabled: Option<bool>,
    pub is_loop_enabled: Option<bool>,
    pub is_mac_sync_app_enabled: Option<bool>,
    pub is_require_accepting_user_to_match_invited_user_enabled: Option<bool>,
    pub is_resharing_by_external_users_enabled: Option<bool>,
    pub is_share_point_mobile_notification_enabled: Option<bool>,
    pub is_share_point_newsfeed_enabled: Option<bool>,
    pub is_site_creation_enabled: Option<bool>,
    pub is_site_creation_ui_enabled: Option<bool>,
    pub is_site_pages_creation_enabled: Option<bool>,
    pub is_sites_storage_limit_automatic: Option<bool>,
    pub is_sync_button_hidden_on_personal_site: Option<bool>,
    pub is_unmanaged_sync_app_for_tenant_restricted: Option<bool>,
    /// Default OneDrive quota in megabytes
    pub personal_site_default_storage_limit_in_mb: Option<i64>,
    pub sharing_allowed_domain_list: Option<Vec<String>>,
    pub sharing_blocked_domain_list: Option<Vec<String>>,
    pub sharing_capability: Option<SharingCapabilities>,
    pub sharing_domain_restriction_mode: Option<SharingDomainRestrictionMode>,
    pub site_creation_default_managed_path: Option<String>,
    /// Default quota of a new site in megabytes
    pub site_creation_default_storage_limit_in_mb: Option<i32>,
    pub tenant_default_timezone: Option<String>,
}

static SETTINGS_FIELDS: Lazy<FieldDeserializers<Settings>> = Lazy::new(|| {
    FieldDeserializers::<Settings>::inherit(Entity::field_deserializers(), |m| &mut m.base)
        .primitives::<Uuid>("allowedDomainGuidsForSyncApp", |m, v| {
            m.allowed_domain_guids_for_sync_app = Some(v)
        })
        .strings("availableManagedPathsForSiteCreation", |m, v| {
            m.available_managed_paths_for_site_creation = Some(v)
        })
        .int32("deletedUserPersonalSiteRetentionPeriodInDays", |m, v| {
            m.deleted_user_personal_site_retention_period_in_days = Some(v)
        })
        .strings("excludedFileExtensionsForSyncApp", |m, v| {
            m.excluded_file_extensions_for_sync_app = Some(v)
        })
        .object(
            "idleSessionSignOut",
            IdleSessionSignOut::create_from_discriminator_value,
            |m, v| m.idle_session_sign_out = Some(v),
        )
        .enumeration::<ImageTaggingChoice>("imageTaggingOption", |m, v| m.image_tagging_option = Some(v))
        .boolean("isCommentingOnSitePagesEnabled", |m, v| {
            m.is_commenting_on_site_pages_enabled = Some(v)
        })
        .boolean("isFileActivityNotificationEnabled", |m, v| {
            m.is_file_activity_notification_enabled = Some(v)
        })
        .boolean("isLegacyAuthProtocolsEnabled", |m, v| m.is_legacy_auth_protocols_enabled = Some(v))
        .boolean("isLoopEnabled", |m, v| m.is_loop_enabled = Some(v))
        .boolean("isMacSyncAppEnabled", |m, v| m.is_mac_sync_app_enabled = Some(v))
        .boolean("isRequireAcceptingUserToMatchInvitedUserEnabled", |m, v| {
            m.is_require_accepting_user_to_match_invited_user_enabled = Some(v)
        })
        .boolean("isResharingByExternalUsersEnabled", |m, v| {
            m.is_resharing_by_external_users_enabled = Some(v)
        })
        .boolean("isSharePointMobileNotificationEnabled", |m, v| {
            m.is_share_point_mobile_notification_enabled = Some(v)
        })
        .boolean("isSharePointNewsfeedEnabled", |m, v| m.is_share_point_newsfeed_enabled = Some(v))
        .boolean("isSiteCreationEnabled", |m, v| m.is_site_creation_enabled = Some(v))
        .boolean("isSiteCreationUIEnabled", |m, v| m.is_site_creation_ui_enabled = Some(v))
        .boolean("isSitePagesCreationEnabled", |m, v| m.is_site_pages_creation_enabled = Some(v))
        .boolean("isSitesStorageLimitAutomatic", |m, v| m.is_sites_storage_limit_automatic = Some(v))
        .boolean("isSyncButtonHiddenOnPersonalSite", |m, v| {
            m.is_sync_button_hidden_on_personal_site = Some(v)
        })
        .boolean("isUnmanagedSyncAppForTenantRestricted", |m, v| {
            m.is_unmanaged_sync_app_for_tenant_restricted = Some(v)
        })
        .int64("personalSiteDefaultStorageLimitInMB", |m, v| {
            m.personal_site_default_storage_limit_in_mb = Some(v)
        })
        .strings("sharingAllowedDomainList", |m, v| m.sharing_allowed_domain_list = Some(v))
        .strings("sharingBlockedDomainList", |m, v| m.sharing_blocked_domain_list = Some(v))
        .enumeration::<SharingCapabilities>("sharingCapability", |m, v| m.sharing_capability = Some(v))
        .enumeration::<SharingDomainRestrictionMode>("sharingDomainRestrictionMode", |m, v| {
            m.sharing_domain_restriction_mode = Some(v)
        })
        .string("siteCreationDefaultManagedPath", |m, v| {
            m.site_creation_default_managed_path = Some(v)
        })
        .int32("siteCreationDefaultStorageLimitInMB", |m, v| {
            m.site_creation_default_storage_limit_in_mb = Some(v)
        })
        .string("tenantDefaultTimezone", |m, v| m.tenant_default_timezone = Some(v))
});

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    pub fn new() -> Self {
        Self {
            base: Entity::with_odata_type("#microsoft.graph.tenantAdmin.settings"),
            allowed_domain_guids_for_sync_app: None,
            available_managed_paths_for_site_creation: None,
            deleted_user_personal_site_retention_period_in_days: None,
            excluded_file_extensions_for_sync_app: None,
            idle_session_sign_out: None,
            image_tagging_option: None,
            is_commenting_on_site_pages_enabled: None,
            is_file_activity_notification_enabled: None,
            is_legacy_auth_protocols_enabled: None,
            is_loop_enabled: None,
            is_mac_sync_app_enabled: None,
            is_require_accepting_user_to_match_invited_user_enabled: None,
            is_resharing_by_external_users_enabled: None,
            is_share_point_mobile_notification_enabled: None,
            is_share_point_newsfeed_enabled: None,
            is_site_creation_enabled: None,
            is_site_creation_ui_enabled: None,
            is_site_pages_creation_enabled: None,
            is_sites_storage_limit_automatic: None,
            is_sync_button_hidden_on_personal_site: None,
            is_unmanaged_sync_app_for_tenant_restricted: None,
            personal_site_default_storage_limit_in_mb: None,
            sharing_allowed_domain_list: None,
            sharing_blocked_domain_list: None,
            sharing_capability: None,
            sharing_domain_restriction_mode: None,
            site_creation_default_managed_path: None,
            site_creation_default_storage_limit_in_mb: None,
            tenant_default_timezone: None,
        }
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &SETTINGS_FIELDS
    }
}

impl Parsable for Settings {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize_fields(writer)?;
        writer.write_collection_of_uuid_values(
            "allowedDomainGuidsForSyncApp",
            self.allowed_domain_guids_for_sync_app.as_deref(),
        )?;
        writer.write_collection_of_string_values(
            "availableManagedPathsForSiteCreation",
            self.available_managed_paths_for_site_creation.as_deref(),
        )?;
        writer.write_i32_value(
            "deletedUserPersonalSiteRetentionPeriodInDays",
            self.deleted_user_personal_site_retention_period_in_days,
        )?;
        writer.write_collection_of_string_values(
            "excludedFileExtensionsForSyncApp",
            self.excluded_file_extensions_for_sync_app.as_deref(),
        )?;
        writer.write_object_value("idleSessionSignOut", parsable(&self.idle_session_sign_out))?;
        writer.write_string_value("imageTaggingOption", self.image_tagging_option.as_ref().map(ModelEnum::as_str))?;
        writer.write_bool_value("isCommentingOnSitePagesEnabled", self.is_commenting_on_site_pages_enabled)?;
        writer.write_bool_value("isFileActivityNotificationEnabled", self.is_file_activity_notification_enabled)?;
        writer.write_bool_value("isLegacyAuthProtocolsEnabled", self.is_legacy_auth_protocols_enabled)?;
        writer.write_bool_value("isLoopEnabled", self.is_loop_enabled)?;
        writer.write_bool_value("isMacSyncAppEnabled", self.is_mac_sync_app_enabled)?;
        writer.write_bool_value(
            "isRequireAcceptingUserToMatchInvitedUserEnabled",
            self.is_require_accepting_user_to_match_invited_user_enabled,
        )?;
        writer.write_bool_value("isResharingByExternalUsersEnabled", self.is_resharing_by_external_users_enabled)?;
        writer.write_bool_value(
            "isSharePointMobileNotificationEnabled",
            self.is_share_point_mobile_notification_enabled,
        )?;
        writer.write_bool_value("isSharePointNewsfeedEnabled", self.is_share_point_newsfeed_enabled)?;
        writer.write_bool_value("isSiteCreationEnabled", self.is_site_creation_enabled)?;
        writer.write_bool_value("isSiteCreationUIEnabled", self.is_site_creation_ui_enabled)?;
        writer.write_bool_value("isSitePagesCreationEnabled", self.is_site_pages_creation_enabled)?;
        writer.write_bool_value("isSitesStorageLimitAutomatic", self.is_sites_storage_limit_automatic)?;
        writer.write_bool_value("isSyncButtonHiddenOnPersonalSite", self.is_sync_button_hidden_on_personal_site)?;
        writer.write_bool_value(
            "isUnmanagedSyncAppForTenantRestricted",
            self.is_unmanaged_sync_app_for_tenant_restricted,
        )?;
        writer.write_i64_value(
            "personalSiteDefaultStorageLimitInMB",
            self.personal_site_default_storage_limit_in_mb,
        )?;
        writer.write_collection_of_string_values("sharingAllowedDomainList", self.sharing_allowed_domain_list.as_deref())?;
        writer.write_collection_of_string_values("sharingBlockedDomainList", self.sharing_blocked_domain_list.as_deref())?;
        writer.write_string_value("sharingCapability", self.sharing_capability.as_ref().map(ModelEnum::as_str))?;
        writer.write_string_value(
            "sharingDomainRestrictionMode",
            self.sharing_domain_restriction_mode.as_ref().map(ModelEnum::as_str),
        )?;
        writer.write_string_value(
            "siteCreationDefaultManagedPath",
            self.site_creation_default_managed_path.as_deref(),
        )?;
        writer.write_i32_value(
            "siteCreationDefaultStorageLimitInMB",
            self.site_creation_default_storage_limit_in_mb,
        )?;
        writer.write_string_value("tenantDefaultTimezone", self.tenant_default_timezone.as_deref())?;
        self.base.serialize_trailer(writer)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

impl Entityable for Settings {
    fn entity(&self) -> &Entity {
        &self.base
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.base
    }
}

additional_data_in_base!(Settings);
