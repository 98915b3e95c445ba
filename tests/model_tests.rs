//! Discriminator dispatch and model behaviour across every polymorphic family

use graph_beta_models::models::search::SearchAnswer;
use graph_beta_models::serialization::{DiscriminatorRegistry, ParsableFactory};
use graph_beta_models::{
    AdditionalDataHolder, AuditUserIdentity, BaseItem, BaseItemKind, BaseItemable, ClassificationResult, Entity,
    EntityKind, Entityable, Identity, IdentityKind, Identityable, JsonSerializer, Parsable, SitePage, UserIdentity,
    UserIdentityKind, UserIdentityable, WebPart, WebPartKind,
};
use serde_json::json;

/// Decode `{"@odata.type": d}` for every registered discriminator and check
/// the resolved variant and the echoed discriminator; then check that an
/// unknown discriminator and a missing one both land on the base variant
fn assert_dispatch<K: Parsable>(
    registry: &DiscriminatorRegistry<K>,
    factory: ParsableFactory<K>,
    variant_name: fn(&K) -> &'static str,
    base_variant: &str,
) {
    let serializer = JsonSerializer::new();

    for discriminator in registry.discriminators() {
        let payload = json!({ "@odata.type": discriminator });
        let model = serializer.deserialize_value(&payload, factory).unwrap();
        assert_ne!(
            variant_name(&model),
            base_variant,
            "{} resolved to the base type",
            discriminator
        );
        let encoded = serializer.serialize_value(&model).unwrap();
        assert_eq!(encoded["@odata.type"], discriminator);
    }

    let unknown = json!({ "@odata.type": "#microsoft.graph.notRegistered" });
    let model = serializer.deserialize_value(&unknown, factory).unwrap();
    assert_eq!(variant_name(&model), base_variant);
    let encoded = serializer.serialize_value(&model).unwrap();
    assert_eq!(encoded["@odata.type"], "#microsoft.graph.notRegistered");

    let model = serializer.deserialize_value(&json!({}), factory).unwrap();
    assert_eq!(variant_name(&model), base_variant);
}

#[test]
fn test_entity_dispatch() {
    assert_dispatch(
        Entity::registry(),
        Entity::create_from_discriminator_value,
        EntityKind::variant_name,
        "Entity",
    );
}

#[test]
fn test_base_item_dispatch() {
    assert_dispatch(
        BaseItem::registry(),
        BaseItem::create_from_discriminator_value,
        BaseItemKind::variant_name,
        "BaseItem",
    );
}

#[test]
fn test_web_part_dispatch() {
    assert_dispatch(
        WebPart::registry(),
        WebPart::create_from_discriminator_value,
        WebPartKind::variant_name,
        "WebPart",
    );
}

#[test]
fn test_search_answer_dispatch() {
    assert_dispatch(
        SearchAnswer::registry(),
        SearchAnswer::create_from_discriminator_value,
        graph_beta_models::SearchAnswerKind::variant_name,
        "SearchAnswer",
    );
}

#[test]
fn test_identity_dispatch() {
    assert_dispatch(
        Identity::registry(),
        Identity::create_from_discriminator_value,
        IdentityKind::variant_name,
        "Identity",
    );
}

#[test]
fn test_user_identity_dispatch() {
    assert_dispatch(
        UserIdentity::registry(),
        UserIdentity::create_from_discriminator_value,
        UserIdentityKind::variant_name,
        "UserIdentity",
    );
}

#[test]
fn test_audit_user_identity_scenario() {
    let payload = r##"{"@odata.type":"#microsoft.graph.auditUserIdentity","homeTenantId":"abc-123"}"##;
    let kind = JsonSerializer::new()
        .deserialize(payload, Identity::create_from_discriminator_value)
        .unwrap();

    let IdentityKind::AuditUserIdentity(audit) = &kind else {
        panic!("expected AuditUserIdentity, got {}", kind.variant_name());
    };
    assert_eq!(audit.home_tenant_id.as_deref(), Some("abc-123"));
    assert_eq!(audit.user_identity().ip_address, None);
    assert_eq!(audit.user_identity().user_principal_name, None);
    assert_eq!(audit.identity().display_name, None);
}

#[test]
fn test_classification_ignores_discriminator() {
    let payload = r#"{"confidenceLevel":87,"sensitiveTypeId":"X","@odata.type":"nonsense"}"#;
    let result = JsonSerializer::new()
        .deserialize(payload, ClassificationResult::create_from_discriminator_value)
        .unwrap();
    assert_eq!(result.confidence_level, Some(87));
    assert_eq!(result.sensitive_type_id.as_deref(), Some("X"));
    assert_eq!(result.odata_type(), Some("nonsense"));
}

#[test]
fn test_classification_accepts_whole_float_confidence() {
    let payload = r#"{"confidenceLevel":87.0,"count":2}"#;
    let result = JsonSerializer::new()
        .deserialize(payload, ClassificationResult::create_from_discriminator_value)
        .unwrap();
    assert_eq!(result.confidence_level, Some(87));
    assert_eq!(result.count, Some(2));
}

#[test]
fn test_fixed_discriminator_survives_conflicting_payload() {
    let payload = r##"{"@odata.type":"#microsoft.graph.somethingElse","homeTenantName":"Contoso"}"##;
    let audit = JsonSerializer::new()
        .deserialize(payload, AuditUserIdentity::create_from_discriminator_value)
        .unwrap();
    assert_eq!(audit.identity().odata_type(), Some("#microsoft.graph.auditUserIdentity"));
}

#[test]
fn test_accessors_through_capability_traits() {
    let mut page = SitePage::new();
    page.set_id(Some("p1".to_string()));
    page.base.name = Some("home.aspx".to_string());
    page.title = Some("Home".to_string());

    let kind: BaseItemKind = page.into();
    assert_eq!(kind.id(), Some("p1"));
    assert_eq!(kind.name(), Some("home.aspx"));
    assert_eq!(kind.odata_type(), Some("#microsoft.graph.sitePage"));
}

#[test]
fn test_unknown_keys_on_nested_polymorphic_value() {
    let payload = json!({
        "@odata.type": "#microsoft.graph.sitePage",
        "createdBy": {
            "user": {
                "@odata.type": "#microsoft.graph.userIdentity",
                "displayName": "Alex",
                "department": "Finance"
            }
        }
    });
    let serializer = JsonSerializer::new();
    let kind = serializer
        .deserialize_value(&payload, BaseItem::create_from_discriminator_value)
        .unwrap();

    let BaseItemKind::SitePage(page) = &kind else {
        panic!("expected SitePage, got {}", kind.variant_name());
    };
    let user = page.base.created_by.as_ref().and_then(|set| set.user.as_ref()).unwrap();
    assert_eq!(user.additional_data()["department"], "Finance");

    let encoded = serializer.serialize_value(&kind).unwrap();
    assert_eq!(encoded["createdBy"]["user"]["department"], "Finance");
    assert_eq!(encoded["createdBy"]["user"]["@odata.type"], "#microsoft.graph.userIdentity");
}
