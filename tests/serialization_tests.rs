//! Round trips through the JSON backend

use std::fmt::Debug;

use graph_beta_models::serialization::ParsableFactory;
use graph_beta_models::*;
use proptest::prelude::*;
use serde_json::{Value, json};

fn assert_default_round_trip<T: Parsable + PartialEq + Debug>(model: T, factory: ParsableFactory<T>) {
    let serializer = JsonSerializer::new();
    let encoded = serializer.serialize(&model).unwrap();
    let decoded = serializer.deserialize(&encoded, factory).unwrap();
    assert_eq!(decoded, model, "round trip of {}", encoded);
}

#[test]
fn test_default_instances_round_trip() {
    assert_default_round_trip(EntityKind::from(Entity::new()), Entity::create_from_discriminator_value);
    assert_default_round_trip(BaseItemKind::from(BaseItem::new()), BaseItem::create_from_discriminator_value);
    assert_default_round_trip(WebPartKind::from(WebPart::new()), WebPart::create_from_discriminator_value);
    assert_default_round_trip(
        SearchAnswerKind::from(SearchAnswer::new()),
        SearchAnswer::create_from_discriminator_value,
    );
    assert_default_round_trip(IdentityKind::from(Identity::new()), Identity::create_from_discriminator_value);
    assert_default_round_trip(
        UserIdentityKind::from(UserIdentity::new()),
        UserIdentity::create_from_discriminator_value,
    );

    assert_default_round_trip(SitePage::new(), SitePage::create_from_discriminator_value);
    assert_default_round_trip(CanvasLayout::new(), CanvasLayout::create_from_discriminator_value);
    assert_default_round_trip(HorizontalSection::new(), HorizontalSection::create_from_discriminator_value);
    assert_default_round_trip(
        HorizontalSectionColumn::new(),
        HorizontalSectionColumn::create_from_discriminator_value,
    );
    assert_default_round_trip(VerticalSection::new(), VerticalSection::create_from_discriminator_value);
    assert_default_round_trip(StandardWebPart::new(), StandardWebPart::create_from_discriminator_value);
    assert_default_round_trip(TextWebPart::new(), TextWebPart::create_from_discriminator_value);
    assert_default_round_trip(Bookmark::new(), Bookmark::create_from_discriminator_value);
    assert_default_round_trip(Qna::new(), Qna::create_from_discriminator_value);
    assert_default_round_trip(
        CredentialUserRegistrationsSummary::new(),
        CredentialUserRegistrationsSummary::create_from_discriminator_value,
    );
    assert_default_round_trip(AuditUserIdentity::new(), AuditUserIdentity::create_from_discriminator_value);
    assert_default_round_trip(Settings::new(), Settings::create_from_discriminator_value);
    assert_default_round_trip(IdleSessionSignOut::new(), IdleSessionSignOut::create_from_discriminator_value);

    assert_default_round_trip(IdentitySet::new(), IdentitySet::create_from_discriminator_value);
    assert_default_round_trip(ClassificationResult::new(), ClassificationResult::create_from_discriminator_value);
    assert_default_round_trip(ItemReference::new(), ItemReference::create_from_discriminator_value);
    assert_default_round_trip(SharepointIds::new(), SharepointIds::create_from_discriminator_value);
    assert_default_round_trip(ContentTypeInfo::new(), ContentTypeInfo::create_from_discriminator_value);
    assert_default_round_trip(PublicationFacet::new(), PublicationFacet::create_from_discriminator_value);
    assert_default_round_trip(ReactionsFacet::new(), ReactionsFacet::create_from_discriminator_value);
    assert_default_round_trip(TitleArea::new(), TitleArea::create_from_discriminator_value);
    assert_default_round_trip(
        ServerProcessedContent::new(),
        ServerProcessedContent::create_from_discriminator_value,
    );
    assert_default_round_trip(MetaDataKeyStringPair::new(), MetaDataKeyStringPair::create_from_discriminator_value);
    assert_default_round_trip(MetaDataKeyValuePair::new(), MetaDataKeyValuePair::create_from_discriminator_value);
    assert_default_round_trip(WebPartData::new(), WebPartData::create_from_discriminator_value);
    assert_default_round_trip(AnswerKeyword::new(), AnswerKeyword::create_from_discriminator_value);
    assert_default_round_trip(AnswerVariant::new(), AnswerVariant::create_from_discriminator_value);
}

#[test]
fn test_site_page_with_canvas_round_trips() {
    let payload = json!({
        "@odata.type": "#microsoft.graph.sitePage",
        "id": "0dd6ddd6-45bd-4acd-b683-de0e6e7231b7",
        "name": "Events.aspx",
        "webUrl": "SitePages/Events.aspx",
        "createdDateTime": "2024-05-01T09:30:00Z",
        "title": "Events",
        "pageLayout": "article",
        "canvasLayout": {
            "@odata.type": "#microsoft.graph.canvasLayout",
            "horizontalSections": [{
                "@odata.type": "#microsoft.graph.horizontalSection",
                "id": "1",
                "layout": "twoColumns",
                "emphasis": "soft",
                "columns": [{
                    "@odata.type": "#microsoft.graph.horizontalSectionColumn",
                    "id": "1",
                    "width": 6,
                    "webparts": [{
                        "@odata.type": "#microsoft.graph.textWebPart",
                        "id": "6f9230af-2a98-4952-b205-9ede4f9ef548",
                        "innerHtml": "<p>Agenda</p>"
                    }]
                }]
            }],
            "verticalSection": {
                "@odata.type": "#microsoft.graph.verticalSection",
                "emphasis": "neutral",
                "webparts": [{
                    "@odata.type": "#microsoft.graph.standardWebPart",
                    "id": "wp-2",
                    "webPartType": "d1d91016-032f-456d-98a4-721247c305e8",
                    "data": {
                        "dataVersion": "1.9",
                        "title": "Image",
                        "properties": {"imageSourceType": 2, "overlayText": "Hello"},
                        "serverProcessedContent": {
                            "imageSources": [{"key": "imageSource", "value": "/sites/img.png"}],
                            "customMetadata": [{"key": "imageSource", "value": {"width": 400}}]
                        }
                    }
                }]
            }
        },
        "contoso.reviewState": "pending"
    });

    let serializer = JsonSerializer::new();
    let kind = serializer
        .deserialize_value(&payload, BaseItem::create_from_discriminator_value)
        .unwrap();
    let BaseItemKind::SitePage(page) = &kind else {
        panic!("expected SitePage, got {}", kind.variant_name());
    };

    let canvas = page.canvas_layout.as_ref().unwrap();
    let kinds: Vec<&str> = canvas.web_parts().map(|part| part.variant_name()).collect();
    assert_eq!(kinds, vec!["TextWebPart", "StandardWebPart"]);
    assert_eq!(page.additional_data()["contoso.reviewState"], "pending");

    assert_eq!(serializer.serialize_value(&kind).unwrap(), payload);
}

#[test]
fn test_serialized_key_order() {
    let mut audit = AuditUserIdentity::new();
    audit.home_tenant_name = Some("Contoso".to_string());
    audit.base.user_principal_name = Some("adele@contoso.example".to_string());
    audit.base.base.id = Some("u1".to_string());
    audit
        .additional_data_mut()
        .insert("zeta".to_string(), json!(1));

    let text = JsonSerializer::new().serialize(&audit).unwrap();
    assert_eq!(
        text,
        r##"{"id":"u1","userPrincipalName":"adele@contoso.example","homeTenantName":"Contoso","@odata.type":"#microsoft.graph.auditUserIdentity","zeta":1}"##
    );
}

#[test]
fn test_nested_read_failure_aborts_decode() {
    let payload = r#"{"canvasLayout": {"horizontalSections": [{"columns": [{"width": "wide"}]}]}}"#;
    let err = JsonSerializer::new()
        .deserialize(payload, SitePage::create_from_discriminator_value)
        .unwrap_err();
    assert!(matches!(err, SerializationError::TypeMismatch { .. }), "{err}");
}

#[test]
fn test_unknown_enum_value_names_type() {
    let payload = r#"{"layout": "fourColumns"}"#;
    let err = JsonSerializer::new()
        .deserialize(payload, HorizontalSection::create_from_discriminator_value)
        .unwrap_err();
    assert_eq!(err.to_string(), "Unknown HorizontalSectionLayoutType value: fourColumns");
}

#[test]
fn test_bytes_helpers_honour_config() {
    let serializer = JsonSerializer::with_config(JsonConfig::builder().pretty(true).build());
    let mut summary = CredentialUserRegistrationsSummary::new();
    summary.total_user_count = Some(3);

    let bytes = serializer.serialize_to_vec(&summary).unwrap();
    assert!(bytes.contains(&b'\n'));

    let decoded = serializer
        .deserialize_slice(&bytes, CredentialUserRegistrationsSummary::create_from_discriminator_value)
        .unwrap();
    assert_eq!(decoded, summary);
}

fn extra_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::from),
        Just(Value::Null),
        proptest::collection::vec(any::<i32>(), 0..4).prop_map(Value::from),
    ]
}

proptest! {
    #[test]
    fn prop_unknown_keys_survive_round_trip(
        extras in proptest::collection::btree_map("x[a-zA-Z]{1,8}", extra_value(), 0..6),
    ) {
        let mut payload = serde_json::Map::new();
        payload.insert("displayName".to_string(), json!("Adele"));
        payload.insert("@odata.type".to_string(), json!("#microsoft.graph.userIdentity"));
        for (key, value) in &extras {
            payload.insert(key.clone(), value.clone());
        }
        let payload = Value::Object(payload);

        let serializer = JsonSerializer::new();
        let kind = serializer
            .deserialize_value(&payload, Identity::create_from_discriminator_value)
            .unwrap();
        prop_assert_eq!(kind.additional_data().len(), extras.len());

        let encoded = serializer.serialize(&kind).unwrap();
        prop_assert_eq!(encoded, serde_json::to_string(&payload).unwrap());
    }
}
