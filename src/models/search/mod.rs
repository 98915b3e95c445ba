//! Curated search answers: bookmarks and Q&A pairs

mod answer;
mod bookmark;
mod qna;
mod search_answer;

pub use answer::{AnswerKeyword, AnswerVariant};
pub use bookmark::Bookmark;
pub use qna::Qna;
pub use search_answer::{SearchAnswer, SearchAnswerKind, SearchAnswerable};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entity::Entityable;
    use crate::models::enums::{AnswerState, DevicePlatformType};
    use crate::serialization::{AdditionalDataHolder, JsonSerializer};

    #[test]
    fn test_bookmark_resolved_from_search_answer() {
        let payload = r##"{
            "@odata.type": "#microsoft.graph.search.bookmark",
            "id": "b1",
            "displayName": "Contoso Benefits",
            "webUrl": "https://contoso.example/benefits",
            "categories": ["HR"],
            "platforms": ["iOS", "android"],
            "state": "published",
            "keywords": {"keywords": ["benefits"], "matchSimilarKeywords": true},
            "targetedVariations": [{"languageTag": "de-DE", "displayName": "Leistungen", "platform": "windows"}]
        }"##;
        let kind = JsonSerializer::new()
            .deserialize(payload, SearchAnswer::create_from_discriminator_value)
            .unwrap();

        let SearchAnswerKind::Bookmark(bookmark) = &kind else {
            panic!("expected bookmark, got {}", kind.variant_name());
        };
        assert_eq!(kind.display_name(), Some("Contoso Benefits"));
        assert_eq!(bookmark.id(), Some("b1"));
        assert_eq!(bookmark.categories, Some(vec!["HR".to_string()]));
        assert_eq!(
            bookmark.platforms,
            Some(vec![DevicePlatformType::IOs, DevicePlatformType::Android])
        );
        assert_eq!(bookmark.state, Some(AnswerState::Published));
        let keywords = bookmark.keywords.as_ref().unwrap();
        assert_eq!(keywords.match_similar_keywords, Some(true));
        let variants = bookmark.targeted_variations.as_ref().unwrap();
        assert_eq!(variants[0].platform, Some(DevicePlatformType::Windows));
    }

    #[test]
    fn test_qna_serializes_base_fields_first() {
        let mut qna = Qna::new();
        qna.base.display_name = Some("Holidays".to_string());
        qna.is_suggested = Some(false);
        qna.state = Some(AnswerState::Draft);
        qna.set_id(Some("q1".to_string()));

        let json = JsonSerializer::new().serialize(&qna).unwrap();
        assert_eq!(
            json,
            r##"{"id":"q1","displayName":"Holidays","isSuggested":false,"state":"draft","@odata.type":"#microsoft.graph.search.qna"}"##
        );
    }

    #[test]
    fn test_unknown_platform_is_rejected() {
        let payload = r#"{"platforms": ["amiga"]}"#;
        let result = JsonSerializer::new().deserialize(payload, Qna::create_from_discriminator_value);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_keys_kept_on_answer_keyword() {
        let payload = r#"{"keywords":["pto"],"weight":3}"#;
        let keyword = JsonSerializer::new()
            .deserialize(payload, AnswerKeyword::create_from_discriminator_value)
            .unwrap();
        assert_eq!(keyword.additional_data()["weight"], 3);
        assert_eq!(JsonSerializer::new().serialize(&keyword).unwrap(), payload);
    }

    #[test]
    fn test_plain_search_answer_fallback() {
        let payload = r#"{"displayName":"Generic"}"#;
        let kind = JsonSerializer::new()
            .deserialize(payload, SearchAnswer::create_from_discriminator_value)
            .unwrap();
        assert!(matches!(kind, SearchAnswerKind::SearchAnswer(_)));
        assert_eq!(kind.odata_type(), None);
    }
}
