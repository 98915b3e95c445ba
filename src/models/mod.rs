//! Graph beta resource models
//!
//! Each model owns a field map used while decoding and writes its properties
//! in a stable order. Polymorphic families are exposed as `*Kind` enums that
//! are picked from the payload's `@odata.type`.

mod macros;

pub mod base_item;
pub mod canvas;
pub mod classification;
pub mod entity;
pub mod enums;
pub mod identity;
pub mod managed_tenants;
pub mod search;
pub mod server_processed_content;
pub mod site_page;
pub mod tenant_admin;
pub mod web_part;

pub use base_item::{BaseItem, BaseItemKind, BaseItemable, ItemReference, SharepointIds};
pub use canvas::{CanvasLayout, HorizontalSection, HorizontalSectionColumn, VerticalSection};
pub use classification::ClassificationResult;
pub use entity::{Entity, EntityKind, Entityable};
pub use enums::*;
pub use identity::{
    AuditUserIdentity, Identity, IdentityKind, IdentitySet, Identityable, UserIdentity, UserIdentityKind,
    UserIdentityable,
};
pub use managed_tenants::CredentialUserRegistrationsSummary;
pub use search::{AnswerKeyword, AnswerVariant, Bookmark, Qna, SearchAnswer, SearchAnswerKind, SearchAnswerable};
pub use server_processed_content::{MetaDataKeyStringPair, MetaDataKeyValuePair, ServerProcessedContent};
pub use site_page::{ContentTypeInfo, PublicationFacet, ReactionsFacet, SitePage, TitleArea};
pub use tenant_admin::{IdleSessionSignOut, Settings};
pub use web_part::{StandardWebPart, TextWebPart, WebPart, WebPartData, WebPartKind, WebPartable};
