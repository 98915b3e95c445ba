//! Per-type maps from JSON property name to decode function

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use super::duration::IsoDuration;
use super::enums::ModelEnum;
use super::error::SerializationError;
use super::parse_node::{ParseNode, Primitive};
use super::{ODATA_TYPE_KEY, OdataType, Parsable, ParsableFactory};

type DeserializerFn<T> =
    Box<dyn Fn(&mut T, &dyn ParseNode) -> Result<(), SerializationError> + Send + Sync>;

/// Decode functions for every known property of a model type.
///
/// Each function reads one typed value and assigns it only when the payload
/// value is non-null. Read failures propagate immediately. Subtypes start
/// from [`FieldDeserializers::inherit`] and register their own properties on
/// top; a later registration replaces an earlier one with the same name.
pub struct FieldDeserializers<T> {
    entries: HashMap<&'static str, DeserializerFn<T>>,
}

impl<T: 'static> Default for FieldDeserializers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> FieldDeserializers<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Start from a base type's map, routing each entry through `project`
    pub fn inherit<B: 'static>(
        base: &'static FieldDeserializers<B>,
        project: fn(&mut T) -> &mut B,
    ) -> Self {
        let entries = base
            .entries
            .iter()
            .map(|(name, decode)| {
                let lifted: DeserializerFn<T> =
                    Box::new(move |model: &mut T, node: &dyn ParseNode| decode(project(model), node));
                (*name, lifted)
            })
            .collect();
        Self { entries }
    }

    /// Register a decode function; replaces any existing entry for `name`
    pub fn field<F>(mut self, name: &'static str, decode: F) -> Self
    where
        F: Fn(&mut T, &dyn ParseNode) -> Result<(), SerializationError> + Send + Sync + 'static,
    {
        self.entries.insert(name, Box::new(decode));
        self
    }

    pub fn primitive<P: Primitive + 'static>(self, name: &'static str, set: fn(&mut T, P)) -> Self {
        self.field(name, move |model, node| {
            if let Some(value) = P::read(node)? {
                set(model, value);
            }
            Ok(())
        })
    }

    pub fn string(self, name: &'static str, set: fn(&mut T, String)) -> Self {
        self.primitive::<String>(name, set)
    }

    pub fn boolean(self, name: &'static str, set: fn(&mut T, bool)) -> Self {
        self.primitive::<bool>(name, set)
    }

    pub fn int32(self, name: &'static str, set: fn(&mut T, i32)) -> Self {
        self.primitive::<i32>(name, set)
    }

    pub fn int64(self, name: &'static str, set: fn(&mut T, i64)) -> Self {
        self.primitive::<i64>(name, set)
    }

    pub fn float64(self, name: &'static str, set: fn(&mut T, f64)) -> Self {
        self.primitive::<f64>(name, set)
    }

    pub fn bytes(self, name: &'static str, set: fn(&mut T, Vec<u8>)) -> Self {
        self.primitive::<Vec<u8>>(name, set)
    }

    pub fn date_time(self, name: &'static str, set: fn(&mut T, DateTime<Utc>)) -> Self {
        self.primitive::<DateTime<Utc>>(name, set)
    }

    pub fn date_only(self, name: &'static str, set: fn(&mut T, NaiveDate)) -> Self {
        self.primitive::<NaiveDate>(name, set)
    }

    pub fn time_only(self, name: &'static str, set: fn(&mut T, NaiveTime)) -> Self {
        self.primitive::<NaiveTime>(name, set)
    }

    pub fn duration(self, name: &'static str, set: fn(&mut T, IsoDuration)) -> Self {
        self.primitive::<IsoDuration>(name, set)
    }

    pub fn uuid(self, name: &'static str, set: fn(&mut T, Uuid)) -> Self {
        self.primitive::<Uuid>(name, set)
    }

    /// Untyped JSON property, kept as-is
    pub fn raw(self, name: &'static str, set: fn(&mut T, Value)) -> Self {
        self.field(name, move |model, node| {
            if let Some(value) = node.get_raw_value()? {
                set(model, value);
            }
            Ok(())
        })
    }

    pub fn enumeration<E: ModelEnum>(self, name: &'static str, set: fn(&mut T, E)) -> Self {
        self.field(name, move |model, node| {
            if let Some(value) = node.get_enum_value::<E>()? {
                set(model, value);
            }
            Ok(())
        })
    }

    pub fn object<V: Parsable + 'static>(
        self,
        name: &'static str,
        factory: ParsableFactory<V>,
        set: fn(&mut T, V),
    ) -> Self {
        self.field(name, move |model, node| {
            if let Some(value) = node.get_object_value(factory)? {
                set(model, value);
            }
            Ok(())
        })
    }

    pub fn objects<V: Parsable + 'static>(
        self,
        name: &'static str,
        factory: ParsableFactory<V>,
        set: fn(&mut T, Vec<V>),
    ) -> Self {
        self.field(name, move |model, node| {
            if let Some(values) = node.get_collection_of_object_values(factory)? {
                set(model, values);
            }
            Ok(())
        })
    }

    pub fn primitives<P: Primitive + 'static>(self, name: &'static str, set: fn(&mut T, Vec<P>)) -> Self {
        self.field(name, move |model, node| {
            if let Some(values) = node.get_collection_of_primitive_values::<P>()? {
                set(model, values);
            }
            Ok(())
        })
    }

    pub fn strings(self, name: &'static str, set: fn(&mut T, Vec<String>)) -> Self {
        self.primitives::<String>(name, set)
    }

    pub fn enums<E: ModelEnum>(self, name: &'static str, set: fn(&mut T, Vec<E>)) -> Self {
        self.field(name, move |model, node| {
            if let Some(values) = node.get_collection_of_enum_values::<E>()? {
                set(model, values);
            }
            Ok(())
        })
    }

    /// The `@odata.type` property. A discriminator fixed by the constructor
    /// is never replaced by the payload's value.
    pub fn odata_type(self, project: fn(&mut T) -> &mut OdataType) -> Self {
        self.field(ODATA_TYPE_KEY, move |model, node| {
            if let Some(value) = node.get_string_value()? {
                project(model).adopt(value);
            }
            Ok(())
        })
    }

    /// Run the decode function registered for `name`; `Ok(false)` when the
    /// property is unknown to this type
    pub fn assign(&self, model: &mut T, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        match self.entries.get(name) {
            Some(decode) => {
                decode(model, node)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered property names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl<T> std::fmt::Debug for FieldDeserializers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&&'static str> = self.entries.keys().collect();
        names.sort_unstable();
        f.debug_struct("FieldDeserializers")
            .field("fields", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::json::JsonParseNode;
    use serde_json::json;

    #[derive(Default)]
    struct Base {
        name: Option<String>,
        size: Option<i32>,
    }

    #[derive(Default)]
    struct Derived {
        base: Base,
        size_label: Option<String>,
    }

    fn base_fields() -> &'static FieldDeserializers<Base> {
        static FIELDS: once_cell::sync::Lazy<FieldDeserializers<Base>> =
            once_cell::sync::Lazy::new(|| {
                FieldDeserializers::<Base>::new()
                    .string("name", |m, v| m.name = Some(v))
                    .int32("size", |m, v| m.size = Some(v))
            });
        &FIELDS
    }

    #[test]
    fn test_inherited_entries_reach_base() {
        let fields = FieldDeserializers::<Derived>::inherit(base_fields(), |m| &mut m.base);
        let payload = json!("report");
        let node = JsonParseNode::new(&payload);

        let mut model = Derived::default();
        assert!(fields.assign(&mut model, "name", &node).unwrap());
        assert_eq!(model.base.name.as_deref(), Some("report"));
        assert!(!fields.assign(&mut model, "unknown", &node).unwrap());
    }

    #[test]
    fn test_later_registration_wins() {
        let fields = FieldDeserializers::<Derived>::inherit(base_fields(), |m| &mut m.base)
            .string("size", |m, v| m.size_label = Some(v));
        let payload = json!("large");
        let node = JsonParseNode::new(&payload);

        let mut model = Derived::default();
        fields.assign(&mut model, "size", &node).unwrap();
        assert_eq!(model.size_label.as_deref(), Some("large"));
        assert_eq!(model.base.size, None);
        assert_eq!(fields.len(), 2);
    }

    #[derive(Default)]
    struct Typed {
        quota: Option<i64>,
        ratio: Option<f64>,
        blob: Option<Vec<u8>>,
        day: Option<NaiveDate>,
        at: Option<NaiveTime>,
        span: Option<IsoDuration>,
        id: Option<Uuid>,
    }

    fn typed_fields() -> FieldDeserializers<Typed> {
        FieldDeserializers::<Typed>::new()
            .int64("quota", |m, v| m.quota = Some(v))
            .float64("ratio", |m, v| m.ratio = Some(v))
            .bytes("blob", |m, v| m.blob = Some(v))
            .date_only("day", |m, v| m.day = Some(v))
            .time_only("at", |m, v| m.at = Some(v))
            .duration("span", |m, v| m.span = Some(v))
            .uuid("id", |m, v| m.id = Some(v))
    }

    fn assign_json(
        fields: &FieldDeserializers<Typed>,
        model: &mut Typed,
        name: &str,
        value: Value,
    ) -> Result<bool, SerializationError> {
        fields.assign(model, name, &JsonParseNode::new(&value))
    }

    #[test]
    fn test_typed_helpers_decode_values() {
        let fields = typed_fields();
        let mut model = Typed::default();

        assign_json(&fields, &mut model, "quota", json!(5_242_880_000i64)).unwrap();
        assign_json(&fields, &mut model, "ratio", json!(0.25)).unwrap();
        assign_json(&fields, &mut model, "blob", json!("Z3JhcGg=")).unwrap();
        assign_json(&fields, &mut model, "day", json!("2024-02-29")).unwrap();
        assign_json(&fields, &mut model, "at", json!("13:45:00.5")).unwrap();
        assign_json(&fields, &mut model, "span", json!("P1DT2H")).unwrap();
        assign_json(&fields, &mut model, "id", json!("6f9230af-2a98-4952-b205-9ede4f9ef548")).unwrap();

        assert_eq!(model.quota, Some(5_242_880_000));
        assert_eq!(model.ratio, Some(0.25));
        assert_eq!(model.blob.as_deref(), Some(&b"graph"[..]));
        assert_eq!(model.day, NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(model.at, NaiveTime::from_hms_milli_opt(13, 45, 0, 500));
        let span = model.span.unwrap();
        assert_eq!((span.days, span.hours), (1, 2));
        assert_eq!(
            model.id,
            Uuid::parse_str("6f9230af-2a98-4952-b205-9ede4f9ef548").ok()
        );
    }

    #[test]
    fn test_typed_helpers_reject_bad_values() {
        let fields = typed_fields();
        let mut model = Typed::default();

        let err = assign_json(&fields, &mut model, "quota", json!(u64::MAX)).unwrap_err();
        assert!(matches!(err, SerializationError::IntegerOutOfRange { target: "i64", .. }));

        let err = assign_json(&fields, &mut model, "ratio", json!("half")).unwrap_err();
        assert!(matches!(err, SerializationError::TypeMismatch { expected: "number", .. }));

        let err = assign_json(&fields, &mut model, "blob", json!("not base64!")).unwrap_err();
        assert!(matches!(err, SerializationError::InvalidValue { .. }));

        let err = assign_json(&fields, &mut model, "day", json!("2023-02-29")).unwrap_err();
        assert!(matches!(err, SerializationError::InvalidValue { .. }));

        let err = assign_json(&fields, &mut model, "at", json!("25:00:00")).unwrap_err();
        assert!(matches!(err, SerializationError::InvalidValue { .. }));

        let err = assign_json(&fields, &mut model, "span", json!("two hours")).unwrap_err();
        assert!(matches!(err, SerializationError::InvalidValue { .. }));

        let err = assign_json(&fields, &mut model, "id", json!("6f9230af")).unwrap_err();
        assert!(matches!(err, SerializationError::InvalidValue { .. }));

        assert!(model.quota.is_none() && model.blob.is_none() && model.id.is_none());
    }

    #[test]
    fn test_null_leaves_field_unset_and_mismatch_fails() {
        let fields = base_fields();
        let mut model = Base::default();

        let null = json!(null);
        fields.assign(&mut model, "size", &JsonParseNode::new(&null)).unwrap();
        assert_eq!(model.size, None);

        let wrong = json!("ten");
        let err = fields
            .assign(&mut model, "size", &JsonParseNode::new(&wrong))
            .unwrap_err();
        assert!(matches!(err, SerializationError::TypeMismatch { .. }));
    }
}
