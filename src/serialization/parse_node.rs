//! Format-agnostic read cursor over a decoded payload

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_json::Value;
use tracing::trace;
use uuid::Uuid;

use super::duration::IsoDuration;
use super::enums::ModelEnum;
use super::error::SerializationError;
use super::{Parsable, ParsableFactory};

/// A node in a decoded payload from which typed values are read.
///
/// Every getter returns `Ok(None)` for an explicit null and an error when
/// the node holds a value of another type.
pub trait ParseNode {
    /// Child node for a property of an object node; `None` when absent or
    /// when this node is not an object
    fn get_child_node(&self, name: &str) -> Result<Option<Box<dyn ParseNode + '_>>, SerializationError>;

    fn get_string_value(&self) -> Result<Option<String>, SerializationError>;

    fn get_bool_value(&self) -> Result<Option<bool>, SerializationError>;

    fn get_i32_value(&self) -> Result<Option<i32>, SerializationError>;

    fn get_i64_value(&self) -> Result<Option<i64>, SerializationError>;

    fn get_f64_value(&self) -> Result<Option<f64>, SerializationError>;

    fn get_byte_array_value(&self) -> Result<Option<Vec<u8>>, SerializationError>;

    fn get_date_time_value(&self) -> Result<Option<DateTime<Utc>>, SerializationError>;

    fn get_date_only_value(&self) -> Result<Option<NaiveDate>, SerializationError>;

    fn get_time_only_value(&self) -> Result<Option<NaiveTime>, SerializationError>;

    fn get_duration_value(&self) -> Result<Option<IsoDuration>, SerializationError>;

    fn get_uuid_value(&self) -> Result<Option<Uuid>, SerializationError>;

    /// The node's value as untyped JSON
    fn get_raw_value(&self) -> Result<Option<Value>, SerializationError>;

    /// Properties of an object node in payload order
    #[allow(clippy::type_complexity)]
    fn get_object_properties(
        &self,
    ) -> Result<Option<Vec<(&str, Box<dyn ParseNode + '_>)>>, SerializationError>;

    /// Elements of a collection node
    fn get_collection_nodes(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, SerializationError>;
}

/// A value that can be read directly from a parse node
pub trait Primitive: Sized {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError>;
}

impl Primitive for String {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_string_value()
    }
}

impl Primitive for bool {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_bool_value()
    }
}

impl Primitive for i32 {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_i32_value()
    }
}

impl Primitive for i64 {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_i64_value()
    }
}

impl Primitive for f64 {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_f64_value()
    }
}

impl Primitive for Vec<u8> {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_byte_array_value()
    }
}

impl Primitive for DateTime<Utc> {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_date_time_value()
    }
}

impl Primitive for NaiveDate {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_date_only_value()
    }
}

impl Primitive for NaiveTime {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_time_only_value()
    }
}

impl Primitive for IsoDuration {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_duration_value()
    }
}

impl Primitive for Uuid {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_uuid_value()
    }
}

impl<'a> dyn ParseNode + 'a {
    /// Read an enum through its string table
    pub fn get_enum_value<E: ModelEnum>(&self) -> Result<Option<E>, SerializationError> {
        self.get_string_value()?.map(|s| E::parse(&s)).transpose()
    }

    /// Decode an object node into a model.
    ///
    /// The factory picks the concrete type (usually from `@odata.type`),
    /// then each property is routed through the model's field map. Properties
    /// the model does not know land in its additional data.
    pub fn get_object_value<T: Parsable>(
        &self,
        factory: ParsableFactory<T>,
    ) -> Result<Option<T>, SerializationError> {
        let Some(properties) = self.get_object_properties()? else {
            return Ok(None);
        };

        let mut model = factory(self)?;
        for (name, node) in properties {
            if model.assign_field(name, node.as_ref())? {
                continue;
            }
            if let Some(holder) = model.additional_data_holder() {
                trace!(field = name, "keeping unmapped field in additional data");
                let raw = node.get_raw_value()?.unwrap_or(Value::Null);
                holder.additional_data_mut().insert(name.to_string(), raw);
            }
        }
        Ok(Some(model))
    }

    /// Decode every element of a collection node; null elements are skipped
    pub fn get_collection_of_object_values<T: Parsable>(
        &self,
        factory: ParsableFactory<T>,
    ) -> Result<Option<Vec<T>>, SerializationError> {
        let Some(nodes) = self.get_collection_nodes()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(nodes.len());
        for node in &nodes {
            if let Some(value) = node.get_object_value(factory)? {
                values.push(value);
            }
        }
        Ok(Some(values))
    }

    pub fn get_collection_of_primitive_values<P: Primitive>(
        &self,
    ) -> Result<Option<Vec<P>>, SerializationError> {
        let Some(nodes) = self.get_collection_nodes()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(nodes.len());
        for node in &nodes {
            if let Some(value) = P::read(node.as_ref())? {
                values.push(value);
            }
        }
        Ok(Some(values))
    }

    pub fn get_collection_of_enum_values<E: ModelEnum>(
        &self,
    ) -> Result<Option<Vec<E>>, SerializationError> {
        let Some(nodes) = self.get_collection_nodes()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(nodes.len());
        for node in &nodes {
            if let Some(value) = node.get_enum_value::<E>()? {
                values.push(value);
            }
        }
        Ok(Some(values))
    }
}
