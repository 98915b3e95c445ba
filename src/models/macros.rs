//! Declarative helpers shared by the model families

/// Declares the sum type for a polymorphic model family.
///
/// The generated enum forwards [`Parsable`](crate::serialization::Parsable)
/// and [`AdditionalDataHolder`](crate::serialization::AdditionalDataHolder)
/// to the variant it holds, and converts from each variant type.
macro_rules! model_kind {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident($ty:ty) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $( $variant($ty) ),+
        }

        impl $name {
            /// Rust name of the concrete type held
            pub fn variant_name(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => stringify!($variant) ),+
                }
            }

            pub fn as_parsable(&self) -> &dyn $crate::serialization::Parsable {
                match self {
                    $( Self::$variant(model) => model as &dyn $crate::serialization::Parsable ),+
                }
            }
        }

        impl $crate::serialization::Parsable for $name {
            fn assign_field(
                &mut self,
                name: &str,
                node: &dyn $crate::serialization::ParseNode,
            ) -> Result<bool, $crate::serialization::SerializationError> {
                match self {
                    $( Self::$variant(model) => $crate::serialization::Parsable::assign_field(model, name, node) ),+
                }
            }

            fn serialize(
                &self,
                writer: &mut dyn $crate::serialization::SerializationWriter,
            ) -> Result<(), $crate::serialization::SerializationError> {
                match self {
                    $( Self::$variant(model) => $crate::serialization::Parsable::serialize(model, writer) ),+
                }
            }

            fn additional_data_holder(
                &mut self,
            ) -> Option<&mut dyn $crate::serialization::AdditionalDataHolder> {
                match self {
                    $( Self::$variant(model) => $crate::serialization::Parsable::additional_data_holder(model) ),+
                }
            }
        }

        impl $crate::serialization::AdditionalDataHolder for $name {
            fn additional_data(&self) -> &$crate::serialization::AdditionalData {
                match self {
                    $( Self::$variant(model) => $crate::serialization::AdditionalDataHolder::additional_data(model) ),+
                }
            }

            fn additional_data_mut(&mut self) -> &mut $crate::serialization::AdditionalData {
                match self {
                    $( Self::$variant(model) => $crate::serialization::AdditionalDataHolder::additional_data_mut(model) ),+
                }
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(model: $ty) -> Self {
                    Self::$variant(model)
                }
            }
        )+
    };
}

/// Implements a capability trait on a family sum type by forwarding both
/// accessors to the held variant
macro_rules! delegate_capability {
    (
        $kind:ident: $capability:ident {
            $get:ident, $get_mut:ident -> $target:ty
        } [ $( $variant:ident ),+ $(,)? ]
    ) => {
        impl $capability for $kind {
            fn $get(&self) -> &$target {
                match self {
                    $( Self::$variant(model) => $capability::$get(model) ),+
                }
            }

            fn $get_mut(&mut self) -> &mut $target {
                match self {
                    $( Self::$variant(model) => $capability::$get_mut(model) ),+
                }
            }
        }
    };
}

/// Forwards [`AdditionalDataHolder`](crate::serialization::AdditionalDataHolder)
/// to the `base` record, which owns the store
macro_rules! additional_data_in_base {
    ( $( $ty:ty ),+ $(,)? ) => {
        $(
            impl $crate::serialization::AdditionalDataHolder for $ty {
                fn additional_data(&self) -> &$crate::serialization::AdditionalData {
                    $crate::serialization::AdditionalDataHolder::additional_data(&self.base)
                }

                fn additional_data_mut(&mut self) -> &mut $crate::serialization::AdditionalData {
                    $crate::serialization::AdditionalDataHolder::additional_data_mut(&mut self.base)
                }
            }
        )+
    };
}

/// Implements the additional-data store for a record that owns it directly
macro_rules! additional_data_owned {
    ( $( $ty:ty ),+ $(,)? ) => {
        $(
            impl $crate::serialization::AdditionalDataHolder for $ty {
                fn additional_data(&self) -> &$crate::serialization::AdditionalData {
                    &self.additional_data
                }

                fn additional_data_mut(&mut self) -> &mut $crate::serialization::AdditionalData {
                    &mut self.additional_data
                }
            }
        )+
    };
}

pub(crate) use additional_data_in_base;
pub(crate) use additional_data_owned;
pub(crate) use delegate_capability;
pub(crate) use model_kind;
