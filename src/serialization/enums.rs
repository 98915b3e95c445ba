//! String-table enum codec shared by every model enum

use super::error::SerializationError;

/// An enum carried on the wire as one of a fixed set of strings
pub trait ModelEnum: Copy + Sized + 'static {
    /// Type name used in parse errors
    const TYPE_NAME: &'static str;
    /// Every value, in table order
    const VALUES: &'static [Self];

    /// Wire string for this value
    fn as_str(&self) -> &'static str;

    /// Parse a wire string; strings outside the table are an error
    fn parse(value: &str) -> Result<Self, SerializationError>;
}

/// Wire strings for a collection of enum values
pub fn serialize_enum_collection<E: ModelEnum>(values: &[E]) -> Vec<String> {
    values.iter().map(|v| v.as_str().to_string()).collect()
}

/// Declares a model enum together with its string table.
///
/// Each variant maps to exactly one wire string; parsing anything else
/// yields [`SerializationError::UnknownEnumValue`].
macro_rules! model_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::serialization::ModelEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const VALUES: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire ),+
                }
            }

            fn parse(value: &str) -> Result<Self, $crate::serialization::SerializationError> {
                match value {
                    $( $wire => Ok(Self::$variant), )+
                    _ => Err($crate::serialization::SerializationError::UnknownEnumValue {
                        type_name: stringify!($name),
                        value: value.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::serialization::ModelEnum::as_str(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::serialization::SerializationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::serialization::ModelEnum>::parse(s)
            }
        }
    };
}

pub(crate) use model_enum;
