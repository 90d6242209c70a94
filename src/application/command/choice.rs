//! Pre-defined choices of a command option.

use serde::{
    de::{Deserializer, Error as DeError, Visitor},
    Deserialize, Serialize, Serializer,
};
use std::{
    collections::HashMap,
    fmt::{Formatter, Result as FmtResult},
};

/// One selectable choice of a string, integer, or number option.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CommandOptionChoice {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_localizations: Option<HashMap<String, String>>,
    pub value: CommandOptionChoiceValue,
}

/// The value of a choice, preserving the wire discrimination.
///
/// The JSON kind of `value` is the only discriminator: a string decodes to
/// [`String`](Self::String), an integral number to
/// [`Integer`](Self::Integer), and any other number to
/// [`Number`](Self::Number). Every other JSON shape is malformed. Encoding
/// is symmetric, emitting the value in its native JSON type.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandOptionChoiceValue {
    String(String),
    Integer(i64),
    Number(f64),
}

struct ChoiceValueVisitor;

impl Visitor<'_> for ChoiceValueVisitor {
    type Value = CommandOptionChoiceValue;

    fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("a string, integer, or number choice value")
    }

    fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
        Ok(CommandOptionChoiceValue::String(value.to_owned()))
    }

    fn visit_string<E: DeError>(self, value: String) -> Result<Self::Value, E> {
        Ok(CommandOptionChoiceValue::String(value))
    }

    fn visit_i64<E: DeError>(self, value: i64) -> Result<Self::Value, E> {
        Ok(CommandOptionChoiceValue::Integer(value))
    }

    fn visit_u64<E: DeError>(self, value: u64) -> Result<Self::Value, E> {
        i64::try_from(value)
            .map(CommandOptionChoiceValue::Integer)
            .map_err(|_| DeError::custom(format_args!("choice integer out of range: {value}")))
    }

    fn visit_f64<E: DeError>(self, value: f64) -> Result<Self::Value, E> {
        Ok(CommandOptionChoiceValue::Number(value))
    }
}

impl<'de> Deserialize<'de> for CommandOptionChoiceValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ChoiceValueVisitor)
    }
}

impl Serialize for CommandOptionChoiceValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(value) => serializer.serialize_str(value),
            Self::Integer(value) => serializer.serialize_i64(*value),
            Self::Number(value) => serializer.serialize_f64(*value),
        }
    }
}
