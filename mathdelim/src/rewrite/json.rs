//! `serde_json::Value` support for structural traversal.
//!
//! `serde_json::Value` is walked directly, without converting to
//! [`StructuredValue`]. JSON has no opaque variant, so every string leaf
//! outside an excluded key and within the depth bound is eligible.
//!
//! Conversions between the two trees are also provided. Going from JSON is
//! total; going back fails for values JSON cannot represent.

use serde_json::{Map, Number, Value};

use super::{
    traits::RewritableContainer,
    value::{Scalar, StructuredValue},
    walker::Walker,
};
use crate::error::TraversalError;

impl RewritableContainer for Value {
    fn rewrite_with(self, walker: &mut Walker<'_>) -> Self {
        match self {
            Value::String(text) => Value::String(walker.rewrite_string(text)),
            Value::Array(items) => Value::Array(items.rewrite_with(walker)),
            Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| {
                        let value = walker.entry(&key, value);
                        (key, value)
                    })
                    .collect::<Map<String, Value>>(),
            ),
            Value::Null | Value::Bool(_) | Value::Number(_) => self,
        }
    }
}

fn scalar_from_number(number: &Number) -> Scalar {
    if let Some(value) = number.as_i64() {
        Scalar::Int(value)
    } else if let Some(value) = number.as_u64() {
        Scalar::UInt(value)
    } else {
        number.as_f64().map_or(Scalar::Null, Scalar::Float)
    }
}

impl From<Value> for StructuredValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => StructuredValue::Scalar(Scalar::Null),
            Value::Bool(flag) => StructuredValue::Scalar(Scalar::Bool(flag)),
            Value::Number(number) => StructuredValue::Scalar(scalar_from_number(&number)),
            Value::String(text) => StructuredValue::String(text),
            Value::Array(items) => {
                StructuredValue::Sequence(items.into_iter().map(StructuredValue::from).collect())
            }
            Value::Object(entries) => StructuredValue::Mapping(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, StructuredValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<Scalar> for Value {
    type Error = TraversalError;

    fn try_from(scalar: Scalar) -> Result<Self, Self::Error> {
        Ok(match scalar {
            Scalar::Null => Value::Null,
            Scalar::Bool(flag) => Value::Bool(flag),
            Scalar::Int(value) => Value::Number(value.into()),
            Scalar::UInt(value) => Value::Number(value.into()),
            Scalar::Float(value) => Number::from_f64(value)
                .map(Value::Number)
                .ok_or(TraversalError::NonFiniteNumber(value))?,
        })
    }
}

impl TryFrom<StructuredValue> for Value {
    type Error = TraversalError;

    fn try_from(value: StructuredValue) -> Result<Self, Self::Error> {
        Ok(match value {
            StructuredValue::String(text) => Value::String(text),
            StructuredValue::Sequence(items) => Value::Array(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            StructuredValue::Mapping(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| Value::try_from(value).map(|value| (key, value)))
                    .collect::<Result<_, _>>()?,
            ),
            StructuredValue::Opaque(bytes) => {
                return Err(TraversalError::Opaque { len: bytes.len() });
            }
            StructuredValue::Scalar(scalar) => Value::try_from(scalar)?,
        })
    }
}
