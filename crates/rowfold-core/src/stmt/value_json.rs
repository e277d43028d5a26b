//! Conversions between [`Value`] and [`serde_json::Value`].
//!
//! Query layers frequently hand over rows as JSON objects. Objects map to
//! records, arrays to lists. Integers that fit in an `i64` become `I64` and
//! floats become `F64`. Unsigned integers above `i64::MAX` are a type
//! conversion error. Non-finite floats render back as JSON `null`.

use super::{Value, ValueRecord};
use crate::{Error, Result};

use serde_json::Value as Json;

impl TryFrom<Json> for Value {
    type Error = Error;

    fn try_from(src: Json) -> Result<Self> {
        Ok(match src {
            Json::Null => Value::Null,
            Json::Bool(v) => Value::Bool(v),
            Json::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(v), _) => Value::I64(v),
                (None, Some(v)) if n.is_f64() => Value::F64(v),
                _ => return Err(Error::type_conversion_from(format!("number {n}"), "Value")),
            },
            Json::String(v) => Value::String(v),
            Json::Array(items) => Value::List(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_>>()?,
            ),
            Json::Object(fields) => Value::Record(record_from_fields(fields)?),
        })
    }
}

impl TryFrom<Json> for ValueRecord {
    type Error = Error;

    fn try_from(src: Json) -> Result<Self> {
        match src {
            Json::Object(fields) => record_from_fields(fields),
            other => Err(Error::invalid_row(format!("expected object, got {other}"))),
        }
    }
}

fn record_from_fields(fields: serde_json::Map<String, Json>) -> Result<ValueRecord> {
    let mut record = ValueRecord::with_capacity(fields.len());

    for (name, value) in fields {
        let value = Value::try_from(value)
            .map_err(|err| err.context(Error::from_args(format_args!("attribute `{name}`"))))?;
        record.insert(name, value);
    }

    Ok(record)
}

impl From<Value> for Json {
    fn from(src: Value) -> Self {
        match src {
            Value::Null => Json::Null,
            Value::Bool(v) => Json::Bool(v),
            Value::I64(v) => Json::from(v),
            Value::F64(v) => Json::from(v),
            Value::String(v) => Json::String(v),
            Value::Uuid(v) => Json::String(v.hyphenated().to_string()),
            Value::List(items) => Json::Array(items.into_iter().map(Json::from).collect()),
            Value::Record(record) => Json::from(record),
        }
    }
}

impl From<ValueRecord> for Json {
    fn from(src: ValueRecord) -> Self {
        Json::Object(
            src.into_iter()
                .map(|(name, value)| (name, Json::from(value)))
                .collect(),
        )
    }
}
