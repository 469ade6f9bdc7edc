//! # Shape Description Builders
//!
//! Declarative construction of record shapes as JSON Schema documents.
//!
//! A "shape" here is nothing more than a `serde_json::Value` holding a
//! JSON Schema fragment. The builders exist so that callers can write
//! `object([("name", string()), ("age", number())])` instead of spelling
//! out `properties`/`required` by hand; no validation logic lives here.
//!
//! Every field passed to [`object`] is required. Unknown keys are allowed:
//! the emitted schema leaves `additionalProperties` unset, so candidate
//! records may carry extra fields without failing validation.

use serde_json::{json, Map, Value};

/// A text field description.
pub fn string() -> Value {
    json!({ "type": "string" })
}

/// A numeric field description. Accepts integers and floats alike.
pub fn number() -> Value {
    json!({ "type": "number" })
}

/// A record shape with the given named fields, all required.
///
/// Field order is preserved in the `required` list but has no effect on
/// validation.
pub fn object<K, I>(fields: I) -> Value
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Value)>,
{
    let mut properties = Map::new();
    let mut required = Vec::new();

    for (name, field) in fields {
        let name = name.into();
        required.push(Value::String(name.clone()));
        properties.insert(name, field);
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// The sample two-field shape: `name` as text, `age` as a number.
pub fn user_shape() -> Value {
    object([("name", string()), ("age", number())])
}
