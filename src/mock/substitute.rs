use serde_json::{Map, Value};

use crate::mock::error::{MockError, Result};
use crate::mock::registry;

/// Parse raw bytes into a validated top-level mock data object.
pub fn parse_document(raw: &[u8]) -> Result<Map<String, Value>> {
	if raw.trim_ascii().is_empty() {
		return Err(MockError::BlankInput);
	}

	let value: Value = serde_json::from_slice(raw).map_err(MockError::InvalidFormat)?;
	match value {
		Value::Object(map) => Ok(map),
		other => Err(MockError::NotAnObject { kind: value_kind(&other) }),
	}
}

/// Parse raw bytes and substitute every registered marker in the document.
pub fn substitute_document(raw: &[u8]) -> Result<Map<String, Value>> {
	Ok(substitute_object(parse_document(raw)?))
}

/// Substitute markers in an object, key by key. Keys are never substituted.
pub fn substitute_object(object: Map<String, Value>) -> Map<String, Value> {
	object.into_iter().map(|(key, value)| (key, substitute_value(value))).collect()
}

/// Substitute markers in an array, preserving length and order.
pub fn substitute_array(items: Vec<Value>) -> Vec<Value> {
	items.into_iter().map(substitute_value).collect()
}

/// Substitute markers in one value, recursing through containers.
///
/// Marker strings are replaced with freshly generated values; each
/// occurrence draws again, so two identical markers diverge. Strings
/// without a registered marker name pass through untouched, as do
/// numbers, booleans, and nulls.
pub fn substitute_value(value: Value) -> Value {
	match value {
		Value::String(text) => Value::String(substitute_string(text)),
		Value::Array(items) => Value::Array(substitute_array(items)),
		Value::Object(map) => Value::Object(substitute_object(map)),
		other => other,
	}
}

fn substitute_string(text: String) -> String {
	let Some(name) = text.strip_prefix(registry::MARKER_PREFIX) else {
		return text;
	};
	match registry::lookup(name) {
		Some(generator) => generator(),
		None => text,
	}
}

/// JSON kind label used in diagnostics.
pub fn value_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
