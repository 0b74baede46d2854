//! Null pruning for outbound payloads.
//!
//! The wall service treats an omitted key as "leave unchanged" and an explicit
//! value as "set", so every null object entry is removed before sending.

use serde_json::{Map, Value};
use wall_updater_sdk::WallUpdate;

use super::error::DomainError;

/// Recursively remove null-valued keys from every object in `value`.
///
/// Arrays keep their length and order. A null array element is kept as is:
/// only object entries are pruned. Empty strings, arrays and objects survive.
/// The result is a fixed point: `sanitize(sanitize(v)) == sanitize(v)`.
#[must_use]
pub fn sanitize(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, sanitize(v)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize).collect()),
        scalar => scalar,
    }
}

/// Serialize `update` and prune it for the wire.
///
/// # Errors
/// Returns [`DomainError::Validation`] if the update cannot be represented as
/// JSON (a non-finite coordinate, for instance).
pub fn sanitize_update(update: &WallUpdate) -> Result<Value, DomainError> {
    let value = serde_json::to_value(update)
        .map_err(|e| DomainError::validation(format!("update is not serializable: {e}")))?;
    Ok(sanitize(value))
}
