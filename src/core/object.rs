//! Tagged event and action objects.
//!
//! Events and actions share one shape: a string discriminant under the
//! reserved `type` key plus arbitrary payload fields. The payload map never
//! holds the discriminant itself; the tag field is its sole carrier.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved key carrying the discriminant tag in serialized form.
pub(crate) const TYPE_KEY: &str = "type";

/// A tagged message: a string discriminant plus a payload field mapping.
///
/// Serializes flat, so the wire form is indistinguishable from a plain
/// tagged object built by hand or by the machine engine:
///
/// ```rust
/// use serde_json::json;
/// use statemodel::EventObject;
///
/// let event: EventObject =
///     serde_json::from_value(json!({ "type": "login", "user": "ada" })).unwrap();
///
/// assert_eq!(event.event_type(), "login");
/// assert_eq!(event.get("user"), Some(&json!("ada")));
/// assert_eq!(serde_json::to_value(&event).unwrap(), json!({ "type": "login", "user": "ada" }));
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct EventObject {
    #[serde(rename = "type")]
    event_type: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

/// Actions share the event object shape; both are tagged field mappings.
pub type ActionObject = EventObject;

impl EventObject {
    /// Create a tagged object from a discriminant and payload fields.
    ///
    /// The tag always wins: a stray `type` entry in `fields` is discarded
    /// so the discriminant can never be shadowed by payload data.
    pub fn new(event_type: impl Into<String>, mut fields: Map<String, Value>) -> Self {
        fields.remove(TYPE_KEY);
        Self {
            event_type: event_type.into(),
            fields,
        }
    }

    /// Create a tagged object with no payload fields.
    ///
    /// ```rust
    /// use statemodel::EventObject;
    ///
    /// let event = EventObject::of_type("logout");
    /// assert_eq!(event.event_type(), "logout");
    /// assert!(event.fields().is_empty());
    /// ```
    pub fn of_type(event_type: impl Into<String>) -> Self {
        Self::new(event_type, Map::new())
    }

    /// The discriminant tag.
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Look up a single payload field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// All payload fields, excluding the tag.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// Human-readable kind of a JSON value, for diagnostics.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(entries: &[(&str, Value)]) -> Map<String, Value> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn tag_and_fields_are_exposed() {
        let event = EventObject::new("increment", payload(&[("by", json!(5))]));

        assert_eq!(event.event_type(), "increment");
        assert_eq!(event.get("by"), Some(&json!(5)));
        assert_eq!(event.get("missing"), None);
        assert_eq!(event.fields().len(), 1);
    }

    #[test]
    fn stray_type_entry_in_fields_is_discarded() {
        let event = EventObject::new(
            "increment",
            payload(&[("type", json!("spoofed")), ("by", json!(1))]),
        );

        assert_eq!(event.event_type(), "increment");
        assert_eq!(event.get("type"), None);
        assert_eq!(event.get("by"), Some(&json!(1)));
    }

    #[test]
    fn serializes_flat_with_type_key() {
        let event = EventObject::new("login", payload(&[("user", json!("ada"))]));

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value, json!({ "type": "login", "user": "ada" }));
    }

    #[test]
    fn deserializes_from_flat_form() {
        let event: EventObject =
            serde_json::from_value(json!({ "type": "login", "user": "ada", "attempt": 2 }))
                .unwrap();

        assert_eq!(event.event_type(), "login");
        assert_eq!(event.get("user"), Some(&json!("ada")));
        assert_eq!(event.get("attempt"), Some(&json!(2)));
    }

    #[test]
    fn round_trips_through_serde() {
        let event = EventObject::new("retry", payload(&[("attempt", json!(3))]));

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: EventObject = serde_json::from_str(&json).unwrap();

        assert_eq!(event, deserialized);
    }

    #[test]
    fn of_type_builds_payload_free_object() {
        let event = EventObject::of_type("logout");

        assert_eq!(event.event_type(), "logout");
        assert!(event.fields().is_empty());
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({ "type": "logout" })
        );
    }

    #[test]
    fn json_kind_names_every_variant() {
        assert_eq!(json_kind(&Value::Null), "null");
        assert_eq!(json_kind(&json!(true)), "a boolean");
        assert_eq!(json_kind(&json!(1)), "a number");
        assert_eq!(json_kind(&json!("x")), "a string");
        assert_eq!(json_kind(&json!([])), "an array");
        assert_eq!(json_kind(&json!({})), "an object");
    }
}
