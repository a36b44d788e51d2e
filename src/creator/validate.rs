//! Runtime validation of creator return values.

use crate::core::{json_kind, TYPE_KEY};
use crate::creator::{CreatorError, CreatorKind};
use serde_json::{Map, Value};

/// Check a creator's raw return value against the creator contract.
///
/// The value must be a JSON object and must not carry a `type` entry; the
/// discriminant belongs to the registry key alone. On success the payload
/// fields pass through unchanged.
///
/// This is a pure check with no side effects.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use statemodel::{validate_payload, CreatorError, CreatorKind};
///
/// let fields = validate_payload(CreatorKind::Event, "login", json!({ "user": "ada" })).unwrap();
/// assert_eq!(fields.get("user"), Some(&json!("ada")));
///
/// let err = validate_payload(CreatorKind::Event, "login", json!({ "type": "login" }));
/// assert!(matches!(err, Err(CreatorError::ReservedTypeField { .. })));
/// ```
pub fn validate_payload(
    kind: CreatorKind,
    key: &str,
    raw: Value,
) -> Result<Map<String, Value>, CreatorError> {
    match raw {
        Value::Object(fields) => {
            if fields.contains_key(TYPE_KEY) {
                return Err(CreatorError::ReservedTypeField {
                    kind,
                    key: key.to_string(),
                });
            }
            Ok(fields)
        }
        other => Err(CreatorError::NotAnObject {
            kind,
            key: key.to_string(),
            found: json_kind(&other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_object_passes_through_unchanged() {
        let fields =
            validate_payload(CreatorKind::Event, "login", json!({ "user": "ada", "mfa": true }))
                .unwrap();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("user"), Some(&json!("ada")));
        assert_eq!(fields.get("mfa"), Some(&json!(true)));
    }

    #[test]
    fn empty_object_is_a_valid_payload() {
        let fields = validate_payload(CreatorKind::Action, "noop", json!({})).unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn type_entry_is_a_contract_violation() {
        let result = validate_payload(
            CreatorKind::Event,
            "login",
            json!({ "type": "login", "user": "ada" }),
        );

        assert_eq!(
            result,
            Err(CreatorError::ReservedTypeField {
                kind: CreatorKind::Event,
                key: "login".to_string(),
            })
        );
    }

    #[test]
    fn primitives_and_arrays_are_rejected() {
        for (raw, found) in [
            (Value::Null, "null"),
            (json!(true), "a boolean"),
            (json!(42), "a number"),
            (json!("payload"), "a string"),
            (json!([1, 2, 3]), "an array"),
        ] {
            let result = validate_payload(CreatorKind::Action, "broken", raw);
            assert_eq!(
                result,
                Err(CreatorError::NotAnObject {
                    kind: CreatorKind::Action,
                    key: "broken".to_string(),
                    found,
                })
            );
        }
    }

    #[test]
    fn error_messages_name_the_contract() {
        let err = validate_payload(CreatorKind::Event, "login", json!(1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "An event creator must return an object (got a number)"
        );

        let err =
            validate_payload(CreatorKind::Action, "save", json!({ "type": "save" })).unwrap_err();
        assert_eq!(
            err.to_string(),
            "An action creator can't return an object with a type property"
        );
    }
}
