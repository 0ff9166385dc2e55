//! Saved-query catalog decoded from the `/api/queries` payload.
//!
//! The payload is a JSON object mapping a query's display label to its
//! underlying value. Entry order follows the payload's own key order
//! (`serde_json` is built with `preserve_order`), and JSON text decoding
//! only ever yields a document's own keys, so nothing inherited can leak in.

use serde_json::Value;

use crate::error::PopulateError;

/// One dropdown option to be: visible label plus underlying value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryEntry {
    pub label: String,
    pub value: String,
}

/// Ordered label/value entries decoded from the endpoint's response body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryCatalog {
    entries: Vec<QueryEntry>,
}

impl QueryCatalog {
    /// Decode a response body. A parse failure or a non-object document is a
    /// request failure; the catalog is never partially built.
    pub fn from_json(body: &str) -> Result<Self, PopulateError> {
        let doc: Value = serde_json::from_str(body).map_err(|e| PopulateError::RequestFailed {
            status: None,
            detail: format!("body is not valid JSON: {e}"),
        })?;

        let Value::Object(map) = doc else {
            return Err(PopulateError::RequestFailed {
                status: None,
                detail: "body is not a JSON object".to_string(),
            });
        };

        let entries = map
            .into_iter()
            .map(|(label, value)| QueryEntry {
                value: coerce_value(value),
                label,
            })
            .collect();

        Ok(Self { entries })
    }

    pub fn entries(&self) -> impl Iterator<Item = &QueryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Option values are strings; scalars render as their JSON text, compound
/// values as compact JSON.
fn coerce_value(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PopulateError;

    #[test]
    fn alpha_beta_scenario_yields_two_ordered_entries() {
        let cat = QueryCatalog::from_json(r#"{"Alpha": "a1", "Beta": "b2"}"#).unwrap();
        assert_eq!(cat.len(), 2);

        let entries: Vec<QueryEntry> = cat.entries().cloned().collect();
        assert_eq!(
            entries[0],
            QueryEntry {
                label: "Alpha".to_string(),
                value: "a1".to_string()
            }
        );
        assert_eq!(
            entries[1],
            QueryEntry {
                label: "Beta".to_string(),
                value: "b2".to_string()
            }
        );
    }

    #[test]
    fn entry_order_follows_payload_key_order() {
        // Deliberately non-alphabetical so a sorted map would be caught.
        let cat =
            QueryCatalog::from_json(r#"{"Zeta": "z9", "Alpha": "a1", "Mid": "m5"}"#).unwrap();
        let labels: Vec<&str> = cat.entries().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn one_entry_per_payload_key() {
        let cat = QueryCatalog::from_json(
            r#"{"a": "1", "b": "2", "c": "3", "d": "4", "e": "5"}"#,
        )
        .unwrap();
        assert_eq!(cat.len(), 5);
    }

    #[test]
    fn empty_object_yields_no_entries() {
        let cat = QueryCatalog::from_json("{}").unwrap();
        assert!(cat.is_empty());
        assert_eq!(cat.entries().count(), 0);
    }

    #[test]
    fn scalar_values_coerce_to_strings() {
        let cat = QueryCatalog::from_json(
            r#"{"int": 42, "float": 1.5, "flag": true, "none": null}"#,
        )
        .unwrap();
        let values: Vec<&str> = cat.entries().map(|e| e.value.as_str()).collect();
        assert_eq!(values, ["42", "1.5", "true", "null"]);
    }

    #[test]
    fn compound_values_coerce_to_compact_json() {
        let cat = QueryCatalog::from_json(r#"{"list": [1, 2], "obj": {"k": "v"}}"#).unwrap();
        let values: Vec<&str> = cat.entries().map(|e| e.value.as_str()).collect();
        assert_eq!(values, ["[1,2]", r#"{"k":"v"}"#]);
    }

    #[test]
    fn invalid_json_is_a_request_failure() {
        let err = QueryCatalog::from_json("not json at all").unwrap_err();
        assert!(matches!(
            err,
            PopulateError::RequestFailed { status: None, .. }
        ));
    }

    #[test]
    fn non_object_documents_are_request_failures() {
        for body in [r#"["a", "b"]"#, r#""just a string""#, "3", "true", "null"] {
            let err = QueryCatalog::from_json(body).unwrap_err();
            assert!(
                matches!(err, PopulateError::RequestFailed { status: None, .. }),
                "expected request failure for body {body:?}"
            );
        }
    }
}
