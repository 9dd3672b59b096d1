//! Audience segments offered by the remote platform.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named audience list a contact can be subscribed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub id: String,
    pub name: String,
}

impl Segment {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Reads one element of the `data` array.
    ///
    /// Returns `None` unless both `id` and `name` are present. Numeric ids
    /// are accepted and kept in their decimal form.
    pub fn from_json(element: &Value) -> Option<Self> {
        let id = match element.get("id")? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        let name = match element.get("name")? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        Some(Self { id, name })
    }

    /// Extracts every well-formed segment from a list response body.
    ///
    /// Anything other than `{ "data": [ ... ] }` yields an empty list.
    pub fn list_from_response(body: &Value) -> Vec<Self> {
        body.get("data")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Segment::from_json).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn elements_missing_keys_are_skipped() {
        let body = json!({"data": [{"id": "1", "name": "A"}, {"foo": "bar"}]});
        let segments = Segment::list_from_response(&body);
        assert_eq!(segments, vec![Segment::new("1", "A")]);
    }

    #[test]
    fn numeric_ids_are_stringified() {
        let body = json!({"data": [{"id": 42, "name": "Donors"}]});
        let segments = Segment::list_from_response(&body);
        assert_eq!(segments, vec![Segment::new("42", "Donors")]);
    }

    #[test]
    fn element_with_only_id_is_skipped() {
        let body = json!({"data": [{"id": "7"}, {"name": "orphan"}]});
        assert!(Segment::list_from_response(&body).is_empty());
    }

    #[test]
    fn non_list_shapes_yield_nothing() {
        assert!(Segment::list_from_response(&json!({})).is_empty());
        assert!(Segment::list_from_response(&json!({"data": {"id": "1"}})).is_empty());
        assert!(Segment::list_from_response(&json!([{"id": "1", "name": "A"}])).is_empty());
        assert!(Segment::list_from_response(&json!(null)).is_empty());
    }

    #[test]
    fn null_id_is_skipped() {
        let body = json!({"data": [{"id": null, "name": "A"}]});
        assert!(Segment::list_from_response(&body).is_empty());
    }
}
