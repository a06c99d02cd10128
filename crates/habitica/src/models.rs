//! Wire types for the Habitica API.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User-facing tag label. Compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagName(String);

impl TagName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TagName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TagName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for TagName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque server-assigned tag identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(String);

impl TagId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tag as returned by `GET /tags`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: TagName,
}

/// Body of `POST /tasks/user`.
///
/// Tags are identifiers only; the remaining attributes of the source record
/// are forwarded untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagId>>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Body of `POST /tags`.
#[derive(Debug, Serialize)]
pub(crate) struct NewTag<'a> {
    pub name: &'a str,
}

/// `data` payload of a successful `POST /tags`.
#[derive(Debug, Deserialize)]
pub(crate) struct CreatedTag {
    pub id: TagId,
}

/// Habitica wraps every response body in `{ "success": .., "data": .. }`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tag_list_ignores_extra_fields() {
        let body = json!({
            "success": true,
            "data": [
                { "id": "a1", "name": "health", "challenge": false },
                { "id": "b2", "name": "Work" }
            ]
        });
        let envelope: Envelope<Vec<Tag>> = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.data.len(), 2);
        assert_eq!(envelope.data[0].name.as_str(), "health");
        assert_eq!(envelope.data[1].id, TagId::new("b2"));
    }

    #[test]
    fn test_new_task_flattens_attributes() {
        let mut attributes = Map::new();
        attributes.insert("type".to_string(), json!("daily"));
        attributes.insert("priority".to_string(), json!(1.5));

        let task = NewTask {
            text: "Stretch".to_string(),
            tags: Some(vec![TagId::new("t-1")]),
            attributes,
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            json!({ "text": "Stretch", "tags": ["t-1"], "type": "daily", "priority": 1.5 })
        );
    }

    #[test]
    fn test_new_task_without_tags_omits_field() {
        let task = NewTask {
            text: "Read".to_string(),
            tags: None,
            attributes: Map::new(),
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value, json!({ "text": "Read" }));
    }
}
