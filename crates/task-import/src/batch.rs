//! Task records and the import file they come from.

use std::path::Path;

use habitica::{NewTask, TagId, TagName};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ImportError;

/// Fields present in exports that `POST /tasks/user` does not accept.
pub const UNSUPPORTED_FIELDS: &[&str] = &["difficulty_label"];

/// One task record from the export.
///
/// `text` is required. `tags` holds the tag names when the record carries a
/// list of strings; any other `tags` value (null, a bare string, a mixed
/// array) stays in `attributes` with everything else and is forwarded
/// untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawTask")]
pub struct Task {
    pub text: String,
    pub tags: Option<Vec<TagName>>,
    pub attributes: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawTask {
    text: String,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

impl From<RawTask> for Task {
    fn from(raw: RawTask) -> Self {
        let mut attributes = raw.attributes;
        let tags = match attributes.remove("tags") {
            Some(Value::Array(items)) if items.iter().all(Value::is_string) => Some(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(name) => Some(TagName::new(name)),
                        _ => None,
                    })
                    .collect(),
            ),
            Some(other) => {
                debug!(
                    text = %raw.text,
                    tags = %other,
                    "Tags are not a list of names, forwarding as-is"
                );
                attributes.insert("tags".to_string(), other);
                None
            }
            None => None,
        };

        Self {
            text: raw.text,
            tags,
            attributes,
        }
    }
}

impl Task {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tags: None,
            attributes: Map::new(),
        }
    }

    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TagName>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Build the submission body from resolved tag ids.
    ///
    /// `tags` replaces the tag names; unsupported fields are dropped. With
    /// `tags` of `None`, a non-list `tags` attribute is sent unchanged.
    #[must_use]
    pub fn into_new_task(self, tags: Option<Vec<TagId>>) -> NewTask {
        let mut attributes = self.attributes;
        if tags.is_some() {
            attributes.remove("tags");
        }
        for field in UNSUPPORTED_FIELDS {
            if attributes.remove(*field).is_some() {
                debug!(field, text = %self.text, "Dropped unsupported field");
            }
        }

        NewTask {
            text: self.text,
            tags,
            attributes,
        }
    }
}

/// Ordered list of tasks read from one export file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportBatch {
    tasks: Vec<Task>,
}

#[derive(Deserialize)]
struct ExportDocument {
    #[serde(default)]
    data: ExportData,
}

#[derive(Default, Deserialize)]
struct ExportData {
    #[serde(default)]
    tasks: Vec<Task>,
}

impl ImportBatch {
    /// Load a batch from an export file.
    ///
    /// A missing file is reported as [`ImportError::MissingInput`] before
    /// anything else is attempted.
    pub fn load(path: &Path) -> Result<Self, ImportError> {
        if !path.exists() {
            return Err(ImportError::MissingInput(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| ImportError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&content).map_err(|source| ImportError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a batch from export JSON. Missing `data` or `data.tasks` yields
    /// an empty batch.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let document: ExportDocument = serde_json::from_str(json)?;
        Ok(Self {
            tasks: document.data.tasks,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

impl From<Vec<Task>> for ImportBatch {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl IntoIterator for ImportBatch {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.into_iter()
    }
}
