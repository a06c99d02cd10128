//! Tag name to id resolution.
//!
//! The registry fetched at the start of a run is the source of truth. Tags
//! created during the run are folded back into it immediately, so a name that
//! appears on many tasks is created at most once and names that already exist
//! on the account are never created again.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use habitica::{HabiticaError, Tag, TagId, TagName, TaskService};
use tracing::{debug, info, warn};

use crate::config::pace;
use crate::error::ImportError;

/// Mapping from tag name to server id for the duration of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRegistry {
    tags: BTreeMap<TagName, TagId>,
    created: BTreeSet<TagName>,
}

impl TagRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TagId> {
        self.tags.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    /// Record a tag that already exists on the account.
    pub fn insert(&mut self, name: TagName, id: TagId) -> Option<TagId> {
        self.tags.insert(name, id)
    }

    /// Record a tag created during this run.
    pub fn insert_created(&mut self, name: TagName, id: TagId) {
        self.created.insert(name.clone());
        self.tags.insert(name, id);
    }

    /// Whether `name` was created during this run.
    #[must_use]
    pub fn is_created(&self, name: &str) -> bool {
        self.created.contains(name)
    }

    /// Names created during this run, sorted.
    pub fn created(&self) -> impl Iterator<Item = &TagName> {
        self.created.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// All known pairs, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&TagName, &TagId)> {
        self.tags.iter()
    }
}

impl FromIterator<Tag> for TagRegistry {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut registry = Self::new();
        for tag in iter {
            registry.insert(tag.name, tag.id);
        }
        registry
    }
}

/// Resolves tag names against the remote service, creating missing tags.
pub struct TagResolver<'a> {
    service: &'a dyn TaskService,
    request_delay: Duration,
}

impl<'a> TagResolver<'a> {
    #[must_use]
    pub fn new(service: &'a dyn TaskService, request_delay: Duration) -> Self {
        Self {
            service,
            request_delay,
        }
    }

    /// Read every tag currently on the account.
    ///
    /// A rejected request degrades to an empty registry, so every tag in the
    /// batch will be treated as new.
    pub async fn fetch_existing_tags(&self) -> Result<TagRegistry, ImportError> {
        match self.service.list_tags().await {
            Ok(tags) => {
                let registry: TagRegistry = tags.into_iter().collect();
                info!(count = registry.len(), "Found existing tags");
                Ok(registry)
            }
            Err(HabiticaError::Rejected { status, body }) => {
                warn!(
                    status = %status,
                    body = %body,
                    "Could not fetch existing tags, every tag will be created"
                );
                Ok(TagRegistry::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Resolve one name, creating the tag when the registry lacks it.
    ///
    /// Returns `None` when the service rejects the create; the caller drops
    /// the tag and carries on.
    pub async fn ensure_tag(
        &self,
        name: &TagName,
        registry: &mut TagRegistry,
    ) -> Result<Option<TagId>, ImportError> {
        if let Some(id) = registry.get(name.as_str()) {
            debug!(tag = %name, id = %id, "Tag already known");
            return Ok(Some(id.clone()));
        }

        let created = match self.service.create_tag(name).await {
            Ok(id) => Some(id),
            Err(HabiticaError::Rejected { status, body }) => {
                warn!(tag = %name, status = %status, body = %body, "Failed to create tag");
                None
            }
            Err(e) => return Err(e.into()),
        };
        pace(self.request_delay).await;

        if let Some(id) = &created {
            info!(tag = %name, id = %id, "Created tag");
            registry.insert_created(name.clone(), id.clone());
        }
        Ok(created)
    }

    /// Resolve names in order, skipping any that could not be resolved.
    pub async fn ensure_tags(
        &self,
        names: &[TagName],
        registry: &mut TagRegistry,
    ) -> Result<Vec<TagId>, ImportError> {
        let mut ids = Vec::with_capacity(names.len());
        for name in names {
            if let Some(id) = self.ensure_tag(name, registry).await? {
                ids.push(id);
            }
        }
        Ok(ids)
    }
}
