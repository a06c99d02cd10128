//! Service trait implemented by the HTTP client.

use async_trait::async_trait;

use crate::error::HabiticaError;
use crate::models::{NewTask, Tag, TagId, TagName};

/// Operations an import needs from the remote task service.
#[async_trait]
pub trait TaskService: Send + Sync {
    /// List every tag on the account.
    async fn list_tags(&self) -> Result<Vec<Tag>, HabiticaError>;

    /// Create a tag and return the id the server assigned to it.
    async fn create_tag(&self, name: &TagName) -> Result<TagId, HabiticaError>;

    /// Create a task for the authenticated user.
    async fn create_task(&self, task: &NewTask) -> Result<(), HabiticaError>;
}
