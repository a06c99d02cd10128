//! Sequential replay of a task batch against the remote service.

use std::path::Path;
use std::sync::Arc;

use habitica::{ClientConfig, HabiticaClient, HabiticaError, TaskService};
use tracing::{debug, error, info, warn};

use crate::batch::ImportBatch;
use crate::config::{pace, ImportConfig};
use crate::error::ImportError;
use crate::summary::{RunSummary, TaskFailure};
use crate::tags::TagResolver;

/// Replays tasks one by one, resolving tags along the way.
pub struct TaskReplayer {
    service: Arc<dyn TaskService>,
    config: ImportConfig,
}

impl TaskReplayer {
    #[must_use]
    pub fn new(service: Arc<dyn TaskService>, config: ImportConfig) -> Self {
        Self { service, config }
    }

    /// Import every task in `batch`, in order.
    ///
    /// Fetches the account's tags once, then for each task resolves its tag
    /// names, drops unsupported fields, submits it and waits the configured
    /// delay. Rejected tasks are recorded in the summary and the loop moves
    /// on; a transport failure aborts the whole run.
    pub async fn import_batch(&self, batch: ImportBatch) -> Result<RunSummary, ImportError> {
        let total = batch.len();
        let resolver = TagResolver::new(self.service.as_ref(), self.config.request_delay);
        let mut registry = resolver.fetch_existing_tags().await?;
        let mut summary = RunSummary::new(total);

        info!(tasks = total, "Starting import");

        for (offset, task) in batch.into_iter().enumerate() {
            let index = offset + 1;

            let tags = match &task.tags {
                Some(names) => Some(resolver.ensure_tags(names, &mut registry).await?),
                None => None,
            };
            let new_task = task.into_new_task(tags);

            match self.service.create_task(&new_task).await {
                Ok(()) => {
                    info!(index, total, text = %new_task.text, "Added task");
                    summary.record_success();
                }
                Err(HabiticaError::Rejected { status, body }) => {
                    warn!(
                        index,
                        total,
                        text = %new_task.text,
                        status = %status,
                        body = %body,
                        "Failed to add task"
                    );
                    summary.record_failure(TaskFailure {
                        index,
                        text: new_task.text,
                        status,
                        body,
                    });
                }
                Err(e) => return Err(e.into()),
            }

            pace(self.config.request_delay).await;
        }

        summary.tags = registry;

        info!(
            attempted = summary.attempted,
            succeeded = summary.succeeded,
            tags = summary.tags.len(),
            "Import complete"
        );

        Ok(summary)
    }
}

/// Run a whole import: load the batch, connect, replay.
///
/// A missing input file is logged and yields `Ok(None)` without building a
/// client, so no request is ever sent.
pub async fn run(
    config: ImportConfig,
    client_config: ClientConfig,
) -> Result<Option<RunSummary>, ImportError> {
    let batch = match ImportBatch::load(&config.input) {
        Ok(batch) => batch,
        Err(ImportError::MissingInput(path)) => {
            error!(path = %path.display(), "File not found");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };
    info!(
        count = batch.len(),
        file = %file_name(&config.input),
        "Found tasks"
    );

    let client = HabiticaClient::new(client_config)?;
    debug!(base_url = client.base_url(), "Habitica client ready");

    let replayer = TaskReplayer::new(Arc::new(client), config);
    replayer.import_batch(batch).await.map(Some)
}

fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
