//! In-memory `TaskService` used by unit tests.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use habitica::{HabiticaError, NewTask, StatusCode, Tag, TagId, TagName, TaskService};

#[derive(Default)]
struct FakeState {
    existing: Vec<Tag>,
    list_rejection: Option<StatusCode>,
    rejected_tags: HashSet<String>,
    rejected_tasks: HashSet<String>,
    broken_tasks: HashSet<String>,
    list_calls: usize,
    tag_creates: Vec<TagName>,
    submitted: Vec<NewTask>,
}

/// Records every call and answers from canned state.
#[derive(Default)]
pub(crate) struct FakeService {
    state: Mutex<FakeState>,
}

impl FakeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_existing(self, tags: &[(&str, &str)]) -> Self {
        self.state.lock().unwrap().existing = tags
            .iter()
            .map(|(name, id)| Tag {
                id: TagId::new(*id),
                name: TagName::new(*name),
            })
            .collect();
        self
    }

    pub fn reject_tag_list(self, status: StatusCode) -> Self {
        self.state.lock().unwrap().list_rejection = Some(status);
        self
    }

    pub fn reject_tag(self, name: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .rejected_tags
            .insert(name.to_string());
        self
    }

    pub fn reject_task(self, text: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .rejected_tasks
            .insert(text.to_string());
        self
    }

    /// Submitting a task with this text fails below the HTTP status level.
    pub fn break_task(self, text: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .broken_tasks
            .insert(text.to_string());
        self
    }

    pub fn list_calls(&self) -> usize {
        self.state.lock().unwrap().list_calls
    }

    pub fn tag_creates(&self) -> Vec<TagName> {
        self.state.lock().unwrap().tag_creates.clone()
    }

    pub fn submitted(&self) -> Vec<NewTask> {
        self.state.lock().unwrap().submitted.clone()
    }
}

/// A non-rejection error, standing in for a dropped connection.
fn transport_failure() -> HabiticaError {
    match serde_json::from_str::<serde_json::Value>("") {
        Err(e) => HabiticaError::Decode(e),
        Ok(_) => unreachable!("empty input never parses"),
    }
}

#[async_trait]
impl TaskService for FakeService {
    async fn list_tags(&self) -> Result<Vec<Tag>, HabiticaError> {
        let mut state = self.state.lock().unwrap();
        state.list_calls += 1;
        match state.list_rejection {
            Some(status) => Err(HabiticaError::Rejected {
                status,
                body: "tags unavailable".to_string(),
            }),
            None => Ok(state.existing.clone()),
        }
    }

    async fn create_tag(&self, name: &TagName) -> Result<TagId, HabiticaError> {
        let mut state = self.state.lock().unwrap();
        state.tag_creates.push(name.clone());
        if state.rejected_tags.contains(name.as_str()) {
            return Err(HabiticaError::Rejected {
                status: StatusCode::BAD_REQUEST,
                body: format!("cannot create {name}"),
            });
        }
        Ok(TagId::new(format!("id-{name}-{}", state.tag_creates.len())))
    }

    async fn create_task(&self, task: &NewTask) -> Result<(), HabiticaError> {
        let mut state = self.state.lock().unwrap();
        if state.broken_tasks.contains(&task.text) {
            return Err(transport_failure());
        }
        state.submitted.push(task.clone());
        if state.rejected_tasks.contains(&task.text) {
            return Err(HabiticaError::Rejected {
                status: StatusCode::BAD_REQUEST,
                body: "task validation failed".to_string(),
            });
        }
        Ok(())
    }
}
