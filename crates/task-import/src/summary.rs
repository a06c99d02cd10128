//! Run summary and final report.

use std::fmt;

use habitica::StatusCode;

use crate::tags::TagRegistry;

/// A task the service refused to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFailure {
    /// 1-based position in the batch.
    pub index: usize,
    pub text: String,
    pub status: StatusCode,
    pub body: String,
}

/// Outcome of one import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Tasks in the batch.
    pub total: usize,
    /// Tasks submitted.
    pub attempted: usize,
    /// Tasks the service accepted.
    pub succeeded: usize,
    /// Rejected tasks in batch order.
    pub failures: Vec<TaskFailure>,
    /// Every tag known at the end of the run, existing and newly created.
    pub tags: TagRegistry,
}

impl RunSummary {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub(crate) fn record_success(&mut self) {
        self.attempted += 1;
        self.succeeded += 1;
    }

    pub(crate) fn record_failure(&mut self, failure: TaskFailure) {
        self.attempted += 1;
        self.failures.push(failure);
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.attempted - self.succeeded
    }

    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} / {} tasks imported", self.succeeded, self.total)?;

        if !self.failures.is_empty() {
            writeln!(f)?;
            writeln!(f, "Failed tasks:")?;
            for failure in &self.failures {
                writeln!(
                    f,
                    "  [{}/{}] {} ({})",
                    failure.index, self.total, failure.text, failure.status
                )?;
            }
        }

        if !self.tags.is_empty() {
            writeln!(f)?;
            writeln!(f, "Tag Summary:")?;
            for (name, id) in self.tags.iter() {
                if self.tags.is_created(name.as_str()) {
                    writeln!(f, "  • {name}: {id} (new)")?;
                } else {
                    writeln!(f, "  • {name}: {id}")?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use habitica::{TagId, TagName};

    #[test]
    fn test_counts() {
        let mut summary = RunSummary::new(3);
        summary.record_success();
        summary.record_failure(TaskFailure {
            index: 2,
            text: "B".to_string(),
            status: StatusCode::BAD_REQUEST,
            body: String::new(),
        });
        summary.record_success();

        assert_eq!(summary.attempted, 3);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed(), 1);
        assert!(!summary.all_succeeded());
    }

    #[test]
    fn test_display_lists_failures_and_tags() {
        let mut tags = TagRegistry::new();
        tags.insert(TagName::new("work"), TagId::new("w-1"));
        tags.insert_created(TagName::new("health"), TagId::new("h-9"));

        let summary = RunSummary {
            total: 3,
            attempted: 3,
            succeeded: 2,
            failures: vec![TaskFailure {
                index: 2,
                text: "Pay rent".to_string(),
                status: StatusCode::BAD_REQUEST,
                body: "bad".to_string(),
            }],
            tags,
        };

        let expected = "2 / 3 tasks imported\n\
                        \n\
                        Failed tasks:\n  \
                        [2/3] Pay rent (400 Bad Request)\n\
                        \n\
                        Tag Summary:\n  \
                        • health: h-9 (new)\n  \
                        • work: w-1\n";
        assert_eq!(summary.to_string(), expected);
    }

    #[test]
    fn test_display_without_tags() {
        let mut summary = RunSummary::new(1);
        summary.record_success();
        assert_eq!(summary.to_string(), "1 / 1 tasks imported\n");
    }

    #[test]
    fn test_failure_lines_use_batch_total() {
        let mut summary = RunSummary::new(5);
        summary.record_failure(TaskFailure {
            index: 1,
            text: "Early".to_string(),
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: String::new(),
        });

        let report = summary.to_string();

        assert!(report.starts_with("0 / 5 tasks imported\n"));
        assert!(report.contains("  [1/5] Early (422 Unprocessable Entity)\n"));
    }
}
