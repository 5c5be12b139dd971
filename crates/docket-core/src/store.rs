use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::config::DraftDefaults;
use crate::draft::Draft;
use crate::task::Task;

#[derive(Debug, Clone, PartialEq)]
pub struct TaskBoard {
    tasks: Vec<Task>,
    next_id: u64,
    defaults: DraftDefaults,
}

impl TaskBoard {
    pub fn new(defaults: DraftDefaults) -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            defaults,
        }
    }

    pub fn blank_draft(&self) -> Draft {
        Draft::new(self.defaults)
    }

    pub fn defaults(&self) -> DraftDefaults {
        self.defaults
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    #[tracing::instrument(skip(self, draft, now))]
    pub fn add(&mut self, draft: &Draft, now: DateTime<Utc>) -> Option<Task> {
        if draft.title.trim().is_empty() {
            warn!("ignored add with empty title");
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;

        let task = Task::from_draft(draft, now, id);
        info!(id, title = %task.title, "added task");
        self.tasks.push(task.clone());
        Some(task)
    }

    #[tracing::instrument(skip(self, draft))]
    pub fn update(&mut self, id: u64, draft: &Draft) -> bool {
        let title = draft.title.trim();
        if title.is_empty() {
            warn!(id, "ignored update with empty title");
            return false;
        }

        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            warn!(id, "update target not found");
            return false;
        };

        task.title = title.to_string();
        task.description = draft.description.clone();
        task.priority = draft.priority;
        task.label = draft.label;
        info!(id, "updated task");
        true
    }

    #[tracing::instrument(skip(self, now))]
    pub fn complete(&mut self, id: u64, now: DateTime<Utc>) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            warn!(id, "complete target not found");
            return false;
        };

        if task.completed_at.is_some() {
            // the first completion timestamp is kept
            debug!(id, "task already completed");
            return false;
        }

        task.completed_at = Some(now);
        info!(id, "completed task");
        true
    }

    #[tracing::instrument(skip(self))]
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);

        if self.tasks.len() == before {
            warn!(id, "remove target not found");
            return false;
        }

        info!(id, remaining = self.tasks.len(), "removed task");
        true
    }

    #[tracing::instrument(skip(self, draft, now))]
    pub fn commit(&mut self, draft: &mut Draft, now: DateTime<Utc>) -> Option<Task> {
        match draft.editing {
            Some(id) => {
                if self.update(id, draft) {
                    let committed = self.get(id).cloned();
                    draft.reset(self.defaults);
                    return committed;
                }

                if self.get(id).is_none() {
                    // the edited task is gone; the stale edit marker goes with it
                    draft.reset(self.defaults);
                }

                None
            }
            None => {
                let added = self.add(draft, now);
                if added.is_some() {
                    draft.reset(self.defaults);
                }
                added
            }
        }
    }
}
