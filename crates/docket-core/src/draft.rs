use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  warn
};

use crate::config::DraftDefaults;
use crate::task::{
  Label,
  Priority,
  Task
};

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct Draft {
  pub title:       String,
  pub description: String,
  pub priority:    Priority,
  pub label:       Label,
  pub editing:     Option<u64>
}

impl Draft {
  pub fn new(
    defaults: DraftDefaults
  ) -> Self {
    Self {
      title:       String::new(),
      description: String::new(),
      priority:    defaults.priority,
      label:       defaults.label,
      editing:     None
    }
  }

  pub fn reset(
    &mut self,
    defaults: DraftDefaults
  ) {
    *self = Self::new(defaults);
  }

  pub fn is_editing(&self) -> bool {
    self.editing.is_some()
  }

  pub fn begin_edit(
    &mut self,
    task: &Task
  ) {
    if let Some(previous) =
      self.editing
    {
      debug!(
        previous,
        next = task.id,
        "replacing pending edit"
      );
    }

    self.title = task.title.clone();
    self.description =
      task.description.clone();
    self.priority = task.priority;
    self.label = task.label;
    self.editing = Some(task.id);
    debug!(
      task = task.id,
      "draft entered edit mode"
    );
  }

  pub fn cancel_edit(
    &mut self,
    defaults: DraftDefaults
  ) {
    if self.editing.is_none() {
      warn!(
        "cancel edit with no pending \
         edit"
      );
      return;
    }

    debug!(
      task = self.editing,
      "abandoned pending edit"
    );
    self.reset(defaults);
  }
}
