use tracing::trace;

use crate::task::{
  Label,
  Priority,
  Task
};

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub enum CompletionFilter {
  #[default]
  All,
  Completed,
  Incomplete
}

impl CompletionFilter {
  pub fn all() -> [Self; 3] {
    [
      Self::All,
      Self::Completed,
      Self::Incomplete
    ]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::All => "all",
      | Self::Completed => "completed",
      | Self::Incomplete => {
        "incomplete"
      }
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::All => "All",
      | Self::Completed => "Completed",
      | Self::Incomplete => {
        "Incomplete"
      }
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key {
      | "all" => Some(Self::All),
      | "completed" => {
        Some(Self::Completed)
      }
      | "incomplete" => {
        Some(Self::Incomplete)
      }
      | _ => None
    }
  }

  fn matches(
    self,
    task: &Task
  ) -> bool {
    match self {
      | Self::All => true,
      | Self::Completed => {
        task.completed()
      }
      | Self::Incomplete => {
        !task.completed()
      }
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub struct Criteria {
  pub priority:   Option<Priority>,
  pub label:      Option<Label>,
  pub completion: CompletionFilter
}

impl Criteria {
  pub fn is_unfiltered(&self) -> bool {
    self.priority.is_none()
      && self.label.is_none()
      && self.completion
        == CompletionFilter::All
  }

  pub fn matches(
    &self,
    task: &Task
  ) -> bool {
    let priority_match = self
      .priority
      .is_none_or(|wanted| {
        task.priority == wanted
      });
    let label_match = self
      .label
      .is_none_or(|wanted| {
        task.label == wanted
      });

    priority_match
      && label_match
      && self.completion.matches(task)
  }
}

pub fn apply(
  tasks: &[Task],
  criteria: &Criteria
) -> Vec<Task> {
  let visible: Vec<Task> = tasks
    .iter()
    .filter(|task| {
      criteria.matches(task)
    })
    .cloned()
    .collect();

  trace!(
    total = tasks.len(),
    visible = visible.len(),
    "applied filter criteria"
  );

  visible
}
