use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::draft::Draft;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn all() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    #[default]
    Personal,
    Work,
    Study,
    Others,
}

impl Label {
    pub fn all() -> [Self; 4] {
        [Self::Personal, Self::Work, Self::Study, Self::Others]
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Work => "work",
            Self::Study => "study",
            Self::Others => "others",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Work => "Work",
            Self::Study => "Study",
            Self::Others => "Others",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "personal" => Some(Self::Personal),
            "work" => Some(Self::Work),
            "study" => Some(Self::Study),
            "others" => Some(Self::Others),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: u64,

    pub title: String,

    #[serde(default)]
    pub description: String,

    pub priority: Priority,

    pub label: Label,

    pub added_at: DateTime<Utc>,

    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn from_draft(draft: &Draft, now: DateTime<Utc>, id: u64) -> Self {
        Self {
            id,
            title: draft.title.trim().to_string(),
            description: draft.description.clone(),
            priority: draft.priority,
            label: draft.label,
            added_at: now,
            completed_at: None,
        }
    }

    pub fn completed(&self) -> bool {
        self.completed_at.is_some()
    }
}
