use anyhow::Context;
use serde::Deserialize;
use tracing::debug;

use crate::task::{
  Label,
  Priority
};

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct BoardConfig {
  #[serde(default)]
  pub version:  u32,
  #[serde(default)]
  pub defaults: DraftDefaults
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Deserialize,
)]
pub struct DraftDefaults {
  #[serde(default)]
  pub priority: Priority,
  #[serde(default)]
  pub label:    Label
}

impl Default for BoardConfig {
  fn default() -> Self {
    Self {
      version:  1,
      defaults:
        DraftDefaults::default()
    }
  }
}

impl Default for DraftDefaults {
  fn default() -> Self {
    Self {
      priority: Priority::default(),
      label:    Label::default()
    }
  }
}

#[tracing::instrument(skip(raw))]
pub fn from_toml_str(
  raw: &str
) -> anyhow::Result<BoardConfig> {
  let config: BoardConfig =
    toml::from_str(raw).context(
      "failed parsing board config"
    )?;

  debug!(
    version = config.version,
    priority = config
      .defaults
      .priority
      .as_key(),
    label =
      config.defaults.label.as_key(),
    "parsed board config"
  );

  Ok(config)
}

#[cfg(test)]
mod tests {
  use super::{
    BoardConfig,
    from_toml_str
  };
  use crate::task::{
    Label,
    Priority
  };

  #[test]
  fn parses_declared_defaults() {
    let raw = r#"
            version = 1

            [defaults]
            priority = "medium"
            label = "work"
        "#;

    let config = from_toml_str(raw)
      .expect("config should parse");
    assert_eq!(
      config.defaults.priority,
      Priority::Medium
    );
    assert_eq!(
      config.defaults.label,
      Label::Work
    );
  }

  #[test]
  fn missing_sections_fall_back() {
    let config = from_toml_str("")
      .expect(
        "empty config should parse"
      );
    assert_eq!(
      config.defaults,
      BoardConfig::default().defaults
    );
    assert_eq!(
      config.defaults.priority,
      Priority::Low
    );
    assert_eq!(
      config.defaults.label,
      Label::Personal
    );
  }

  #[test]
  fn rejects_unknown_priority_key() {
    let raw = r#"
            [defaults]
            priority = "urgent"
        "#;

    assert!(
      from_toml_str(raw).is_err()
    );
  }
}
