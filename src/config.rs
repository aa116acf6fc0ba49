//! Loading the criteria preset bank from TOML.
//!
//! See `CriteriaConfig` for the expected schema.

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::Criteria;
use crate::state::Preset;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct CriteriaConfig {
  #[serde(default)]
  pub presets: Vec<PresetCfg>,
}

/// Preset entry accepted in TOML configuration. `criteria` carries the same
/// shape the editor persists: a tagged table with `type` plus the fields of
/// that strategy.
#[derive(Clone, Debug, Deserialize)]
pub struct PresetCfg {
  pub name: String,
  pub criteria: toml::Value,
}

impl CriteriaConfig {
  /// Convert config entries into presets, skipping entries whose criteria
  /// do not deserialize. Bad entries are logged, never fatal.
  pub fn into_presets(self) -> Vec<Preset> {
    let mut out = Vec::new();
    for entry in self.presets {
      match entry.criteria.try_into::<Criteria>() {
        Ok(criteria) => out.push(Preset { name: entry.name, criteria }),
        Err(e) => {
          error!(target: "lessonsmith_backend", name = %entry.name, error = %e, "Skipping preset: bad criteria");
        }
      }
    }
    out
  }
}

/// Attempt to load `CriteriaConfig` from CRITERIA_CONFIG_PATH. On any
/// parsing/IO error, returns None.
pub fn load_criteria_config_from_env() -> Option<CriteriaConfig> {
  let path = std::env::var("CRITERIA_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<CriteriaConfig>(&s) {
      Ok(cfg) => {
        info!(target: "lessonsmith_backend", %path, "Loaded criteria config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "lessonsmith_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "lessonsmith_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn presets_parse_from_toml() {
    let cfg: CriteriaConfig = toml::from_str(
      r#"
      [[presets]]
      name = "sum"
      [presets.criteria]
      type = "function_call"
      function_name = "add_numbers"
      args = [2, 3]
      expected = 5
      "#,
    )
    .expect("config");
    let presets = cfg.into_presets();
    assert_eq!(presets.len(), 1);
    assert_eq!(
      presets[0].criteria,
      Criteria::FunctionCall {
        function_name: "add_numbers".into(),
        args: vec![json!(2), json!(3)],
        expected: json!(5),
      }
    );
  }

  #[test]
  fn bad_criteria_entries_are_skipped() {
    let cfg: CriteriaConfig = toml::from_str(
      r#"
      [[presets]]
      name = "broken"
      [presets.criteria]
      type = "regex"
      pattern = ".*"

      [[presets]]
      name = "ok"
      [presets.criteria]
      type = "contains"
      expected = "Hello"
      "#,
    )
    .expect("config");
    let presets = cfg.into_presets();
    assert_eq!(presets.len(), 1);
    assert_eq!(presets[0].name, "ok");
  }
}
