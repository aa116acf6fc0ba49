//! Built-in example criteria so the editor is useful without any config.

use serde_json::json;

use crate::domain::Criteria;
use crate::state::Preset;

/// Minimal set of presets covering each validation strategy.
pub fn seed_presets() -> Vec<Preset> {
  vec![
    Preset {
      name: "hello-world-output".into(),
      criteria: Criteria::ExactMatch { expected: "Hello, World!".into() },
    },
    Preset {
      name: "greeting-anywhere".into(),
      criteria: Criteria::Contains { expected: "Hello".into() },
    },
    Preset {
      name: "add-numbers".into(),
      criteria: Criteria::FunctionCall {
        function_name: "add_numbers".into(),
        args: vec![json!(2), json!(3)],
        expected: json!(5),
      },
    },
  ]
}
