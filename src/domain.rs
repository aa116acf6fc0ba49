//! Domain models for validation criteria: the strategy tag and the criteria
//! descriptor itself (the only shape persisted or transmitted).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which validation strategy applies to a lesson exercise?
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriteriaType {
  /// Submission output must equal the expected text exactly.
  ExactMatch,
  /// Submission output must contain the expected text somewhere.
  Contains,
  /// A named function is called with JSON arguments and must return the expected value.
  FunctionCall,
}

impl CriteriaType {
  /// Selector tag carried by the admin form's type selector.
  pub fn tag(&self) -> &'static str {
    match self {
      CriteriaType::ExactMatch => "exact_match",
      CriteriaType::Contains => "contains",
      CriteriaType::FunctionCall => "function_call",
    }
  }

  /// Parse a selector tag. `none`, the empty string, and anything
  /// unrecognized all mean "no validation" and map to `None`.
  pub fn from_tag(tag: &str) -> Option<Self> {
    match tag {
      "exact_match" => Some(CriteriaType::ExactMatch),
      "contains" => Some(CriteriaType::Contains),
      "function_call" => Some(CriteriaType::FunctionCall),
      _ => None,
    }
  }
}

/// Validation criteria for one lesson exercise, keyed by `type` on the wire.
/// "No validation" is the absence of this object, never a dedicated variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Criteria {
  ExactMatch {
    expected: String,
  },
  Contains {
    expected: String,
  },
  FunctionCall {
    function_name: String,
    // Always a sequence; a scalar here is rejected at build time.
    args: Vec<Value>,
    // JSON when the admin entered JSON, otherwise the literal string.
    expected: Value,
  },
}

impl Criteria {
  pub fn criteria_type(&self) -> CriteriaType {
    match self {
      Criteria::ExactMatch { .. } => CriteriaType::ExactMatch,
      Criteria::Contains { .. } => CriteriaType::Contains,
      Criteria::FunctionCall { .. } => CriteriaType::FunctionCall,
    }
  }
}
