//! Criteria codec: translate between the rendered form and the criteria
//! descriptor.
//!
//! Two distinct fallback policies apply on `build`, and they must not be
//! conflated:
//!   - malformed arguments JSON is an operator input error: a notice is
//!     collected and args falls back to the empty sequence, but the build
//!     still returns a descriptor;
//!   - a non-JSON expected value is a normal case: the literal string is
//!     kept silently (plain text like `hello` is a legitimate expected value).

use serde_json::Value;

use crate::domain::{Criteria, CriteriaType};
use crate::fields::{EXPECTED_OUTPUT, EXPECTED_RETURN, FUNCTION_ARGS, FUNCTION_NAME};
use crate::form::FormState;

/// Result of a `build`: the descriptor (when a strategy is selected) plus
/// operator-visible notices produced along the way.
#[derive(Clone, Debug)]
pub struct BuildOutcome {
  pub criteria: Option<Criteria>,
  pub notices: Vec<String>,
}

/// Read the form and construct the criteria descriptor. A selector of
/// `none`, empty, or anything unrecognized yields no descriptor.
pub fn build(form: &FormState) -> BuildOutcome {
  let mut notices = Vec::new();
  let criteria = form.selected_type().map(|ty| match ty {
    CriteriaType::ExactMatch => Criteria::ExactMatch {
      expected: form.value_or(EXPECTED_OUTPUT, "").to_string(),
    },
    CriteriaType::Contains => Criteria::Contains {
      expected: form.value_or(EXPECTED_OUTPUT, "").to_string(),
    },
    CriteriaType::FunctionCall => Criteria::FunctionCall {
      function_name: form.value_or(FUNCTION_NAME, "").to_string(),
      args: parse_args(form.value_or(FUNCTION_ARGS, "[]"), &mut notices),
      expected: parse_expected(form.value_or(EXPECTED_RETURN, "")),
    },
  });
  BuildOutcome { criteria, notices }
}

/// Drive the renderer for the incoming strategy, then fill in field values.
/// Rendering first guarantees the field set matches the strategy before any
/// write, so values never land in stale or missing fields.
pub fn populate(form: &mut FormState, criteria: Option<&Criteria>) {
  let tag = criteria.map(|c| c.criteria_type().tag()).unwrap_or("none");
  form.apply_selector(tag);

  match criteria {
    None => {}
    Some(Criteria::ExactMatch { expected }) | Some(Criteria::Contains { expected }) => {
      form.write(EXPECTED_OUTPUT, expected);
    }
    Some(Criteria::FunctionCall { function_name, args, expected }) => {
      form.write(FUNCTION_NAME, function_name);
      let args_text = serde_json::to_string(args).unwrap_or_else(|_| "[]".to_string());
      form.write(FUNCTION_ARGS, &args_text);
      // A JSON string goes in verbatim; anything else is serialized. Build
      // prefers JSON on the way back, so the string "5" may come back as the
      // number 5.
      let expected_text = match expected {
        Value::String(s) => s.clone(),
        other => other.to_string(),
      };
      form.write(EXPECTED_RETURN, &expected_text);
    }
  }
}

/// Arguments must always be a sequence. Malformed JSON and well-formed
/// non-array JSON both collect a notice and fall back to the empty sequence.
fn parse_args(raw: &str, notices: &mut Vec<String>) -> Vec<Value> {
  match serde_json::from_str::<Value>(raw) {
    Ok(Value::Array(items)) => items,
    Ok(other) => {
      notices.push(format!(
        "Arguments must be a JSON array (got {}); using [].",
        json_kind(&other)
      ));
      Vec::new()
    }
    Err(e) => {
      notices.push(format!("Invalid JSON in arguments ({e}); using []."));
      Vec::new()
    }
  }
}

/// Expected return value: JSON when it parses, the literal string otherwise.
fn parse_expected(raw: &str) -> Value {
  serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn json_kind(v: &Value) -> &'static str {
  match v {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn form_with(tag: &str) -> FormState {
    let mut form = FormState::new();
    form.apply_selector(tag);
    form
  }

  #[test]
  fn exact_match_build_reads_expected_verbatim() {
    let mut form = form_with("exact_match");
    form.write(EXPECTED_OUTPUT, "hello world");
    let out = build(&form);
    assert!(out.notices.is_empty());
    assert_eq!(
      out.criteria,
      Some(Criteria::ExactMatch { expected: "hello world".into() })
    );
  }

  #[test]
  fn function_call_build_parses_args_and_expected() {
    let mut form = form_with("function_call");
    form.write(FUNCTION_NAME, "add_numbers");
    form.write(FUNCTION_ARGS, "[2, 3]");
    form.write(EXPECTED_RETURN, "5");
    let out = build(&form);
    assert!(out.notices.is_empty());
    assert_eq!(
      out.criteria,
      Some(Criteria::FunctionCall {
        function_name: "add_numbers".into(),
        args: vec![json!(2), json!(3)],
        expected: json!(5),
      })
    );
  }

  #[test]
  fn malformed_args_collect_a_notice_and_fall_back_to_empty() {
    let mut form = form_with("function_call");
    form.write(FUNCTION_ARGS, "not json");
    let out = build(&form);
    assert_eq!(out.notices.len(), 1);
    match out.criteria.expect("descriptor still built") {
      Criteria::FunctionCall { args, .. } => assert!(args.is_empty()),
      other => panic!("unexpected criteria: {other:?}"),
    }
  }

  #[test]
  fn scalar_args_are_not_a_sequence() {
    let mut form = form_with("function_call");
    form.write(FUNCTION_ARGS, "5");
    let out = build(&form);
    assert_eq!(out.notices.len(), 1);
    match out.criteria.expect("descriptor still built") {
      Criteria::FunctionCall { args, .. } => assert!(args.is_empty()),
      other => panic!("unexpected criteria: {other:?}"),
    }
  }

  #[test]
  fn plain_string_expected_is_not_an_error() {
    let mut form = form_with("function_call");
    form.write(EXPECTED_RETURN, "hello");
    let out = build(&form);
    assert!(out.notices.is_empty());
    match out.criteria.expect("descriptor still built") {
      Criteria::FunctionCall { expected, .. } => assert_eq!(expected, json!("hello")),
      other => panic!("unexpected criteria: {other:?}"),
    }
  }

  #[test]
  fn none_and_unrecognized_selectors_build_nothing() {
    assert!(build(&form_with("none")).criteria.is_none());
    assert!(build(&form_with("")).criteria.is_none());
    assert!(build(&form_with("regex")).criteria.is_none());
  }

  #[test]
  fn populate_keeps_string_expected_verbatim() {
    let mut form = FormState::new();
    let c = Criteria::FunctionCall {
      function_name: "f".into(),
      args: vec![json!(1)],
      expected: json!("ok"),
    };
    populate(&mut form, Some(&c));
    assert_eq!(form.value_or(EXPECTED_RETURN, ""), "ok");
    assert_eq!(form.value_or(FUNCTION_ARGS, ""), "[1]");
    assert_eq!(form.value_or(FUNCTION_NAME, ""), "f");
  }

  #[test]
  fn populate_serializes_non_string_expected() {
    let mut form = FormState::new();
    let c = Criteria::FunctionCall {
      function_name: "stats".into(),
      args: vec![],
      expected: json!({ "mean": 2.5 }),
    };
    populate(&mut form, Some(&c));
    assert_eq!(form.value_or(EXPECTED_RETURN, ""), r#"{"mean":2.5}"#);
  }

  #[test]
  fn round_trip_reproduces_criteria() {
    let cases = vec![
      Criteria::ExactMatch { expected: "out".into() },
      Criteria::Contains { expected: "needle".into() },
      Criteria::FunctionCall {
        function_name: "add_numbers".into(),
        args: vec![json!(2), json!(3)],
        expected: json!(5),
      },
      Criteria::FunctionCall {
        function_name: "greet".into(),
        args: vec![json!("bob"), json!({ "loud": true })],
        expected: json!("ok"),
      },
      Criteria::FunctionCall {
        function_name: "noop".into(),
        args: vec![],
        expected: json!(null),
      },
    ];
    for c in cases {
      let mut form = FormState::new();
      populate(&mut form, Some(&c));
      let out = build(&form);
      assert!(out.notices.is_empty(), "unexpected notices for {c:?}");
      assert_eq!(out.criteria, Some(c));
    }
  }

  #[test]
  fn populate_none_then_build_is_null() {
    let mut form = form_with("function_call");
    form.write(FUNCTION_NAME, "left over");
    populate(&mut form, None);
    assert_eq!(form.selector(), "none");
    assert!(form.fields().is_empty());
    assert!(build(&form).criteria.is_none());
  }

  #[test]
  fn wire_format_matches_stored_shape() {
    let c = Criteria::FunctionCall {
      function_name: "add_numbers".into(),
      args: vec![json!(2), json!(3)],
      expected: json!(5),
    };
    let v = serde_json::to_value(&c).expect("serialize");
    assert_eq!(
      v,
      json!({
        "type": "function_call",
        "function_name": "add_numbers",
        "args": [2, 3],
        "expected": 5
      })
    );
  }
}
