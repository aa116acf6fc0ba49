//! Declarative field catalog: which form fields each criteria type shows.
//!
//! The type→fields contract lives here and nowhere else. The renderer in
//! `form` lays these specs out generically, so adding a field to a strategy
//! is a table edit, not new rendering logic.

use serde::Serialize;

use crate::domain::CriteriaType;

/// Input widget kind, as the admin page should present it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
  Text,
  TextArea,
}

/// One form field: stable id, label, widget kind, and initial value.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
  pub id: &'static str,
  pub label: &'static str,
  pub kind: FieldKind,
  pub initial: &'static str,
}

pub const EXPECTED_OUTPUT: &str = "expected_output";
pub const FUNCTION_NAME: &str = "function_name";
pub const FUNCTION_ARGS: &str = "function_args";
pub const EXPECTED_RETURN: &str = "expected_return";

const EXPECTED_OUTPUT_FIELDS: &[FieldSpec] = &[FieldSpec {
  id: EXPECTED_OUTPUT,
  label: "Expected output",
  kind: FieldKind::TextArea,
  initial: "",
}];

const FUNCTION_CALL_FIELDS: &[FieldSpec] = &[
  FieldSpec {
    id: FUNCTION_NAME,
    label: "Function name",
    kind: FieldKind::Text,
    initial: "",
  },
  FieldSpec {
    id: FUNCTION_ARGS,
    label: "Arguments (JSON array)",
    kind: FieldKind::Text,
    initial: "[]",
  },
  FieldSpec {
    id: EXPECTED_RETURN,
    label: "Expected return value",
    kind: FieldKind::Text,
    initial: "",
  },
];

/// Field set for a recognized strategy; `None` (no validation) shows nothing.
pub fn field_set(ty: Option<CriteriaType>) -> &'static [FieldSpec] {
  match ty {
    Some(CriteriaType::ExactMatch) | Some(CriteriaType::Contains) => EXPECTED_OUTPUT_FIELDS,
    Some(CriteriaType::FunctionCall) => FUNCTION_CALL_FIELDS,
    None => &[],
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn field_ids_are_unique_within_each_set() {
    for ty in [
      Some(CriteriaType::ExactMatch),
      Some(CriteriaType::Contains),
      Some(CriteriaType::FunctionCall),
      None,
    ] {
      let specs = field_set(ty);
      for (i, a) in specs.iter().enumerate() {
        for b in &specs[i + 1..] {
          assert_ne!(a.id, b.id, "duplicate field id in set for {ty:?}");
        }
      }
    }
  }

  #[test]
  fn text_strategies_share_the_expected_output_field() {
    let exact = field_set(Some(CriteriaType::ExactMatch));
    let contains = field_set(Some(CriteriaType::Contains));
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].id, EXPECTED_OUTPUT);
    assert_eq!(contains[0].id, EXPECTED_OUTPUT);
  }
}
