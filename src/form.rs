//! Abstract form state: the selector value plus the currently rendered
//! fields. This is the only representation kept between admin actions.
//!
//! `render` is the transition from selector state to field set. Reads and
//! writes degrade instead of failing when a field is not rendered.

use tracing::debug;

use crate::domain::CriteriaType;
use crate::fields::{field_set, FieldKind};

/// A rendered field: its spec plus the admin's current input.
#[derive(Clone, Debug)]
pub struct RenderedField {
  pub id: &'static str,
  pub label: &'static str,
  pub kind: FieldKind,
  pub value: String,
}

/// In-memory form for one editing session.
#[derive(Clone, Debug, Default)]
pub struct FormState {
  selector: String,
  fields: Vec<RenderedField>,
}

impl FormState {
  pub fn new() -> Self {
    Self::default()
  }

  /// Raw selector value as last set (may be empty or unrecognized).
  pub fn selector(&self) -> &str {
    &self.selector
  }

  /// The recognized strategy behind the selector, if any.
  pub fn selected_type(&self) -> Option<CriteriaType> {
    CriteriaType::from_tag(&self.selector)
  }

  pub fn fields(&self) -> &[RenderedField] {
    &self.fields
  }

  /// Set the selector (any string, recognized or not) and re-render the
  /// matching field set.
  pub fn apply_selector(&mut self, tag: &str) {
    self.selector = tag.to_string();
    self.render(self.selected_type());
  }

  /// Replace the rendered fields with the set for `ty`. Always clears first,
  /// so repeated calls cannot accumulate duplicates and a strategy switch
  /// leaves no stale fields behind.
  pub fn render(&mut self, ty: Option<CriteriaType>) {
    self.fields.clear();
    for spec in field_set(ty) {
      self.fields.push(RenderedField {
        id: spec.id,
        label: spec.label,
        kind: spec.kind,
        value: spec.initial.to_string(),
      });
    }
  }

  /// Current value of a field, or `default` when it is not rendered.
  pub fn value_or<'a>(&'a self, id: &str, default: &'a str) -> &'a str {
    self
      .fields
      .iter()
      .find(|f| f.id == id)
      .map(|f| f.value.as_str())
      .unwrap_or(default)
  }

  /// Write into a rendered field. Returns false when the field is not part
  /// of the current set; the form is left untouched.
  pub fn write(&mut self, id: &str, value: &str) -> bool {
    match self.fields.iter_mut().find(|f| f.id == id) {
      Some(f) => {
        f.value = value.to_string();
        true
      }
      None => {
        debug!(target: "criteria", field = %id, "Write into unrendered field ignored");
        false
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn render_is_idempotent() {
    let mut form = FormState::new();
    form.apply_selector("function_call");
    let first: Vec<&str> = form.fields().iter().map(|f| f.id).collect();
    form.apply_selector("function_call");
    let second: Vec<&str> = form.fields().iter().map(|f| f.id).collect();
    assert_eq!(first, second);
    assert_eq!(second, vec!["function_name", "function_args", "expected_return"]);
  }

  #[test]
  fn strategy_switch_leaves_no_stale_fields() {
    let mut form = FormState::new();
    form.apply_selector("function_call");
    form.write("function_name", "f");
    form.apply_selector("exact_match");
    let ids: Vec<&str> = form.fields().iter().map(|f| f.id).collect();
    assert_eq!(ids, vec!["expected_output"]);
    assert_eq!(form.value_or("expected_output", ""), "");
  }

  #[test]
  fn unrecognized_selector_clears_the_field_set() {
    let mut form = FormState::new();
    form.apply_selector("exact_match");
    form.apply_selector("regex");
    assert!(form.fields().is_empty());
    assert_eq!(form.selector(), "regex");
  }

  #[test]
  fn writes_into_missing_fields_are_ignored() {
    let mut form = FormState::new();
    form.apply_selector("none");
    assert!(!form.write("expected_output", "x"));
    assert_eq!(form.value_or("expected_output", "fallback"), "fallback");
  }

  #[test]
  fn args_field_starts_as_an_empty_array_literal() {
    let mut form = FormState::new();
    form.apply_selector("function_call");
    assert_eq!(form.value_or("function_args", ""), "[]");
  }
}
