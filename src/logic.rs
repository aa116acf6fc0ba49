//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! This includes:
//!   - Reacting to type-selector changes (re-render the field set)
//!   - Building the criteria descriptor on the save path
//!   - Populating the form on the load/edit path

use tracing::{info, instrument, warn};

use crate::codec;
use crate::codec::BuildOutcome;
use crate::domain::Criteria;
use crate::form::FormState;

/// Type-selector change: apply the new tag and re-render the field set.
#[instrument(level = "info", skip(form), fields(%tag))]
pub fn change_type(form: &mut FormState, tag: &str) {
  form.apply_selector(tag);
  info!(target: "criteria", %tag, fields = form.fields().len(), "Field set rendered");
}

/// Save path: read the form into a descriptor. Notices are logged here and
/// returned so the transport can surface them to the admin synchronously.
#[instrument(level = "info", skip(form), fields(selector = %form.selector()))]
pub fn build_criteria(form: &FormState) -> BuildOutcome {
  let out = codec::build(form);
  for notice in &out.notices {
    warn!(target: "criteria", %notice, "Operator notice during build");
  }
  match &out.criteria {
    Some(c) => {
      info!(target: "criteria", criteria_type = c.criteria_type().tag(), "Criteria built")
    }
    None => info!(target: "criteria", "No validation selected; built null criteria"),
  }
  out
}

/// Load/edit path: initialize the form from a stored descriptor, or clear it.
#[instrument(level = "info", skip(form, criteria), fields(has_criteria = criteria.is_some()))]
pub fn populate_form(form: &mut FormState, criteria: Option<&Criteria>) {
  codec::populate(form, criteria);
  info!(target: "criteria", selector = %form.selector(), fields = form.fields().len(), "Form populated");
}
