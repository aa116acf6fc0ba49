//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs include parameters and basic result info.

use std::sync::Arc;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::{info, instrument};

use crate::logic;
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state))]
pub async fn http_new_session(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let (session_id, form) = state.new_session().await;
  Json(SessionOut { session_id, form: form_out(&form) })
}

#[instrument(level = "info", skip(state, body), fields(%body.session_id, criteria_type = %body.criteria_type))]
pub async fn http_set_type(
  State(state): State<Arc<AppState>>,
  Json(body): Json<SetTypeIn>,
) -> impl IntoResponse {
  let out = state
    .with_session(&body.session_id, |form| {
      logic::change_type(form, &body.criteria_type);
      form_out(form)
    })
    .await;
  match out {
    Some(form) => Json(form).into_response(),
    None => unknown_session(&body.session_id),
  }
}

#[instrument(level = "info", skip(state, body), fields(%body.session_id, %body.field_id, value_len = body.value.len()))]
pub async fn http_set_field(
  State(state): State<Arc<AppState>>,
  Json(body): Json<SetFieldIn>,
) -> impl IntoResponse {
  let out = state
    .with_session(&body.session_id, |form| {
      let written = form.write(&body.field_id, &body.value);
      (written, form_out(form))
    })
    .await;
  match out {
    Some((true, form)) => Json(form).into_response(),
    Some((false, _)) => (
      StatusCode::BAD_REQUEST,
      Json(ErrorOut {
        error: format!("Field '{}' is not part of the current field set", body.field_id),
      }),
    )
      .into_response(),
    None => unknown_session(&body.session_id),
  }
}

#[instrument(level = "info", skip(state, body), fields(%body.session_id))]
pub async fn http_build(
  State(state): State<Arc<AppState>>,
  Json(body): Json<BuildIn>,
) -> impl IntoResponse {
  let out = state
    .with_session(&body.session_id, |form| logic::build_criteria(form))
    .await;
  match out {
    Some(o) => {
      info!(target: "criteria", session = %body.session_id, built = o.criteria.is_some(), notices = o.notices.len(), "HTTP build served");
      Json(BuildOut { criteria: o.criteria, notices: o.notices }).into_response()
    }
    None => unknown_session(&body.session_id),
  }
}

#[instrument(level = "info", skip(state, body), fields(%body.session_id, has_criteria = body.criteria.is_some()))]
pub async fn http_populate(
  State(state): State<Arc<AppState>>,
  Json(body): Json<PopulateIn>,
) -> impl IntoResponse {
  let out = state
    .with_session(&body.session_id, |form| {
      logic::populate_form(form, body.criteria.as_ref());
      form_out(form)
    })
    .await;
  match out {
    Some(form) => Json(form).into_response(),
    None => unknown_session(&body.session_id),
  }
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_presets(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let presets = state
    .presets
    .iter()
    .map(|p| PresetOut { name: p.name.clone(), criteria: p.criteria.clone() })
    .collect();
  Json(PresetsOut { presets })
}

fn unknown_session(id: &str) -> axum::response::Response {
  info!(target: "lessonsmith_backend", session = %id, "Unknown editing session");
  (
    StatusCode::NOT_FOUND,
    Json(ErrorOut { error: format!("Unknown sessionId: {}", id) }),
  )
    .into_response()
}
