//! WebSocket upgrade + message loop. Each client message is parsed as JSON and
//! forwarded to core logic. The connection owns its editing session's form;
//! we reply with a single JSON message per request.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{debug, error, info, instrument};

use crate::form::FormState;
use crate::logic;
use crate::protocol::{form_out, ClientWsMessage, PresetOut, ServerWsMessage};
use crate::state::AppState;
use crate::util::trunc_for_log;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "lessonsmith_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "lessonsmith_backend", "WebSocket connected");
  // One socket, one editing session: the form lives with the connection.
  let mut form = FormState::new();
  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        // Parse, dispatch, serialize response.
        let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target: "lessonsmith_backend", "WS received: {}", trunc_for_log(&txt, 256));
            handle_client_ws(incoming, &mut form, &state)
          }
          Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
        };

        let out = serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
          serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
        });

        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "lessonsmith_backend", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "lessonsmith_backend", "WebSocket disconnected");
}

#[instrument(level = "info", skip(form, state))]
fn handle_client_ws(msg: ClientWsMessage, form: &mut FormState, state: &AppState) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::SetType { criteria_type } => {
      logic::change_type(form, &criteria_type);
      ServerWsMessage::Form { form: form_out(form) }
    }

    ClientWsMessage::SetField { field_id, value } => {
      if form.write(&field_id, &value) {
        ServerWsMessage::Form { form: form_out(form) }
      } else {
        ServerWsMessage::Error {
          message: format!("Field '{}' is not part of the current field set", field_id),
        }
      }
    }

    ClientWsMessage::Build => {
      let out = logic::build_criteria(form);
      tracing::info!(target: "criteria", built = out.criteria.is_some(), notices = out.notices.len(), "WS build served");
      ServerWsMessage::BuildResult { criteria: out.criteria, notices: out.notices }
    }

    ClientWsMessage::Populate { criteria } => {
      logic::populate_form(form, criteria.as_ref());
      ServerWsMessage::Form { form: form_out(form) }
    }

    ClientWsMessage::ListPresets => {
      let presets = state
        .presets
        .iter()
        .map(|p| PresetOut { name: p.name.clone(), criteria: p.criteria.clone() })
        .collect();
      ServerWsMessage::Presets { presets }
    }
  }
}
