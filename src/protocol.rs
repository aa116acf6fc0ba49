//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and admin page independently.

use serde::{Deserialize, Serialize};

use crate::domain::Criteria;
use crate::fields::FieldKind;
use crate::form::FormState;

/// Messages the admin page can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    SetType {
        #[serde(rename = "criteriaType")]
        criteria_type: String,
    },
    SetField {
        #[serde(rename = "fieldId")]
        field_id: String,
        value: String,
    },
    Build,
    Populate {
        criteria: Option<Criteria>,
    },
    ListPresets,
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Form {
        form: FormOut,
    },
    BuildResult {
        criteria: Option<Criteria>,
        notices: Vec<String>,
    },
    Presets {
        presets: Vec<PresetOut>,
    },
    Error {
        message: String,
    },
}

/// One rendered field as the admin page should display it.
#[derive(Debug, Serialize)]
pub struct FieldOut {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    pub value: String,
}

/// Snapshot of the form: selector value plus the rendered field set.
#[derive(Debug, Serialize)]
pub struct FormOut {
    pub selector: String,
    pub fields: Vec<FieldOut>,
}

/// Convert the internal form state to the public DTO.
pub fn form_out(form: &FormState) -> FormOut {
    FormOut {
        selector: form.selector().to_string(),
        fields: form
            .fields()
            .iter()
            .map(|f| FieldOut {
                id: f.id.to_string(),
                label: f.label.to_string(),
                kind: f.kind,
                value: f.value.clone(),
            })
            .collect(),
    }
}

/// Named example criteria the admin page can offer to load.
#[derive(Debug, Serialize)]
pub struct PresetOut {
    pub name: String,
    pub criteria: Criteria,
}

//
// HTTP request/response DTOs
//

#[derive(Serialize)]
pub struct SessionOut {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub form: FormOut,
}

#[derive(Debug, Deserialize)]
pub struct SetTypeIn {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(rename = "criteriaType")]
    pub criteria_type: String,
}

#[derive(Debug, Deserialize)]
pub struct SetFieldIn {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(rename = "fieldId")]
    pub field_id: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct BuildIn {
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

#[derive(Serialize)]
pub struct BuildOut {
    pub criteria: Option<Criteria>,
    pub notices: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct PopulateIn {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub criteria: Option<Criteria>,
}

#[derive(Serialize)]
pub struct PresetsOut {
    pub presets: Vec<PresetOut>,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub error: String,
}
