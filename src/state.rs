//! Application state: editing sessions for the HTTP surface and the preset
//! inventory (config bank + built-in seeds).
//!
//! This module owns:
//!   - the session store (session id -> form state)
//!   - the preset list offered to the admin page
//!
//! WebSocket connections do not use the session store; each connection owns
//! its form directly.

use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::config::load_criteria_config_from_env;
use crate::domain::Criteria;
use crate::form::FormState;
use crate::seeds::seed_presets;

/// A named example criteria descriptor offered to the admin page.
#[derive(Clone, Debug)]
pub struct Preset {
    pub name: String,
    pub criteria: Criteria,
}

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<RwLock<HashMap<String, FormState>>>,
    pub presets: Vec<Preset>,
}

impl AppState {
    /// Build state from env: load the optional preset bank, then add seeds.
    /// Config entries win on name collision; seeds never overwrite.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let mut presets: Vec<Preset> = Vec::new();
        if let Some(cfg) = load_criteria_config_from_env() {
            presets.extend(cfg.into_presets());
        }
        let from_config = presets.len();
        for seed in seed_presets() {
            if !presets.iter().any(|p| p.name == seed.name) {
                presets.push(seed);
            }
        }
        info!(
            target: "lessonsmith_backend",
            config = from_config,
            total = presets.len(),
            "Startup preset inventory"
        );

        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            presets,
        }
    }

    /// Create a fresh editing session with an empty form.
    #[instrument(level = "debug", skip(self))]
    pub async fn new_session(&self) -> (String, FormState) {
        let id = Uuid::new_v4().to_string();
        let form = FormState::new();
        self.sessions.write().await.insert(id.clone(), form.clone());
        info!(target: "lessonsmith_backend", session = %id, "Editing session created");
        (id, form)
    }

    /// Run `op` against a session's form. Returns None for unknown ids so
    /// handlers can degrade to an error payload.
    pub async fn with_session<T>(
        &self,
        id: &str,
        op: impl FnOnce(&mut FormState) -> T,
    ) -> Option<T> {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(id).map(op)
    }
}
