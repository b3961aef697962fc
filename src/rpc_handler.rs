//! RPC method handler for the Tab Session Lite JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches JSON-RPC method calls to the
//! session repository and settings engine held by `App`.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::session_repository::SessionRepositoryTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::session::{EditOutcome, Session};

fn str_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, String> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", name))
}

fn index_param(params: &Value, name: &str) -> Result<usize, String> {
    params
        .get(name)
        .and_then(|v| v.as_u64())
        .map(|v| v as usize)
        .ok_or_else(|| format!("missing {}", name))
}

fn summary(s: &Session) -> Value {
    json!({
        "id": s.id,
        "name": s.name,
        "createdAt": s.created_at,
        "updatedAt": s.updated_at,
        "windows": s.windows.len(),
        "totalTabs": s.total_tabs,
    })
}

fn edit_result(outcome: EditOutcome) -> Result<Value, String> {
    match outcome {
        EditOutcome::Updated(session) => {
            Ok(json!({"ok": true, "removed": false, "session": session}))
        }
        EditOutcome::SessionRemoved => Ok(json!({"ok": true, "removed": true})),
        EditOutcome::NotFound => Err("session not found".to_string()),
    }
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Sessions ───
        "session.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let items: Vec<Value> = a.sessions.load().iter().map(summary).collect();
            Ok(json!({"items": items}))
        }
        "session.get" => {
            let id = str_param(params, "id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let session = a.sessions.get(id).ok_or("session not found")?;
            serde_json::to_value(session).map_err(|e| e.to_string())
        }
        "session.rename" => {
            let id = str_param(params, "id")?;
            let name = str_param(params, "name")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let outcome = a.sessions.rename(id, name).map_err(|e| e.to_string())?;
            edit_result(outcome)
        }
        "session.deleteTab" => {
            let id = str_param(params, "id")?;
            let window_index = index_param(params, "windowIndex")?;
            let tab_id = str_param(params, "tabId")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let outcome = a
                .sessions
                .delete_tab(id, window_index, tab_id)
                .map_err(|e| e.to_string())?;
            edit_result(outcome)
        }
        "session.deleteWindow" => {
            let id = str_param(params, "id")?;
            let window_index = index_param(params, "windowIndex")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let outcome = a
                .sessions
                .delete_window(id, window_index)
                .map_err(|e| e.to_string())?;
            edit_result(outcome)
        }
        "session.delete" => {
            let id = str_param(params, "id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let ok = a.sessions.delete(id).map_err(|e| e.to_string())?;
            Ok(json!({"ok": ok}))
        }
        "session.clear" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            a.sessions.clear_all().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "session.export" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let document = a.sessions.export().map_err(|e| e.to_string())?;
            Ok(json!({"json": document}))
        }
        "session.import" => {
            let document = str_param(params, "json")?;
            let overwrite = params.get("overwrite").and_then(|v| v.as_bool()).unwrap_or(false);
            let a = app.lock().map_err(|e| e.to_string())?;
            let result = a.sessions.import(document, overwrite);
            serde_json::to_value(result).map_err(|e| e.to_string())
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = str_param(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
