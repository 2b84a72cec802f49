use serde::{Deserialize, Serialize};
use serde_json::json;
use tauri::AppHandle;
use tauri_plugin_store::StoreExt;

use crate::hotkeys;

const SETTINGS_STORE: &str = "settings.json";

#[derive(Serialize, Deserialize, Clone)]
pub struct Settings {
    /// Absolute URL of the game to embed; empty means the bundled demo game.
    /// Remote origins must be covered by the `remote-game` capability scope
    /// for the bridge to reach the host.
    pub game_url: String,
    /// Global accelerator toggling pause.
    pub hotkey: String,
    /// Post `mute` as soon as the game frame reports loaded.
    pub start_muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game_url: "".to_string(), // Empty means bundled demo game
            hotkey: "CommandOrControl+Shift+P".to_string(),
            start_muted: false,
        }
    }
}

/// Reads settings from the store, falling back to defaults per field.
pub fn load_settings(app: &AppHandle) -> Result<Settings, String> {
    let store = app.store(SETTINGS_STORE).map_err(|e| e.to_string())?;

    let settings = Settings {
        game_url: store
            .get("game_url")
            .and_then(|v| v.as_str().map(|s| s.to_string()))
            .unwrap_or_else(|| Settings::default().game_url),
        hotkey: store
            .get("hotkey")
            .and_then(|v| v.as_str().map(|s| s.to_string()))
            .unwrap_or_else(|| Settings::default().hotkey),
        start_muted: store
            .get("start_muted")
            .and_then(|v| v.as_bool())
            .unwrap_or_else(|| Settings::default().start_muted),
    };

    Ok(settings)
}

#[tauri::command]
pub async fn get_settings(app: AppHandle) -> Result<Settings, String> {
    load_settings(&app)
}

#[tauri::command]
pub async fn save_settings(app: AppHandle, settings: Settings) -> Result<(), String> {
    let store = app.store(SETTINGS_STORE).map_err(|e| e.to_string())?;

    let old_hotkey = store
        .get("hotkey")
        .and_then(|v| v.as_str().map(|s| s.to_string()))
        .unwrap_or_default();

    store.set("game_url", json!(settings.game_url));
    store.set("hotkey", json!(settings.hotkey));
    store.set("start_muted", json!(settings.start_muted));
    store.save().map_err(|e| e.to_string())?;

    if old_hotkey != settings.hotkey {
        hotkeys::register_pause_shortcut(&app, &settings.hotkey)?;
        log::info!("Pause shortcut updated to '{}'", settings.hotkey);
    }

    Ok(())
}
