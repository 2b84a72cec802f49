use tauri::{AppHandle, Manager};
use tauri_plugin_global_shortcut::{GlobalShortcutExt, Shortcut, ShortcutState};

use crate::menu;
use crate::state::AppState;

/// Handle global shortcut events.
///
/// Only the registered pause shortcut is acted on, and only on the press
/// edge; releases and unknown shortcuts are ignored.
pub fn handle_global_shortcut(app: &AppHandle, shortcut: &Shortcut, event_state: ShortcutState) {
    log::debug!(
        "Global shortcut triggered: {:?} - State: {:?}",
        shortcut,
        event_state
    );

    let Some(app_state) = app.try_state::<AppState>() else {
        log::warn!("Global shortcut triggered before AppState initialized");
        return;
    };

    let is_pause_shortcut = {
        if let Ok(shortcut_guard) = app_state.pause_shortcut.lock() {
            if let Some(ref pause_shortcut) = *shortcut_guard {
                shortcut == pause_shortcut
            } else {
                false
            }
        } else {
            false
        }
    };

    if !is_pause_shortcut || event_state != ShortcutState::Pressed {
        return;
    }

    let Some(controller) = app_state.get_scene_controller() else {
        log::warn!("Pause shortcut pressed before scene controller initialized");
        return;
    };

    match controller.toggle_pause() {
        Ok(paused) => {
            log::info!("Pause toggled via shortcut (paused={})", paused);
            menu::tray::refresh_pause_label(app, paused);
        }
        Err(e) => log::error!("Failed to toggle pause via shortcut: {}", e),
    }
}

/// Registers `accelerator` as the pause shortcut, replacing any previous one.
pub fn register_pause_shortcut(app: &AppHandle, accelerator: &str) -> Result<(), String> {
    let shortcut: Shortcut = accelerator
        .parse()
        .map_err(|_| format!("Invalid shortcut format: '{}'", accelerator))?;

    let app_state = app.state::<AppState>();
    let mut guard = app_state
        .pause_shortcut
        .lock()
        .map_err(|e| format!("Failed to acquire shortcut lock: {}", e))?;

    if let Some(old) = guard.take() {
        if let Err(e) = app.global_shortcut().unregister(old) {
            log::warn!("Failed to unregister previous pause shortcut: {}", e);
        }
    }

    app.global_shortcut()
        .register(shortcut.clone())
        .map_err(|e| e.to_string())?;
    *guard = Some(shortcut);

    Ok(())
}
