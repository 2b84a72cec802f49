use serde::Serialize;
use tauri::AppHandle;

use crate::commands::settings::load_settings;
use crate::menu;
use crate::scene::{SceneError, SceneMessage};
use crate::state::{game_proxy, scene_controller, window_manager};

/// Snapshot of the controller state for the host page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneStatus {
    pub paused: bool,
    pub muted: bool,
    pub loaded: bool,
    pub game_visible: bool,
}

#[tauri::command]
pub async fn toggle_pause(app: AppHandle) -> Result<bool, String> {
    let controller = scene_controller(&app)?;
    let paused = controller.toggle_pause().map_err(|e| e.to_string())?;
    menu::tray::refresh_pause_label(&app, paused);
    Ok(paused)
}

#[tauri::command]
pub async fn set_muted(app: AppHandle, muted: bool) -> Result<(), String> {
    let controller = scene_controller(&app)?;
    controller.set_mute(muted).map_err(|e| e.to_string())?;
    menu::tray::sync_mute_checked(&app, muted);
    Ok(())
}

#[tauri::command]
pub async fn restart_scene(app: AppHandle) -> Result<(), String> {
    let controller = scene_controller(&app)?;
    controller.restart().map_err(|e| e.to_string())?;
    log::info!("Scene restart requested");
    Ok(())
}

#[tauri::command]
pub async fn get_scene_state(app: AppHandle) -> Result<SceneStatus, String> {
    let controller = scene_controller(&app)?;
    let proxy = game_proxy(&app)?;
    let windows = window_manager(&app)?;

    Ok(SceneStatus {
        paused: controller.is_paused(),
        muted: controller.is_muted(),
        loaded: proxy.is_loaded(),
        game_visible: windows.is_game_visible(),
    })
}

/// Inbound relay: the bridge script in the game window forwards the frame's
/// named callback strings here.
#[tauri::command]
pub async fn scene_message(app: AppHandle, name: String) -> Result<(), String> {
    let message: SceneMessage = name.parse().map_err(|e: SceneError| {
        log::warn!("Dropping unknown scene message '{}'", name);
        e.to_string()
    })?;

    log::debug!("Scene message received: {}", message);

    if message == SceneMessage::Loaded {
        game_proxy(&app)?.notify_loaded();
        apply_start_muted(&app)?;
    }

    scene_controller(&app)?.handle_message(message);
    Ok(())
}

/// Posts an initial `mute` when the user asked for games to start muted.
fn apply_start_muted(app: &AppHandle) -> Result<(), String> {
    let settings = load_settings(app)?;
    if settings.start_muted {
        let controller = scene_controller(app)?;
        controller.set_mute(true).map_err(|e| e.to_string())?;
        menu::tray::sync_mute_checked(app, true);
        log::info!("Game frame loaded; muted per settings");
    }
    Ok(())
}
