use tauri::AppHandle;

use crate::commands::settings::load_settings;
use crate::state::{game_proxy, window_manager};

#[tauri::command]
pub async fn show_game_window(app: AppHandle) -> Result<(), String> {
    let settings = load_settings(&app)?;
    let windows = window_manager(&app)?;

    windows.show_game_window(&settings.game_url).await?;

    log::info!("Game window shown via WindowManager");
    Ok(())
}

#[tauri::command]
pub async fn hide_game_window(app: AppHandle) -> Result<(), String> {
    let windows = window_manager(&app)?;

    windows.hide_game_window().await?;

    log::info!("Game window hidden via WindowManager");
    Ok(())
}

#[tauri::command]
pub async fn close_game_window(app: AppHandle) -> Result<(), String> {
    let windows = window_manager(&app)?;

    windows.close_game_window().await?;

    // The destroy event also resets the scene, but that arrives async; drop
    // the loaded flag now so commands issued in between get queued.
    game_proxy(&app)?.reset();

    log::info!("Game window closed via WindowManager");
    Ok(())
}

#[tauri::command]
pub async fn focus_main_window(app: AppHandle) -> Result<(), String> {
    let windows = window_manager(&app)?;

    if let Some(main_window) = windows.get_main_window() {
        main_window.show().map_err(|e| e.to_string())?;
        main_window.set_focus().map_err(|e| e.to_string())?;
    }

    Ok(())
}
