use std::sync::Arc;

use tauri::Manager;

mod commands;
mod hotkeys;
mod menu;
mod scene;
mod state;
mod window_manager;

#[cfg(test)]
mod tests;

use commands::scene::{get_scene_state, restart_scene, scene_message, set_muted, toggle_pause};
use commands::settings::{get_settings, save_settings, Settings};
use commands::window::{
    close_game_window, focus_main_window, hide_game_window, show_game_window,
};
use scene::{GameFrameProxy, HostWindowSurface, SceneController};
use state::AppState;
use window_manager::WindowManager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() -> tauri::Result<()> {
    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            if let Some(window) = app.get_webview_window(window_manager::MAIN_WINDOW_LABEL) {
                let _ = window.show();
                let _ = window.set_focus();
            }
        }))
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Debug)
                .build(),
        )
        .plugin(tauri_plugin_store::Builder::new().build())
        .plugin(tauri_plugin_opener::init())
        .plugin(
            tauri_plugin_global_shortcut::Builder::new()
                .with_handler(|app, shortcut, event| {
                    hotkeys::handle_global_shortcut(app, shortcut, event.state());
                })
                .build(),
        )
        .setup(|app| {
            app.manage(AppState::new());

            let handle = app.handle().clone();
            let windows = WindowManager::new(handle.clone());
            let proxy = Arc::new(GameFrameProxy::new(handle.clone()));
            let surface = Arc::new(HostWindowSurface::new(windows.clone()));
            let controller = Arc::new(SceneController::new(proxy.clone(), surface));

            {
                let app_state = app.state::<AppState>();
                app_state.set_window_manager(windows);
                app_state.set_proxy(proxy);
                app_state.set_scene_controller(controller);
            }

            menu::tray::build_tray(app)?;

            let settings = commands::settings::load_settings(&handle).unwrap_or_else(|e| {
                log::warn!("Failed to load settings, using defaults: {}", e);
                Settings::default()
            });

            if let Err(e) = hotkeys::register_pause_shortcut(&handle, &settings.hotkey) {
                log::warn!(
                    "Failed to register pause shortcut '{}': {}",
                    settings.hotkey,
                    e
                );
            }

            // Open the game window up front so the frame can report `loaded`.
            let game_url = settings.game_url.clone();
            tauri::async_runtime::spawn(async move {
                let app_state = handle.state::<AppState>();
                if let Some(windows) = app_state.get_window_manager() {
                    if let Err(e) = windows.show_game_window(&game_url).await {
                        log::error!("Failed to open game window: {}", e);
                    }
                }
            });

            Ok(())
        })
        .on_window_event(|window, event| {
            if window.label() == window_manager::GAME_WINDOW_LABEL
                && matches!(event, tauri::WindowEvent::Destroyed)
            {
                let app = window.app_handle();
                if let Some(app_state) = app.try_state::<AppState>() {
                    if let Some(proxy) = app_state.get_proxy() {
                        proxy.reset();
                    }
                    if let Some(controller) = app_state.get_scene_controller() {
                        controller.reset();
                    }
                }
                log::info!("Game window destroyed; scene state reset");
            }
        })
        .invoke_handler(tauri::generate_handler![
            toggle_pause,
            set_muted,
            restart_scene,
            get_scene_state,
            scene_message,
            get_settings,
            save_settings,
            show_game_window,
            hide_game_window,
            close_game_window,
            focus_main_window,
        ])
        .run(tauri::generate_context!())
}
