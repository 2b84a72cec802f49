use tauri::menu::{CheckMenuItem, MenuBuilder, MenuItem};
use tauri::tray::{TrayIconBuilder, TrayIconEvent};
use tauri::{AppHandle, Manager};

use crate::state::{scene_controller, AppState};
use crate::window_manager::MAIN_WINDOW_LABEL;

/// Label for the pause/resume menu item.
pub fn format_pause_label(paused: bool) -> String {
    if paused {
        "Resume game".to_string()
    } else {
        "Pause game".to_string()
    }
}

/// Tray tooltip reflecting the paused state.
pub fn format_tray_tooltip(paused: bool) -> String {
    if paused {
        "GameDock (paused)".to_string()
    } else {
        "GameDock".to_string()
    }
}

/// Builds the tray icon and menu. Item handles are stashed in [`AppState`] so
/// other toggle paths (commands, hotkey) can keep the labels in sync.
pub fn build_tray(app: &tauri::App) -> tauri::Result<()> {
    let pause_i = MenuItem::with_id(app, "pause", format_pause_label(false), true, None::<&str>)?;
    let restart_i = MenuItem::with_id(app, "restart", "Restart game", true, None::<&str>)?;
    let mute_i = CheckMenuItem::with_id(app, "mute", "Muted", true, false, None::<&str>)?;
    let show_i = MenuItem::with_id(app, "show", "Show", true, None::<&str>)?;
    let quit_i = MenuItem::with_id(app, "quit", "Quit", true, None::<&str>)?;

    let menu = MenuBuilder::new(app)
        .item(&pause_i)
        .item(&restart_i)
        .item(&mute_i)
        .separator()
        .item(&show_i)
        .separator()
        .item(&quit_i)
        .build()?;

    {
        let app_state = app.state::<AppState>();
        if let Ok(mut guard) = app_state.pause_menu_item.lock() {
            *guard = Some(pause_i);
        }
        if let Ok(mut guard) = app_state.mute_menu_item.lock() {
            *guard = Some(mute_i);
        };
    }

    let _tray = TrayIconBuilder::with_id("main")
        .tooltip(format_tray_tooltip(false))
        .menu(&menu)
        .on_menu_event(|app, event| match event.id.as_ref() {
            "pause" => match scene_controller(app) {
                Ok(controller) => match controller.toggle_pause() {
                    Ok(paused) => refresh_pause_label(app, paused),
                    Err(e) => log::error!("Failed to toggle pause from tray: {}", e),
                },
                Err(e) => log::warn!("{}", e),
            },
            "restart" => {
                if let Ok(controller) = scene_controller(app) {
                    if let Err(e) = controller.restart() {
                        log::error!("Failed to restart scene from tray: {}", e);
                    }
                }
            }
            "mute" => {
                let checked = app
                    .state::<AppState>()
                    .mute_menu_item
                    .lock()
                    .ok()
                    .and_then(|guard| guard.as_ref().and_then(|item| item.is_checked().ok()))
                    .unwrap_or(false);
                if let Ok(controller) = scene_controller(app) {
                    if let Err(e) = controller.set_mute(checked) {
                        log::error!("Failed to set mute from tray: {}", e);
                    }
                }
            }
            "show" => {
                if let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) {
                    let _ = window.show();
                    let _ = window.set_focus();
                }
            }
            "quit" => {
                app.exit(0);
            }
            _ => {}
        })
        .on_tray_icon_event(|tray, event| {
            if let TrayIconEvent::Click {
                button: tauri::tray::MouseButton::Left,
                button_state: tauri::tray::MouseButtonState::Up,
                ..
            } = event
            {
                let app = tray.app_handle();
                if let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) {
                    let _ = window.show();
                    let _ = window.set_focus();
                }
            }
        })
        .build(app)?;

    Ok(())
}

/// Updates the pause item label (and tooltip) after a pause toggle from any
/// entry point.
pub fn refresh_pause_label(app: &AppHandle, paused: bool) {
    let app_state = app.state::<AppState>();
    if let Ok(guard) = app_state.pause_menu_item.lock() {
        if let Some(item) = guard.as_ref() {
            if let Err(e) = item.set_text(format_pause_label(paused)) {
                log::warn!("Failed to update pause menu label: {}", e);
            }
        }
    }

    if let Some(tray) = app.tray_by_id("main") {
        let _ = tray.set_tooltip(Some(format_tray_tooltip(paused)));
    }
}

/// Keeps the mute check item in sync when mute changes outside the tray.
pub fn sync_mute_checked(app: &AppHandle, muted: bool) {
    let app_state = app.state::<AppState>();
    if let Ok(guard) = app_state.mute_menu_item.lock() {
        if let Some(item) = guard.as_ref() {
            if let Err(e) = item.set_checked(muted) {
                log::warn!("Failed to sync mute menu item: {}", e);
            }
        }
    };
}
