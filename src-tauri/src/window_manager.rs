use std::sync::{Arc, Mutex};
use tauri::{AppHandle, Emitter, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

pub const MAIN_WINDOW_LABEL: &str = "main";
pub const GAME_WINDOW_LABEL: &str = "game";

/// Relative path of the bundled demo game, used when no game URL is set.
const BUNDLED_GAME_PATH: &str = "game/index.html";

#[derive(Debug, Clone)]
pub struct WindowManager {
    app_handle: AppHandle,
    main_window: Arc<Mutex<Option<WebviewWindow>>>,
    game_window: Arc<Mutex<Option<WebviewWindow>>>,
}

impl WindowManager {
    pub fn new(app_handle: AppHandle) -> Self {
        // Get reference to main window on creation
        let main_window = app_handle.get_webview_window(MAIN_WINDOW_LABEL);

        Self {
            app_handle,
            main_window: Arc::new(Mutex::new(main_window)),
            game_window: Arc::new(Mutex::new(None)),
        }
    }

    /// Get the main (host UI) window reference
    pub fn get_main_window(&self) -> Option<WebviewWindow> {
        self.main_window.lock().unwrap().clone()
    }

    /// Get the game window reference
    pub fn get_game_window(&self) -> Option<WebviewWindow> {
        self.game_window.lock().unwrap().clone()
    }

    /// Show the game window, creating it if necessary.
    ///
    /// An empty `game_url` loads the bundled demo game; anything else must be
    /// a valid absolute URL.
    pub async fn show_game_window(&self, game_url: &str) -> Result<(), String> {
        // First check if Tauri already has a window with the "game" label
        if let Some(existing_window) = self.app_handle.get_webview_window(GAME_WINDOW_LABEL) {
            {
                let mut game_guard = self.game_window.lock().unwrap();
                *game_guard = Some(existing_window.clone());
            }

            existing_window.show().map_err(|e| e.to_string())?;
            existing_window.set_focus().map_err(|e| e.to_string())?;
            log::info!("Showing existing game window");
            return Ok(());
        }

        log::info!("Creating new game window for '{}'", game_url);

        let game_window = WebviewWindowBuilder::new(
            &self.app_handle,
            GAME_WINDOW_LABEL,
            game_webview_url(game_url)?,
        )
        .title("GameDock")
        .inner_size(960.0, 600.0)
        .min_inner_size(480.0, 320.0)
        .initialization_script(include_str!("scene/bridge.js"))
        .build()
        .map_err(|e| e.to_string())?;

        game_window.show().map_err(|e| e.to_string())?;

        {
            let mut game_guard = self.game_window.lock().unwrap();
            *game_guard = Some(game_window);
        }

        log::info!("Game window created and shown");
        Ok(())
    }

    /// Hide the game window (don't close it)
    pub async fn hide_game_window(&self) -> Result<(), String> {
        if let Some(window) = self.get_game_window() {
            window.hide().map_err(|e| e.to_string())?;
            log::info!("Game window hidden");
        }
        Ok(())
    }

    /// Close the game window (actually destroy it)
    pub async fn close_game_window(&self) -> Result<(), String> {
        let window = {
            let mut game_guard = self.game_window.lock().unwrap();
            game_guard.take()
        };

        if let Some(window) = window {
            let _ = window.hide();
            window.close().map_err(|e| e.to_string())?;
            log::info!("Game window closed");
        }

        Ok(())
    }

    /// Emit event to specific window
    pub fn emit_to_window(
        &self,
        window_id: &str,
        event: &str,
        payload: serde_json::Value,
    ) -> Result<(), String> {
        let window = match window_id {
            MAIN_WINDOW_LABEL => self.get_main_window(),
            GAME_WINDOW_LABEL => self.get_game_window(),
            _ => None,
        };

        if let Some(window) = window {
            window.emit(event, payload).map_err(|e| e.to_string())?;
            log::debug!("Emitted '{}' event to {} window", event, window_id);
        } else {
            log::warn!("Cannot emit '{}' event - {} window not found", event, window_id);
        }

        Ok(())
    }

    /// Emit event to the main window only
    pub fn emit_to_main(&self, event: &str, payload: serde_json::Value) -> Result<(), String> {
        self.emit_to_window(MAIN_WINDOW_LABEL, event, payload)
    }

    /// Check if the game window is visible
    pub fn is_game_visible(&self) -> bool {
        if let Some(window) = self.get_game_window() {
            window.is_visible().unwrap_or(false)
        } else {
            false
        }
    }
}

/// Resolves the configured game URL to a webview target.
fn game_webview_url(game_url: &str) -> Result<WebviewUrl, String> {
    if game_url.is_empty() {
        return Ok(WebviewUrl::App(BUNDLED_GAME_PATH.into()));
    }

    let url: tauri::Url = game_url
        .parse()
        .map_err(|e| format!("Invalid game URL '{}': {}", game_url, e))?;
    Ok(WebviewUrl::External(url))
}
