use std::sync::{Arc, Mutex};

use tauri::menu::{CheckMenuItem, MenuItem};
use tauri::{Manager, Wry};

use crate::scene::{GameFrameProxy, SceneController};
use crate::window_manager::WindowManager;

/// Application state - managed by Tauri (runtime state only)
pub struct AppState {
    pub scene: Arc<Mutex<Option<Arc<SceneController>>>>,
    pub proxy: Arc<Mutex<Option<Arc<GameFrameProxy>>>>,
    pub window_manager: Arc<Mutex<Option<WindowManager>>>,
    pub pause_shortcut: Arc<Mutex<Option<tauri_plugin_global_shortcut::Shortcut>>>,
    pub pause_menu_item: Arc<Mutex<Option<MenuItem<Wry>>>>,
    pub mute_menu_item: Arc<Mutex<Option<CheckMenuItem<Wry>>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            scene: Arc::new(Mutex::new(None)),
            proxy: Arc::new(Mutex::new(None)),
            window_manager: Arc::new(Mutex::new(None)),
            pause_shortcut: Arc::new(Mutex::new(None)),
            pause_menu_item: Arc::new(Mutex::new(None)),
            mute_menu_item: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_scene_controller(&self, controller: Arc<SceneController>) {
        if let Ok(mut guard) = self.scene.lock() {
            *guard = Some(controller);
        } else {
            log::error!("Failed to acquire scene controller lock");
        }
    }

    pub fn get_scene_controller(&self) -> Option<Arc<SceneController>> {
        match self.scene.lock() {
            Ok(guard) => guard.clone(),
            Err(e) => {
                log::error!("Failed to acquire scene controller lock: {}", e);
                None
            }
        }
    }

    pub fn set_proxy(&self, proxy: Arc<GameFrameProxy>) {
        if let Ok(mut guard) = self.proxy.lock() {
            *guard = Some(proxy);
        } else {
            log::error!("Failed to acquire proxy lock");
        }
    }

    pub fn get_proxy(&self) -> Option<Arc<GameFrameProxy>> {
        match self.proxy.lock() {
            Ok(guard) => guard.clone(),
            Err(e) => {
                log::error!("Failed to acquire proxy lock: {}", e);
                None
            }
        }
    }

    pub fn set_window_manager(&self, manager: WindowManager) {
        if let Ok(mut guard) = self.window_manager.lock() {
            *guard = Some(manager);
        } else {
            log::error!("Failed to acquire window manager lock");
        }
    }

    pub fn get_window_manager(&self) -> Option<WindowManager> {
        match self.window_manager.lock() {
            Ok(guard) => guard.clone(),
            Err(e) => {
                log::error!("Failed to acquire window manager lock: {}", e);
                None
            }
        }
    }
}

/// Helper to fetch the scene controller from managed state.
pub fn scene_controller(app: &tauri::AppHandle) -> Result<Arc<SceneController>, String> {
    app.state::<AppState>()
        .get_scene_controller()
        .ok_or_else(|| "Scene controller not initialized".to_string())
}

/// Helper to fetch the game frame proxy from managed state.
pub fn game_proxy(app: &tauri::AppHandle) -> Result<Arc<GameFrameProxy>, String> {
    app.state::<AppState>()
        .get_proxy()
        .ok_or_else(|| "Game frame proxy not initialized".to_string())
}

/// Helper to fetch the window manager from managed state.
pub fn window_manager(app: &tauri::AppHandle) -> Result<WindowManager, String> {
    app.state::<AppState>()
        .get_window_manager()
        .ok_or_else(|| "Window manager not initialized".to_string())
}
