use serde_json::json;

use crate::scene::controller::SceneSurface;
use crate::window_manager::WindowManager;

/// Event toggling the controls container's hidden attribute on the host page.
pub const CONTROLS_VISIBILITY_EVENT: &str = "scene-controls-visibility";
/// Event toggling the paused class on the host page's pause/play button.
pub const PAUSE_STYLE_EVENT: &str = "scene-pause-style";

/// [`SceneSurface`] backed by the host window: UI toggles are emitted as
/// events the host page applies to its DOM.
pub struct HostWindowSurface {
    windows: WindowManager,
}

impl HostWindowSurface {
    pub fn new(windows: WindowManager) -> Self {
        Self { windows }
    }
}

impl SceneSurface for HostWindowSurface {
    fn set_controls_hidden(&self, hidden: bool) {
        if let Err(e) = self
            .windows
            .emit_to_main(CONTROLS_VISIBILITY_EVENT, json!({ "hidden": hidden }))
        {
            log::warn!("Failed to toggle controls visibility: {}", e);
        }
    }

    fn set_paused_style(&self, paused: bool) {
        if let Err(e) = self
            .windows
            .emit_to_main(PAUSE_STYLE_EVENT, json!({ "paused": paused }))
        {
            log::warn!("Failed to toggle pause style: {}", e);
        }
    }
}
