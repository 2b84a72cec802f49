//! The scene controller: wires the host UI to the embedded game frame.
//!
//! Commands flow out through [`SceneTransport`]; named callbacks from the
//! game frame come back through [`SceneController::handle_message`] and turn
//! into UI toggles on the [`SceneSurface`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::scene::error::SceneError;
use crate::scene::messages::{SceneCommand, SceneMessage};

/// Outbound side of the scene: whatever marshals commands into the game frame.
#[cfg_attr(test, mockall::automock)]
pub trait SceneTransport: Send + Sync {
    fn post(&self, command: SceneCommand) -> Result<(), SceneError>;
}

/// The two host-UI affordances the controller may toggle: the controls
/// container (hidden attribute) and the pause/play button (paused class).
#[cfg_attr(test, mockall::automock)]
pub trait SceneSurface: Send + Sync {
    fn set_controls_hidden(&self, hidden: bool);
    fn set_paused_style(&self, paused: bool);
}

pub struct SceneController {
    transport: Arc<dyn SceneTransport>,
    surface: Arc<dyn SceneSurface>,
    paused: AtomicBool,
    muted: AtomicBool,
}

impl SceneController {
    pub fn new(transport: Arc<dyn SceneTransport>, surface: Arc<dyn SceneSurface>) -> Self {
        Self {
            transport,
            surface,
            paused: AtomicBool::new(false),
            muted: AtomicBool::new(false),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    pub fn is_muted(&self) -> bool {
        self.muted.load(Ordering::SeqCst)
    }

    /// Posts `pause` or `play` depending on the current state and flips the
    /// flag. Returns the new paused value.
    pub fn toggle_pause(&self) -> Result<bool, SceneError> {
        // Claim the flip atomically; tray, hotkey and command paths may race.
        let was_paused = self.paused.fetch_xor(true, Ordering::SeqCst);
        let command = if was_paused {
            SceneCommand::Play
        } else {
            SceneCommand::Pause
        };

        if let Err(e) = self.transport.post(command) {
            self.paused.store(was_paused, Ordering::SeqCst);
            return Err(e);
        }

        if was_paused {
            log::info!("Scene resumed");
        } else {
            log::info!("Scene paused");
        }
        Ok(!was_paused)
    }

    /// Posts `mute` or `unmute` to the game frame.
    pub fn set_mute(&self, mute: bool) -> Result<(), SceneError> {
        self.transport.post(if mute {
            SceneCommand::Mute
        } else {
            SceneCommand::Unmute
        })?;
        self.muted.store(mute, Ordering::SeqCst);
        Ok(())
    }

    /// Posts `replay` to restart the scene from the beginning.
    pub fn restart(&self) -> Result<(), SceneError> {
        self.transport.post(SceneCommand::Replay)
    }

    /// Dispatches a named callback from the game frame.
    ///
    /// `show-play` is equivalent to `hide-pause` (the pause/play button is a
    /// single element whose face is selected by the paused class), and
    /// `hide-play` to `show-pause`.
    pub fn handle_message(&self, message: SceneMessage) {
        match message {
            SceneMessage::Loaded => {
                // Queue flushing happens in the proxy; nothing to do here.
                log::info!("Game frame reported loaded");
            }
            SceneMessage::ShowControls => self.surface.set_controls_hidden(false),
            SceneMessage::HideControls => self.surface.set_controls_hidden(true),
            SceneMessage::ShowPlay | SceneMessage::HidePause => {
                self.surface.set_paused_style(true)
            }
            SceneMessage::HidePlay | SceneMessage::ShowPause => {
                self.surface.set_paused_style(false)
            }
            SceneMessage::ShowMute
            | SceneMessage::HideMute
            | SceneMessage::ShowUnmute
            | SceneMessage::HideUnmute => {
                // The host has no separate mute affordance; intentional no-ops.
                log::trace!("Ignoring scene message '{}'", message);
            }
        }
    }

    /// Clears local state back to defaults. Called when the game window is
    /// torn down.
    pub fn reset(&self) {
        self.paused.store(false, Ordering::SeqCst);
        self.muted.store(false, Ordering::SeqCst);
    }
}
