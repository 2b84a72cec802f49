//! Marshals commands from the host into the embedded game window.
//!
//! Commands posted before the game frame reports `loaded` (or while the game
//! window is missing) are queued and flushed in order once the frame is up.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tauri::{AppHandle, Emitter, Manager};

use crate::scene::controller::SceneTransport;
use crate::scene::error::SceneError;
use crate::scene::messages::SceneCommand;
use crate::window_manager::GAME_WINDOW_LABEL;

/// Event the bridge script listens for inside the game window.
pub const SCENE_COMMAND_EVENT: &str = "scene-command";

const MAX_PENDING_COMMANDS: usize = 32;

/// Delivery seam: puts a single command on the wire to the game frame.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait CommandEmitter: Send + Sync {
    fn emit(&self, command: SceneCommand) -> Result<(), SceneError>;
}

/// Production emitter: a `scene-command` event on the game webview window.
struct GameWindowEmitter {
    app_handle: AppHandle,
}

impl CommandEmitter for GameWindowEmitter {
    fn emit(&self, command: SceneCommand) -> Result<(), SceneError> {
        let window = self
            .app_handle
            .get_webview_window(GAME_WINDOW_LABEL)
            .ok_or(SceneError::WindowUnavailable)?;
        window.emit(SCENE_COMMAND_EVENT, command.as_str())?;
        log::debug!("Posted '{}' to game frame", command);
        Ok(())
    }
}

pub struct GameFrameProxy {
    emitter: Arc<dyn CommandEmitter>,
    loaded: AtomicBool,
    pending: Mutex<CommandQueue>,
}

impl GameFrameProxy {
    pub fn new(app_handle: AppHandle) -> Self {
        Self::with_emitter(Arc::new(GameWindowEmitter { app_handle }))
    }

    fn with_emitter(emitter: Arc<dyn CommandEmitter>) -> Self {
        Self {
            emitter,
            loaded: AtomicBool::new(false),
            pending: Mutex::new(CommandQueue::new(MAX_PENDING_COMMANDS)),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::SeqCst)
    }

    /// Marks the game frame ready and flushes any commands queued before it
    /// came up.
    pub fn notify_loaded(&self) {
        self.loaded.store(true, Ordering::SeqCst);

        let queued = match self.pending.lock() {
            Ok(mut queue) => queue.drain(),
            Err(e) => {
                log::error!("Failed to lock pending command queue for flush: {}", e);
                Vec::new()
            }
        };

        for command in queued {
            if let Err(e) = self.emitter.emit(command) {
                log::warn!("Failed to deliver queued command '{}': {}", command, e);
            }
        }
    }

    /// Forgets the loaded state and drops queued commands. Called when the
    /// game window is destroyed.
    pub fn reset(&self) {
        self.loaded.store(false, Ordering::SeqCst);
        if let Ok(mut queue) = self.pending.lock() {
            queue.clear();
        }
    }

    fn enqueue(&self, command: SceneCommand) {
        match self.pending.lock() {
            Ok(mut queue) => {
                queue.push(command);
                log::debug!("Game frame not loaded; queued '{}'", command);
            }
            Err(e) => {
                log::error!("Failed to lock pending command queue: {}", e);
            }
        }
    }
}

impl SceneTransport for GameFrameProxy {
    fn post(&self, command: SceneCommand) -> Result<(), SceneError> {
        if self.is_loaded() {
            self.emitter.emit(command)
        } else {
            self.enqueue(command);
            Ok(())
        }
    }
}

/// Bounded FIFO of not-yet-deliverable commands. Oldest entries are dropped
/// when the bound is hit.
pub(crate) struct CommandQueue {
    items: Vec<SceneCommand>,
    capacity: usize,
}

impl CommandQueue {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    pub(crate) fn push(&mut self, command: SceneCommand) {
        if self.items.len() >= self.capacity {
            self.items.remove(0);
        }
        self.items.push(command);
    }

    pub(crate) fn drain(&mut self) -> Vec<SceneCommand> {
        std::mem::take(&mut self.items)
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mockall::predicate::eq;

    /// Records every emitted command so tests can assert both ordering and
    /// that nothing leaves before the frame is loaded.
    #[derive(Default)]
    struct RecordingEmitter {
        emitted: Mutex<Vec<SceneCommand>>,
    }

    impl RecordingEmitter {
        fn emitted(&self) -> Vec<SceneCommand> {
            self.emitted.lock().unwrap().clone()
        }
    }

    impl CommandEmitter for RecordingEmitter {
        fn emit(&self, command: SceneCommand) -> Result<(), SceneError> {
            self.emitted.lock().unwrap().push(command);
            Ok(())
        }
    }

    #[test]
    fn test_posts_before_loaded_are_held_and_flushed_in_order() {
        let emitter = Arc::new(RecordingEmitter::default());
        let proxy = GameFrameProxy::with_emitter(emitter.clone());

        proxy.post(SceneCommand::Mute).unwrap();
        proxy.post(SceneCommand::Pause).unwrap();
        assert!(!proxy.is_loaded());
        assert!(emitter.emitted().is_empty(), "nothing leaves pre-loaded");

        proxy.notify_loaded();
        assert_eq!(
            emitter.emitted(),
            vec![SceneCommand::Mute, SceneCommand::Pause]
        );
    }

    #[test]
    fn test_posts_after_loaded_go_straight_through() {
        let emitter = Arc::new(RecordingEmitter::default());
        let proxy = GameFrameProxy::with_emitter(emitter.clone());

        proxy.notify_loaded();
        proxy.post(SceneCommand::Replay).unwrap();

        assert_eq!(emitter.emitted(), vec![SceneCommand::Replay]);
    }

    #[test]
    fn test_reset_drops_queued_commands_and_loaded_state() {
        let emitter = Arc::new(RecordingEmitter::default());
        let proxy = GameFrameProxy::with_emitter(emitter.clone());

        proxy.notify_loaded();
        proxy.reset();
        assert!(!proxy.is_loaded());

        proxy.post(SceneCommand::Pause).unwrap();
        proxy.reset();
        proxy.notify_loaded();

        assert!(emitter.emitted().is_empty(), "reset discards the queue");
    }

    #[test]
    fn test_emit_failure_propagates_once_loaded() {
        let mut emitter = MockCommandEmitter::new();
        emitter
            .expect_emit()
            .with(eq(SceneCommand::Pause))
            .times(1)
            .returning(|_| Err(SceneError::WindowUnavailable));

        let proxy = GameFrameProxy::with_emitter(Arc::new(emitter));
        proxy.notify_loaded();

        assert!(proxy.post(SceneCommand::Pause).is_err());
    }

    #[test]
    fn test_queue_preserves_order() {
        let mut queue = CommandQueue::new(8);
        queue.push(SceneCommand::Mute);
        queue.push(SceneCommand::Pause);
        queue.push(SceneCommand::Play);

        assert_eq!(
            queue.drain(),
            vec![SceneCommand::Mute, SceneCommand::Pause, SceneCommand::Play]
        );
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_queue_drops_oldest_at_capacity() {
        let mut queue = CommandQueue::new(2);
        queue.push(SceneCommand::Mute);
        queue.push(SceneCommand::Pause);
        queue.push(SceneCommand::Replay);

        assert_eq!(queue.drain(), vec![SceneCommand::Pause, SceneCommand::Replay]);
    }

    #[test]
    fn test_queue_clear() {
        let mut queue = CommandQueue::new(4);
        queue.push(SceneCommand::Pause);
        queue.clear();
        assert_eq!(queue.len(), 0);
        assert!(queue.drain().is_empty());
    }
}
