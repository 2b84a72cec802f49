//! Behavior tests for the scene controller.
//!
//! The transport and surface seams are mocked; an unexpected call on either
//! mock fails the test, which is how the intentional no-ops are verified.

use std::sync::Arc;

use mockall::predicate::eq;
use mockall::Sequence;

use crate::scene::{
    MockSceneSurface, MockSceneTransport, SceneCommand, SceneController, SceneError, SceneMessage,
};

fn controller(transport: MockSceneTransport, surface: MockSceneSurface) -> SceneController {
    SceneController::new(Arc::new(transport), Arc::new(surface))
}

// ============================================================================
// Pause toggling
// ============================================================================

#[test]
fn test_toggle_pause_posts_pause_then_play() {
    let mut transport = MockSceneTransport::new();
    let mut seq = Sequence::new();
    transport
        .expect_post()
        .with(eq(SceneCommand::Pause))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    transport
        .expect_post()
        .with(eq(SceneCommand::Play))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));

    let controller = controller(transport, MockSceneSurface::new());

    assert!(!controller.is_paused(), "controller starts unpaused");
    assert!(controller.toggle_pause().unwrap(), "first toggle pauses");
    assert!(controller.is_paused());
    assert!(!controller.toggle_pause().unwrap(), "second toggle resumes");
    assert!(!controller.is_paused());
}

#[test]
fn test_toggle_pause_does_not_flip_on_transport_error() {
    let mut transport = MockSceneTransport::new();
    transport
        .expect_post()
        .with(eq(SceneCommand::Pause))
        .times(1)
        .returning(|_| Err(SceneError::WindowUnavailable));

    let controller = controller(transport, MockSceneSurface::new());

    assert!(controller.toggle_pause().is_err());
    assert!(!controller.is_paused(), "failed post must not flip the flag");
}

#[test]
fn test_concurrent_toggles_alternate_pause_and_play() {
    // Each toggle claims the flip atomically, so 8 racing toggles must post
    // exactly 4 pauses and 4 plays and land back on unpaused.
    let mut transport = MockSceneTransport::new();
    transport
        .expect_post()
        .with(eq(SceneCommand::Pause))
        .times(4)
        .returning(|_| Ok(()));
    transport
        .expect_post()
        .with(eq(SceneCommand::Play))
        .times(4)
        .returning(|_| Ok(()));

    let controller = Arc::new(controller(transport, MockSceneSurface::new()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let controller = Arc::clone(&controller);
            std::thread::spawn(move || controller.toggle_pause().unwrap())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert!(!controller.is_paused());
}

#[test]
fn test_toggle_pause_does_not_touch_the_surface() {
    // Strict surface mock: any UI call here would fail the test. The paused
    // class only changes on inbound messages from the game frame.
    let mut transport = MockSceneTransport::new();
    transport.expect_post().returning(|_| Ok(()));

    let controller = controller(transport, MockSceneSurface::new());
    controller.toggle_pause().unwrap();
    controller.toggle_pause().unwrap();
}

// ============================================================================
// Mute and restart
// ============================================================================

#[test]
fn test_set_mute_posts_mute_and_unmute() {
    let mut transport = MockSceneTransport::new();
    let mut seq = Sequence::new();
    transport
        .expect_post()
        .with(eq(SceneCommand::Mute))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    transport
        .expect_post()
        .with(eq(SceneCommand::Unmute))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));

    let controller = controller(transport, MockSceneSurface::new());

    controller.set_mute(true).unwrap();
    assert!(controller.is_muted());
    controller.set_mute(false).unwrap();
    assert!(!controller.is_muted());
}

#[test]
fn test_restart_posts_replay() {
    let mut transport = MockSceneTransport::new();
    transport
        .expect_post()
        .with(eq(SceneCommand::Replay))
        .times(1)
        .returning(|_| Ok(()));

    let controller = controller(transport, MockSceneSurface::new());
    controller.restart().unwrap();
}

// ============================================================================
// Inbound callbacks
// ============================================================================

#[test]
fn test_show_controls_unhides_and_hide_controls_hides() {
    let mut surface = MockSceneSurface::new();
    let mut seq = Sequence::new();
    surface
        .expect_set_controls_hidden()
        .with(eq(false))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    surface
        .expect_set_controls_hidden()
        .with(eq(true))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());

    let controller = controller(MockSceneTransport::new(), surface);

    controller.handle_message(SceneMessage::ShowControls);
    controller.handle_message(SceneMessage::HideControls);
}

#[test]
fn test_show_play_is_equivalent_to_hide_pause() {
    let mut surface = MockSceneSurface::new();
    surface
        .expect_set_paused_style()
        .with(eq(true))
        .times(2)
        .return_const(());

    let controller = controller(MockSceneTransport::new(), surface);

    controller.handle_message(SceneMessage::ShowPlay);
    controller.handle_message(SceneMessage::HidePause);
}

#[test]
fn test_hide_play_is_equivalent_to_show_pause() {
    let mut surface = MockSceneSurface::new();
    surface
        .expect_set_paused_style()
        .with(eq(false))
        .times(2)
        .return_const(());

    let controller = controller(MockSceneTransport::new(), surface);

    controller.handle_message(SceneMessage::HidePlay);
    controller.handle_message(SceneMessage::ShowPause);
}

#[test]
fn test_loaded_and_mute_visibility_messages_are_noops() {
    // No expectations at all: any transport or surface call fails the test.
    let controller = controller(MockSceneTransport::new(), MockSceneSurface::new());

    controller.handle_message(SceneMessage::Loaded);
    controller.handle_message(SceneMessage::ShowMute);
    controller.handle_message(SceneMessage::HideMute);
    controller.handle_message(SceneMessage::ShowUnmute);
    controller.handle_message(SceneMessage::HideUnmute);
}

// ============================================================================
// Teardown
// ============================================================================

#[test]
fn test_reset_clears_paused_and_muted() {
    let mut transport = MockSceneTransport::new();
    transport.expect_post().returning(|_| Ok(()));

    let controller = controller(transport, MockSceneSurface::new());
    controller.toggle_pause().unwrap();
    controller.set_mute(true).unwrap();
    assert!(controller.is_paused());
    assert!(controller.is_muted());

    controller.reset();

    assert!(!controller.is_paused());
    assert!(!controller.is_muted());
}
