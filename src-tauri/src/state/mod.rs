pub mod app_state;

pub use app_state::{game_proxy, scene_controller, window_manager, AppState};
