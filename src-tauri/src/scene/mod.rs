//! Scene layer: the controller relaying host UI actions into the embedded
//! game frame and mapping the frame's named callbacks back onto UI toggles.

mod controller;
mod error;
mod messages;
mod proxy;
mod surface;

pub use controller::{SceneController, SceneSurface, SceneTransport};
pub use error::SceneError;
pub use messages::{SceneCommand, SceneMessage};
pub use proxy::GameFrameProxy;
pub use surface::HostWindowSurface;

#[cfg(test)]
pub use controller::{MockSceneSurface, MockSceneTransport};
