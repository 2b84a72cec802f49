pub mod scene;
pub mod settings;
pub mod window;
