//! Desktop client for Pong
//!
//! Native window and rendering with winit and wgpu, game controllers with gilrs

pub mod app;
pub mod camera;
pub mod controllers;
pub mod cue;
pub mod error;
pub mod input;
pub mod logging;
pub mod mappings;
pub mod mesh;
pub mod renderer;
pub mod settings;
pub mod text;

pub use app::run;
pub use error::StartupError;
pub use settings::Settings;
