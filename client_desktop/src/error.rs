//! Fatal startup errors

use std::path::PathBuf;

use snafu::Snafu;

/// Anything that can go wrong while acquiring platform resources.
/// None of these are recoverable; the process reports and exits.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum StartupError {
    #[snafu(display("Platform could not initialize: {source}"))]
    EventLoop { source: winit::error::EventLoopError },

    #[snafu(display("Failed to read font {}: {source}", path.display()))]
    FontRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to load font {}: {source}", path.display()))]
    FontParse {
        path: PathBuf,
        source: ab_glyph::InvalidFont,
    },

    #[snafu(display("Controller mappings could not be read from {}: {source}", path.display()))]
    MappingRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display(
        "Controller mappings could not be loaded from {}, line {line}: {reason}",
        path.display()
    ))]
    MappingParse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[snafu(display("Controller subsystem could not initialize: {source}"))]
    Controllers { source: gilrs::Error },

    #[snafu(display("Window could not be created: {source}"))]
    Window { source: winit::error::OsError },

    #[snafu(display("Drawing surface could not be created: {source}"))]
    Surface { source: wgpu::CreateSurfaceError },

    #[snafu(display("Renderer could not be created: no compatible graphics adapter"))]
    Adapter,

    #[snafu(display("Drawing surface could not be configured: no supported formats"))]
    SurfaceFormat,

    #[snafu(display("Renderer could not be created: {source}"))]
    Device { source: wgpu::RequestDeviceError },

    #[snafu(display("Controller {index} could not be opened: {found} controller(s) connected"))]
    ControllerMissing { index: usize, found: usize },
}
