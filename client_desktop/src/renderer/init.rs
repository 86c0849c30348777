use std::sync::Arc;

use snafu::{OptionExt, ResultExt};
use wgpu::*;
use winit::window::Window;

use crate::error::{
    AdapterSnafu, DeviceSnafu, StartupError, SurfaceFormatSnafu, SurfaceSnafu,
};

pub struct WgpuContext {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub config: SurfaceConfiguration,
    pub size: (u32, u32),
}

pub async fn init_wgpu(window: Arc<Window>) -> Result<WgpuContext, StartupError> {
    let instance = Instance::new(&InstanceDescriptor {
        backends: Backends::PRIMARY,
        ..Default::default()
    });

    let inner = window.inner_size();
    let size = (inner.width.max(1), inner.height.max(1));

    let surface = instance.create_surface(window).context(SurfaceSnafu)?;

    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .context(AdapterSnafu)?;
    log::debug!("Using adapter: {}", adapter.get_info().name);

    let (device, queue) = adapter
        .request_device(
            &DeviceDescriptor {
                label: Some("Device"),
                required_features: Features::empty(),
                required_limits: Limits::downlevel_defaults().using_resolution(adapter.limits()),
                memory_hints: MemoryHints::default(),
            },
            None,
        )
        .await
        .context(DeviceSnafu)?;

    let surface_caps = surface.get_capabilities(&adapter);
    let surface_format = pick_surface_format(&surface_caps.formats)?;

    // The game advances one step per frame, so frames must not wait for vsync
    let config = SurfaceConfiguration {
        usage: TextureUsages::RENDER_ATTACHMENT,
        format: surface_format,
        width: size.0,
        height: size.1,
        present_mode: PresentMode::AutoNoVsync,
        alpha_mode: CompositeAlphaMode::Auto,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
    surface.configure(&device, &config);

    Ok(WgpuContext {
        device,
        queue,
        surface,
        config,
        size,
    })
}

/// Prefer an sRGB format, else whatever the surface lists first
pub fn pick_surface_format(formats: &[TextureFormat]) -> Result<TextureFormat, StartupError> {
    formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| formats.first().copied())
        .context(SurfaceFormatSnafu)
}
