pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::collections::HashMap;
use std::sync::Arc;

use crate::camera::Camera;
use crate::error::StartupError;
use crate::mesh::Mesh;
use crate::text::{TextBitmap, TextFont};
use game_core::{Canvas, Color, Rect};
use resources::{GameBuffers, InstanceData, TextTexture, MAX_INSTANCES};
use wgpu::*;
use winit::window::Window;

/// One queued draw, in submission order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect { instance: u32 },
    Text { instance: u32, key: String },
}

/// Everything recorded between `clear` and `present`
#[derive(Debug, Clone)]
pub struct Frame {
    pub clear_color: Color,
    pub instances: Vec<InstanceData>,
    pub commands: Vec<DrawCommand>,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            clear_color: Color::BLACK,
            instances: Vec::with_capacity(MAX_INSTANCES),
            commands: Vec::new(),
        }
    }
}

impl Frame {
    pub fn begin(&mut self, clear_color: Color) {
        self.clear_color = clear_color;
        self.instances.clear();
        self.commands.clear();
    }

    /// Queue an instance, returning its index, or None once the buffer is full
    fn push_instance(&mut self, instance: InstanceData) -> Option<u32> {
        if self.instances.len() >= MAX_INSTANCES {
            log::warn!("Instance buffer full, dropping draw");
            return None;
        }
        self.instances.push(instance);
        Some(self.instances.len() as u32 - 1)
    }

    pub fn push_rect(&mut self, rect: Rect, color: Color) {
        if let Some(instance) = self.push_instance(InstanceData::new(rect, color)) {
            self.commands.push(DrawCommand::Rect { instance });
        }
    }

    /// Text colour is baked into the texture, so the tint is plain white
    pub fn push_text(&mut self, key: &str, dst: Rect) {
        if let Some(instance) = self.push_instance(InstanceData::new(dst, Color::WHITE)) {
            self.commands.push(DrawCommand::Text {
                instance,
                key: key.to_string(),
            });
        }
    }
}

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,

    // Pipelines
    pub rect_pipeline: RenderPipeline,
    pub text_pipeline: RenderPipeline,
    pub text_layout: BindGroupLayout,

    // Bind Groups
    pub camera_bind_group: BindGroup,

    // Resources
    pub buffers: GameBuffers,
    pub mesh: Mesh,
    pub text_sampler: Sampler,
    pub text_cache: HashMap<String, TextTexture>,

    // State
    pub frame: Frame,
}

impl Renderer {
    /// Create the GPU renderer for `window`, drawing a `field_width` x `field_height` field
    pub fn new(
        window: Arc<Window>,
        field_width: u32,
        field_height: u32,
    ) -> Result<Self, StartupError> {
        let ctx = pollster::block_on(init::init_wgpu(window))?;
        let camera = Camera::orthographic(field_width as f32, field_height as f32);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);
        let mesh = Mesh::unit_quad(&ctx.device, &ctx.queue);
        let text_sampler = resources::create_text_sampler(&ctx.device);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        log::debug!(
            "Renderer ready: {}x{} surface, {:?}",
            ctx.size.0,
            ctx.size.1,
            ctx.config.format
        );

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            camera,
            rect_pipeline: pipes.rect_pipeline,
            text_pipeline: pipes.text_pipeline,
            text_layout: pipes.text_layout,
            camera_bind_group,
            buffers,
            mesh,
            text_sampler,
            text_cache: HashMap::new(),
            frame: Frame::default(),
        })
    }

    /// Follow the window size; the field stays stretched over the whole surface
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Make sure `bitmap` is on the GPU under its text, re-uploading if it changed
    fn cache_text(&mut self, bitmap: &TextBitmap) {
        if let Some(cached) = self.text_cache.get_mut(&bitmap.text) {
            if cached.bitmap == *bitmap {
                cached.used = true;
                return;
            }
        }
        let texture = resources::upload_text(
            &self.device,
            &self.queue,
            &self.text_layout,
            &self.text_sampler,
            bitmap,
        );
        self.text_cache.insert(bitmap.text.clone(), texture);
    }
}

/// The renderer paired with the score font for drawing one frame.
/// The font stays owned by the caller so it can outlive the window.
pub struct Screen<'a> {
    pub renderer: &'a mut Renderer,
    pub font: &'a TextFont,
}

impl Canvas for Screen<'_> {
    type Text = TextBitmap;

    fn clear(&mut self, color: Color) {
        self.renderer.frame.begin(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.renderer.frame.push_rect(rect, color);
    }

    fn render_text(&mut self, text: &str, color: Color) -> TextBitmap {
        self.font.render(text, color)
    }

    fn copy_text(&mut self, text: &TextBitmap, dst: Rect) {
        self.renderer.cache_text(text);
        self.renderer.frame.push_text(&text.text, dst);
    }

    fn present(&mut self) {
        draw::present_frame(self.renderer);
    }
}
