use crate::camera::{Camera, CameraUniform};
use crate::text::TextBitmap;
use game_core::{Color, Rect};
use wgpu::util::DeviceExt;
use wgpu::*;

/// Most quads drawn in one frame: paddles, ball and both scores fit with room to spare
pub const MAX_INSTANCES: usize = 64;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub rect: [f32; 4], // x, y, w, h in field pixels
    pub tint: [f32; 4], // rgba
}

impl InstanceData {
    pub fn new(rect: Rect, tint: Color) -> Self {
        Self {
            rect: [rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32],
            tint: tint.to_f32(),
        }
    }
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub instances: Buffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);

    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    let instances = device.create_buffer(&BufferDescriptor {
        label: Some("Instance Buffer"),
        size: (std::mem::size_of::<InstanceData>() * MAX_INSTANCES) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    GameBuffers {
        camera: camera_buffer,
        instances,
    }
}

/// Nearest filtering keeps solid text edges hard
pub fn create_text_sampler(device: &Device) -> Sampler {
    device.create_sampler(&SamplerDescriptor {
        label: Some("Text Sampler"),
        address_mode_u: AddressMode::ClampToEdge,
        address_mode_v: AddressMode::ClampToEdge,
        address_mode_w: AddressMode::ClampToEdge,
        mag_filter: FilterMode::Nearest,
        min_filter: FilterMode::Nearest,
        mipmap_filter: FilterMode::Nearest,
        ..Default::default()
    })
}

/// A text image uploaded to the GPU
pub struct TextTexture {
    pub bitmap: TextBitmap,
    pub bind_group: BindGroup,
    pub used: bool,
    _texture: Texture,
}

pub fn upload_text(
    device: &Device,
    queue: &Queue,
    layout: &BindGroupLayout,
    sampler: &Sampler,
    bitmap: &TextBitmap,
) -> TextTexture {
    let size = Extent3d {
        width: bitmap.width,
        height: bitmap.height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&TextureDescriptor {
        label: Some("Text Texture"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: TextureDimension::D2,
        format: TextureFormat::Rgba8UnormSrgb,
        usage: TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: Origin3d::ZERO,
            aspect: TextureAspect::All,
        },
        &bitmap.pixels,
        TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * bitmap.width),
            rows_per_image: Some(bitmap.height),
        },
        size,
    );

    let view = texture.create_view(&TextureViewDescriptor::default());
    let bind_group = device.create_bind_group(&BindGroupDescriptor {
        label: Some("Text Bind Group"),
        layout,
        entries: &[
            BindGroupEntry {
                binding: 0,
                resource: BindingResource::TextureView(&view),
            },
            BindGroupEntry {
                binding: 1,
                resource: BindingResource::Sampler(sampler),
            },
        ],
    });

    TextTexture {
        bitmap: bitmap.clone(),
        bind_group,
        used: true,
        _texture: texture,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_from_rect() {
        let instance = InstanceData::new(Rect::new(20, 390, 45, 300), Color::WHITE);
        assert_eq!(instance.rect, [20.0, 390.0, 45.0, 300.0]);
        assert_eq!(instance.tint, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_instance_layout_is_two_vec4s() {
        assert_eq!(std::mem::size_of::<InstanceData>(), 32);
    }
}
