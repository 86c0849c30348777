use super::resources::InstanceData;
use super::shaders::{RECT_SHADER, TEXT_SHADER};
use crate::mesh::Vertex;
use wgpu::*;

pub struct PipelineState {
    pub rect_pipeline: RenderPipeline,
    pub text_pipeline: RenderPipeline,
    pub camera_layout: BindGroupLayout,
    pub text_layout: BindGroupLayout,
}

const INSTANCE_ATTRIBUTES: [VertexAttribute; 2] = [
    VertexAttribute {
        offset: 0,
        shader_location: 1,
        format: VertexFormat::Float32x4, // rect
    },
    VertexAttribute {
        offset: std::mem::size_of::<[f32; 4]>() as u64,
        shader_location: 2,
        format: VertexFormat::Float32x4, // tint
    },
];

const VERTEX_ATTRIBUTES: [VertexAttribute; 1] = [VertexAttribute {
    offset: 0,
    shader_location: 0,
    format: VertexFormat::Float32x2,
}];

fn buffer_layouts() -> [VertexBufferLayout<'static>; 2] {
    [
        VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: VertexStepMode::Vertex,
            attributes: &VERTEX_ATTRIBUTES,
        },
        VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceData>() as u64,
            step_mode: VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRIBUTES,
        },
    ]
}

fn create_quad_pipeline(
    device: &Device,
    label: &str,
    shader: &ShaderModule,
    layout: &PipelineLayout,
    format: TextureFormat,
    blend: BlendState,
) -> RenderPipeline {
    device.create_render_pipeline(&RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &buffer_layouts(),
            compilation_options: Default::default(),
        },
        fragment: Some(FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(ColorTargetState {
                format,
                blend: Some(blend),
                write_mask: ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: PrimitiveState {
            topology: PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: FrontFace::Ccw,
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: None,
        multisample: MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

pub fn create_pipelines(device: &Device, format: TextureFormat) -> PipelineState {
    // 1. Camera Bind Group Layout
    let camera_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
        label: Some("Camera Bind Group Layout"),
        entries: &[BindGroupLayoutEntry {
            binding: 0,
            visibility: ShaderStages::VERTEX,
            ty: BindingType::Buffer {
                ty: BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });

    // 2. Text Bind Group Layout
    let text_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
        label: Some("Text Bind Group Layout"),
        entries: &[
            BindGroupLayoutEntry {
                binding: 0,
                visibility: ShaderStages::FRAGMENT,
                ty: BindingType::Texture {
                    multisampled: false,
                    view_dimension: TextureViewDimension::D2,
                    sample_type: TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            BindGroupLayoutEntry {
                binding: 1,
                visibility: ShaderStages::FRAGMENT,
                ty: BindingType::Sampler(SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });

    // 3. Rect Pipeline
    let rect_shader = device.create_shader_module(ShaderModuleDescriptor {
        label: Some("Rect Shader"),
        source: ShaderSource::Wgsl(RECT_SHADER.into()),
    });

    let rect_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
        label: Some("Rect Pipeline Layout"),
        bind_group_layouts: &[&camera_layout],
        push_constant_ranges: &[],
    });

    let rect_pipeline = create_quad_pipeline(
        device,
        "Rect Pipeline",
        &rect_shader,
        &rect_layout,
        format,
        BlendState::REPLACE,
    );

    // 4. Text Pipeline
    let text_shader = device.create_shader_module(ShaderModuleDescriptor {
        label: Some("Text Shader"),
        source: ShaderSource::Wgsl(TEXT_SHADER.into()),
    });

    let text_pipeline_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
        label: Some("Text Pipeline Layout"),
        bind_group_layouts: &[&camera_layout, &text_layout],
        push_constant_ranges: &[],
    });

    let text_pipeline = create_quad_pipeline(
        device,
        "Text Pipeline",
        &text_shader,
        &text_pipeline_layout,
        format,
        BlendState::ALPHA_BLENDING,
    );

    PipelineState {
        rect_pipeline,
        text_pipeline,
        camera_layout,
        text_layout,
    }
}
