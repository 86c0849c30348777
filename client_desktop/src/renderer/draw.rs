use super::{DrawCommand, Renderer};
use wgpu::*;

/// Submit the recorded frame and show it.
/// A lost or outdated surface is reconfigured and the frame skipped;
/// the next one redraws everything.
pub fn present_frame(renderer: &mut Renderer) {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            log::warn!("Surface lost, reconfiguring");
            renderer.reconfigure();
            return;
        }
        Err(e) => {
            log::warn!("Skipping frame: {}", e);
            return;
        }
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());

    if !renderer.frame.instances.is_empty() {
        renderer.queue.write_buffer(
            &renderer.buffers.instances,
            0,
            bytemuck::cast_slice(&renderer.frame.instances),
        );
    }

    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    {
        let [r, g, b, a] = renderer.frame.clear_color.to_f32();
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color {
                        r: r as f64,
                        g: g as f64,
                        b: b as f64,
                        a: a as f64,
                    }),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_commands(renderer, &mut pass);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    evict_unused_text(renderer);
}

fn draw_commands(renderer: &Renderer, pass: &mut RenderPass<'_>) {
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(0, renderer.mesh.vertex_buffer.slice(..));
    pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));
    pass.set_index_buffer(renderer.mesh.index_buffer.slice(..), IndexFormat::Uint16);

    let indices = 0..renderer.mesh.index_count;
    for command in &renderer.frame.commands {
        match command {
            DrawCommand::Rect { instance } => {
                pass.set_pipeline(&renderer.rect_pipeline);
                pass.draw_indexed(indices.clone(), 0, *instance..*instance + 1);
            }
            DrawCommand::Text { instance, key } => {
                let Some(texture) = renderer.text_cache.get(key) else {
                    continue;
                };
                pass.set_pipeline(&renderer.text_pipeline);
                pass.set_bind_group(1, &texture.bind_group, &[]);
                pass.draw_indexed(indices.clone(), 0, *instance..*instance + 1);
            }
        }
    }
}

/// Drop text textures no draw used this frame, and reset the marks for the next one
fn evict_unused_text(renderer: &mut Renderer) {
    renderer.text_cache.retain(|_, texture| texture.used);
    for texture in renderer.text_cache.values_mut() {
        texture.used = false;
    }
}
